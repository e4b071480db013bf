mod subdivide;

pub use subdivide::Subdivide;
