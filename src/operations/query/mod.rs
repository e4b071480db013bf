mod edge_lengths;
mod edges;
mod triangles;
mod vertices;

pub use edge_lengths::EdgeLengths;
pub use edges::Edges;
pub use triangles::Triangles;
pub use vertices::Vertices;
