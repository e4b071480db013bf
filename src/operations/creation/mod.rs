mod make_geodesic;
mod make_polyhedron;

pub use make_geodesic::{GeodesicParams, MakeGeodesic};
pub use make_polyhedron::{MakePolyhedron, PolyhedronKind};
