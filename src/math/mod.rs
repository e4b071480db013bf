pub mod compare;
pub mod vector;

pub use compare::compare_vectors;
pub use vector::{VectorExt, VectorOverrides};

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
