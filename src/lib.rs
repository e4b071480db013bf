//! Geodesic polyhedra as vertex graphs.
//!
//! A [`VertexStore`](topology::VertexStore) owns vertices and their mutual
//! adjacency. Operations in [`operations`] build base polyhedra, subdivide
//! their faces, project them onto spheres and query edges and faces. Every
//! operation that produces a graph inserts a new component and leaves its
//! input untouched.

pub mod error;
pub mod math;
pub mod operations;
pub mod topology;

pub use error::{GeodomeError, Result};
