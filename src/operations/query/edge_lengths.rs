use crate::error::Result;
use crate::math::VectorExt;
use crate::topology::{Edge, VertexId, VertexStore};

use super::Edges;

/// Measures every edge of a component.
///
/// Returns `(edge, length)` pairs in the order of the [`Edges`] query.
pub struct EdgeLengths {
    root: VertexId,
}

impl EdgeLengths {
    /// Creates a new `EdgeLengths` query.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self { root }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the root vertex is not in the store.
    pub fn execute(&self, store: &VertexStore) -> Result<Vec<(Edge, f64)>> {
        Edges::new(self.root)
            .execute(store)?
            .into_iter()
            .map(|edge| {
                let start = store.vertex(edge.start)?.point;
                let end = store.vertex(edge.end)?.point;
                Ok((edge, start.distance_to(&end)))
            })
            .collect()
    }
}
