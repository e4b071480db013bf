use crate::error::Result;
use crate::topology::{compare_vertices, VertexId, VertexStore};

/// Lists the vertices of a component sorted by the vertex order.
pub struct Vertices {
    root: VertexId,
}

impl Vertices {
    /// Creates a new `Vertices` query.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self { root }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the root vertex is not in the store.
    pub fn execute(&self, store: &VertexStore) -> Result<Vec<VertexId>> {
        let mut keyed = Vec::new();
        for id in store.component(self.root)? {
            keyed.push((store.vertex(id)?, id));
        }
        keyed.sort_by(|(a, ia), (b, ib)| compare_vertices(a, b).then_with(|| ia.cmp(ib)));
        Ok(keyed.into_iter().map(|(_, id)| id).collect())
    }
}
