use super::vertex::VertexId;

/// Three pairwise-adjacent vertices.
///
/// Triangles are derived from adjacency and never stored. Queries return
/// the members sorted under the vertex order, so equal triangles compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub vertices: [VertexId; 3],
}

impl Triangle {
    #[must_use]
    pub fn new(vertices: [VertexId; 3]) -> Self {
        Self { vertices }
    }

    /// Identity of the triangle, independent of member order.
    #[must_use]
    pub(crate) fn id_key(&self) -> [VertexId; 3] {
        let mut key = self.vertices;
        key.sort_unstable();
        key
    }

    /// The three undirected sides as `(a, b)`, `(a, c)`, `(b, c)`.
    #[must_use]
    pub fn sides(&self) -> [(VertexId, VertexId); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (a, c), (b, c)]
    }
}
