use super::vertex::VertexId;

/// An unordered pair of adjacent vertices.
///
/// Edges are derived from adjacency and never stored. Queries return them
/// with `start` ordered before `end` under the vertex order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: VertexId,
    pub end: VertexId,
}

impl Edge {
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        Self { start, end }
    }

    /// Identity of the undirected edge, independent of endpoint order.
    #[must_use]
    pub(crate) fn id_key(&self) -> (VertexId, VertexId) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    /// Returns `true` if `vertex` is one of the endpoints.
    #[must_use]
    pub fn contains(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }
}
