use std::fmt;

use crate::math::Vector3;

slotmap::new_key_type! {
    /// Unique identifier for a vertex in the vertex store.
    pub struct VertexId;
}

/// Data associated with a graph vertex.
///
/// The neighbor list is owned by the store so that adjacency stays mutual;
/// it can only be changed through [`VertexStore::connect`] and
/// [`VertexStore::disconnect`].
///
/// [`VertexStore::connect`]: super::VertexStore::connect
/// [`VertexStore::disconnect`]: super::VertexStore::disconnect
#[derive(Debug, Clone)]
pub struct VertexData {
    /// Display label. Not required to be unique.
    pub key: String,
    /// The 3D position of the vertex.
    pub point: Vector3,
    pub(crate) neighbors: Vec<VertexId>,
}

impl VertexData {
    /// Creates a new, unconnected vertex.
    #[must_use]
    pub fn new(key: impl Into<String>, point: Vector3) -> Self {
        Self {
            key: key.into(),
            point,
            neighbors: Vec::new(),
        }
    }

    /// Directly connected vertices, in connection order.
    #[must_use]
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

impl fmt::Display for VertexData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}, {}, {})",
            self.key, self.point.x, self.point.y, self.point.z
        )
    }
}
