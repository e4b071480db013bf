pub mod compare;
pub mod edge;
pub mod face;
pub mod traverse;
pub mod vertex;

pub use compare::{compare_triangles, compare_vertices};
pub use edge::Edge;
pub use face::Triangle;
pub use traverse::Traversal;
pub use vertex::{VertexData, VertexId};

use crate::error::TopologyError;
use slotmap::SlotMap;

/// Central arena that owns all vertices.
///
/// Vertices reference their neighbors via typed IDs (generational indices),
/// so cyclic adjacency needs no shared ownership. There is no graph object:
/// any vertex ID is a handle to its whole connected component, and one store
/// may hold many disjoint components.
#[derive(Debug, Default)]
pub struct VertexStore {
    vertices: SlotMap<VertexId, VertexData>,
}

impl VertexStore {
    /// Creates a new, empty vertex store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices across all components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the store holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Inserts a vertex and returns its ID.
    ///
    /// Any neighbors already listed on `data` are dropped; use
    /// [`connect`](Self::connect) to wire the vertex up.
    pub fn add_vertex(&mut self, mut data: VertexData) -> VertexId {
        data.neighbors.clear();
        self.vertices.insert(data)
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, TopologyError> {
        self.vertices
            .get(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns a mutable reference to the vertex data, or an error if not found.
    ///
    /// Only the key and position are writable; adjacency goes through
    /// [`connect`](Self::connect) and [`disconnect`](Self::disconnect).
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex_mut(&mut self, id: VertexId) -> Result<&mut VertexData, TopologyError> {
        self.vertices
            .get_mut(id)
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))
    }

    /// Returns the neighbors of a vertex.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn neighbors(&self, id: VertexId) -> Result<&[VertexId], TopologyError> {
        Ok(self.vertex(id)?.neighbors())
    }

    // --- Adjacency ---

    /// Connects two vertices. Connecting an already connected pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing or if `a == b`. The
    /// store is unchanged on error.
    pub fn connect(&mut self, a: VertexId, b: VertexId) -> Result<(), TopologyError> {
        if a == b {
            return Err(TopologyError::InvalidTopology(
                "a vertex cannot connect to itself".into(),
            ));
        }
        let [va, vb] = self
            .vertices
            .get_disjoint_mut([a, b])
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))?;
        if !va.neighbors.contains(&b) {
            va.neighbors.push(b);
        }
        if !vb.neighbors.contains(&a) {
            vb.neighbors.push(a);
        }
        Ok(())
    }

    /// Disconnects two vertices. Disconnecting an unconnected pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either vertex is missing. The store is unchanged
    /// on error.
    pub fn disconnect(&mut self, a: VertexId, b: VertexId) -> Result<(), TopologyError> {
        if a == b {
            self.vertex(a)?;
            return Ok(());
        }
        let [va, vb] = self
            .vertices
            .get_disjoint_mut([a, b])
            .ok_or_else(|| TopologyError::EntityNotFound("vertex".into()))?;
        va.neighbors.retain(|&n| n != b);
        vb.neighbors.retain(|&n| n != a);
        Ok(())
    }

    /// Returns `true` if `a` and `b` are directly connected.
    ///
    /// Missing vertices are never connected.
    #[must_use]
    pub fn is_connected(&self, a: VertexId, b: VertexId) -> bool {
        self.vertices
            .get(a)
            .is_some_and(|data| data.neighbors.contains(&b))
    }

    // --- Components ---

    /// Starts a depth-first traversal of the component containing `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not in the store.
    pub fn traverse(&self, root: VertexId) -> Result<Traversal<'_>, TopologyError> {
        self.vertex(root)?;
        Ok(Traversal::new(self, root))
    }

    /// Collects the IDs of the component containing `root` in traversal order.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not in the store.
    pub fn component(&self, root: VertexId) -> Result<Vec<VertexId>, TopologyError> {
        Ok(self.traverse(root)?.map(|(_, id)| id).collect())
    }

    /// Removes every vertex reachable from `root` and returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not in the store.
    pub fn remove_component(&mut self, root: VertexId) -> Result<usize, TopologyError> {
        let ids = self.component(root)?;
        for &id in &ids {
            self.vertices.remove(id);
        }
        Ok(ids.len())
    }

    /// Removes individual vertices, detaching them from any surviving
    /// neighbors first.
    pub(crate) fn remove_vertices(&mut self, ids: &[VertexId]) {
        for &id in ids {
            if let Some(data) = self.vertices.remove(id) {
                for neighbor in data.neighbors {
                    if let Some(other) = self.vertices.get_mut(neighbor) {
                        other.neighbors.retain(|&n| n != id);
                    }
                }
            }
        }
    }
}
