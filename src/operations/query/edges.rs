use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::Result;
use crate::topology::compare::compare_ids;
use crate::topology::{compare_vertices, Edge, VertexId, VertexStore};

/// Lists every undirected edge of the component containing a vertex.
///
/// Each edge appears once, with `start` before `end` under the vertex order,
/// and the list is sorted by `(start, end)` under the same order.
pub struct Edges {
    root: VertexId,
}

impl Edges {
    /// Creates a new `Edges` query.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self { root }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the root vertex is not in the store.
    pub fn execute(&self, store: &VertexStore) -> Result<Vec<Edge>> {
        let mut seen = HashSet::new();
        let mut edges = Vec::new();

        for (_, id) in store.traverse(self.root)? {
            for &neighbor in store.neighbors(id)? {
                let edge = Edge::new(id, neighbor);
                if seen.insert(edge.id_key()) {
                    edges.push(canonical(store, edge)?);
                }
            }
        }

        sort_edges(store, &mut edges)?;
        Ok(edges)
    }
}

fn canonical(store: &VertexStore, edge: Edge) -> Result<Edge> {
    Ok(match compare_ids(store, edge.start, edge.end)? {
        Ordering::Greater => Edge::new(edge.end, edge.start),
        _ => edge,
    })
}

fn sort_edges(store: &VertexStore, edges: &mut [Edge]) -> Result<()> {
    // Resolve lookups up front so the comparator itself is infallible.
    let mut keyed = Vec::with_capacity(edges.len());
    for edge in edges.iter() {
        keyed.push((store.vertex(edge.start)?, store.vertex(edge.end)?, *edge));
    }
    keyed.sort_by(|(a0, a1, a), (b0, b1, b)| {
        compare_vertices(a0, b0)
            .then_with(|| compare_vertices(a1, b1))
            .then_with(|| a.id_key().cmp(&b.id_key()))
    });
    for (slot, (_, _, edge)) in edges.iter_mut().zip(keyed) {
        *slot = edge;
    }
    Ok(())
}
