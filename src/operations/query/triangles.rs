use std::collections::HashSet;

use crate::error::Result;
use crate::topology::compare::compare_ids;
use crate::topology::{compare_vertices, Triangle, VertexId, VertexStore};

/// Finds every 3-cycle in the component containing a vertex.
///
/// Each triangle is found from all three of its members; the result holds
/// it once, in canonical form, sorted by the triangle order.
pub struct Triangles {
    root: VertexId,
}

impl Triangles {
    /// Creates a new `Triangles` query.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self { root }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if the root vertex is not in the store.
    pub fn execute(&self, store: &VertexStore) -> Result<Vec<Triangle>> {
        let mut seen = HashSet::new();
        let mut triangles = Vec::new();

        for (_, id) in store.traverse(self.root)? {
            let neighbors = store.neighbors(id)?;
            for (i, &outer) in neighbors.iter().enumerate() {
                for &inner in &neighbors[..i] {
                    if !store.is_connected(outer, inner) {
                        continue;
                    }
                    let triangle = Triangle::new([id, outer, inner]);
                    if seen.insert(triangle.id_key()) {
                        triangles.push(canonical(store, triangle)?);
                    }
                }
            }
        }

        sort_triangles(store, &mut triangles)?;
        Ok(triangles)
    }
}

fn canonical(store: &VertexStore, triangle: Triangle) -> Result<Triangle> {
    let mut vertices = triangle.vertices;
    // Insertion sort over three members keeps the fallible comparator usable.
    for i in 1..3 {
        let mut j = i;
        while j > 0 && compare_ids(store, vertices[j - 1], vertices[j])?.is_gt() {
            vertices.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(Triangle::new(vertices))
}

fn sort_triangles(store: &VertexStore, triangles: &mut [Triangle]) -> Result<()> {
    let mut keyed = Vec::with_capacity(triangles.len());
    for triangle in triangles.iter() {
        let [a, b, c] = triangle.vertices;
        keyed.push(([store.vertex(a)?, store.vertex(b)?, store.vertex(c)?], *triangle));
    }
    keyed.sort_by(|(a, ta), (b, tb)| {
        compare_vertices(a[0], b[0])
            .then_with(|| compare_vertices(a[1], b[1]))
            .then_with(|| compare_vertices(a[2], b[2]))
            .then_with(|| ta.vertices.cmp(&tb.vertices))
    });
    for (slot, (_, triangle)) in triangles.iter_mut().zip(keyed) {
        *slot = triangle;
    }
    Ok(())
}
