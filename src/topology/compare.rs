use std::cmp::Ordering;

use crate::error::TopologyError;
use crate::math::compare_vectors;

use super::face::Triangle;
use super::vertex::{VertexData, VertexId};
use super::VertexStore;

/// Order on vertices: key first, then position.
#[must_use]
pub fn compare_vertices(a: &VertexData, b: &VertexData) -> Ordering {
    a.key
        .cmp(&b.key)
        .then_with(|| compare_vectors(&a.point, &b.point))
}

/// Order on triangles: member-wise vertex order, left to right.
///
/// Both triangles are expected in canonical form, as returned by the
/// triangles query.
///
/// # Errors
///
/// Returns an error if a member vertex is not in the store.
pub fn compare_triangles(
    store: &VertexStore,
    a: &Triangle,
    b: &Triangle,
) -> Result<Ordering, TopologyError> {
    for (&va, &vb) in a.vertices.iter().zip(&b.vertices) {
        let ordering = compare_vertices(store.vertex(va)?, store.vertex(vb)?);
        if ordering != Ordering::Equal {
            return Ok(ordering);
        }
    }
    Ok(Ordering::Equal)
}

/// Vertex order over ids, with the id as a final tie-break so that distinct
/// vertices sharing key and position still sort deterministically.
pub(crate) fn compare_ids(
    store: &VertexStore,
    a: VertexId,
    b: VertexId,
) -> Result<Ordering, TopologyError> {
    Ok(compare_vertices(store.vertex(a)?, store.vertex(b)?).then_with(|| a.cmp(&b)))
}
