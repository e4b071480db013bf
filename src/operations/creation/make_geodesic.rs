use tracing::debug;

use crate::error::Result;
use crate::operations::modification::Subdivide;
use crate::operations::transform::{Spherify, SpherifyMode};
use crate::topology::{VertexId, VertexStore};

use super::make_polyhedron::{MakePolyhedron, PolyhedronKind};

/// Parameters of a geodesic polyhedron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodesicParams {
    /// Base polyhedron to subdivide.
    pub polyhedron: PolyhedronKind,
    /// Number of segments each base edge is split into.
    pub frequency: u32,
    /// Size of the final sphere.
    pub size: SpherifyMode,
    /// Subdivide the flat faces first and project afterwards. When `false`
    /// the base is projected first and the subdivided faces stay flat.
    pub spherify_last: bool,
}

impl Default for GeodesicParams {
    fn default() -> Self {
        Self {
            polyhedron: PolyhedronKind::Icosahedron,
            frequency: 1,
            size: SpherifyMode::Radius(1.0),
            spherify_last: true,
        }
    }
}

/// Builds a geodesic polyhedron by composing [`MakePolyhedron`],
/// [`Subdivide`] and [`Spherify`].
///
/// Only the final component is left in the store.
pub struct MakeGeodesic {
    params: GeodesicParams,
}

impl MakeGeodesic {
    /// Creates a new `MakeGeodesic` operation.
    #[must_use]
    pub fn new(params: GeodesicParams) -> Self {
        Self { params }
    }

    /// Executes the operation and returns the root of the result.
    ///
    /// # Errors
    ///
    /// Propagates errors from the subdivide and spherify steps. Intermediate
    /// components are removed even on error.
    #[tracing::instrument(skip_all, fields(polyhedron = %self.params.polyhedron, frequency = self.params.frequency))]
    pub fn execute(&self, store: &mut VertexStore) -> Result<VertexId> {
        let GeodesicParams {
            polyhedron,
            frequency,
            size,
            spherify_last,
        } = self.params;

        let base = MakePolyhedron::new(polyhedron).execute(store)?;

        let result = if spherify_last {
            Subdivide::new(base, frequency)
                .execute(store)
                .and_then(|flat| {
                    let sphere = Spherify::new(flat, size).execute(store);
                    store.remove_component(flat)?;
                    sphere
                })
        } else {
            // Base edges are split `frequency` times afterwards, so a length
            // target is scaled up to land near the requested strut length.
            let size = match size {
                SpherifyMode::Radius(_) => size,
                _ => size.with_value(size.value() * f64::from(frequency)),
            };
            Spherify::new(base, size).execute(store).and_then(|sphere| {
                let sub = Subdivide::new(sphere, frequency).execute(store);
                store.remove_component(sphere)?;
                sub
            })
        };

        store.remove_component(base)?;
        let root = result?;
        debug!(vertices = store.component(root)?.len(), "built geodesic polyhedron");
        Ok(root)
    }
}
