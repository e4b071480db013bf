use std::collections::HashMap;

use tracing::debug;

use crate::error::{OperationError, Result, TopologyError};
use crate::math::Vector3;
use crate::operations::query::Triangles;
use crate::operations::transform::{CopyGraph, CopyMapping, VertexOverrides};
use crate::topology::{Triangle, VertexData, VertexId, VertexStore};

/// Splits every triangular face of a component into a `frequency`²
/// triangle lattice, producing a new component.
///
/// Lattice points are interpolated linearly on the flat faces; project the
/// result with [`Spherify`](crate::operations::transform::Spherify)
/// afterwards to get a geodesic sphere.
///
/// Corner vertices keep their keys. Vertices along an original edge are
/// created once and shared by both adjacent faces, keyed
/// `edge {start}-{end} {offset}` with the endpoints in vertex order. Interior
/// vertices are keyed `internal {left}-{origin}-{right} {row},{col}`.
pub struct Subdivide {
    root: VertexId,
    frequency: u32,
}

impl Subdivide {
    /// Creates a new `Subdivide` operation.
    #[must_use]
    pub fn new(root: VertexId, frequency: u32) -> Self {
        Self { root, frequency }
    }

    /// Creates a `Subdivide` operation from a floating-point frequency.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidFrequency`] unless `frequency` is a
    /// positive integer.
    pub fn with_frequency(root: VertexId, frequency: f64) -> Result<Self> {
        if !frequency.is_finite()
            || frequency.fract() != 0.0
            || frequency < 1.0
            || frequency > f64::from(u32::MAX)
        {
            return Err(OperationError::InvalidFrequency(frequency).into());
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let frequency = frequency as u32;
        Ok(Self::new(root, frequency))
    }

    /// Executes the subdivision and returns the root of the new component.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidFrequency`] if the frequency is zero,
    /// or an error if the root vertex is not in the store. Nothing is left
    /// in the store on error.
    #[tracing::instrument(skip_all, fields(frequency = self.frequency))]
    pub fn execute(&self, store: &mut VertexStore) -> Result<VertexId> {
        if self.frequency == 0 {
            return Err(OperationError::InvalidFrequency(0.0).into());
        }

        let faces = Triangles::new(self.root).execute(store)?;
        let mapping = CopyGraph::new(self.root)
            .execute_mapped(store, |_, _| Ok(VertexOverrides::default()))?;
        if self.frequency == 1 {
            return Ok(mapping.root());
        }

        let mut created: Vec<VertexId> = mapping.copies().collect();
        match self.split_faces(store, &mapping, &faces, &mut created) {
            Ok(()) => {
                debug!(faces = faces.len(), vertices = created.len(), "subdivided component");
                Ok(mapping.root())
            }
            Err(err) => {
                store.remove_vertices(&created);
                Err(err)
            }
        }
    }

    fn split_faces(
        &self,
        store: &mut VertexStore,
        mapping: &CopyMapping,
        faces: &[Triangle],
        created: &mut Vec<VertexId>,
    ) -> Result<()> {
        let mut chains = EdgeChains::new(self.frequency);

        for face in faces {
            let [a, b, c] = face.vertices.map(|v| mapping.get(v));
            let (Some(a), Some(b), Some(c)) = (a, b, c) else {
                return Err(TopologyError::EntityNotFound("face corner".into()).into());
            };

            // A sits at the bottom of the lattice, B top left, C top right.
            let left = chains.get(store, a, b, created)?;
            let right = chains.get(store, a, c, created)?;
            let top = chains.get(store, b, c, created)?;

            store.disconnect(a, b)?;
            store.disconnect(b, c)?;
            store.disconnect(a, c)?;

            let lattice = Lattice::new(store, [a, b, c], self.frequency)?;
            let mut previous_row: Vec<VertexId> = Vec::new();
            for row in 0..=self.frequency {
                let mut current_row = Vec::with_capacity(previous_row.len() + 1);
                for col in 0..=row {
                    let vertex = if col == 0 {
                        left[row as usize]
                    } else if col == row {
                        right[row as usize]
                    } else if row == self.frequency {
                        top[col as usize]
                    } else {
                        let id = store.add_vertex(lattice.interior(row, col));
                        created.push(id);
                        id
                    };

                    if row > 0 {
                        if col > 0 {
                            store.connect(vertex, previous_row[col as usize - 1])?;
                        }
                        if col < row {
                            store.connect(vertex, previous_row[col as usize])?;
                        }
                    }
                    if let Some(&previous) = current_row.last() {
                        store.connect(vertex, previous)?;
                    }
                    current_row.push(vertex);
                }
                previous_row = current_row;
            }
        }
        Ok(())
    }
}

/// Memo of the vertex chain along each original edge, in both directions.
struct EdgeChains {
    frequency: u32,
    chains: HashMap<(VertexId, VertexId), Vec<VertexId>>,
}

impl EdgeChains {
    fn new(frequency: u32) -> Self {
        Self {
            frequency,
            chains: HashMap::new(),
        }
    }

    /// The `frequency + 1` vertices from `from` to `to`, creating the
    /// intermediate ones on first use.
    fn get(
        &mut self,
        store: &mut VertexStore,
        from: VertexId,
        to: VertexId,
        created: &mut Vec<VertexId>,
    ) -> Result<Vec<VertexId>> {
        if let Some(chain) = self.chains.get(&(from, to)) {
            return Ok(chain.clone());
        }

        let start = store.vertex(from)?;
        let end = store.vertex(to)?;
        let (start_key, end_key) = (start.key.clone(), end.key.clone());
        let (origin, span) = (start.point, end.point - start.point);
        let frequency = f64::from(self.frequency);

        let mut chain = Vec::with_capacity(self.frequency as usize + 1);
        chain.push(from);
        for offset in 1..self.frequency {
            let point = origin + span * f64::from(offset) / frequency;
            let id = store.add_vertex(VertexData::new(
                format!("edge {start_key}-{end_key} {offset}"),
                point,
            ));
            created.push(id);
            chain.push(id);
        }
        chain.push(to);

        let reversed = chain.iter().rev().copied().collect();
        self.chains.insert((to, from), reversed);
        self.chains.insert((from, to), chain.clone());
        Ok(chain)
    }
}

/// Geometry and labels of one face's lattice.
struct Lattice {
    origin: Vector3,
    towards_left: Vector3,
    left_to_right: Vector3,
    label: String,
    frequency: f64,
}

impl Lattice {
    fn new(store: &VertexStore, [a, b, c]: [VertexId; 3], frequency: u32) -> Result<Self> {
        let (a, b, c) = (store.vertex(a)?, store.vertex(b)?, store.vertex(c)?);
        Ok(Self {
            origin: a.point,
            towards_left: b.point - a.point,
            left_to_right: c.point - b.point,
            label: format!("{}-{}-{}", b.key, a.key, c.key),
            frequency: f64::from(frequency),
        })
    }

    /// Row `row` holds `row + 1` points from the left leg to the right leg.
    fn interior(&self, row: u32, col: u32) -> VertexData {
        let point = self.origin
            + self.towards_left * f64::from(row) / self.frequency
            + self.left_to_right * f64::from(col) / self.frequency;
        VertexData::new(format!("internal {} {row},{col}", self.label), point)
    }
}
