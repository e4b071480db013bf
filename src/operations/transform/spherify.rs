use slotmap::SecondaryMap;
use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::{Vector3, VectorExt, TOLERANCE};
use crate::operations::query::Edges;
use crate::topology::{VertexId, VertexStore};

use super::copy::{CopyGraph, VertexOverrides};

/// How the target sphere is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpherifyMode {
    /// Every vertex ends up exactly this far from the origin.
    Radius(f64),
    /// The shortest edge of the result has this length.
    MinLength(f64),
    /// The longest edge of the result has this length.
    MaxLength(f64),
}

impl SpherifyMode {
    /// Builds a mode from its name: `radius`, `minLength` or `maxLength`.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidMode`] for any other name.
    pub fn from_name(name: &str, value: f64) -> Result<Self> {
        match name {
            "radius" => Ok(Self::Radius(value)),
            "minLength" => Ok(Self::MinLength(value)),
            "maxLength" => Ok(Self::MaxLength(value)),
            _ => Err(OperationError::InvalidMode(name.to_owned()).into()),
        }
    }

    /// The mode's name as accepted by [`from_name`](Self::from_name).
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Radius(_) => "radius",
            Self::MinLength(_) => "minLength",
            Self::MaxLength(_) => "maxLength",
        }
    }

    /// The target radius or length.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::Radius(v) | Self::MinLength(v) | Self::MaxLength(v) => v,
        }
    }

    /// Same mode with a different target.
    #[must_use]
    pub fn with_value(&self, value: f64) -> Self {
        match self {
            Self::Radius(_) => Self::Radius(value),
            Self::MinLength(_) => Self::MinLength(value),
            Self::MaxLength(_) => Self::MaxLength(value),
        }
    }
}

/// Projects every vertex of a component radially onto a sphere centered at
/// the origin, producing a new component.
///
/// Each vertex keeps its own direction from the origin, so this is not a
/// uniform scale when the input vertices lie at different distances.
pub struct Spherify {
    root: VertexId,
    mode: SpherifyMode,
}

impl Spherify {
    /// Creates a new `Spherify` operation.
    #[must_use]
    pub fn new(root: VertexId, mode: SpherifyMode) -> Self {
        Self { root, mode }
    }

    /// Creates a `Spherify` operation from a mode name and value.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidMode`] if the mode name is unknown.
    pub fn from_name(root: VertexId, mode: &str, value: f64) -> Result<Self> {
        Ok(Self::new(root, SpherifyMode::from_name(mode, value)?))
    }

    /// Executes the projection and returns the root of the new component.
    ///
    /// # Errors
    ///
    /// - [`OperationError::InvalidInput`] if the target is not a positive
    ///   finite number, or a length mode is used on a graph without edges.
    /// - [`GeometryError::DegenerateVector`] if a vertex sits at the origin,
    ///   or a length mode meets a zero-length edge after projection.
    ///
    /// Nothing is inserted on error.
    #[tracing::instrument(skip_all, fields(mode = self.mode.name(), value = self.mode.value()))]
    pub fn execute(&self, store: &mut VertexStore) -> Result<VertexId> {
        let target = self.mode.value();
        if !target.is_finite() || target <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "{} must be a positive number, got {target}",
                self.mode.name()
            ))
            .into());
        }

        let radius = match self.mode {
            SpherifyMode::Radius(radius) => radius,
            SpherifyMode::MinLength(length) => length / self.unit_edge_length(store, f64::min)?,
            SpherifyMode::MaxLength(length) => length / self.unit_edge_length(store, f64::max)?,
        };
        debug!(radius, "projecting onto sphere");

        CopyGraph::new(self.root).execute_with(store, |vertex, _| {
            let p = project(&vertex.point, radius)?;
            Ok(VertexOverrides::position(p.x, p.y, p.z))
        })
    }

    /// Shortest or longest edge after projecting onto the unit sphere,
    /// computed without inserting the intermediate projection.
    fn unit_edge_length(&self, store: &VertexStore, pick: fn(f64, f64) -> f64) -> Result<f64> {
        let mut unit = SecondaryMap::new();
        for (_, id) in store.traverse(self.root)? {
            unit.insert(id, project(&store.vertex(id)?.point, 1.0)?);
        }

        let mut lengths = Edges::new(self.root)
            .execute(store)?
            .into_iter()
            .filter_map(|edge| Some(unit.get(edge.start)?.distance_to(unit.get(edge.end)?)));
        let first = lengths.next().ok_or_else(|| {
            OperationError::InvalidInput("cannot size by edge length: graph has no edges".into())
        })?;
        let length = lengths.fold(first, pick);

        if length < TOLERANCE {
            return Err(GeometryError::DegenerateVector(
                "zero-length edge after projection".into(),
            )
            .into());
        }
        Ok(length)
    }
}

fn project(point: &Vector3, radius: f64) -> Result<Vector3> {
    let magnitude = point.norm();
    if magnitude < TOLERANCE {
        return Err(GeometryError::DegenerateVector(
            "cannot project a vertex at the origin".into(),
        )
        .into());
    }
    Ok(point * radius / magnitude)
}
