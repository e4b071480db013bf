use crate::error::GeometryError;

use super::{Vector3, TOLERANCE};

/// Per-component replacements for [`VectorExt::with_overrides`].
///
/// A `None` component keeps the original value. `Some(0.0)` replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VectorOverrides {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,
}

/// Vector operations used by the vertex graph on top of nalgebra's
/// arithmetic, `norm` and `cross`.
pub trait VectorExt {
    /// Magnitude of the difference between `self` and `other`.
    fn distance_to(&self, other: &Vector3) -> f64;

    /// Angle in radians between `self` and `other`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateVector`] if either vector has zero
    /// magnitude.
    fn angle_to(&self, other: &Vector3) -> Result<f64, GeometryError>;

    /// Component-wise equality where each `|a - b| <= |tolerance|`.
    fn is_equal_to(&self, other: &Vector3, tolerance: f64) -> bool;

    /// Returns a new vector with the supplied components replaced.
    #[must_use]
    fn with_overrides(&self, overrides: VectorOverrides) -> Vector3;
}

impl VectorExt for Vector3 {
    fn distance_to(&self, other: &Vector3) -> f64 {
        (self - other).norm()
    }

    fn angle_to(&self, other: &Vector3) -> Result<f64, GeometryError> {
        let a = self.norm();
        let b = other.norm();
        if a < TOLERANCE || b < TOLERANCE {
            return Err(GeometryError::DegenerateVector(
                "angle is undefined for a zero-magnitude operand".into(),
            ));
        }
        // Rounding can push the cosine just outside [-1, 1] for parallel vectors.
        Ok((self.dot(other) / a / b).clamp(-1.0, 1.0).acos())
    }

    fn is_equal_to(&self, other: &Vector3, tolerance: f64) -> bool {
        let tolerance = tolerance.abs();
        self.iter()
            .zip(other.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    fn with_overrides(&self, overrides: VectorOverrides) -> Vector3 {
        Vector3::new(
            overrides.x.unwrap_or(self.x),
            overrides.y.unwrap_or(self.y),
            overrides.z.unwrap_or(self.z),
        )
    }
}
