use std::cmp::Ordering;

use super::Vector3;

/// Lexicographic order on `(x, y, z)`.
///
/// Uses [`f64::total_cmp`] so the order stays total even for `-0.0` and NaN.
#[must_use]
pub fn compare_vectors(a: &Vector3, b: &Vector3) -> Ordering {
    a.x.total_cmp(&b.x)
        .then_with(|| a.y.total_cmp(&b.y))
        .then_with(|| a.z.total_cmp(&b.z))
}
