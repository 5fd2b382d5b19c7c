//! Geometric kernel: signed area, polar angle, centroid.
//!
//! Points and vectors are both `nalgebra::Vector2<f64>`; a vector between two
//! points is `end - start`. Everything here is raw arithmetic; tolerance-aware
//! comparisons go through `GeomCfg`.

use nalgebra::{Matrix2, Vector2};

/// Signed area of the triangle a→b→c, `((b − a) × (c − a)) / 2`.
///
/// Positive for a counterclockwise turn, negative for clockwise, zero when the
/// three points are collinear.
#[inline]
pub fn signed_area(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    // shoelace form, half of det [b-a  c-a]
    (a.x * (b.y - c.y) - a.y * (b.x - c.x) + (b.x * c.y - b.y * c.x)) / 2.0
}

/// Signed area of the parallelogram spanned by `a` and `b` (determinant of
/// `[a b]`). Equals `2 * signed_area(0, a, b)`.
pub fn parallelogram_area(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let m = Matrix2::from_columns(&[a, b]);
    m.determinant()
}

/// Polar angle `atan2(v.y, v.x)`.
///
/// Pre: `v` is not the zero vector. For `v = 0` the result is `atan2(0, 0)`,
/// which evaluates to `0.0`; callers treat that as an arbitrary direction.
#[inline]
pub fn polar_angle(v: Vector2<f64>) -> f64 {
    v.y.atan2(v.x)
}

/// Arithmetic mean of the points. `None` for an empty slice.
pub fn centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p);
    Some(sum / points.len() as f64)
}
