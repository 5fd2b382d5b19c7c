//! Canonical cyclic order of the hull: polar angle around its centroid.

use nalgebra::Vector2;

use crate::geom2::{centroid, polar_angle};

/// Hull vertices sorted by ascending polar angle around `centroid`.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderedHull {
    pub vertices: Vec<Vector2<f64>>,
    pub centroid: Vector2<f64>,
}

/// Compute the centroid and sort the vertices by `polar_angle(p - centroid)`.
///
/// Returns `None` for an empty hull (no centroid). Ties between equal angles
/// are left in whatever order the unstable sort produces.
pub fn order_by_polar_angle(mut hull: Vec<Vector2<f64>>) -> Option<OrderedHull> {
    let q = centroid(&hull)?;
    hull.sort_unstable_by(|a, b| {
        polar_angle(a - q)
            .partial_cmp(&polar_angle(b - q))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    Some(OrderedHull {
        vertices: hull,
        centroid: q,
    })
}
