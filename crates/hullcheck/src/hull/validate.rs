//! Orchestration: partition → order → convexity → point location.

use std::fmt;

use nalgebra::Vector2;

use super::convexity::main_orientation;
use super::locate::PointLocator;
use super::order::order_by_polar_angle;
use super::partition::partition;
use crate::geom2::GeomCfg;

/// Outcome of a hull check. Every variant but `Valid` answers "No".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    /// No hull indices, but there are points to enclose.
    EmptyHull,
    /// Fewer than three hull points, or the angular order turns both ways.
    NotConvex,
    /// `points[index]` lies strictly outside the claimed hull.
    PointOutside { index: usize },
}

impl Verdict {
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }

    /// Literal answer token: `"Yes"` or `"No"`.
    #[inline]
    pub fn answer(&self) -> &'static str {
        if self.is_valid() {
            "Yes"
        } else {
            "No"
        }
    }

    /// Short machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            Verdict::Valid => "valid",
            Verdict::EmptyHull => "empty_hull",
            Verdict::NotConvex => "not_convex",
            Verdict::PointOutside { .. } => "point_outside",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Valid => write!(f, "valid convex hull"),
            Verdict::EmptyHull => write!(f, "hull is empty but points remain"),
            Verdict::NotConvex => write!(f, "hull is not convex"),
            Verdict::PointOutside { index } => write!(f, "point {index} lies outside the hull"),
        }
    }
}

/// Run the full check and report why a hull was rejected.
///
/// Pre: `hull_indices` are distinct and `< points.len()`
/// (see `check_hull_indices`). O(N log C).
pub fn check(points: &[Vector2<f64>], hull_indices: &[usize], cfg: GeomCfg) -> Verdict {
    tracing::debug!(
        points = points.len(),
        hull = hull_indices.len(),
        eps = cfg.eps_sign,
        "hull check"
    );
    let part = partition(points, hull_indices);
    let Some(ordered) = order_by_polar_angle(part.hull) else {
        return if part.interior.is_empty() {
            Verdict::Valid
        } else {
            Verdict::EmptyHull
        };
    };

    let Some(orientation) = main_orientation(&ordered.vertices, cfg) else {
        tracing::debug!(hull = ordered.vertices.len(), "hull is not convex");
        return Verdict::NotConvex;
    };
    tracing::trace!(orientation = ?orientation, "hull is convex");

    let locator = PointLocator::new(&ordered.vertices, ordered.centroid, cfg);
    match locator.first_outside(&part.interior) {
        Some(k) => {
            let index = part.interior_ids[k];
            tracing::debug!(index, "point outside hull");
            Verdict::PointOutside { index }
        }
        None => Verdict::Valid,
    }
}

/// `check` collapsed to a boolean.
#[inline]
pub fn validate_with(points: &[Vector2<f64>], hull_indices: &[usize], cfg: GeomCfg) -> bool {
    check(points, hull_indices, cfg).is_valid()
}

/// Is `hull_indices` a convex hull of `points` (default tolerance)?
#[inline]
pub fn validate(points: &[Vector2<f64>], hull_indices: &[usize]) -> bool {
    validate_with(points, hull_indices, GeomCfg::default())
}
