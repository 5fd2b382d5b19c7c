//! Single-pass convexity scan over an angularly sorted hull.

use nalgebra::Vector2;

use crate::geom2::{GeomCfg, Sign};

/// Turn direction shared by every non-collinear cyclic triple, if there is one.
///
/// - `None`: fewer than three vertices, or two triples turn in opposite
///   directions (not convex).
/// - `Some(Sign::Zero)`: every triple is collinear within tolerance.
/// - `Some(Sign::Plus | Sign::Minus)`: convex, counterclockwise or clockwise.
///
/// Pre: `hull` is sorted by polar angle around an interior point.
pub fn main_orientation(hull: &[Vector2<f64>], cfg: GeomCfg) -> Option<Sign> {
    let n = hull.len();
    if n <= 2 {
        return None;
    }
    let mut main = Sign::Zero;
    for i in 0..n {
        let s = cfg.orientation(hull[i], hull[(i + 1) % n], hull[(i + 2) % n]);
        if s.is_zero() {
            continue;
        }
        if main.is_zero() {
            main = s;
        } else if s != main {
            tracing::trace!(vertex = (i + 1) % n, "turn direction flips");
            return None;
        }
    }
    Some(main)
}

/// Convexity of an angularly sorted hull. Hulls with `<= 2` vertices are not
/// convex; an all-collinear hull is accepted.
#[inline]
pub fn is_convex(hull: &[Vector2<f64>], cfg: GeomCfg) -> bool {
    main_orientation(hull, cfg).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn too_small_is_not_convex() {
        let cfg = GeomCfg::default();
        assert!(!is_convex(&[], cfg));
        assert!(!is_convex(&[vector![0.0, 0.0]], cfg));
        assert!(!is_convex(&[vector![0.0, 0.0], vector![1.0, 1.0]], cfg));
    }

    #[test]
    fn square_both_orientations() {
        let cfg = GeomCfg::default();
        let ccw = [
            vector![0.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        assert_eq!(main_orientation(&ccw, cfg), Some(Sign::Plus));
        let mut cw = ccw;
        cw.reverse();
        assert_eq!(main_orientation(&cw, cfg), Some(Sign::Minus));
    }

    #[test]
    fn reflex_vertex_detected() {
        // dart: (1,1) is a reflex vertex
        let dart = [
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![1.0, 1.0],
            vector![0.0, 4.0],
        ];
        assert!(!is_convex(&dart, GeomCfg::default()));
    }

    #[test]
    fn collinear_vertices_are_skipped() {
        // midpoint of the bottom edge listed as a vertex
        let sq = [
            vector![0.0, 0.0],
            vector![1.0, 0.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![0.0, 2.0],
        ];
        assert_eq!(main_orientation(&sq, GeomCfg::default()), Some(Sign::Plus));
    }

    #[test]
    fn all_collinear_is_accepted() {
        let line = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        assert_eq!(main_orientation(&line, GeomCfg::default()), Some(Sign::Zero));
    }
}
