//! Logarithmic point location in an angularly sorted convex polygon.
//!
//! The polygon is viewed from its centroid as a fan of wedges, one per pair of
//! consecutive vertices. A query point's polar angle selects its wedge by
//! binary search over the vertex angles; one orientation test against the
//! wedge's outer edge then decides inside-or-on versus outside.

use nalgebra::Vector2;

use crate::geom2::{polar_angle, GeomCfg};

/// Polar angles of the hull vertices around the centroid, parallel to the
/// (already sorted) vertex list and therefore ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleTable {
    angles: Vec<f64>,
}

/// Wedge containing a query ray, as vertex indices of its outer edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wedge {
    /// Between consecutive vertices `lo = hi - 1` and `hi`, `0 < hi < len`.
    Between { lo: usize, hi: usize },
    /// Across the angle cut: between the last vertex and vertex 0.
    Wrap,
}

impl Wedge {
    /// Edge endpoints `(i1, i2)` for a table of `len` vertices.
    #[inline]
    pub fn endpoints(self, len: usize) -> (usize, usize) {
        match self {
            Wedge::Between { lo, hi } => (lo, hi),
            Wedge::Wrap => (len - 1, 0),
        }
    }
}

impl AngleTable {
    pub fn new(vertices: &[Vector2<f64>], centroid: Vector2<f64>) -> Self {
        let angles = vertices.iter().map(|v| polar_angle(v - centroid)).collect();
        Self { angles }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.angles
    }

    /// Lower-bound search for the first angle `>= angle`. Landing before the
    /// first or past the last entry means the ray crosses the angle cut.
    ///
    /// Pre: table is non-empty.
    pub fn wedge(&self, angle: f64) -> Wedge {
        debug_assert!(!self.angles.is_empty(), "wedge lookup in an empty table");
        let hi = self.angles.partition_point(|&a| a < angle);
        if hi == 0 || hi == self.angles.len() {
            Wedge::Wrap
        } else {
            Wedge::Between { lo: hi - 1, hi }
        }
    }
}

/// Inside-or-on test for a single point.
///
/// With `(i1, i2)` the wedge edge, the point is outside when it lies strictly
/// on the other side of the edge than the centroid, or when the centroid is
/// collinear with the edge but the point is not.
///
/// Pre: `vertices` is convex and sorted by angle around `centroid`, `table`
/// was built from the same two, and has at least one entry.
pub fn point_in_poly(
    vertices: &[Vector2<f64>],
    table: &AngleTable,
    centroid: Vector2<f64>,
    p: Vector2<f64>,
    cfg: GeomCfg,
) -> bool {
    let (i1, i2) = table.wedge(polar_angle(p - centroid)).endpoints(table.len());
    let s1 = cfg.orientation(vertices[i1], centroid, vertices[i2]);
    let s2 = cfg.orientation(vertices[i1], p, vertices[i2]);
    !(s1.opposes(s2) || (s1.is_zero() && !s2.is_zero()))
}

/// Batch locator: the angle table is built once and reused for every query.
#[derive(Clone, Debug)]
pub struct PointLocator<'a> {
    vertices: &'a [Vector2<f64>],
    centroid: Vector2<f64>,
    table: AngleTable,
    cfg: GeomCfg,
}

impl<'a> PointLocator<'a> {
    pub fn new(vertices: &'a [Vector2<f64>], centroid: Vector2<f64>, cfg: GeomCfg) -> Self {
        Self {
            vertices,
            centroid,
            table: AngleTable::new(vertices, centroid),
            cfg,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        point_in_poly(self.vertices, &self.table, self.centroid, p, self.cfg)
    }

    /// Position of the first point outside the polygon, if any.
    pub fn first_outside(&self, points: &[Vector2<f64>]) -> Option<usize> {
        points.iter().position(|&p| !self.contains(p))
    }
}

/// True iff every point lies inside or on the polygon. Stops at the first
/// point outside. O(C + M log C).
pub fn points_in_poly(
    vertices: &[Vector2<f64>],
    centroid: Vector2<f64>,
    points: &[Vector2<f64>],
    cfg: GeomCfg,
) -> bool {
    PointLocator::new(vertices, centroid, cfg)
        .first_outside(points)
        .is_none()
}
