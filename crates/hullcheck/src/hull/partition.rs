//! Split the point set into hull candidates and interior candidates.

use nalgebra::Vector2;

/// Result of routing every point either to the hull or to the interior.
///
/// `hull` is an owned copy in ascending index order; `interior` keeps the
/// original relative order, with `interior_ids[k]` the original index of
/// `interior[k]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Partition {
    pub hull: Vec<Vector2<f64>>,
    pub interior: Vec<Vector2<f64>>,
    pub interior_ids: Vec<usize>,
}

/// Sort the hull indices once, then walk the points with a cursor into the
/// sorted indices: point `i` goes to the hull iff it is the next expected index.
///
/// Pre: indices are distinct and `< points.len()` (see `check_hull_indices`).
pub fn partition(points: &[Vector2<f64>], hull_indices: &[usize]) -> Partition {
    let mut sorted = hull_indices.to_vec();
    sorted.sort_unstable();
    debug_assert!(
        sorted.windows(2).all(|w| w[0] < w[1]),
        "hull indices must be distinct"
    );

    let c = sorted.len();
    let mut out = Partition {
        hull: Vec::with_capacity(c),
        interior: Vec::with_capacity(points.len().saturating_sub(c)),
        interior_ids: Vec::with_capacity(points.len().saturating_sub(c)),
    };
    let mut cursor = 0usize;
    for (i, &p) in points.iter().enumerate() {
        if sorted.get(cursor) == Some(&i) {
            out.hull.push(p);
            cursor += 1;
        } else {
            out.interior.push(p);
            out.interior_ids.push(i);
        }
    }
    out
}
