use super::*;
use crate::geom2::GeomCfg;
use nalgebra::{vector, Vector2};

fn pts(xy: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    xy.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

#[test]
fn empty_input_is_valid() {
    assert!(validate(&[], &[]));
    assert_eq!(check(&[], &[], GeomCfg::default()), Verdict::Valid);
}

#[test]
fn points_without_hull_are_invalid() {
    let p = pts(&[(0.0, 0.0), (1.0, 1.0)]);
    assert!(!validate(&p, &[]));
    assert_eq!(check(&p, &[], GeomCfg::default()), Verdict::EmptyHull);
}

#[test]
fn triangle_with_interior_point() {
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0)]);
    assert!(validate(&p, &[0, 1, 2]));
}

#[test]
fn triangle_with_exterior_point() {
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (5.0, 5.0)]);
    assert!(!validate(&p, &[0, 1, 2]));
    assert_eq!(
        check(&p, &[2, 0, 1], GeomCfg::default()),
        Verdict::PointOutside { index: 3 }
    );
}

#[test]
fn square_indices_out_of_geometric_order() {
    let p = pts(&[(1.0, 1.0), (2.0, 2.0), (0.0, 0.0), (0.0, 2.0), (2.0, 0.0)]);
    // diagonal pairs first: (2,2), (0,0), then (0,2), (2,0)
    assert!(validate(&p, &[1, 2, 3, 4]));
    assert!(validate(&p, &[4, 1, 3, 2]));
}

#[test]
fn point_on_hull_edge_is_accepted() {
    let p = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, 0.0), (2.0, 1.5)]);
    assert!(validate(&p, &[0, 1, 2, 3]));
}

#[test]
fn concave_quadrilateral_is_rejected() {
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (1.0, 1.0), (0.0, 4.0)]);
    assert_eq!(check(&p, &[0, 1, 2, 3], GeomCfg::default()), Verdict::NotConvex);
}

#[test]
fn interior_point_claimed_as_vertex_is_rejected() {
    // (1,1) lies inside the square; listing it as a hull vertex breaks convexity
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (1.0, 1.0)]);
    assert!(!validate(&p, &[0, 1, 2, 3, 4]));
}

#[test]
fn fewer_than_three_hull_points_are_not_convex() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (0.5, 0.0)]);
    assert_eq!(check(&p, &[0, 1], GeomCfg::default()), Verdict::NotConvex);
    assert_eq!(check(&p[..1], &[0], GeomCfg::default()), Verdict::NotConvex);
}

#[test]
fn hull_missing_a_vertex_is_rejected() {
    // the claimed triangle leaves (4,4) outside
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
    assert_eq!(
        check(&p, &[0, 1, 3], GeomCfg::default()),
        Verdict::PointOutside { index: 2 }
    );
}

#[test]
fn collinear_hull_accepts_points_on_the_line_only() {
    let p = pts(&[(0.0, 0.0), (1.0, 1.0), (3.0, 3.0), (2.0, 2.0)]);
    assert!(validate(&p, &[0, 1, 2]));
    let q = pts(&[(0.0, 0.0), (1.0, 1.0), (3.0, 3.0), (2.0, 1.0)]);
    assert!(!validate(&q, &[0, 1, 2]));
}

#[test]
fn clockwise_input_order_is_irrelevant() {
    let p = pts(&[(0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0), (3.0, 1.0)]);
    assert!(validate(&p, &[0, 1, 2, 3]));
}

#[test]
fn tolerance_decides_near_boundary_points() {
    let p = pts(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (1.0, -1e-8)]);
    // signed area of the offending triple is 1e-8: zero under the default eps
    assert!(validate(&p, &[0, 1, 2, 3]));
    let strict = GeomCfg::with_eps(1e-12).unwrap();
    assert!(!validate_with(&p, &[0, 1, 2, 3], strict));
}

#[test]
fn repeated_calls_agree() {
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0), (1.0, 1.0), (5.0, 5.0)]);
    let cfg = GeomCfg::default();
    let first = check(&p, &[0, 1, 2], cfg);
    for _ in 0..3 {
        assert_eq!(check(&p, &[0, 1, 2], cfg), first);
    }
}

#[test]
fn verdict_rendering() {
    assert_eq!(Verdict::Valid.answer(), "Yes");
    assert_eq!(Verdict::NotConvex.answer(), "No");
    assert_eq!(Verdict::PointOutside { index: 4 }.reason(), "point_outside");
    assert_eq!(
        Verdict::PointOutside { index: 4 }.to_string(),
        "point 4 lies outside the hull"
    );
}

#[test]
fn pipeline_stages_compose() {
    let p = pts(&[(2.0, 2.0), (0.5, 0.5), (0.0, 0.0), (2.0, 0.0), (0.0, 2.0)]);
    let part = partition(&p, &[3, 0, 4, 2]);
    assert_eq!(part.interior_ids, vec![1]);
    let ordered = order_by_polar_angle(part.hull).unwrap();
    assert_eq!(ordered.centroid, vector![1.0, 1.0]);
    assert!(is_convex(&ordered.vertices, GeomCfg::default()));
    assert!(points_in_poly(
        &ordered.vertices,
        ordered.centroid,
        &part.interior,
        GeomCfg::default()
    ));
}
