//! Property tests for `Triangle` invariants on random well-shaped inputs.
//!
//! Run with: cargo test -p trigon -- proptests

use super::*;
use nalgebra::{Matrix2, Vector2};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Vector2<f64>> {
    (-100.0..100.0f64, -100.0..100.0f64).prop_map(|(x, y)| Vector2::new(x, y))
}

fn well_shaped(t: &Triangle) -> bool {
    if t.is_degenerate() {
        return false;
    }
    let [a, b, c] = t.sides();
    let hi = a.max(b).max(c);
    a.min(b).min(c) > 1.0 && t.twice_signed_area().abs() / (hi * hi) > 1e-2
}

fn arb_triangle() -> impl Strategy<Value = Triangle> {
    (arb_point(), arb_point(), arb_point())
        .prop_map(|(p1, p2, p3)| Triangle::new(p1, p2, p3))
        .prop_filter("well-shaped triangle", well_shaped)
}

fn scale(t: &Triangle) -> f64 {
    1.0 + t.sides().iter().copied().fold(0.0, f64::max)
}

proptest! {
    #[test]
    fn sides_match_vertex_distances(t in arb_triangle()) {
        let [p1, p2, p3] = t.vertices();
        let [a, b, c] = t.sides();
        let tol = 1e-12 * scale(&t);
        prop_assert!((a - (p2 - p3).norm()).abs() < tol);
        prop_assert!((b - (p1 - p3).norm()).abs() < tol);
        prop_assert!((c - (p1 - p2).norm()).abs() < tol);
    }

    #[test]
    fn cosines_complete_to_unit(t in arb_triangle()) {
        let [a, b, c] = t.sides();
        let area2 = t.twice_signed_area().abs();
        let sines = [area2 / (b * c), area2 / (a * c), area2 / (a * b)];
        for (cos, sin) in t.cosines().into_iter().zip(sines) {
            prop_assert!((cos * cos + sin * sin - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn centroid_is_vertex_mean(t in arb_triangle()) {
        let [p1, p2, p3] = t.vertices();
        let mean = (p1 + p2 + p3) / 3.0;
        let g = t.centroid().unwrap();
        prop_assert!((g - mean).norm() < 1e-9 * scale(&t));
    }

    #[test]
    fn incircle_touches_every_side(t in arb_triangle()) {
        let ic = t.incircle().unwrap();
        let [p1, p2, p3] = t.vertices();
        let tol = 1e-7 * scale(&t);
        for (u, v) in [(p1, p2), (p2, p3), (p3, p1)] {
            let d = sq_distance_to_line(ic.center, u, v).sqrt();
            prop_assert!((d - ic.radius).abs() < tol, "side distance {} vs r {}", d, ic.radius);
        }
        prop_assert!((t.incenter().unwrap() - ic.center).norm() < tol);
    }

    #[test]
    fn circumcircle_passes_through_vertices(t in arb_triangle()) {
        let cc = t.circumcircle().unwrap();
        let tol = 1e-7 * (1.0 + cc.radius);
        for p in t.vertices() {
            prop_assert!(cc.signed_distance(p).abs() < tol);
        }
        prop_assert!((t.circumcenter().unwrap() - cc.center).norm() < tol);
    }

    #[test]
    fn barycentric_round_trip(t in arb_triangle(), p in arb_point()) {
        let bary = t.barycentric(p);
        let back = t.point_from_barycentric(bary.x, bary.y, bary.z).unwrap();
        prop_assert!((back - p).norm() < 1e-6 * scale(&t));
    }

    #[test]
    fn barycentric_sums_to_one(t in arb_triangle(), p in arb_point()) {
        let bary = t.barycentric(p);
        let mag = 1.0 + bary.x.abs() + bary.y.abs();
        prop_assert!((bary.sum() - 1.0).abs() < 1e-12 * mag);
    }

    #[test]
    fn strict_inside_agrees_with_barycentric(t in arb_triangle(), p in arb_point()) {
        let bary = t.barycentric(p);
        let margin = 1e-6;
        if bary.iter().all(|&w| w > margin) {
            prop_assert!(point_in_triangle_strict_tri(p, &t));
        }
        // the closed filter thresholds w·(2·area)², not w
        let area2 = t.twice_signed_area();
        if bary.iter().all(|&w| w * area2 * area2 > 1e-6) {
            prop_assert!(point_in_triangle_closed_tri(p, &t));
        }
        if bary.iter().any(|&w| w < -margin) {
            prop_assert!(!point_in_triangle_strict_tri(p, &t));
            prop_assert!(!point_in_triangle_closed_tri(p, &t));
        }
    }

    #[test]
    fn collinear_triples_are_degenerate(
        p in arb_point(),
        d in arb_point(),
        s in -3.0..3.0f64,
    ) {
        let t = Triangle::new(p, p + d, p + d * s);
        prop_assert!(t.is_degenerate());
        prop_assert!(t.circumcircle().is_none());
        prop_assert!(t.incircle().is_none());
        prop_assert!(t.incenter().is_none());
        prop_assert!(t.centroid().is_none());
        prop_assert!(t.circumcenter().is_none());
        prop_assert!(t.orthocenter().is_none());
    }

    #[test]
    fn signed_area_tracks_orientation(p1 in arb_point(), p2 in arb_point(), p3 in arb_point()) {
        let area2 = twice_signed_area(p1, p2, p3);
        let det = Matrix2::from_columns(&[p2 - p1, p3 - p1]).determinant();
        let tol = 1e-9 * (1.0 + det.abs());
        prop_assert!((area2 - det).abs() < tol);
        prop_assert!((twice_signed_area(p2, p1, p3) + area2).abs() < tol);
        prop_assert!((twice_signed_area(p2, p3, p1) - area2).abs() < tol);
        prop_assert!((twice_signed_area_xy(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y) - area2).abs() < tol);
    }
}
