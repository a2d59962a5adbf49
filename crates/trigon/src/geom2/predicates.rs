//! Stateless 2D predicates: same-side, point-in-triangle, signed area.
//!
//! Two point-in-triangle tests with different boundary semantics:
//! - `point_in_triangle_closed`: sign-of-cross-product filter. Permissive near edges,
//!   meant as a fast filter. Thresholds the product of two cross products against eps.
//! - `point_in_triangle_strict`: barycentric test. True only for points strictly inside,
//!   at least eps away (in barycentric units) from every edge; vertices and edges are out.
//!
//! Both reject triangles whose third vertex is within eps of the line through the first two.
//!
//! Code cross-refs: `types::{EPSILON, SQ_EPSILON}`, `util::{cross, sq_distance_to_line}`

use nalgebra::Vector2;

use super::triangle::Triangle;
use super::types::EPSILON;
use super::util::{cross, sq_distance_to_line};

/// Twice the signed area of `(p1, p2, p3)`. Positive for counterclockwise order (y up).
#[inline]
pub fn twice_signed_area(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    (p1.x - p3.x) * (p2.y - p3.y) - (p1.y - p3.y) * (p2.x - p3.x)
}

/// Scalar form of [`twice_signed_area`].
///
/// `(x1-x2)(y2-y3) - (x2-x3)(y1-y2)` expands to the same polynomial, so this routes
/// through the by-point expression to keep a single rounding behavior.
#[inline]
pub fn twice_signed_area_xy(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> f64 {
    twice_signed_area(
        Vector2::new(x1, y1),
        Vector2::new(x2, y2),
        Vector2::new(x3, y3),
    )
}

/// True iff `p` and `q` lie strictly on the same side of the line `a → b`.
#[inline]
pub fn same_side(p: Vector2<f64>, q: Vector2<f64>, a: Vector2<f64>, b: Vector2<f64>) -> bool {
    same_side_eps(p, q, a, b, EPSILON)
}

/// [`same_side`] with explicit threshold: `((b-a)×(p-a)) · ((b-a)×(q-a)) >= eps`.
#[inline]
pub fn same_side_eps(
    p: Vector2<f64>,
    q: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    eps: f64,
) -> bool {
    cross(a, b, p) * cross(a, b, q) >= eps
}

#[inline]
fn collinear_eps(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>, eps: f64) -> bool {
    sq_distance_to_line(c, a, b) <= eps * eps
}

/// Cross-product point-in-triangle filter (permissive, see module docs).
#[inline]
pub fn point_in_triangle_closed(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
) -> bool {
    point_in_triangle_closed_eps(p, a, b, c, EPSILON)
}

pub fn point_in_triangle_closed_eps(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    eps: f64,
) -> bool {
    if collinear_eps(a, b, c, eps) {
        return false;
    }
    same_side_eps(p, a, b, c, eps) && same_side_eps(p, b, a, c, eps) && same_side_eps(p, c, a, b, eps)
}

#[inline]
pub fn point_in_triangle_closed_tri(p: Vector2<f64>, t: &Triangle) -> bool {
    point_in_triangle_closed_eps(p, t.p1(), t.p2(), t.p3(), t.cfg().eps)
}

/// Barycentric strict-interior test (see module docs).
#[inline]
pub fn point_in_triangle_strict(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
) -> bool {
    point_in_triangle_strict_eps(p, a, b, c, EPSILON)
}

pub fn point_in_triangle_strict_eps(
    p: Vector2<f64>,
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    eps: f64,
) -> bool {
    if p == a || p == b || p == c {
        return false;
    }
    if collinear_eps(a, b, c, eps) {
        return false;
    }
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u > eps && v > eps && u + v < 1.0 - eps
}

#[inline]
pub fn point_in_triangle_strict_tri(p: Vector2<f64>, t: &Triangle) -> bool {
    point_in_triangle_strict_eps(p, t.p1(), t.p2(), t.p3(), t.cfg().eps)
}
