//! Triangle value type with precomputed side lengths and corner cosines.
//!
//! Layout
//! - Vertex `p1`, `p2`, `p3`; side `a = |p2 p3|`, `b = |p1 p3|`, `c = |p1 p2|`
//!   (each side is named after the vertex it faces).
//! - `cos[i]` is the cosine of the interior angle at vertex `i`.
//! - `degenerate` is set when `p3` is within eps of the line `p1 p2`, or `p1 ≈ p2`.
//!
//! Every named center goes through `point_from_trilinear`; the orthocenter goes through
//! `point_from_barycentric` first. All center queries return `None` on degenerate input.
//!
//! Derived scalars are refreshed only by `update` (called by the constructors and
//! `set_vertices`). After writing through `vertices_mut` the caller must call `update`.
//!
//! Code cross-refs: `types::{Circle, GeomCfg}`, `predicates::twice_signed_area_xy`

use nalgebra::{Vector2, Vector3};

use super::predicates::{twice_signed_area, twice_signed_area_xy};
use super::types::{Circle, GeomCfg};
use super::util::{distance, sq_distance_to_line};

/// Common surface of planar triangles.
pub trait Triangle2 {
    fn p1(&self) -> Vector2<f64>;
    fn p2(&self) -> Vector2<f64>;
    fn p3(&self) -> Vector2<f64>;
    /// Representative center point, if the implementor defines one.
    fn center(&self) -> Option<Vector2<f64>>;
}

/// Triangle with cached metric data.
///
/// Invariants (after `update`):
/// - `sides() == [|p2-p3|, |p1-p3|, |p1-p2|]`.
/// - `cosines()[0] == (p2-p1)·(p3-p1) / (b c)` and cyclically; non-finite only when degenerate.
/// - Equality compares vertices only.
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    v: [Vector2<f64>; 3],
    a: f64,
    b: f64,
    c: f64,
    cos: [f64; 3],
    degenerate: bool,
    cfg: GeomCfg,
}

impl Triangle {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        Self::with_cfg(p1, p2, p3, GeomCfg::default())
    }

    pub fn with_cfg(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>, cfg: GeomCfg) -> Self {
        let mut t = Self {
            v: [p1, p2, p3],
            a: 0.0,
            b: 0.0,
            c: 0.0,
            cos: [0.0; 3],
            degenerate: true,
            cfg,
        };
        t.update();
        t
    }

    #[inline]
    pub fn from_array(v: [Vector2<f64>; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }

    /// Recompute side lengths, cosines and the degenerate flag from the vertices.
    pub fn update(&mut self) {
        let [p1, p2, p3] = self.v;
        self.a = distance(p2, p3);
        self.b = distance(p1, p3);
        self.c = distance(p1, p2);

        self.cos[0] = (p2 - p1).dot(&(p3 - p1)) / (self.b * self.c);
        self.cos[1] = (p1 - p2).dot(&(p3 - p2)) / (self.a * self.c);
        self.cos[2] = (p2 - p3).dot(&(p1 - p3)) / (self.a * self.b);

        self.degenerate =
            self.cfg.is_zero(self.c) || self.cfg.is_zero_sq(sq_distance_to_line(p3, p1, p2));
    }

    /// Replace all three vertices and refresh.
    pub fn set_vertices(&mut self, p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) {
        self.v = [p1, p2, p3];
        self.update();
    }

    /// Mutable vertex access. Cached data is stale until `update` is called.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vector2<f64>; 3] {
        &mut self.v
    }

    #[inline]
    pub fn vertices(&self) -> [Vector2<f64>; 3] {
        self.v
    }
    #[inline]
    pub fn p1(&self) -> Vector2<f64> {
        self.v[0]
    }
    #[inline]
    pub fn p2(&self) -> Vector2<f64> {
        self.v[1]
    }
    #[inline]
    pub fn p3(&self) -> Vector2<f64> {
        self.v[2]
    }
    /// `[a, b, c]`.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }
    /// `[cos A, cos B, cos C]`.
    #[inline]
    pub fn cosines(&self) -> [f64; 3] {
        self.cos
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }

    /// Twice the signed area; positive for counterclockwise `p1, p2, p3`.
    #[inline]
    pub fn twice_signed_area(&self) -> f64 {
        twice_signed_area(self.v[0], self.v[1], self.v[2])
    }

    #[inline]
    pub fn area(&self) -> f64 {
        0.5 * self.twice_signed_area().abs()
    }

    /// Circle through all three vertices.
    ///
    /// Radius from side lengths, center from the local-origin determinant form.
    /// `None` if degenerate or the determinant vanishes within eps. A thin but
    /// non-degenerate triangle can hit the determinant test; `circumcenter` has no such
    /// test and still returns `Some` there.
    pub fn circumcircle(&self) -> Option<Circle> {
        if self.degenerate {
            return None;
        }
        let (a, b, c) = (self.a, self.b, self.c);
        let (a2, b2, c2) = (a * a, b * b, c * c);
        let radius = a * b * c
            / (2.0 * a2 * b2 + 2.0 * b2 * c2 + 2.0 * a2 * c2 - a2 * a2 - b2 * b2 - c2 * c2).sqrt();

        let p1 = self.v[0];
        let e1 = self.v[1] - p1;
        let e2 = self.v[2] - p1;
        let d = 2.0 * (e1.x * e2.y - e1.y * e2.x);
        if self.cfg.is_zero(d) || !radius.is_finite() {
            return None;
        }
        let inv_d = 1.0 / d;
        let l1 = e1.norm_squared();
        let l2 = e2.norm_squared();
        let x = (e2.y * l1 - e1.y * l2) * inv_d;
        let y = (e1.x * l2 - e2.x * l1) * inv_d;

        let mut circle = Circle::default();
        circle.set_radius(radius);
        circle.set_center_xy(x + p1.x, y + p1.y);
        Some(circle)
    }

    /// Circle tangent to all three sides. `None` if degenerate.
    ///
    /// On thin triangles the Heron product can round below zero; it is clamped so the
    /// radius degrades to 0 instead of NaN.
    pub fn incircle(&self) -> Option<Circle> {
        if self.degenerate {
            return None;
        }
        let (a, b, c) = (self.a, self.b, self.c);
        let perimeter = a + b + c;
        let heron = ((b + c - a) * (c + a - b) * (a + b - c)).max(0.0);
        let radius = 0.5 * (heron / perimeter).sqrt();
        if !radius.is_finite() {
            return None;
        }
        let center = (self.v[0] * a + self.v[1] * b + self.v[2] * c) / perimeter;
        Some(Circle::new(center, radius))
    }

    #[inline]
    pub fn incenter(&self) -> Option<Vector2<f64>> {
        self.point_from_trilinear(1.0, 1.0, 1.0)
    }

    #[inline]
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        let (a, b, c) = (self.a, self.b, self.c);
        self.point_from_trilinear(b * c, c * a, a * b)
    }

    #[inline]
    pub fn circumcenter(&self) -> Option<Vector2<f64>> {
        let [ca, cb, cc] = self.cos;
        self.point_from_trilinear(ca, cb, cc)
    }

    pub fn orthocenter(&self) -> Option<Vector2<f64>> {
        let a2 = self.a * self.a;
        let b2 = self.b * self.b;
        let c2 = self.c * self.c;
        self.point_from_barycentric(
            (a2 + b2 - c2) * (a2 - b2 + c2),
            (a2 + b2 - c2) * (-a2 + b2 + c2),
            (a2 - b2 + c2) * (-a2 + b2 + c2),
        )
    }

    /// Cartesian point for trilinear coordinates `(x, y, z)` (any common scale).
    ///
    /// Evaluated anchored at `p3`: `p3 + (b y (p2 - p3) + a x (p1 - p3)) / (a x + b y + c z)`.
    pub fn point_from_trilinear(&self, x: f64, y: f64, z: f64) -> Option<Vector2<f64>> {
        if self.degenerate {
            return None;
        }
        let s = self.a * x + self.b * y + self.c * z;
        if s == 0.0 {
            return None;
        }
        let p3 = self.v[2];
        let ea = (self.v[1] - p3) * (self.b * y);
        let eb = (self.v[0] - p3) * (self.a * x);
        let p = p3 + (ea + eb) / s;
        if p.x.is_finite() && p.y.is_finite() {
            Some(p)
        } else {
            None
        }
    }

    /// Cartesian point for (unnormalized) barycentric coordinates `(x, y, z)`.
    #[inline]
    pub fn point_from_barycentric(&self, x: f64, y: f64, z: f64) -> Option<Vector2<f64>> {
        if self.degenerate {
            return None;
        }
        self.point_from_trilinear(x / self.a, y / self.b, z / self.c)
    }

    /// Barycentric coordinates `(u, v, w)` of `p`, `w = 1 - u - v`. Not clamped.
    ///
    /// Does not consult the degenerate flag; components are non-finite when the
    /// vertices are exactly collinear.
    pub fn barycentric(&self, p: Vector2<f64>) -> Vector3<f64> {
        let [p1, p2, p3] = self.v;
        let m = (p3.x - p1.x) * (p2.y - p1.y) - (p3.y - p1.y) * (p2.x - p1.x);
        let ood = -1.0 / m;
        let nu = twice_signed_area_xy(p.x, p.y, p2.x, p2.y, p3.x, p3.y) * ood;
        let nv = twice_signed_area_xy(p.x, p.y, p3.x, p3.y, p1.x, p1.y) * ood;
        Vector3::new(nu, nv, 1.0 - nu - nv)
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v
    }
}

impl From<[Vector2<f64>; 3]> for Triangle {
    fn from(v: [Vector2<f64>; 3]) -> Self {
        Self::from_array(v)
    }
}

impl Triangle2 for Triangle {
    fn p1(&self) -> Vector2<f64> {
        self.v[0]
    }
    fn p2(&self) -> Vector2<f64> {
        self.v[1]
    }
    fn p3(&self) -> Vector2<f64> {
        self.v[2]
    }
    /// Always `None`: no single center is privileged here. Use `centroid`,
    /// `circumcenter`, `incenter` or `orthocenter` explicitly.
    fn center(&self) -> Option<Vector2<f64>> {
        None
    }
}
