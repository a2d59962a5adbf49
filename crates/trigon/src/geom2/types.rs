//! Basic 2D types and tolerances shared by the triangle code.
//!
//! - `GeomCfg`: centralizes the absolute tolerance used for zero tests.
//! - `EPSILON`, `SQ_EPSILON`, `is_zero`, `is_zero_sq`: default-tolerance helpers.
//! - `Circle`: center + radius value returned by circumcircle/incircle queries.
//!
//! Code cross-refs: `triangle::Triangle`, `predicates`, `util::sq_distance_to_line`

use nalgebra::Vector2;

/// Default absolute tolerance for floating-point zero tests.
pub const EPSILON: f64 = 1e-7;

/// `EPSILON²`, for comparisons against squared quantities.
pub const SQ_EPSILON: f64 = EPSILON * EPSILON;

/// `|d| <= EPSILON`.
#[inline]
pub fn is_zero(d: f64) -> bool {
    d.abs() <= EPSILON
}

/// `d <= EPSILON²`. Meant for non-negative squared quantities.
#[inline]
pub fn is_zero_sq(d: f64) -> bool {
    d <= SQ_EPSILON
}

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps: EPSILON }
    }
}

impl GeomCfg {
    #[inline]
    pub fn new(eps: f64) -> Self {
        Self { eps: eps.abs() }
    }
    #[inline]
    pub fn sq_eps(&self) -> f64 {
        self.eps * self.eps
    }
    #[inline]
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() <= self.eps
    }
    #[inline]
    pub fn is_zero_sq(&self, d: f64) -> bool {
        d <= self.sq_eps()
    }
}

/// Circle in the plane: `{ x : |x - center| = radius }`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Vector2<f64>,
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(center: Vector2<f64>, radius: f64) -> Self {
        Self { center, radius }
    }
    #[inline]
    pub fn set_radius(&mut self, r: f64) {
        self.radius = r;
    }
    #[inline]
    pub fn set_center(&mut self, c: Vector2<f64>) {
        self.center = c;
    }
    #[inline]
    pub fn set_center_xy(&mut self, x: f64, y: f64) {
        self.center = Vector2::new(x, y);
    }
    /// Signed distance from `p` to the circle (negative inside).
    #[inline]
    pub fn signed_distance(&self, p: Vector2<f64>) -> f64 {
        (p - self.center).norm() - self.radius
    }
}
