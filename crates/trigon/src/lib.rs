//! Planar triangle geometry: centers, coordinate conversions, predicates.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer `api` or `prelude` imports in callers; module paths may move.

pub mod api;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Circle, GeomCfg, Triangle, Triangle2};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{draw_triangle, ReplayToken, TriangleCfg};
    pub use crate::geom2::{
        point_in_triangle_closed, point_in_triangle_strict, same_side, twice_signed_area, Circle,
        GeomCfg, Triangle, Triangle2, EPSILON,
    };
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
