//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for project-internal
//!   code. Breaking changes are allowed and expected.
//! - Prefer these re-exports for clarity and consistency across callers.

// Triangle and its tolerance/circle types
pub use crate::geom2::{Circle, GeomCfg, Triangle, Triangle2, EPSILON, SQ_EPSILON};
// Stateless predicates
pub use crate::geom2::{
    point_in_triangle_closed, point_in_triangle_closed_eps, point_in_triangle_closed_tri,
    point_in_triangle_strict, point_in_triangle_strict_eps, point_in_triangle_strict_tri,
    same_side, same_side_eps, twice_signed_area, twice_signed_area_xy,
};
// Distance helpers
pub use crate::geom2::{distance, is_zero, is_zero_sq, sq_distance_to_line};
// Random triangles
pub use crate::geom2::rand::{
    draw_triangle, ReplayToken as TriangleReplay, TriangleCfg as RandomTriangleCfg,
};
