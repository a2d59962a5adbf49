//! Planar triangle geometry (eps-aware, f64).
//!
//! Purpose
//! - Provide a `Triangle` value with cached side lengths, corner cosines and a
//!   degenerate flag, plus the classical centers and coordinate conversions.
//! - Keep the stateless predicates (same-side, point-in-triangle, signed area)
//!   as free functions so callers need not build a `Triangle`.
//!
//! Numerics
//! - Absolute tolerance `EPSILON` (configurable per triangle via `GeomCfg`).
//! - Absent results are `None`; barycentric extraction may return non-finite values
//!   on degenerate input, so check `is_degenerate` first.
//!
//! Code cross-refs: `Triangle`, `Triangle2`, `Circle`, `GeomCfg`

pub mod predicates;
pub mod rand;
mod triangle;
mod types;
mod util;

pub use predicates::{
    point_in_triangle_closed, point_in_triangle_closed_eps, point_in_triangle_closed_tri,
    point_in_triangle_strict, point_in_triangle_strict_eps, point_in_triangle_strict_tri,
    same_side, same_side_eps, twice_signed_area, twice_signed_area_xy,
};
pub use triangle::{Triangle, Triangle2};
pub use types::{is_zero, is_zero_sq, Circle, GeomCfg, EPSILON, SQ_EPSILON};
pub use util::{cross, distance, sq_distance_to_line};


#[cfg(test)]
mod proptests;
