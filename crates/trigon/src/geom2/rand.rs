//! Random triangles in 2D (uniform vertices + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler for well-shaped triangles used by tests,
//!   benchmarks and the CLI `sample` command.
//!
//! Model
//! - Draw three vertices uniformly in the square `[-extent, extent]²`.
//! - Reject draws with a short side or a thin shape (twice-area relative to the
//!   squared longest side below `min_area_ratio`), retrying up to `max_tries`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Triangle`, `predicates::twice_signed_area`

use super::triangle::Triangle;
use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Triangle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct TriangleCfg {
    /// Half-width of the sampling square around the origin.
    pub extent: f64,
    /// Minimum accepted side length.
    pub min_side: f64,
    /// Minimum accepted `|2·area| / max_side²` (0 accepts any non-degenerate draw).
    pub min_area_ratio: f64,
    pub max_tries: usize,
}
impl Default for TriangleCfg {
    fn default() -> Self {
        Self {
            extent: 10.0,
            min_side: 1e-2,
            min_area_ratio: 0.05,
            max_tries: 64,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random non-degenerate triangle, or `None` if every try was rejected.
///
/// Also `None` when `extent` is not finite or the sampling width `2·extent` overflows.
pub fn draw_triangle(cfg: TriangleCfg, tok: ReplayToken) -> Option<Triangle> {
    if !extent_is_sampleable(cfg.extent) {
        return None;
    }
    let mut rng = tok.to_std_rng();
    let e = cfg.extent.abs().max(1e-9);
    for _ in 0..cfg.max_tries.max(1) {
        let mut pt = || Vector2::new(rng.gen_range(-e..=e), rng.gen_range(-e..=e));
        let t = Triangle::new(pt(), pt(), pt());
        if accept(&t, &cfg) {
            return Some(t);
        }
    }
    None
}

/// True iff `[-extent, extent]` has a finite width.
#[inline]
pub fn extent_is_sampleable(extent: f64) -> bool {
    (2.0 * extent).is_finite()
}

fn accept(t: &Triangle, cfg: &TriangleCfg) -> bool {
    if t.is_degenerate() {
        return false;
    }
    let sides = t.sides();
    let lo = sides.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = sides.iter().copied().fold(0.0, f64::max);
    if lo < cfg.min_side {
        return false;
    }
    t.twice_signed_area().abs() / (hi * hi) >= cfg.min_area_ratio
}
