//! Deterministic random point clouds (uniform square + replay tokens).
//!
//! Purpose
//! - Give tests, benches and the CLI a reproducible source of well-behaved
//!   inputs: the peel assumes distinct points, so draws landing within
//!   tolerance of an existing point are rejected and redrawn.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::Vec2;

/// Cloud sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    /// Number of points to draw.
    pub count: usize,
    /// Points are drawn uniformly from `[-half_extent, half_extent]^2`. Keep
    /// the square large relative to `count` so rejection stays rare.
    pub half_extent: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self { count: 64, half_extent: 10.0 }
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

/// Minimum pairwise separation enforced between drawn points.
const MIN_SEPARATION: f64 = 1.0e-6;

/// Draw a point cloud, rejecting near-coincident points.
pub fn draw_point_cloud(cfg: CloudCfg, tok: ReplayToken) -> Vec<Vec2> {
    let mut rng = tok.to_std_rng();
    let h = cfg.half_extent.max(MIN_SEPARATION);
    let mut points: Vec<Vec2> = Vec::with_capacity(cfg.count);
    while points.len() < cfg.count {
        let p = Vec2::new(rng.gen_range(-h..=h), rng.gen_range(-h..=h));
        if points.iter().all(|q| (p - *q).norm() > MIN_SEPARATION) {
            points.push(p);
        }
    }
    points
}
