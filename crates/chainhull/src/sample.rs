//! Random 2D point clouds (replay tokens, a few shapes).
//!
//! Purpose
//! - Deterministic inputs for tests, benches and the CLI `sample` command.
//!   The same `(seed, index)` token always yields the same cloud.
//!
//! Model
//! - `Square`: uniform in `[0, 1)²`; few hull vertices.
//! - `Disk`: uniform in the unit disk; hull size grows like `n^(1/3)`.
//! - `Ring`: radius `1 ± jitter` around the unit circle; many hull vertices.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Point cloud shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Square,
    Disk,
    /// Relative radial jitter, clamped to `[0, 0.99]`.
    Ring { jitter: f64 },
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    pub count: usize,
    pub shape: Shape,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            count: 1000,
            shape: Shape::Disk,
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser
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

/// Draw `cfg.count` points as `[x, y]` pairs.
pub fn draw_points(cfg: SampleCfg, tok: ReplayToken) -> Vec<[f64; 2]> {
    let mut rng = tok.to_std_rng();
    (0..cfg.count)
        .map(|_| match cfg.shape {
            Shape::Square => [rng.gen::<f64>(), rng.gen::<f64>()],
            Shape::Disk => {
                // sqrt keeps the density uniform in area
                let r = rng.gen::<f64>().sqrt();
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                [r * th.cos(), r * th.sin()]
            }
            Shape::Ring { jitter } => {
                let j = jitter.clamp(0.0, 0.99);
                let r = 1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * j;
                let th = rng.gen::<f64>() * std::f64::consts::TAU;
                [r * th.cos(), r * th.sin()]
            }
        })
        .collect()
}
