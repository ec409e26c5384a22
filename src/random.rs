//! Random number source
//!
//! Every probabilistic draw in the game goes through [`RandomSource`], so a
//! session can be replayed from a seed and tests can script exact values.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A stream of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn uniform(&mut self) -> f64;

    /// Uniform integer in `0..n`. `n` must be non-zero.
    fn below(&mut self, n: u32) -> u32 {
        let value = (self.uniform() * n as f64).floor() as u32;
        value.min(n.saturating_sub(1))
    }

    /// Uniform integer in `lo..=hi`.
    fn between(&mut self, lo: u32, hi: u32) -> u32 {
        lo + self.below(hi - lo + 1)
    }
}

/// Seeded stream backed by `StdRng`; the session default.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn below(&mut self, n: u32) -> u32 {
        self.rng.gen_range(0..n)
    }
}

/// Replays a fixed sequence of uniforms, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: Vec<f64>) -> Self {
        ScriptedRandom { values, next: 0 }
    }

    /// Same value on every draw.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedRandom {
    fn uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
