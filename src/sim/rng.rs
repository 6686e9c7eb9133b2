//! Random source seam
//!
//! The simulation never touches a global RNG. Everything that needs a random
//! number takes a `&mut impl RandomSource`, so a run can be replayed from its
//! seed and tests can script exact draws.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Uniform random numbers for the simulation
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Uniform draw in `[min, max)`
    fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.unit() * (max - min)
    }

    /// Uniform index in `0..len` (`len` must be non-zero)
    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f32) as usize).min(len - 1)
    }
}

impl RandomSource for Pcg32 {
    #[inline]
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Seeded PCG stream used by [`crate::sim::Arcade`]
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of draws, cycling when exhausted
///
/// Handy for forcing a particular drop kind or spawn position.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRng {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always returns the same draw
    pub fn constant(value: f32) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedRng {
    fn unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        // Keep the half-open contract even if a script contains 1.0
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
