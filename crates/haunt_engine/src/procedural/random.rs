//! Injectable random sources
//!
//! Everything that scatters or spawns draws from a `&mut dyn RandomSource`, so
//! a scene can be replayed from a seed and tests can script exact samples.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    /// Next sample, uniform in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[low, high)`
    fn range(&mut self, low: f32, high: f32) -> f32 {
        let value = low + self.next_unit() * (high - low);
        // f32 rounding can land exactly on `high`; keep the interval half-open.
        if value < high || high <= low {
            value
        } else {
            (high - high.abs().max(1.0) * f32::EPSILON).max(low)
        }
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f32 {
        self.gen::<f32>()
    }
}

/// Seeded generator; the same seed always yields the same scene
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Replays a fixed list of samples, cycling when exhausted
///
/// Values are clamped into `[0, 1)`. An empty list always yields `0.0`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source replaying `values`
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self { values: values.into(), cursor: 0 }
    }

    /// Number of samples drawn so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }
}

/// Half-open interval `[min, max)` sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    /// Inclusive lower bound
    pub min: f32,
    /// Exclusive upper bound
    pub max: f32,
}

impl SampleRange {
    /// Create a new range
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Draw one value
    pub fn sample(&self, rng: &mut dyn RandomSource) -> f32 {
        rng.range(self.min, self.max)
    }

    /// Whether `value` lies in `[min, max)`
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value < self.max
    }

    /// Both bounds finite and `min <= max`
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}
