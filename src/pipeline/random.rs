//! Seeded random stream threaded through the pipeline
//!
//! Draw order is part of the pipeline's observable contract: rerunning with
//! the same seed must replay the exact same sequence of values. The stream
//! is therefore passed explicitly to every consumer instead of living in
//! shared state.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Narrow uniform-random capability consumed by the quantizer and renderers
pub trait RandomStream {
    /// Next uniform value in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform value in `[min, max)`
    ///
    /// Follows sketch-style semantics: when `max < min` the result simply
    /// falls in `(max, min]`, so degenerate configs stay well-defined.
    fn range(&mut self, min: f64, max: f64) -> f64 {
        (max - min).mul_add(self.next_f64(), min)
    }
}

/// Deterministic random stream seeded from a 32-bit value
pub struct SeededStream {
    rng: StdRng,
}

impl SeededStream {
    /// Create a stream positioned at the start of the sequence for `seed`
    pub fn new(seed: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(u64::from(seed)),
        }
    }
}

impl RandomStream for SeededStream {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Advance a seed with the fixed linear-congruential update
///
/// This is the reseed step: one application per explicit reseed request.
/// The update is deliberately simple; reproducibility matters here, not
/// statistical quality.
pub const fn advance_seed(seed: u32) -> u32 {
    seed.wrapping_mul(1_103_515_245).wrapping_add(12_345)
}
