//! Injected randomness
//!
//! The element tie-break and the catalog item pick are the only two random
//! choices in the pipeline. Both draw from this trait so tests can pin the
//! outcome.

use rand::RngExt;

/// Source of uniform random indices
pub trait RandomSource: Send + Sync {
    /// Pick an index in `0..upper`. `upper` is always >= 1.
    fn pick(&self, upper: usize) -> usize;
}

/// Production source backed by the thread-local generator
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, upper: usize) -> usize {
        rand::rng().random_range(0..upper)
    }
}
