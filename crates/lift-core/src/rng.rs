//! Deterministic simulation-level RNG wrapper.
//!
//! All randomness in the simulator (generated passenger lists) flows through
//! `SimRng`, seeded from `SimConfig::seed`, so a run is reproducible from its
//! configuration alone.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded `SmallRng`.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
