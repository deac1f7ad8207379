//! Deterministic random number generation.
//!
//! Wraps PCG (Permuted Congruential Generator) keyed by a single seed.
//!
//! # Reproducibility Guarantee
//!
//! Given the same seed, the sequence of values is bitwise-identical across
//! runs and platforms. Values are consumed strictly in call order, so two
//! callers that request the same number of draws see the same stream no
//! matter how those draws are grouped into batches.

use rand::prelude::*;
use rand_pcg::Pcg64;

/// Upper bound (exclusive) for seeds picked by [`SimRng::random_seed`].
pub const RANDOM_SEED_BOUND: u64 = 1_000_000;

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone)]
pub struct SimRng {
    /// Seed the stream was keyed with.
    seed: u64,
    /// Number of `f64` values drawn so far.
    draws: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl SimRng {
    /// Create a new RNG keyed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: 0,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Pick a seed from OS entropy, for callers with no preference.
    ///
    /// Seeds are kept small (`< 1_000_000`) so they are easy to read back
    /// and type into a later run.
    #[must_use]
    pub fn random_seed() -> u64 {
        rand::thread_rng().gen_range(0..RANDOM_SEED_BOUND)
    }

    /// Get the seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of `f64` values drawn since construction.
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }

    /// Generate a random f64 in [0, 1).
    pub fn gen_f64(&mut self) -> f64 {
        self.draws += 1;
        self.rng.gen()
    }

    /// Generate a random f64 in `[min, max)`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn gen_range_f64(&mut self, min: f64, max: f64) -> f64 {
        assert!(min <= max, "Invalid range: min > max");
        min + (max - min) * self.gen_f64()
    }

    /// Draw one point uniformly from the cube `[-1, 1)^3`, x then y then z.
    pub fn gen_cube_point(&mut self) -> [f64; 3] {
        let x = self.gen_range_f64(-1.0, 1.0);
        let y = self.gen_range_f64(-1.0, 1.0);
        let z = self.gen_range_f64(-1.0, 1.0);
        [x, y, z]
    }
}
