//! Caller-driven sampling loop.
//!
//! A [`Session`] pairs an engine with a point budget. The host decides when
//! to call [`Session::step`] (once per frame, in a tight loop, from a timer);
//! the session only decides how many points the next batch holds.

use tracing::{debug, info};

use crate::config::RunConfig;
use crate::engine::{PointsView, SamplingEngine};
use crate::error::{SimError, SimResult};

/// An engine plus a target point count and batch size.
#[derive(Debug, Clone)]
pub struct Session {
    engine: SamplingEngine,
    target: u64,
    batch_size: u64,
}

impl Session {
    /// Create a session with an empty engine keyed by `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if `target` or `batch_size` is zero.
    pub fn new(seed: u64, target: u64, batch_size: u64) -> SimResult<Self> {
        if target == 0 {
            return Err(SimError::config("target must be at least 1"));
        }
        if batch_size == 0 {
            return Err(SimError::config("batch_size must be at least 1"));
        }
        Ok(Self {
            engine: SamplingEngine::new(seed),
            target,
            batch_size,
        })
    }

    /// Create a session from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first configuration violation.
    pub fn from_config(config: &RunConfig) -> SimResult<Self> {
        config.check()?;
        Self::new(
            config.resolve_seed(),
            config.sampling.target,
            config.sampling.batch_size,
        )
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &SamplingEngine {
        &self.engine
    }

    /// Target point count.
    #[must_use]
    pub const fn target(&self) -> u64 {
        self.target
    }

    /// Points per full batch.
    #[must_use]
    pub const fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Points still to generate before the target is reached.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.target.saturating_sub(self.engine.total())
    }

    /// Whether the target has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Fraction of the target generated so far, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.engine.total() as f64 / self.target as f64).min(1.0)
    }

    /// Generate the next batch, trimmed so the target is never overshot.
    ///
    /// Returns `None` once the target has been reached.
    pub fn step(&mut self) -> Option<PointsView<'_>> {
        let n = self.batch_size.min(self.remaining());
        if n == 0 {
            return None;
        }
        let n = usize::try_from(n).ok()?;
        Some(self.engine.next_batch(n))
    }

    /// Step until the target is reached, returning the number of batches.
    pub fn run_to_target(&mut self) -> u64 {
        let mut batches = 0u64;
        while self.step().is_some() {
            batches += 1;
        }
        info!(
            seed = self.engine.seed(),
            total = self.engine.total(),
            inside = self.engine.inside(),
            batches,
            "session reached target"
        );
        batches
    }

    /// Reset the engine with `seed`, keeping target and batch size.
    pub fn reset(&mut self, seed: u64) {
        debug!(seed, target = self.target, "session reset");
        self.engine.reset(seed);
    }
}
