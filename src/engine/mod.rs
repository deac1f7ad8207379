//! Sampling engine.
//!
//! Owns the deterministic RNG and the append-only sample store, and derives
//! both π estimators on request:
//!
//! ```text
//! Cube:      [-1, 1]³               volume 8
//! Sphere:    x² + y² + z² ≤ 1       volume 4π/3
//! Ratio:     inside / total ≈ π / 6
//! Estimator: π̂₃D = 6 · inside / total
//! ```
//!
//! The engine is single-threaded and caller-driven: it never schedules work
//! on its own, and each session owns its own instance.

pub mod estimate;
pub mod rng;
pub mod slice;
pub mod store;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub use estimate::{Estimate, UndefinedReason, PI_REFERENCE, UNDEFINED_MARK};
pub use rng::SimRng;
pub use slice::{project_slab, Axis, SliceParams, SlicePoint, SliceStats};
pub use store::{in_unit_sphere, PointsView, SamplePoint, SampleStore};

use crate::error::{SimError, SimResult};

/// Lifecycle state of a [`SamplingEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineState {
    /// No points since the last reset.
    Empty,
    /// At least one point has been generated.
    Accumulating,
}

/// Monte Carlo engine estimating π from points in `[-1, 1]³`.
#[derive(Debug, Clone)]
pub struct SamplingEngine {
    rng: SimRng,
    store: SampleStore,
}

impl SamplingEngine {
    /// Create an empty engine keyed by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SimRng::new(seed),
            store: SampleStore::new(),
        }
    }

    /// Create an empty engine with a freshly picked seed.
    #[must_use]
    pub fn with_random_seed() -> Self {
        Self::new(SimRng::random_seed())
    }

    /// Discard all points and re-key the stream with `seed`.
    ///
    /// Afterwards the generated sequence depends only on `seed` and the batch
    /// sizes requested from here on.
    pub fn reset(&mut self, seed: u64) {
        self.rng = SimRng::new(seed);
        self.store.clear();
        info!(seed, "sampling engine reset");
    }

    /// Reset with a freshly picked seed, returning it.
    pub fn reset_random(&mut self) -> u64 {
        let seed = SimRng::random_seed();
        self.reset(seed);
        seed
    }

    /// Generate `n` points, classify them and append them to the history.
    ///
    /// Returns a view of just the new points. `n == 0` is a no-op that
    /// returns an empty view.
    pub fn next_batch(&mut self, n: usize) -> PointsView<'_> {
        let rng = &mut self.rng;
        let start = self.store.extend_with(n, || rng.gen_cube_point());
        let batch = self.store.tail(start);
        debug!(
            requested = n,
            batch_inside = batch.inside_count(),
            total = self.store.total(),
            inside = self.store.inside(),
            "generated batch"
        );
        batch
    }

    /// Like [`next_batch`](Self::next_batch), for callers holding a signed count.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidBatchSize`] for a negative `n`, without
    /// touching the engine.
    pub fn try_next_batch(&mut self, n: i64) -> SimResult<PointsView<'_>> {
        let n = usize::try_from(n).map_err(|_| SimError::InvalidBatchSize { requested: n })?;
        Ok(self.next_batch(n))
    }

    /// Volumetric estimate `6 · inside / total`.
    ///
    /// Undefined (with [`UndefinedReason::NoSamples`]) while the engine is empty.
    #[must_use]
    pub fn estimate_3d(&self) -> Estimate {
        let total = self.store.total();
        if total == 0 {
            return Estimate::undefined(UndefinedReason::NoSamples);
        }
        Estimate::from_value(6.0 * self.store.inside() as f64 / total as f64)
    }

    /// Areal estimate from the slab described by `params`.
    #[must_use]
    pub fn slice_stats(&self, params: SliceParams) -> SliceStats {
        SliceStats::compute(self.store.all(), params)
    }

    /// Validate raw slab arguments, then compute [`slice_stats`](Self::slice_stats).
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a position outside `[-1, 1]` or a
    /// non-positive thickness.
    pub fn slice_stats_at(
        &self,
        axis: Axis,
        position: f64,
        thickness: f64,
    ) -> SimResult<SliceStats> {
        let params = SliceParams::new(axis, position, thickness)?;
        Ok(self.slice_stats(params))
    }

    /// Slab points projected onto the slicing plane, for a 2D view.
    #[must_use]
    pub fn slice_points(&self, params: SliceParams) -> Vec<SlicePoint> {
        project_slab(self.store.all(), params)
    }

    /// Full point history with flags.
    #[must_use]
    pub fn all_points(&self) -> PointsView<'_> {
        self.store.all()
    }

    /// Seed the current stream was keyed with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Points generated since the last reset.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.store.total()
    }

    /// Points inside the sphere.
    #[must_use]
    pub fn inside(&self) -> u64 {
        self.store.inside()
    }

    /// Points outside the sphere.
    #[must_use]
    pub fn outside(&self) -> u64 {
        self.store.total() - self.store.inside()
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.store.is_empty() {
            EngineState::Empty
        } else {
            EngineState::Accumulating
        }
    }
}

impl Default for SamplingEngine {
    fn default() -> Self {
        Self::new(42)
    }
}
