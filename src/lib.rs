//! # spherepi
//!
//! Monte Carlo estimation of π from uniform points in the cube `[-1, 1]³`.
//!
//! Two estimators are derived from one deterministic point stream:
//! - the volumetric ratio of points inside the unit sphere (`6 · inside / total`)
//! - a planar ratio inside one slab, rescaled by the disk radius at that slice
//!
//! Statistics that would divide by zero are reported as
//! [`Estimate::Undefined`](engine::Estimate::Undefined), never as `0` or `NaN`.
//!
//! ## Example
//!
//! ```rust
//! use spherepi::prelude::*;
//!
//! let mut engine = SamplingEngine::new(42);
//! let _ = engine.next_batch(10_000);
//!
//! let pi = engine.estimate_3d().value().unwrap_or_default();
//! assert!((pi - std::f64::consts::PI).abs() < 0.2);
//!
//! let slab = SliceParams::new(Axis::Z, 0.0, 0.05)?;
//! let stats = engine.slice_stats(slab);
//! assert!(stats.slice_total > 0);
//! # Ok::<(), SimError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Estimators mirror the textbook formulas
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod logging;
pub mod report;
pub mod session;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{RunConfig, RunConfigBuilder};
    pub use crate::engine::rng::SimRng;
    pub use crate::engine::{
        Axis, EngineState, Estimate, PointsView, SamplingEngine, SliceParams, SliceStats,
        UndefinedReason,
    };
    pub use crate::error::{SimError, SimResult};
    pub use crate::report::StatsReport;
    pub use crate::session::Session;
}

/// Re-export for public API
pub use error::{SimError, SimResult};
