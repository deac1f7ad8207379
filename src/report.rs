//! Statistics snapshots for display and machine-readable output.

use serde::Serialize;
use std::fmt::Write as _;

use crate::engine::{Estimate, SamplingEngine, SliceParams, SliceStats};

/// Everything a statistics panel shows after a batch.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    /// Seed of the current stream.
    pub seed: u64,
    /// Points generated.
    pub total: u64,
    /// Points inside the sphere.
    pub inside: u64,
    /// Points outside the sphere.
    pub outside: u64,
    /// Volumetric estimate.
    pub estimate_3d: Estimate,
    /// Slab statistics.
    pub slice: SliceStats,
    /// Expected slab population `N · Δ / 2`.
    pub expected_slice_count: f64,
    /// Fraction of the target reached, when running against a target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<f64>,
}

impl StatsReport {
    /// Snapshot the engine for the given slab.
    #[must_use]
    pub fn capture(engine: &SamplingEngine, params: SliceParams) -> Self {
        let total = engine.total();
        Self {
            seed: engine.seed(),
            total,
            inside: engine.inside(),
            outside: engine.outside(),
            estimate_3d: engine.estimate_3d(),
            slice: engine.slice_stats(params),
            expected_slice_count: SliceStats::expected_count(total, params.thickness()),
            progress: None,
        }
    }

    /// Attach a progress fraction.
    #[must_use]
    pub const fn with_progress(mut self, progress: f64) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Render as an aligned text block; undefined values show as "—".
    #[must_use]
    pub fn render_text(&self) -> String {
        let slice_est = self.slice.estimate;
        let mut out = String::new();

        let _ = writeln!(out, "Seed:            {}", self.seed);
        let _ = writeln!(out, "Total points:    {}", group_thousands(self.total));
        let _ = writeln!(out, "Inside sphere:   {}", group_thousands(self.inside));
        let _ = writeln!(out, "Outside sphere:  {}", group_thousands(self.outside));
        if let Some(progress) = self.progress {
            let _ = writeln!(out, "Progress:        {:.1}%", progress * 100.0);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "π (3D):          {}", self.estimate_3d.format_value(6));
        let _ = writeln!(out, "|error| (3D):    {}", self.estimate_3d.format_error(6));
        let _ = writeln!(out);
        let _ = writeln!(out, "Slice:           {}", self.slice.params);
        let _ = writeln!(out, "Radius r(s):     {:.6}", self.slice.radius);
        let _ = writeln!(
            out,
            "Slice points:    {} (expected ≈ {:.0})",
            group_thousands(self.slice.slice_total),
            self.expected_slice_count
        );
        let _ = writeln!(out, "Slice in disk:   {}", group_thousands(self.slice.slice_inside));
        let _ = writeln!(out, "π (2D):          {}", slice_est.format_value(5));
        let _ = write!(out, "|error| (2D):    {}", slice_est.format_error(5));
        out
    }

    /// Render as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn render_json(&self) -> crate::SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Format an integer with `,` thousands separators.
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
