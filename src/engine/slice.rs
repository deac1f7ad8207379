//! Planar cross-sections of the sample cloud.
//!
//! # Governing Equations
//!
//! ```text
//! Slab:        |A - s| ≤ Δ/2          (A ∈ {X, Y, Z}, s ∈ [-1, 1], Δ > 0)
//! Radius:      r(s) = sqrt(max(0, 1 - s²))
//! Estimator:   π̂₂D = (4 / r²) · (I / T)
//! Expected T:  E[T] ≈ N · Δ / 2
//! ```
//!
//! `T` counts slab points, `I` counts those whose projection onto the plane
//! lies in the disk of radius `r`. The disk test on projected coordinates is
//! the membership rule, not the stored 3D flag.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::estimate::{Estimate, UndefinedReason};
use super::store::PointsView;
use crate::error::{SimError, SimResult};

/// Axis orthogonal to the slicing plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Plane `x = s`.
    X,
    /// Plane `y = s`.
    Y,
    /// Plane `z = s`.
    #[default]
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Coordinate index of this axis.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Indices of the two coordinates kept after projection, in order.
    #[must_use]
    pub const fn plane_indices(self) -> (usize, usize) {
        match self {
            Self::X => (1, 2),
            Self::Y => (0, 2),
            Self::Z => (0, 1),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        };
        f.write_str(name)
    }
}

impl FromStr for Axis {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "0" => Ok(Self::X),
            "y" | "1" => Ok(Self::Y),
            "z" | "2" => Ok(Self::Z),
            _ => Err(SimError::invalid_axis(s)),
        }
    }
}

impl TryFrom<usize> for Axis {
    type Error = SimError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| SimError::invalid_axis(index.to_string()))
    }
}

/// Validated slab parameters.
///
/// Construction through [`SliceParams::new`] guarantees a finite position in
/// `[-1, 1]` and a finite, strictly positive thickness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliceParams {
    axis: Axis,
    position: f64,
    thickness: f64,
}

impl SliceParams {
    /// Validate and build slab parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidPosition`] if `position` is outside
    /// `[-1, 1]` or not finite, and [`SimError::InvalidThickness`] if
    /// `thickness` is not strictly positive and finite. Thickness is
    /// rejected, never clamped.
    pub fn new(axis: Axis, position: f64, thickness: f64) -> SimResult<Self> {
        if !position.is_finite() || !(-1.0..=1.0).contains(&position) {
            return Err(SimError::InvalidPosition { position });
        }
        if !thickness.is_finite() || thickness <= 0.0 {
            return Err(SimError::InvalidThickness { thickness });
        }
        Ok(Self {
            axis,
            position,
            thickness,
        })
    }

    /// Axis orthogonal to the plane.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Plane coordinate along the axis.
    #[must_use]
    pub const fn position(&self) -> f64 {
        self.position
    }

    /// Full slab width.
    #[must_use]
    pub const fn thickness(&self) -> f64 {
        self.thickness
    }

    /// `r²` of the sphere's cross-section at the plane, clamped at zero.
    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        (1.0 - self.position * self.position).max(0.0)
    }

    /// Radius of the sphere's cross-section at the plane.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius_squared().sqrt()
    }

    /// Whether a point's axis coordinate falls in the slab.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: &[f64; 3]) -> bool {
        (p[self.axis.index()] - self.position).abs() <= self.thickness / 2.0
    }

    /// Drop the axis coordinate, keeping the other two in order.
    #[inline]
    #[must_use]
    pub const fn project(&self, p: &[f64; 3]) -> [f64; 2] {
        let (u, v) = self.axis.plane_indices();
        [p[u], p[v]]
    }
}

impl fmt::Display for SliceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={:.2} (Δ={:.3})",
            self.axis, self.position, self.thickness
        )
    }
}

/// One slab point projected onto the slicing plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlicePoint {
    /// First in-plane coordinate.
    pub u: f64,
    /// Second in-plane coordinate.
    pub v: f64,
    /// Whether `(u, v)` lies in the cross-section disk.
    pub in_disk: bool,
}

/// Statistics for one slab, computed on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SliceStats {
    /// Parameters the statistics were computed for.
    pub params: SliceParams,
    /// Points in the slab (`T`).
    pub slice_total: u64,
    /// Slab points whose projection lies in the disk (`I`).
    pub slice_inside: u64,
    /// Cross-section radius `r(s)`.
    pub radius: f64,
    /// 2D π estimate and its absolute error.
    pub estimate: Estimate,
}

impl SliceStats {
    /// Compute slab statistics over `history` in a single pass.
    #[must_use]
    pub fn compute(history: PointsView<'_>, params: SliceParams) -> Self {
        let r2 = params.radius_squared();
        let mut slice_total = 0u64;
        let mut slice_inside = 0u64;

        for p in history.points() {
            if params.contains(p) {
                slice_total += 1;
                let [u, v] = params.project(p);
                if u * u + v * v <= r2 {
                    slice_inside += 1;
                }
            }
        }

        let estimate = if history.is_empty() {
            Estimate::undefined(UndefinedReason::NoSamples)
        } else if r2 <= 0.0 {
            Estimate::undefined(UndefinedReason::TangentSlice)
        } else if slice_total == 0 {
            Estimate::undefined(UndefinedReason::EmptySlab)
        } else {
            Estimate::from_value((4.0 / r2) * (slice_inside as f64 / slice_total as f64))
        };

        Self {
            params,
            slice_total,
            slice_inside,
            radius: r2.sqrt(),
            estimate,
        }
    }

    /// 2D π estimate, if defined.
    #[must_use]
    pub const fn pi_hat(&self) -> Option<f64> {
        self.estimate.value()
    }

    /// Absolute error of the 2D estimate, if defined.
    #[must_use]
    pub const fn abs_error(&self) -> Option<f64> {
        self.estimate.abs_error()
    }

    /// Expected slab population for `total` uniform samples: `N · Δ / 2`.
    ///
    /// Capped at `total` for slabs wider than the cube.
    #[must_use]
    pub fn expected_count(total: u64, thickness: f64) -> f64 {
        let n = total as f64;
        (n * thickness / 2.0).min(n)
    }
}

/// Project every slab point onto the plane, tagging disk membership.
#[must_use]
pub fn project_slab(history: PointsView<'_>, params: SliceParams) -> Vec<SlicePoint> {
    let r2 = params.radius_squared();
    history
        .points()
        .iter()
        .filter(|p| params.contains(p))
        .map(|p| {
            let [u, v] = params.project(p);
            SlicePoint {
                u,
                v,
                in_disk: u * u + v * v <= r2,
            }
        })
        .collect()
}
