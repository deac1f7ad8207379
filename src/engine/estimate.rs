//! Point estimates of π with explicit "undefined" signaling.
//!
//! A statistic that would divide by zero is reported as
//! [`Estimate::Undefined`] with the reason, never as `0.0` or `NaN`, so a
//! presentation layer can render "—" instead of a misleading number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference value used for every reported absolute error.
pub const PI_REFERENCE: f64 = std::f64::consts::PI;

/// Placeholder rendered in place of an undefined statistic.
pub const UNDEFINED_MARK: &str = "—";

/// Why a statistic could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UndefinedReason {
    /// No points have been generated since the last reset.
    NoSamples,
    /// The slicing plane touches the sphere at a single point (radius 0).
    TangentSlice,
    /// No generated point fell inside the slab.
    EmptySlab,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::NoSamples => "no samples",
            Self::TangentSlice => "tangent slice",
            Self::EmptySlab => "empty slab",
        };
        f.write_str(text)
    }
}

/// A π estimate together with its absolute error, or the reason it is missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Estimate {
    /// The estimator was computable.
    Defined {
        /// Point estimate of π.
        value: f64,
        /// `|value - π|`.
        abs_error: f64,
    },
    /// The estimator divides by zero for the current data.
    Undefined {
        /// What made it undefined.
        reason: UndefinedReason,
    },
}

impl Estimate {
    /// Wrap a computed value, deriving its error against [`PI_REFERENCE`].
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self::Defined {
            value,
            abs_error: (value - PI_REFERENCE).abs(),
        }
    }

    /// Create an undefined estimate.
    #[must_use]
    pub const fn undefined(reason: UndefinedReason) -> Self {
        Self::Undefined { reason }
    }

    /// Whether a value is present.
    #[must_use]
    pub const fn is_defined(&self) -> bool {
        matches!(self, Self::Defined { .. })
    }

    /// The estimate, if defined.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Defined { value, .. } => Some(*value),
            Self::Undefined { .. } => None,
        }
    }

    /// The absolute error, if defined.
    #[must_use]
    pub const fn abs_error(&self) -> Option<f64> {
        match self {
            Self::Defined { abs_error, .. } => Some(*abs_error),
            Self::Undefined { .. } => None,
        }
    }

    /// The undefined reason, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<UndefinedReason> {
        match self {
            Self::Defined { .. } => None,
            Self::Undefined { reason } => Some(*reason),
        }
    }

    /// Render the value with `precision` decimals, or [`UNDEFINED_MARK`].
    #[must_use]
    pub fn format_value(&self, precision: usize) -> String {
        self.value()
            .map_or_else(|| UNDEFINED_MARK.to_string(), |v| format!("{v:.precision$}"))
    }

    /// Render the absolute error with `precision` decimals, or [`UNDEFINED_MARK`].
    #[must_use]
    pub fn format_error(&self, precision: usize) -> String {
        self.abs_error()
            .map_or_else(|| UNDEFINED_MARK.to_string(), |e| format!("{e:.precision$}"))
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defined { value, abs_error } => write!(f, "{value:.6} (err {abs_error:.6})"),
            Self::Undefined { reason } => write!(f, "{UNDEFINED_MARK} ({reason})"),
        }
    }
}
