//! Error types for spherepi.
//!
//! Every fallible operation returns `Result<T, SimError>` instead of panicking.
//! Invalid input is rejected before any engine state is touched; undefined
//! statistics are not errors at all (see [`crate::engine::Estimate`]).

use thiserror::Error;

/// Result type alias for spherepi operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error type for all spherepi operations.
#[derive(Debug, Error)]
pub enum SimError {
    // ===== Invalid Input =====
    /// A batch size below zero was requested.
    #[error("Invalid input: batch size must be non-negative, got {requested}")]
    InvalidBatchSize {
        /// The rejected batch size.
        requested: i64,
    },

    /// Slab thickness was zero, negative or not finite.
    #[error("Invalid input: slice thickness must be positive and finite, got {thickness}")]
    InvalidThickness {
        /// The rejected thickness.
        thickness: f64,
    },

    /// Slice position outside [-1, 1] or not finite.
    #[error("Invalid input: slice position must lie in [-1, 1], got {position}")]
    InvalidPosition {
        /// The rejected position.
        position: f64,
    },

    /// Axis name or index that is not one of X, Y, Z.
    #[error("Invalid input: axis must be one of x, y, z (or 0, 1, 2), got '{axis}'")]
    InvalidAxis {
        /// The rejected axis text.
        axis: String,
    },

    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    // ===== I/O Errors =====
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SimError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create an I/O error with a message (wraps in `std::io::Error`).
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(std::io::Error::other(message.into()))
    }

    /// Create an axis error from whatever the caller supplied.
    #[must_use]
    pub fn invalid_axis(axis: impl Into<String>) -> Self {
        Self::InvalidAxis { axis: axis.into() }
    }

    /// Check if this error rejects a caller-supplied engine argument.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidBatchSize { .. }
                | Self::InvalidThickness { .. }
                | Self::InvalidPosition { .. }
                | Self::InvalidAxis { .. }
        )
    }
}

impl From<serde_json::Error> for SimError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
