//! Error types for the per-channel filter.
//!
//! # Used By
//!
//! - [`crate::FilterConfiguration`] - reconciliation and persistence
//! - [`crate::compose`] - transform composition
//! - [`crate::PerChannelFilter`] - facade

use thiserror::Error;

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while configuring or building the filter.
#[derive(Debug, Error)]
pub enum FilterError {
    /// Stored curve count differs from the color space's virtual channels.
    #[error("curve count mismatch: color space has {expected} channels, configuration has {got}")]
    ChannelCountMismatch {
        /// Virtual channels of the color space.
        expected: usize,
        /// Curves in the configuration.
        got: usize,
    },

    /// The color space descriptor is unusable.
    #[error("invalid color space: {0}")]
    InvalidColorSpace(#[from] curves_core::Error),

    /// A curve violates its invariants.
    #[error(transparent)]
    MalformedCurve(#[from] curves_lut::LutError),

    /// Transformation failed.
    #[error(transparent)]
    Color(#[from] curves_color::ColorError),

    /// Document structure or format problem.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// YAML parsing error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading or writing a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
