//! LUT and curve error types.

use thiserror::Error;

/// Result type for curve and table operations.
pub type LutResult<T> = Result<T, LutError>;

/// Errors that can occur while editing curves or building tables.
#[derive(Debug, Error)]
pub enum LutError {
    /// Curve violates its invariants (too few points, unordered or
    /// out-of-range coordinates).
    #[error("malformed curve: {0}")]
    MalformedCurve(String),

    /// Invalid table size.
    #[error("invalid table size: {0}")]
    InvalidSize(String),

    /// Parse error when reading the text form of a curve.
    #[error("parse error: {0}")]
    ParseError(String),
}
