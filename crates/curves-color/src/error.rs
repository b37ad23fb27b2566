//! Error types for color transformations.

use thiserror::Error;

/// Color transformation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Color space or buffer layout problem.
    #[error(transparent)]
    Core(#[from] curves_core::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
