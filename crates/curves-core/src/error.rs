//! Error types for curves-core operations.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::colorspace::ColorSpace`] - descriptor validation, pixel codec
//! - `curves-color` - wrapped in `ColorError::Core`
//! - `curves-filter` - mapped to `FilterError::InvalidColorSpace`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while describing or decoding color spaces.
#[derive(Debug, Error)]
pub enum Error {
    /// The color space descriptor is unusable.
    ///
    /// Returned by [`crate::ColorSpace::validate`] for empty channel lists,
    /// broken display orders, duplicated alpha channels or bad luma weights.
    ///
    /// ```rust
    /// use curves_core::Error;
    ///
    /// let err = Error::InvalidColorSpace("no channels".into());
    /// assert!(err.to_string().contains("no channels"));
    /// ```
    #[error("invalid color space: {0}")]
    InvalidColorSpace(String),

    /// Number of channel values does not match the color space.
    #[error("channel count mismatch: expected {expected}, got {actual}")]
    ChannelMismatch {
        /// Channels in the color space
        expected: usize,
        /// Channels supplied
        actual: usize,
    },

    /// Raw buffer size does not fit the pixel layout.
    #[error("buffer of {len} bytes is not a multiple of pixel size {pixel_size}")]
    BufferSize {
        /// Buffer length in bytes
        len: usize,
        /// Pixel size in bytes
        pixel_size: usize,
    },
}
