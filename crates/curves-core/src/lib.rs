//! # curves-core
//!
//! Core types for per-channel curve color adjustment.
//!
//! This crate provides the foundational types used throughout the curves-rs
//! workspace:
//!
//! - [`ChannelValueType`] - Numeric storage kind of a single channel
//! - [`ChannelInfo`] - One physical channel of a color space
//! - [`ColorSpace`] - Immutable color space descriptor (channels, display
//!   order, luma coefficients)
//! - [`RgbLayout`] - How to read/write RGB triplets from a pixel of a space
//!
//! ## Design
//!
//! A color space is plain data. Every other crate treats it as immutable
//! input: the virtual channel catalog, the transfer table builder and the
//! transform composer are all pure functions of a `ColorSpace` plus a
//! configuration.
//!
//! Pixels are processed as normalized `f32` values, one per channel, in the
//! space's memory order. [`ColorSpace::decode_pixel`] and
//! [`ColorSpace::encode_pixel`] convert raw channel bytes to and from that
//! form.
//!
//! ```
//! use curves_core::ColorSpace;
//!
//! let cs = ColorSpace::bgra8();
//! let mut px = [0.0_f32; 4];
//! cs.decode_pixel(&[0, 128, 255, 255], &mut px).unwrap();
//! assert_eq!(px[2], 1.0); // red lives at memory index 2
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! curves-core (this crate)
//!    ^
//!    +-- curves-lut (curves, transfer tables)
//!    +-- curves-color (transformations, composite)
//!    +-- curves-filter (catalog, configuration, composer)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod colorspace;
pub mod error;
pub mod format;
pub mod pixel;

pub use colorspace::{ChannelInfo, ChannelRole, ColorModel, ColorSpace, RgbLayout};
pub use error::{Error, Result};
pub use format::ChannelValueType;
pub use pixel::{luma, REC709_LUMA};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::colorspace::{ChannelInfo, ChannelRole, ColorModel, ColorSpace, RgbLayout};
    pub use crate::error::{Error, Result};
    pub use crate::format::ChannelValueType;
    pub use crate::pixel::{luma, REC709_LUMA};
}
