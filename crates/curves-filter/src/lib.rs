//! # curves-filter
//!
//! Per-channel curve color adjustment.
//!
//! The filter stores one curve per *virtual channel* of a color space: every
//! physical channel plus synthesized Hue, Saturation, Lightness and All
//! Colors channels where the model supports them. Building the filter turns
//! the non-identity curves into lookup tables and composes them into one
//! transform.
//!
//! ```text
//! FilterConfiguration --reconcile--> curves (one per catalog entry)
//!        |                                 |
//!  virtual_channels(cs)                 compose
//!                                          |
//!                               ChannelTransforms (<= 5)
//!                                          |
//!                          CompositeTransform::optimized
//! ```
//!
//! # Example
//!
//! ```rust
//! use curves_core::ColorSpace;
//! use curves_filter::{compose, virtual_channels, FilterConfiguration};
//! use curves_lut::Curve;
//!
//! let cs = ColorSpace::rgba8();
//! let catalog = virtual_channels(&cs);
//!
//! let mut config = FilterConfiguration::new(catalog.len());
//! config.set_curve(4, "0,0.5;1,1;".parse::<Curve>().unwrap()).unwrap(); // Hue
//!
//! let transforms = compose(&config, &cs).unwrap();
//! assert_eq!(transforms.count(), 1);
//! assert_eq!(transforms.into_composite().len(), 1);
//! ```
//!
//! # Dependencies
//!
//! - [`curves-core`] - Color spaces
//! - [`curves-lut`] - Curves and transfer tables
//! - [`curves-color`] - Transformations and composite
//! - [`serde`], [`serde_yaml`], [`serde_json`] - Configuration documents
//! - [`tracing`] - Diagnostics
//!
//! # Features
//!
//! - `parallel` (default) - parallel buffer processing in `curves-color`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod compose;
pub mod config;
mod error;
mod filter;

pub use catalog::{virtual_channels, VirtualChannelInfo, VirtualChannelType};
pub use compose::{compose, ChannelTransforms};
pub use config::{FilterConfiguration, CONFIG_VERSION, FILTER_ID, MAX_CURVES};
pub use error::{FilterError, FilterResult};
pub use filter::PerChannelFilter;
