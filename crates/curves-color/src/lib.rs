//! # curves-color
//!
//! Pixel transformations driven by curve tables.
//!
//! - [`ChannelLut`] - Per-channel lookup tables, chained per memory position
//! - [`HsyCurve`] - Hue or saturation curve in the HSY model
//! - [`LightnessCurve`] - Luma curve applied as an additive shift
//! - [`CompositeTransform`] - Ordered, optimized sequence of the above
//! - [`PixelProcessor`] - Runs a composite over raw or normalized buffers
//!
//! # Architecture
//!
//! ```text
//!          curves-color
//!               |
//!       +-------+-------+
//!       |               |
//!   curves-lut          |
//!       |               |
//!       +-------+-------+
//!               |
//!          curves-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use curves_color::{ChannelLut, CompositeTransform};
//! use curves_core::{ChannelValueType, ColorSpace};
//! use curves_lut::{ControlPoint, Curve, TransferDomain, TransferTable};
//!
//! let space = ColorSpace::rgba8();
//! let curve = Curve::new(vec![
//!     ControlPoint::new(0.0, 0.0),
//!     ControlPoint::new(0.5, 0.25),
//!     ControlPoint::new(1.0, 1.0),
//! ]).unwrap();
//! let table = TransferTable::build(&curve, &TransferDomain::for_value_type(ChannelValueType::U8));
//!
//! // Darken the color channels, leave alpha alone
//! let lut = ChannelLut::shared(space.channel_count(), &space.color_channels(), table);
//! let composite = CompositeTransform::optimized([None, Some(lut.into()), None, None, None]);
//!
//! let mut px = [0.5, 0.5, 0.5, 0.5];
//! composite.apply(&mut px);
//! assert!(px[0] < 0.3);
//! assert_eq!(px[3], 0.5);
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - split buffers across rayon workers
//!
//! # Dependencies
//!
//! - [`curves-core`] - Color space descriptors, luma
//! - [`curves-lut`] - Transfer tables
//! - [`rayon`] - Parallel buffer processing (optional)
//! - [`tracing`] - Stage elision and processing diagnostics
//!
//! # Used By
//!
//! - `curves-filter` - Transform composer and filter facade

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod composite;
mod error;
pub mod hsy;
pub mod processor;
pub mod transform;

pub use composite::{CompositeTransform, STAGE_ORDER};
pub use error::{ColorError, ColorResult};
pub use processor::PixelProcessor;
pub use transform::{ChannelLut, ColorTransform, HsyComponent, HsyCurve, LightnessCurve};
