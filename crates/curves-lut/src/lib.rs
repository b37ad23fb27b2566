//! # curves-lut
//!
//! Editable tone curves and the transfer tables built from them.
//!
//! # Types
//!
//! - [`Curve`] - Monotone cubic curve through user control points
//! - [`TransferDomain`] - Editing domain of a channel's numeric kind
//! - [`TransferTable`] - Dense lookup table sampled from a curve
//!
//! # Usage
//!
//! ```rust
//! use curves_core::ChannelValueType;
//! use curves_lut::{ControlPoint, Curve, TransferDomain, TransferTable};
//!
//! let curve = Curve::new(vec![
//!     ControlPoint::new(0.0, 0.0),
//!     ControlPoint::new(0.5, 0.25),
//!     ControlPoint::new(1.0, 1.0),
//! ]).unwrap();
//!
//! let domain = TransferDomain::for_value_type(ChannelValueType::U8);
//! let table = TransferTable::build(&curve, &domain);
//! assert_eq!(table.len(), 256);
//! assert!(table.apply(0.5) < 0.3);
//! ```
//!
//! Identity curves never need a table: check [`Curve::is_null`] first, or
//! use [`TransferTable::build_checked`].
//!
//! # Dependencies
//!
//! - [`curves-core`] - Channel value types
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `curves-color` - Table-driven transformations
//! - `curves-filter` - Configuration store and composer

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod curve;
mod domain;
mod error;
mod table;

pub use curve::{ControlPoint, Curve};
pub use domain::{TransferDomain, MAX_TABLE_LEN};
pub use error::{LutError, LutResult};
pub use table::TransferTable;
