//! User-editable tone curves.
//!
//! A [`Curve`] maps a normalized input in `[0, 1]` to a normalized output
//! through a smooth interpolant of its control points.
//!
//! # Algorithm
//!
//! Curves use monotone piecewise cubic Hermite interpolation:
//!
//! 1. **Control Points**: user specifies `(x, y)` points, x non-decreasing
//! 2. **Slope Estimation**: interior slopes are the weighted harmonic mean of
//!    the adjacent secants, zero at local extrema; end slopes equal the end
//!    secants
//! 3. **Evaluation**: Hermite basis on the containing segment; inputs outside
//!    the first/last point clamp to the end values
//!
//! Harmonic-mean slopes never overshoot the data, so a curve whose points are
//! monotone stays monotone and a curve whose points lie in `[0, 1]` evaluates
//! into `[0, 1]`.
//!
//! # Example
//!
//! ```
//! use curves_lut::{ControlPoint, Curve};
//!
//! let curve = Curve::new(vec![
//!     ControlPoint::new(0.0, 0.0),
//!     ControlPoint::new(0.25, 0.15),
//!     ControlPoint::new(0.75, 0.85),
//!     ControlPoint::new(1.0, 1.0),
//! ]).unwrap();
//!
//! assert!(!curve.is_null());
//! assert!(curve.evaluate(0.25) < 0.25);
//! ```
//!
//! # Text form
//!
//! Curves print as `"x,y;x,y;"` and parse back from the same form:
//!
//! ```
//! use curves_lut::Curve;
//!
//! let curve: Curve = "0,0;0.5,0.25;1,1;".parse().unwrap();
//! assert_eq!(curve.to_string(), "0,0;0.5,0.25;1,1;");
//! ```

mod eval;
mod slopes;
mod text;
mod types;

pub use types::{ControlPoint, Curve};
