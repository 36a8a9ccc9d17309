//! Natural cubic spline interpolation.
//!
//! [CubicSpline::fit] solves the tridiagonal system for the knots' second derivatives
//! (zero at both outer knots) and stores one cubic [SplineSegment] per interval.
//! [CubicSpline::evaluate] locates the segment containing a query and evaluates its cubic.
//!
//! # Example
//! ```
//! use natural_spline::{CubicSpline, Point};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let points = vec![
//!     Point::new(1.0, 2.0),
//!     Point::new(2.0, 3.0),
//!     Point::new(3.0, 5.0),
//!     Point::new(4.0, 7.0),
//!     Point::new(5.0, 11.0)
//! ];
//! let spline = CubicSpline::fit(&points).unwrap();
//!
//! assert_approx_eq!(2.386160714, spline.evaluate(1.5), 1e-6);
//! assert_approx_eq!(8.792410714, spline.evaluate(4.5), 1e-6);
//!
//! // below the first knot there is no segment
//! assert_eq!(0.0, spline.evaluate(0.0));
//! assert!(spline.try_evaluate(0.0).is_err());
//! ```

mod config;
mod error;
mod natural;
mod point;
mod segment;
mod spline;

pub use config::{SplineConfig, DEFAULT_MIN_SPACING};
pub use error::SplineError;
pub use point::Point;
pub use segment::SplineSegment;
pub use spline::CubicSpline;
