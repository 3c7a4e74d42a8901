//! Acceleration Curves for Touch-Surface Pointer Input
//!
//! This crate holds the numerical half of the glide acceleration engine:
//! the mapping from a physical pointer speed to a unitless acceleration
//! factor, and the mapping from a user speed preference to a baseline gain.
//!
//! # Overview
//!
//! - **[`PiecewiseLinearProfile`]**: ordered `(speed mm/s, factor)` table,
//!   clamped at both ends and linearly interpolated in between
//! - **[`CustomCurve`]**: editable table keyed on device units/ms, used by the
//!   device-speed strategy
//! - **[`speed_factor`]**: fitted rational curve taking a preference in
//!   `[-1, 1]` to a gain in roughly `(0.05, 5]`
//! - **[`units`]**: velocity unit conversions
//!
//! # Hot Path
//!
//! `PiecewiseLinearProfile::evaluate()` and `CustomCurve::evaluate()` do not
//! allocate and run in time linear in the (small, fixed) table size.
//! Construction validates the table and may allocate.
//!
//! # Example
//!
//! ```
//! use glide_curves::{ControlPoint, PiecewiseLinearProfile};
//!
//! let profile = PiecewiseLinearProfile::new(vec![
//!     ControlPoint::new(20.0, 0.05),
//!     ControlPoint::new(100.0, 1.0),
//! ])?;
//!
//! assert!((profile.evaluate(60.0) - 0.525).abs() < 1e-9);
//! assert!((profile.evaluate(5.0) - 0.05).abs() < 1e-9);
//! # Ok::<(), glide_errors::ProfileError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod custom;
pub mod piecewise;
pub mod prelude;
pub mod speed_curve;
pub mod units;

pub use custom::CustomCurve;
pub use piecewise::{ControlPoint, PiecewiseLinearProfile, interpolate};
pub use speed_curve::{SPEED_MAX, SPEED_MIN, speed_factor, validate_speed};
