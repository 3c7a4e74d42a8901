//! Prelude for the curves crate.
//!
//! ```
//! use glide_curves::prelude::*;
//!
//! let profile = PiecewiseLinearProfile::touchpad_default();
//! let gain = speed_factor(0.0)?;
//! assert!(profile.evaluate(100.0) * gain > 0.9);
//! # Ok::<(), glide_errors::ValidationError>(())
//! ```

pub use crate::custom::CustomCurve;
pub use crate::piecewise::{ControlPoint, PiecewiseLinearProfile, interpolate};
pub use crate::speed_curve::{speed_factor, validate_speed};
pub use crate::units::{device_velocity_to_mm_per_sec, v_us_to_ms, v_us_to_s};
