//! Touchpad Pointer Acceleration Filters
//!
//! This crate turns raw touchpad motion into pointer motion:
//!
//! - **[`TouchpadAccelerator`]**: piecewise-linear profile keyed on physical
//!   speed, scaled by the user's speed preference and normalized to the
//!   1000 DPI reference resolution
//! - **[`CustomAccelerator`]**: host-editable curve keyed on raw device speed
//! - **[`create_filter`]**: picks a strategy from an [`AccelConfig`]
//!
//! Every strategy implements [`MotionFilter`]. A filter instance belongs to
//! one device and is not shared; the host serializes calls on it.
//!
//! # Evaluation Path
//!
//! [`MotionFilter::filter`] and [`MotionFilter::filter_constant`] do not
//! allocate, log or fail. Diagnostics are opt-in through a
//! [`DiagnosticSink`].
//!
//! # Example
//!
//! ```
//! use glide_filters::prelude::*;
//!
//! let mut filter = create_filter(&AccelConfig { dpi: 400, ..AccelConfig::default() })?;
//! filter.restart(0);
//!
//! let slow = filter.filter(DeviceFloatCoords::new(1.0, 0.0), 10_000);
//! let flat = filter.filter_constant(DeviceFloatCoords::new(1.0, 0.0), 10_000);
//! assert!(slow.x > 0.0 && flat.x > 0.0);
//! # Ok::<(), glide_errors::AccelError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod coords;
pub mod custom;
pub mod diagnostics;
pub mod factory;
pub mod filter;
pub mod prelude;
pub mod touchpad;

pub use config::AccelConfig;
pub use coords::{DEFAULT_MOUSE_DPI, DpiNormalizer, IdentityNormalizer, NormalizedCoords, Normalizer};
pub use custom::CustomAccelerator;
pub use diagnostics::{DiagnosticSink, FactorSample, NullSink, TracingSink};
pub use factory::{create_filter, create_filter_with_diagnostics};
pub use filter::{AccelProfile, MotionFilter};
pub use touchpad::{
    CONSTANT_BASELINE, CONSTANT_GAIN, DEFAULT_THRESHOLD_MM_PER_SEC, TP_MAGIC_SLOWDOWN,
    TouchpadAccelerator,
};
