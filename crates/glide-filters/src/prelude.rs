//! Prelude for common imports.
//!
//! ```
//! use glide_filters::prelude::*;
//! ```

pub use crate::config::AccelConfig;
pub use crate::coords::{DEFAULT_MOUSE_DPI, DpiNormalizer, NormalizedCoords, Normalizer};
pub use crate::custom::CustomAccelerator;
pub use crate::diagnostics::{DiagnosticSink, FactorSample, NullSink, TracingSink};
pub use crate::factory::{create_filter, create_filter_with_diagnostics};
pub use crate::filter::{AccelProfile, MotionFilter};
pub use crate::touchpad::{CONSTANT_GAIN, TouchpadAccelerator};

pub use glide_errors::{AccelError, Result};
pub use glide_trackers::{DeltaSmoothener, DeviceFloatCoords, FactorSmoother};
