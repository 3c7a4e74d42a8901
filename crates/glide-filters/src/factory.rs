//! Strategy selection from configuration.

use std::sync::Arc;

use glide_errors::Result;
use tracing::debug;

use crate::config::AccelConfig;
use crate::custom::CustomAccelerator;
use crate::diagnostics::DiagnosticSink;
use crate::filter::{AccelProfile, MotionFilter};
use crate::touchpad::TouchpadAccelerator;

/// Build the filter `config` describes, with its speed preference applied.
///
/// # Errors
///
/// Returns the validation error if `config` is invalid.
///
/// # Example
///
/// ```
/// use glide_filters::{AccelConfig, AccelProfile, create_filter};
///
/// let config = AccelConfig { dpi: 400, ..AccelConfig::default() };
/// let filter = create_filter(&config)?;
/// assert_eq!(filter.profile(), AccelProfile::TouchpadPl);
/// # Ok::<(), glide_errors::AccelError>(())
/// ```
pub fn create_filter(config: &AccelConfig) -> Result<Box<dyn MotionFilter>> {
    build(config, None)
}

/// Like [`create_filter`], with a diagnostic sink attached.
///
/// # Errors
///
/// Returns the validation error if `config` is invalid.
pub fn create_filter_with_diagnostics(
    config: &AccelConfig,
    sink: Arc<dyn DiagnosticSink>,
) -> Result<Box<dyn MotionFilter>> {
    build(config, Some(sink))
}

fn build(config: &AccelConfig, sink: Option<Arc<dyn DiagnosticSink>>) -> Result<Box<dyn MotionFilter>> {
    config.validate()?;

    let mut filter: Box<dyn MotionFilter> = match config.profile {
        AccelProfile::TouchpadPl => {
            let mut filter = TouchpadAccelerator::create(
                config.dpi,
                config.smoothing,
                config.use_velocity_averaging,
            )?
            .with_profile(config.touchpad_profile()?)
            .with_smoother(config.smoother);
            if let Some(sink) = sink {
                filter = filter.with_diagnostics(sink);
            }
            Box::new(filter)
        }
        AccelProfile::Custom => {
            let mut filter = CustomAccelerator::new()
                .with_curve(config.custom_curve()?)
                .with_smoother(config.smoother);
            if let Some(sink) = sink {
                filter = filter.with_diagnostics(sink);
            }
            Box::new(filter)
        }
    };

    filter.set_speed(config.speed)?;
    debug!(profile = %config.profile, speed = config.speed, "built acceleration filter");
    Ok(filter)
}
