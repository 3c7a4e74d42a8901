//! Host-defined device-speed acceleration.
//!
//! The curve is keyed on raw device speed (units/ms) with no resolution
//! conversion, and output is not normalized: the host's curve is trusted to
//! already produce the deltas it wants.

use std::sync::Arc;

use glide_curves::{CustomCurve, validate_speed};
use glide_errors::{AccelError, Result};
use glide_trackers::{DeviceFloatCoords, FactorSmoother, PointerTrackers, VelocityTracker};
use tracing::{debug, warn};

use crate::coords::{IdentityNormalizer, NormalizedCoords, Normalizer};
use crate::diagnostics::{DiagnosticSink, FactorSample};
use crate::filter::{AccelProfile, MotionFilter};

/// Device-speed curve accelerator.
#[derive(Debug)]
pub struct CustomAccelerator<T = PointerTrackers> {
    trackers: T,
    curve: CustomCurve,
    smoother: FactorSmoother,
    sink: Option<Arc<dyn DiagnosticSink>>,
    last_velocity: f64,
    speed_adjustment: f64,
}

impl CustomAccelerator<PointerTrackers> {
    /// Create an accelerator with an empty (identity) curve.
    pub fn new() -> Self {
        let filter = Self::with_tracker(PointerTrackers::new(PointerTrackers::MINIMAL_HISTORY));
        debug!("created custom accelerator");
        filter
    }
}

impl Default for CustomAccelerator<PointerTrackers> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: VelocityTracker> CustomAccelerator<T> {
    /// Create an accelerator around an existing velocity source.
    pub fn with_tracker(trackers: T) -> Self {
        Self {
            trackers,
            curve: CustomCurve::new(),
            smoother: FactorSmoother::Simpsons,
            sink: None,
            last_velocity: 0.0,
            speed_adjustment: 0.0,
        }
    }

    /// Replace the curve.
    #[must_use]
    pub fn with_curve(mut self, curve: CustomCurve) -> Self {
        self.curve = curve;
        self
    }

    /// Choose how factors are smoothed between events.
    #[must_use]
    pub fn with_smoother(mut self, smoother: FactorSmoother) -> Self {
        self.smoother = smoother;
        self
    }

    /// Attach a diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// The curve.
    pub fn curve(&self) -> &CustomCurve {
        &self.curve
    }

    /// Velocity of the last accelerated event, device units/µs.
    pub fn last_velocity(&self) -> f64 {
        self.last_velocity
    }

    /// The velocity source.
    pub fn tracker(&self) -> &T {
        &self.trackers
    }
}

impl<T: VelocityTracker + std::fmt::Debug> MotionFilter for CustomAccelerator<T> {
    fn profile(&self) -> AccelProfile {
        AccelProfile::Custom
    }

    fn filter(&mut self, delta: DeviceFloatCoords, time_us: u64) -> NormalizedCoords {
        self.trackers.feed(delta, time_us);
        let velocity = self.trackers.velocity(time_us);

        let curve = &self.curve;
        let factor = self.smoother.apply(
            |v| curve.factor_for_velocity(v),
            velocity,
            self.last_velocity,
        );
        self.last_velocity = velocity;

        if let Some(sink) = self.sink.as_deref().filter(|sink| sink.is_enabled()) {
            sink.record(&FactorSample {
                time_us,
                velocity,
                speed_mm_per_sec: None,
                factor,
                gain: factor,
            });
        }

        IdentityNormalizer.normalize(delta.scaled(factor))
    }

    fn filter_constant(&self, delta: DeviceFloatCoords, _time_us: u64) -> NormalizedCoords {
        IdentityNormalizer.normalize(delta)
    }

    fn restart(&mut self, time_us: u64) {
        self.trackers.reset(time_us);
        self.last_velocity = 0.0;
        debug!(time_us, "restarted custom accelerator");
    }

    fn set_speed(&mut self, preference: f64) -> Result<()> {
        // The curve alone decides the gain; only the contract is checked.
        self.speed_adjustment = validate_speed(preference).map_err(|err| {
            warn!(preference, %err, "rejecting speed preference");
            AccelError::from(err)
        })?;
        Ok(())
    }

    fn speed_adjustment(&self) -> f64 {
        self.speed_adjustment
    }

    fn set_curve_point(&mut self, speed: f64, factor: f64) -> Result<()> {
        self.curve.set_point(speed, factor).map_err(|err| {
            warn!(speed, factor, %err, "rejecting curve point");
            AccelError::from(err)
        })?;
        debug!(
            speed,
            factor,
            points = self.curve.len(),
            "set custom curve point"
        );
        Ok(())
    }
}

impl<T> Drop for CustomAccelerator<T> {
    fn drop(&mut self) {
        debug!(points = self.curve.len(), "destroying custom accelerator");
    }
}
