//! Piecewise-linear touchpad acceleration.
//!
//! The tracker's velocity is converted to mm/s using the device resolution
//! and looked up in a [`PiecewiseLinearProfile`], smoothed against the
//! previous event's velocity. The resulting factor, times the gain derived
//! from the user's speed preference, scales the delta isotropically before it
//! is normalized to the reference resolution.

use std::sync::Arc;

use glide_curves::{PiecewiseLinearProfile, speed_factor, units::device_velocity_to_mm_per_sec};
use glide_errors::{AccelError, Result, ValidationError};
use glide_trackers::{
    DeltaSmoothener, DeviceFloatCoords, FactorSmoother, PointerTrackers, VelocityTracker,
};
use tracing::{debug, warn};

use crate::coords::{DpiNormalizer, NormalizedCoords, Normalizer};
use crate::diagnostics::{DiagnosticSink, FactorSample};
use crate::filter::{AccelProfile, MotionFilter};

/// Slow-down applied to touchpad motion once normalized, so that it feels
/// comparable to a mouse at the same physical speed.
pub const TP_MAGIC_SLOWDOWN: f64 = 0.2968;

/// Plateau gain of the accelerated path, reused for the flat path.
pub const CONSTANT_BASELINE: f64 = 0.9;

/// Gain of [`MotionFilter::filter_constant`].
pub const CONSTANT_GAIN: f64 = CONSTANT_BASELINE * TP_MAGIC_SLOWDOWN;

/// Acceleration threshold reserved for profile variants, mm/s.
pub const DEFAULT_THRESHOLD_MM_PER_SEC: f64 = 130.0;

/// Touchpad pointer accelerator.
///
/// Generic over the velocity source so hosts and tests can substitute their
/// own; [`TouchpadAccelerator::create`] builds the stock ring tracker.
///
/// # Example
///
/// ```
/// use glide_filters::prelude::*;
///
/// let mut filter = TouchpadAccelerator::create(400, DeltaSmoothener::default(), false)?;
/// filter.set_speed(0.25)?;
///
/// let out = filter.filter(DeviceFloatCoords::new(4.0, 0.0), 10_000);
/// assert!(out.x > 0.0);
/// assert_eq!(out.y, 0.0);
/// # Ok::<(), glide_errors::AccelError>(())
/// ```
#[derive(Debug)]
pub struct TouchpadAccelerator<T = PointerTrackers> {
    trackers: T,
    profile: PiecewiseLinearProfile,
    smoother: FactorSmoother,
    normalizer: Box<dyn Normalizer>,
    sink: Option<Arc<dyn DiagnosticSink>>,

    dpi: u32,
    velocity: f64,
    last_velocity: f64,
    speed_adjustment: f64,
    speed_factor: f64,

    threshold_mm_per_sec: f64,
    accel: f64,
}

impl TouchpadAccelerator<PointerTrackers> {
    /// Create an accelerator for a `dpi` device.
    ///
    /// The tracker keeps 16 samples of history when `use_averaging` is set and
    /// two otherwise. `smoothing` replaces implausibly short time deltas; pass
    /// [`DeltaSmoothener::default`] to disable it.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::PreconditionViolated`] if `dpi` is zero or the
    /// smoothener is active with a zero replacement value.
    pub fn create(dpi: u32, smoothing: DeltaSmoothener, use_averaging: bool) -> Result<Self> {
        if !smoothing.is_valid() {
            warn!(
                threshold_us = smoothing.threshold_us,
                "rejecting delta smoothener without replacement value"
            );
            return Err(ValidationError::constraint(
                "smoothing value must be > 0 when a threshold is set",
            )
            .into());
        }

        let trackers = PointerTrackers::with_averaging(use_averaging).with_smoothener(smoothing);
        let filter = Self::with_tracker(dpi, trackers)?;
        debug!(
            dpi,
            history = filter.trackers.capacity(),
            smoothing_threshold_us = smoothing.threshold_us,
            smoothing_value_us = smoothing.value_us,
            "created touchpad accelerator"
        );
        Ok(filter)
    }
}

impl<T: VelocityTracker> TouchpadAccelerator<T> {
    /// Create an accelerator around an existing velocity source.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::PreconditionViolated`] if `dpi` is zero.
    pub fn with_tracker(dpi: u32, trackers: T) -> Result<Self> {
        let normalizer = DpiNormalizer::new(dpi)?;
        Ok(Self {
            trackers,
            profile: PiecewiseLinearProfile::touchpad_default(),
            smoother: FactorSmoother::default(),
            normalizer: Box::new(normalizer),
            sink: None,
            dpi,
            velocity: 0.0,
            last_velocity: 0.0,
            speed_adjustment: 0.0,
            speed_factor: speed_factor(0.0)?,
            threshold_mm_per_sec: DEFAULT_THRESHOLD_MM_PER_SEC,
            accel: 0.0,
        })
    }

    /// Replace the control-point table.
    #[must_use]
    pub fn with_profile(mut self, profile: PiecewiseLinearProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Choose how factors are smoothed between events.
    #[must_use]
    pub fn with_smoother(mut self, smoother: FactorSmoother) -> Self {
        self.smoother = smoother;
        self
    }

    /// Replace the DPI normalizer.
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Box<dyn Normalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Attach a diagnostic sink.
    #[must_use]
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Device resolution.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    /// Velocity of the last accelerated event, device units/µs.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Velocity of the event before that.
    pub fn last_velocity(&self) -> f64 {
        self.last_velocity
    }

    /// Gain derived from the current speed preference.
    pub fn speed_factor(&self) -> f64 {
        self.speed_factor
    }

    /// The control-point table.
    pub fn profile_curve(&self) -> &PiecewiseLinearProfile {
        &self.profile
    }

    /// The factor smoother in use.
    pub fn smoother(&self) -> FactorSmoother {
        self.smoother
    }

    /// Reserved threshold, mm/s.
    pub fn threshold_mm_per_sec(&self) -> f64 {
        self.threshold_mm_per_sec
    }

    /// Reserved acceleration tunable.
    pub fn accel(&self) -> f64 {
        self.accel
    }

    /// The velocity source.
    pub fn tracker(&self) -> &T {
        &self.trackers
    }

    /// Factor for the current velocity, smoothed against the previous one.
    pub fn acceleration_factor(&self) -> f64 {
        let profile = &self.profile;
        let dpi = self.dpi;
        self.smoother.apply(
            |velocity| profile.factor_for_velocity(velocity, dpi),
            self.velocity,
            self.last_velocity,
        )
    }

    fn record(&self, time_us: u64, factor: f64, gain: f64) {
        let Some(sink) = self.sink.as_deref() else {
            return;
        };
        if !sink.is_enabled() {
            return;
        }
        sink.record(&FactorSample {
            time_us,
            velocity: self.velocity,
            speed_mm_per_sec: Some(device_velocity_to_mm_per_sec(self.velocity, self.dpi)),
            factor,
            gain,
        });
    }
}

impl<T: VelocityTracker + std::fmt::Debug> MotionFilter for TouchpadAccelerator<T> {
    fn profile(&self) -> AccelProfile {
        AccelProfile::TouchpadPl
    }

    fn filter(&mut self, delta: DeviceFloatCoords, time_us: u64) -> NormalizedCoords {
        self.trackers.feed(delta, time_us);
        self.velocity = self.trackers.velocity(time_us);

        let factor = self.acceleration_factor();
        let gain = factor * self.speed_factor;
        self.record(time_us, factor, gain);
        self.last_velocity = self.velocity;

        self.normalizer.normalize(delta.scaled(gain))
    }

    fn filter_constant(&self, delta: DeviceFloatCoords, _time_us: u64) -> NormalizedCoords {
        self.normalizer.normalize(delta).scaled(CONSTANT_GAIN)
    }

    fn restart(&mut self, time_us: u64) {
        self.trackers.reset(time_us);
        self.velocity = 0.0;
        self.last_velocity = 0.0;
        debug!(time_us, "restarted touchpad accelerator");
    }

    fn set_speed(&mut self, preference: f64) -> Result<()> {
        let factor = speed_factor(preference).map_err(|err| {
            warn!(preference, %err, "rejecting speed preference");
            AccelError::from(err)
        })?;

        self.speed_adjustment = preference;
        self.speed_factor = factor;
        debug!(preference, speed_factor = factor, "applied speed preference");
        Ok(())
    }

    fn speed_adjustment(&self) -> f64 {
        self.speed_adjustment
    }
}

impl<T> Drop for TouchpadAccelerator<T> {
    fn drop(&mut self) {
        debug!(dpi = self.dpi, "destroying touchpad accelerator");
    }
}
