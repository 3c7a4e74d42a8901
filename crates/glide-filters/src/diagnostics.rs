//! Optional per-event diagnostics.
//!
//! Filters never write anything on the evaluation path by themselves. A host
//! that wants to inspect the acceleration curve at work attaches a
//! [`DiagnosticSink`]; samples are only assembled while the sink reports
//! itself enabled.

use core::fmt;

/// One evaluated acceleration step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FactorSample {
    /// Event timestamp
    pub time_us: u64,
    /// Tracker velocity, device units/µs
    pub velocity: f64,
    /// Physical speed, for profiles keyed on mm/s
    pub speed_mm_per_sec: Option<f64>,
    /// Acceleration factor after smoothing
    pub factor: f64,
    /// Total gain applied to the delta (factor times speed factor)
    pub gain: f64,
}

/// Receiver for [`FactorSample`]s.
///
/// `record` is called on the evaluation path and must not block.
pub trait DiagnosticSink: Send + Sync + fmt::Debug {
    /// Whether samples should be produced at all.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Consume one sample.
    fn record(&self, sample: &FactorSample);
}

/// Forwards samples as `TRACE` events on the `glide::accel` target.
#[derive(Copy, Clone, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn is_enabled(&self) -> bool {
        tracing::enabled!(target: "glide::accel", tracing::Level::TRACE)
    }

    fn record(&self, sample: &FactorSample) {
        tracing::trace!(
            target: "glide::accel",
            time_us = sample.time_us,
            velocity = sample.velocity,
            speed_mm_per_sec = sample.speed_mm_per_sec,
            factor = sample.factor,
            gain = sample.gain,
            "acceleration factor"
        );
    }
}

/// Discards everything.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn is_enabled(&self) -> bool {
        false
    }

    fn record(&self, _sample: &FactorSample) {}
}
