//! Velocity unit conversions.
//!
//! Trackers report velocity in device units per microsecond at the device's
//! native resolution. Profiles are written in physical units.

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Convert a per-microsecond velocity to per-second.
#[inline]
pub fn v_us_to_s(velocity: f64) -> f64 {
    velocity * 1_000_000.0
}

/// Convert a per-microsecond velocity to per-millisecond.
#[inline]
pub fn v_us_to_ms(velocity: f64) -> f64 {
    velocity * 1000.0
}

/// Convert device units/µs at `dpi` counts per inch to mm/s.
///
/// `dpi` must be non-zero; callers validate it once at filter creation.
#[inline]
pub fn device_velocity_to_mm_per_sec(velocity: f64, dpi: u32) -> f64 {
    v_us_to_s(velocity) * MM_PER_INCH / f64::from(dpi)
}
