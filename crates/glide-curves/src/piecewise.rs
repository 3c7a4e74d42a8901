//! Piecewise-linear acceleration profile.
//!
//! An arbitrary acceleration curve is approximated by a short ordered table
//! of `(speed, factor)` control points. Below the first point the first factor
//! applies, above the last point the last factor applies, and in between the
//! factor is linearly interpolated between the two bracketing points.

use glide_errors::ProfileError;
use serde::{Deserialize, Serialize};

use crate::units::device_velocity_to_mm_per_sec;

/// One `(speed, factor)` entry of an acceleration table.
///
/// The unit of `speed` depends on the table that owns the point: mm/s for
/// [`PiecewiseLinearProfile`], device units/ms for [`crate::CustomCurve`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Input speed
    pub speed: f64,
    /// Unitless acceleration factor at `speed`
    pub factor: f64,
}

impl ControlPoint {
    /// Create a control point.
    pub const fn new(speed: f64, factor: f64) -> Self {
        Self { speed, factor }
    }
}

impl From<(f64, f64)> for ControlPoint {
    fn from((speed, factor): (f64, f64)) -> Self {
        Self { speed, factor }
    }
}

/// Evaluate an ordered control-point table at `x`.
///
/// - `x <= first.speed` (or NaN) returns the first factor
/// - `x >= last.speed` returns the last factor
/// - otherwise interpolates between the points with `s_i <= x < s_{i+1}`
///
/// Returns `None` for an empty table; a single point is a constant curve.
/// The table must already be sorted by strictly increasing speed.
#[inline]
pub fn interpolate(points: &[ControlPoint], x: f64) -> Option<f64> {
    let (first, last) = match points {
        [] => return None,
        [only] => return Some(only.factor),
        [first, .., last] => (first, last),
    };

    if x.is_nan() || x <= first.speed {
        return Some(first.factor);
    }
    if x >= last.speed {
        return Some(last.factor);
    }

    points
        .windows(2)
        .find_map(|pair| match pair {
            [lo, hi] if x < hi.speed => {
                Some(lo.factor + (hi.factor - lo.factor) * (x - lo.speed) / (hi.speed - lo.speed))
            }
            _ => None,
        })
        .or(Some(last.factor))
}

/// Check that a table is finite, strictly increasing in speed, with
/// non-negative factors, and holds at least `min_points` entries.
pub(crate) fn validate_table(points: &[ControlPoint], min_points: usize) -> Result<(), ProfileError> {
    if points.len() < min_points {
        return Err(ProfileError::TooFewPoints {
            count: points.len(),
            min: min_points,
        });
    }

    let mut previous: Option<f64> = None;
    for (index, point) in points.iter().enumerate() {
        if !point.speed.is_finite() || !point.factor.is_finite() {
            return Err(ProfileError::NonFinitePoint { index });
        }
        if point.factor < 0.0 {
            return Err(ProfileError::NegativeFactor {
                index,
                value: point.factor,
            });
        }
        match previous {
            Some(previous) if point.speed <= previous => {
                return Err(ProfileError::NotStrictlyIncreasing {
                    index,
                    previous,
                    current: point.speed,
                });
            }
            _ => {}
        }
        previous = Some(point.speed);
    }
    Ok(())
}

/// Velocity-to-factor profile over a validated control-point table in mm/s.
///
/// The table is immutable once built. Use [`PiecewiseLinearProfile::new`] to
/// inject a table from configuration, or
/// [`PiecewiseLinearProfile::touchpad_default`] for the stock touchpad curve.
///
/// # Example
///
/// ```
/// use glide_curves::PiecewiseLinearProfile;
///
/// let profile = PiecewiseLinearProfile::touchpad_default();
///
/// // 400 dpi touchpad moving at 60 mm/s
/// let velocity = 60.0 * 400.0 / 25.4 / 1_000_000.0;
/// let factor = profile.factor_for_velocity(velocity, 400);
/// assert!((factor - 0.525).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")]
pub struct PiecewiseLinearProfile {
    points: Vec<ControlPoint>,
}

impl PiecewiseLinearProfile {
    /// Minimum number of control points.
    pub const MIN_POINTS: usize = 2;

    /// Stock touchpad table: 5% gain up to 20 mm/s, ramping to unity at 100 mm/s.
    pub const TOUCHPAD_POINTS: [ControlPoint; 2] = [
        ControlPoint::new(20.0, 0.05),
        ControlPoint::new(100.0, 1.00),
    ];

    /// Build a profile from an ordered table.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the table has fewer than two points, is not
    /// strictly increasing in speed, contains a negative factor, or contains a
    /// non-finite value.
    pub fn new(points: impl Into<Vec<ControlPoint>>) -> Result<Self, ProfileError> {
        let points = points.into();
        validate_table(&points, Self::MIN_POINTS)?;
        Ok(Self { points })
    }

    /// The stock touchpad profile.
    pub fn touchpad_default() -> Self {
        Self {
            points: Self::TOUCHPAD_POINTS.to_vec(),
        }
    }

    /// The control points, ordered by speed.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Factor for a physical speed in mm/s.
    #[inline]
    pub fn evaluate(&self, speed_mm_per_sec: f64) -> f64 {
        interpolate(&self.points, speed_mm_per_sec).unwrap_or(1.0)
    }

    /// Factor for a tracker velocity in device units/µs on a `dpi` device.
    #[inline]
    pub fn factor_for_velocity(&self, velocity: f64, dpi: u32) -> f64 {
        self.evaluate(device_velocity_to_mm_per_sec(velocity, dpi))
    }

    /// Check whether factors never decrease with speed.
    pub fn is_monotonic(&self) -> bool {
        self.points
            .windows(2)
            .all(|pair| matches!(pair, [lo, hi] if hi.factor >= lo.factor))
    }
}

impl Default for PiecewiseLinearProfile {
    fn default() -> Self {
        Self::touchpad_default()
    }
}

impl TryFrom<Vec<ControlPoint>> for PiecewiseLinearProfile {
    type Error = ProfileError;

    fn try_from(points: Vec<ControlPoint>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<PiecewiseLinearProfile> for Vec<ControlPoint> {
    fn from(profile: PiecewiseLinearProfile) -> Self {
        profile.points
    }
}
