//! Editable device-speed curve.
//!
//! Unlike [`crate::PiecewiseLinearProfile`], this table is keyed on raw device
//! speed (device units per millisecond, no DPI conversion) and is built one
//! point at a time by the host.

use glide_errors::ProfileError;
use serde::{Deserialize, Serialize};

use crate::piecewise::{ControlPoint, interpolate};
use crate::units::v_us_to_ms;

/// Control-point table for the device-speed strategy.
///
/// An empty curve is the identity (factor `1.0`). Points are kept sorted by
/// speed; setting a point at an existing speed replaces its factor.
///
/// # Example
///
/// ```
/// use glide_curves::CustomCurve;
///
/// let mut curve = CustomCurve::new();
/// curve.set_point(10.0, 2.0)?;
/// curve.set_point(0.0, 1.0)?;
///
/// assert!((curve.evaluate(5.0) - 1.5).abs() < 1e-9);
/// # Ok::<(), glide_errors::ProfileError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ControlPoint>", into = "Vec<ControlPoint>")]
pub struct CustomCurve {
    points: Vec<ControlPoint>,
}

impl CustomCurve {
    /// Maximum number of points in the table.
    pub const MAX_POINTS: usize = 32;

    /// Highest accepted speed, in device units/ms.
    pub const MAX_SPEED: f64 = 50_000.0;

    /// Create an empty (identity) curve.
    pub fn new() -> Self {
        Self {
            points: Vec::with_capacity(Self::MAX_POINTS),
        }
    }

    /// Build a curve by setting each point in turn.
    ///
    /// # Errors
    ///
    /// Fails on the first point [`CustomCurve::set_point`] rejects.
    pub fn from_points<I>(points: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = ControlPoint>,
    {
        let mut curve = Self::new();
        for point in points {
            curve.set_point(point.speed, point.factor)?;
        }
        Ok(curve)
    }

    /// Set the factor at `speed` (device units/ms).
    ///
    /// # Errors
    ///
    /// - [`ProfileError::NonFinitePoint`] if either value is NaN or infinite
    /// - [`ProfileError::SpeedOutOfRange`] if `speed` is outside `[0, 50000]`
    /// - [`ProfileError::NegativeFactor`] if `factor < 0`
    /// - [`ProfileError::TooManyPoints`] if the table is already full
    pub fn set_point(&mut self, speed: f64, factor: f64) -> Result<(), ProfileError> {
        let len = self.points.len();
        if len >= Self::MAX_POINTS {
            return Err(ProfileError::TooManyPoints {
                max: Self::MAX_POINTS,
            });
        }
        if !speed.is_finite() || !factor.is_finite() {
            return Err(ProfileError::NonFinitePoint { index: len });
        }
        if !(0.0..=Self::MAX_SPEED).contains(&speed) {
            return Err(ProfileError::SpeedOutOfRange {
                value: speed,
                min: 0.0,
                max: Self::MAX_SPEED,
            });
        }

        let slot = self
            .points
            .binary_search_by(|point| point.speed.total_cmp(&speed));
        let (Ok(index) | Err(index)) = slot;
        if factor < 0.0 {
            return Err(ProfileError::NegativeFactor {
                index,
                value: factor,
            });
        }

        match slot {
            Ok(_) => {
                if let Some(point) = self.points.get_mut(index) {
                    point.factor = factor;
                }
            }
            Err(_) => self.points.insert(index, ControlPoint::new(speed, factor)),
        }
        Ok(())
    }

    /// The control points, ordered by speed.
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Number of points in the table.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table is empty (identity curve).
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Factor for a device speed in units/ms.
    #[inline]
    pub fn evaluate(&self, speed_units_per_ms: f64) -> f64 {
        interpolate(&self.points, speed_units_per_ms).unwrap_or(1.0)
    }

    /// Factor for a tracker velocity in device units/µs.
    #[inline]
    pub fn factor_for_velocity(&self, velocity: f64) -> f64 {
        self.evaluate(v_us_to_ms(velocity))
    }
}

impl TryFrom<Vec<ControlPoint>> for CustomCurve {
    type Error = ProfileError;

    fn try_from(points: Vec<ControlPoint>) -> Result<Self, Self::Error> {
        Self::from_points(points)
    }
}

impl From<CustomCurve> for Vec<ControlPoint> {
    fn from(curve: CustomCurve) -> Self {
        curve.points
    }
}
