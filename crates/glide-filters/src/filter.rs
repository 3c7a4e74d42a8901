//! The acceleration strategy interface.

use core::fmt;

use glide_errors::{AccelError, Result};
use glide_trackers::DeviceFloatCoords;
use serde::{Deserialize, Serialize};

use crate::coords::NormalizedCoords;

/// Available acceleration strategies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccelProfile {
    /// Piecewise-linear touchpad profile keyed on physical speed
    #[default]
    TouchpadPl,
    /// Host-defined curve keyed on raw device speed
    Custom,
}

impl AccelProfile {
    /// Configuration name of the profile.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TouchpadPl => "touchpad-pl",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for AccelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stateful pointer-acceleration filter bound to one device.
///
/// Calls against one instance must be serialized by the host. Dropping the
/// filter releases its tracker state.
pub trait MotionFilter: Send + fmt::Debug {
    /// Which strategy this is.
    fn profile(&self) -> AccelProfile;

    /// Accelerate a device-space delta observed at `time_us`.
    fn filter(&mut self, delta: DeviceFloatCoords, time_us: u64) -> NormalizedCoords;

    /// Scale a delta without acceleration, ignoring velocity history.
    fn filter_constant(&self, delta: DeviceFloatCoords, time_us: u64) -> NormalizedCoords;

    /// Clear velocity history; configuration is kept.
    fn restart(&mut self, time_us: u64);

    /// Apply a speed preference in `[-1, 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::PreconditionViolated`] if `preference` is
    /// outside `[-1, 1]` or not finite. The filter is left unchanged.
    fn set_speed(&mut self, preference: f64) -> Result<()>;

    /// The last accepted speed preference.
    fn speed_adjustment(&self) -> f64;

    /// Set a point on a host-editable curve.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Unsupported`] unless the strategy has an
    /// editable curve.
    fn set_curve_point(&mut self, _speed: f64, _factor: f64) -> Result<()> {
        Err(AccelError::unsupported(
            "set_curve_point",
            self.profile().as_str(),
        ))
    }
}
