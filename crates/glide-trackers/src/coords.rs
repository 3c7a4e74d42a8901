//! Device-space motion deltas.

use serde::{Deserialize, Serialize};

/// A motion delta in device units at the device's native resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceFloatCoords {
    /// Horizontal delta, positive to the right
    pub x: f64,
    /// Vertical delta, positive downwards
    pub y: f64,
}

impl DeviceFloatCoords {
    /// Create a delta.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length of the delta.
    #[inline]
    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Scale both axes by `factor`.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Whether both axes are zero.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

impl From<(f64, f64)> for DeviceFloatCoords {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl core::ops::AddAssign for DeviceFloatCoords {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
