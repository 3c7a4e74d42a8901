//! Normalized output coordinates and the normalization seam.

use core::fmt;

use glide_errors::ValidationError;
use glide_trackers::DeviceFloatCoords;
use serde::{Deserialize, Serialize};

/// Resolution all normalized motion is expressed in.
pub const DEFAULT_MOUSE_DPI: u32 = 1000;

/// A motion delta at the common reference resolution.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCoords {
    /// Horizontal delta
    pub x: f64,
    /// Vertical delta
    pub y: f64,
}

impl NormalizedCoords {
    /// Create a delta.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Scale both axes by `factor`.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Maps device-space deltas to normalized space.
pub trait Normalizer: Send + Sync + fmt::Debug {
    /// Normalize a device-space delta.
    fn normalize(&self, delta: DeviceFloatCoords) -> NormalizedCoords;
}

/// Scales device deltas to [`DEFAULT_MOUSE_DPI`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DpiNormalizer {
    dpi: u32,
}

impl DpiNormalizer {
    /// Create a normalizer for a device with `dpi` counts per inch.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositive`] if `dpi` is zero.
    pub fn new(dpi: u32) -> Result<Self, ValidationError> {
        if dpi == 0 {
            return Err(ValidationError::non_positive("dpi", dpi));
        }
        Ok(Self { dpi })
    }

    /// Device resolution.
    pub fn dpi(&self) -> u32 {
        self.dpi
    }
}

impl Normalizer for DpiNormalizer {
    #[inline]
    fn normalize(&self, delta: DeviceFloatCoords) -> NormalizedCoords {
        let scale = f64::from(DEFAULT_MOUSE_DPI) / f64::from(self.dpi);
        NormalizedCoords::new(delta.x * scale, delta.y * scale)
    }
}

/// Passes deltas through unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityNormalizer;

impl Normalizer for IdentityNormalizer {
    #[inline]
    fn normalize(&self, delta: DeviceFloatCoords) -> NormalizedCoords {
        NormalizedCoords::new(delta.x, delta.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dpi_normalizer_scales_to_reference() -> Result<(), ValidationError> {
        let normalizer = DpiNormalizer::new(400)?;
        let out = normalizer.normalize(DeviceFloatCoords::new(4.0, -2.0));
        assert_relative_eq!(out.x, 10.0);
        assert_relative_eq!(out.y, -5.0);
        Ok(())
    }

    #[test]
    fn test_reference_dpi_is_identity() -> Result<(), ValidationError> {
        let normalizer = DpiNormalizer::new(DEFAULT_MOUSE_DPI)?;
        let delta = DeviceFloatCoords::new(3.5, 1.25);
        assert_eq!(
            normalizer.normalize(delta),
            IdentityNormalizer.normalize(delta)
        );
        Ok(())
    }

    #[test]
    fn test_zero_dpi_rejected() {
        assert!(matches!(
            DpiNormalizer::new(0),
            Err(ValidationError::NonPositive { .. })
        ));
    }
}
