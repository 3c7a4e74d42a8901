//! Filter configuration.
//!
//! Configuration files are JSON or YAML; the format is picked from the file
//! extension. Every loader validates before returning, so a config obtained
//! from here can be handed to [`crate::create_filter`] as is.

use std::path::Path;

use glide_curves::{ControlPoint, CustomCurve, PiecewiseLinearProfile, validate_speed};
use glide_errors::{AccelError, Result, ValidationError};
use glide_trackers::{DeltaSmoothener, FactorSmoother};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::coords::DEFAULT_MOUSE_DPI;
use crate::filter::AccelProfile;

/// Acceleration settings for one device.
///
/// # Example
///
/// ```
/// use glide_filters::{AccelConfig, AccelProfile};
///
/// let config = AccelConfig::from_yaml_str(
///     "profile: touchpad-pl\ndpi: 400\nspeed: 0.25\n",
/// )?;
/// assert_eq!(config.profile, AccelProfile::TouchpadPl);
/// assert_eq!(config.dpi, 400);
/// # Ok::<(), glide_errors::AccelError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AccelConfig {
    /// Strategy
    pub profile: AccelProfile,
    /// Device resolution in counts per inch
    pub dpi: u32,
    /// Short time-delta replacement; disabled by default
    pub smoothing: DeltaSmoothener,
    /// Average velocity over 16 events instead of 2
    pub use_velocity_averaging: bool,
    /// Speed preference in `[-1, 1]`
    pub speed: f64,
    /// Factor smoothing between events
    pub smoother: FactorSmoother,
    /// Override of the touchpad table, speeds in mm/s
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control_points: Option<Vec<ControlPoint>>,
    /// Points of the custom curve, speeds in device units/ms
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom_points: Vec<ControlPoint>,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            profile: AccelProfile::TouchpadPl,
            dpi: DEFAULT_MOUSE_DPI,
            smoothing: DeltaSmoothener::default(),
            use_velocity_averaging: false,
            speed: 0.0,
            smoother: FactorSmoother::Simpsons,
            control_points: None,
            custom_points: Vec::new(),
        }
    }
}

impl AccelConfig {
    /// Check every field.
    ///
    /// # Errors
    ///
    /// Returns the first [`AccelError::PreconditionViolated`] or
    /// [`AccelError::Profile`] found.
    pub fn validate(&self) -> Result<()> {
        self.check().inspect_err(|err| {
            warn!(profile = %self.profile, %err, "rejecting acceleration config");
        })
    }

    fn check(&self) -> Result<()> {
        if self.dpi == 0 {
            return Err(ValidationError::non_positive("dpi", self.dpi).into());
        }
        if !self.smoothing.is_valid() {
            return Err(ValidationError::constraint(
                "smoothing.value_us must be > 0 when smoothing.threshold_us is set",
            )
            .into());
        }
        validate_speed(self.speed)?;
        self.touchpad_profile()?;
        self.custom_curve()?;
        Ok(())
    }

    /// The touchpad table, falling back to the stock one.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Profile`] if the override table is invalid.
    pub fn touchpad_profile(&self) -> Result<PiecewiseLinearProfile> {
        match &self.control_points {
            Some(points) => Ok(PiecewiseLinearProfile::new(points.clone())?),
            None => Ok(PiecewiseLinearProfile::touchpad_default()),
        }
    }

    /// The custom curve built from `custom_points`.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Profile`] if any point is rejected.
    pub fn custom_curve(&self) -> Result<CustomCurve> {
        Ok(CustomCurve::from_points(self.custom_points.iter().copied())?)
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Config`] on malformed input, or the validation
    /// error.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|err| AccelError::config(format!("invalid JSON config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a YAML document.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Config`] on malformed input, or the validation
    /// error.
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(input)
            .map_err(|err| AccelError::config(format!("invalid YAML config: {err}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a `.json`, `.yaml` or `.yml` file.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Io`] if the file cannot be read,
    /// [`AccelError::Config`] for unknown extensions and malformed content,
    /// or the validation error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            Some("yaml" | "yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => {
                return Err(AccelError::config(format!(
                    "unsupported config format: {}",
                    path.display()
                )));
            }
        };

        debug!(path = %path.display(), profile = %config.profile, dpi = config.dpi, "loaded acceleration config");
        Ok(config)
    }

    /// Serialize as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`AccelError::Config`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| AccelError::config(format!("cannot serialize config: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() -> Result<()> {
        let config = AccelConfig::from_json_str("{}")?;
        assert_eq!(config, AccelConfig::default());
        assert_eq!(config.dpi, 1000);
        assert_eq!(config.smoother, FactorSmoother::Simpsons);
        assert_eq!(config.touchpad_profile()?, PiecewiseLinearProfile::touchpad_default());
        Ok(())
    }

    #[test]
    fn test_full_yaml() -> Result<()> {
        let yaml = "\
profile: touchpad-pl
dpi: 400
smoothing:
  threshold_us: 50000
  value_us: 10000
use_velocity_averaging: true
speed: -0.5
smoother: none
control_points:
  - { speed: 10.0, factor: 0.1 }
  - { speed: 50.0, factor: 0.8 }
  - { speed: 120.0, factor: 1.2 }
";
        let config = AccelConfig::from_yaml_str(yaml)?;
        assert_eq!(config.smoothing, DeltaSmoothener::BLUETOOTH);
        assert!(config.use_velocity_averaging);
        assert_eq!(config.smoother, FactorSmoother::None);
        assert_relative_eq!(config.touchpad_profile()?.evaluate(30.0), 0.45);
        Ok(())
    }

    #[test]
    fn test_custom_json() -> Result<()> {
        let json = r#"{"profile":"custom","custom_points":[{"speed":5.0,"factor":2.0},{"speed":0.0,"factor":1.0}]}"#;
        let config = AccelConfig::from_json_str(json)?;
        assert_eq!(config.profile, AccelProfile::Custom);
        assert_eq!(config.custom_curve()?.len(), 2);
        Ok(())
    }

    #[test]
    fn test_rejects_zero_dpi() {
        assert!(matches!(
            AccelConfig::from_json_str(r#"{"dpi":0}"#),
            Err(AccelError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_speed() {
        assert!(matches!(
            AccelConfig::from_json_str(r#"{"speed":1.5}"#),
            Err(AccelError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_rejects_bad_table() {
        let json = r#"{"control_points":[{"speed":100.0,"factor":1.0},{"speed":20.0,"factor":0.05}]}"#;
        assert!(matches!(
            AccelConfig::from_json_str(json),
            Err(AccelError::Profile(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        assert!(matches!(
            AccelConfig::from_json_str(r#"{"dpi":400,"accel":2.0}"#),
            Err(AccelError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_smoothener_without_value() {
        let yaml = "smoothing:\n  threshold_us: 100\n  value_us: 0\n";
        assert!(matches!(
            AccelConfig::from_yaml_str(yaml),
            Err(AccelError::PreconditionViolated(_))
        ));
    }

    #[test]
    fn test_json_round_trip() -> Result<()> {
        let config = AccelConfig {
            dpi: 800,
            speed: 0.75,
            control_points: Some(PiecewiseLinearProfile::TOUCHPAD_POINTS.to_vec()),
            ..AccelConfig::default()
        };
        let parsed = AccelConfig::from_json_str(&config.to_json_string()?)?;
        assert_eq!(parsed, config);
        Ok(())
    }
}
