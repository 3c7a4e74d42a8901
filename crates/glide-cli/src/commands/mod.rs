//! Command implementations for glidectl

pub mod curve;
pub mod replay;
pub mod speed_curve;

use std::path::Path;

use glide_filters::AccelConfig;

use crate::error::CliError;

pub use curve::CurveArgs;
pub use replay::ReplayArgs;
pub use speed_curve::SpeedCurveArgs;

/// Load a config file, mapping every failure to a configuration error.
pub fn load_config(path: &Path) -> Result<AccelConfig, CliError> {
    AccelConfig::load(path).map_err(CliError::Config)
}
