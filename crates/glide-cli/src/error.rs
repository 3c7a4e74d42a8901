//! Error types for glidectl

use glide_errors::AccelError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid configuration: {0}")]
    Config(#[source] AccelError),

    #[error("Invalid trace at line {line}: {message}")]
    TraceParse { line: usize, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::TraceParse { .. } => 3,
            Self::InvalidArgument(_) | Self::IoError(_) | Self::JsonError(_) => 1,
        }
    }
}
