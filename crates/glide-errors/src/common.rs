//! Top-level error type and classification helpers.

use core::fmt;

use crate::{ProfileError, ValidationError};

/// Top-level error type that wraps every glide sub-error.
#[derive(Debug, thiserror::Error)]
pub enum AccelError {
    /// The caller broke an operation's contract (e.g. a speed preference
    /// outside `[-1, 1]`). Not recoverable by the filter.
    #[error("Precondition violated: {0}")]
    PreconditionViolated(#[from] ValidationError),

    /// The control-point table could not be built.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// The strategy does not implement the requested operation.
    #[error("Operation '{operation}' is not supported by the {profile} profile")]
    Unsupported {
        /// Operation name
        operation: &'static str,
        /// Profile name
        profile: &'static str,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

impl AccelError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            AccelError::PreconditionViolated(_) => ErrorCategory::Precondition,
            AccelError::Profile(_) => ErrorCategory::Profile,
            AccelError::Unsupported { .. } => ErrorCategory::Unsupported,
            AccelError::Config(_) => ErrorCategory::Config,
            AccelError::Io(_) => ErrorCategory::IO,
        }
    }

    /// Get the error severity level.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AccelError::PreconditionViolated(e) => e.severity(),
            AccelError::Profile(e) => e.severity(),
            AccelError::Unsupported { .. } => ErrorSeverity::Warning,
            AccelError::Config(_) | AccelError::Io(_) => ErrorSeverity::Error,
        }
    }

    /// Check if this error is recoverable.
    ///
    /// Contract breaches are never recoverable: the caller has to fix its input.
    pub fn is_recoverable(&self) -> bool {
        self.severity() < ErrorSeverity::Critical
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        AccelError::Config(msg.into())
    }

    /// Create an unsupported-operation error.
    pub fn unsupported(operation: &'static str, profile: &'static str) -> Self {
        AccelError::Unsupported { operation, profile }
    }
}

impl From<std::io::Error> for AccelError {
    fn from(e: std::io::Error) -> Self {
        AccelError::Io(e)
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Caller contract breaches
    Precondition = 0,
    /// Control-point table errors
    Profile = 1,
    /// Operation not offered by the selected strategy
    Unsupported = 2,
    /// Configuration errors
    Config = 3,
    /// I/O errors
    IO = 4,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Precondition => write!(f, "Precondition"),
            ErrorCategory::Profile => write!(f, "Profile"),
            ErrorCategory::Unsupported => write!(f, "Unsupported"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::IO => write!(f, "IO"),
        }
    }
}

/// Error severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum ErrorSeverity {
    /// Informational, no action required
    Info = 0,
    /// Warning, may require attention
    Warning = 1,
    /// Error, operation failed
    Error = 2,
    /// Critical, caller must fix its input
    Critical = 3,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
