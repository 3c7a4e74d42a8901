//! Control-point table errors.

use crate::common::ErrorSeverity;

/// Errors raised while building or editing an acceleration curve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// Not enough control points to define a curve
    #[error("Profile needs at least {min} control points, got {count}")]
    TooFewPoints {
        /// Number of points supplied
        count: usize,
        /// Minimum required
        min: usize,
    },

    /// The table is full
    #[error("Profile cannot hold more than {max} control points")]
    TooManyPoints {
        /// Capacity of the table
        max: usize,
    },

    /// Speeds must be strictly increasing
    #[error(
        "Control point {index} speed {current} must be greater than the previous speed {previous}"
    )]
    NotStrictlyIncreasing {
        /// Index of the offending point
        index: usize,
        /// Speed of the previous point
        previous: f64,
        /// Speed of the offending point
        current: f64,
    },

    /// Factors must be non-negative
    #[error("Control point {index} factor {value} is negative")]
    NegativeFactor {
        /// Index of the offending point
        index: usize,
        /// The invalid factor
        value: f64,
    },

    /// A speed or factor is NaN or infinite
    #[error("Control point {index} is not finite")]
    NonFinitePoint {
        /// Index of the offending point
        index: usize,
    },

    /// Speed outside the range accepted by the curve
    #[error("Control point speed {value} is outside [{min}, {max}]")]
    SpeedOutOfRange {
        /// The rejected speed
        value: f64,
        /// Lowest accepted speed
        min: f64,
        /// Highest accepted speed
        max: f64,
    },
}

impl ProfileError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ProfileError::TooManyPoints { .. } | ProfileError::SpeedOutOfRange { .. } => {
                ErrorSeverity::Warning
            }
            _ => ErrorSeverity::Error,
        }
    }
}
