//! Caller contract errors.
//!
//! These are raised when an operation receives input outside the domain it is
//! defined on. They are reported rather than asserted, but they still mean the
//! caller is wrong: retrying with the same input will fail the same way.

use core::fmt;

use crate::common::ErrorSeverity;

/// Validation error types.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value out of range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
        /// Minimum allowed value
        min: String,
        /// Maximum allowed value
        max: String,
    },

    /// Value is NaN or infinite
    #[error("{field} must be finite")]
    NotFinite {
        /// Field name
        field: String,
    },

    /// Value must be strictly positive
    #[error("{field} must be > 0, got {value}")]
    NonPositive {
        /// Field name
        field: String,
        /// The invalid value
        value: String,
    },

    /// Constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

impl ValidationError {
    /// Get the error severity.
    pub fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Critical
    }

    /// Create an out of range error for a numeric value.
    pub fn out_of_range<T: fmt::Debug>(field: impl Into<String>, value: T, min: T, max: T) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            value: format!("{value:?}"),
            min: format!("{min:?}"),
            max: format!("{max:?}"),
        }
    }

    /// Create a not-finite error.
    pub fn not_finite(field: impl Into<String>) -> Self {
        ValidationError::NotFinite {
            field: field.into(),
        }
    }

    /// Create a non-positive error.
    pub fn non_positive<T: fmt::Debug>(field: impl Into<String>, value: T) -> Self {
        ValidationError::NonPositive {
            field: field.into(),
            value: format!("{value:?}"),
        }
    }

    /// Create a constraint violation error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        ValidationError::ConstraintViolation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_out_of_range() {
        let err = ValidationError::out_of_range("speed", 1.5_f64, -1.0_f64, 1.0_f64);
        assert_eq!(err.to_string(), "speed value 1.5 is out of range [-1.0, 1.0]");
    }

    #[test]
    fn test_validation_error_non_positive() {
        let err = ValidationError::non_positive("dpi", 0);
        assert_eq!(err.to_string(), "dpi must be > 0, got 0");
    }

    #[test]
    fn test_validation_error_not_finite() {
        let err = ValidationError::not_finite("speed");
        assert_eq!(err.to_string(), "speed must be finite");
    }

    #[test]
    fn test_validation_error_severity() {
        assert_eq!(
            ValidationError::constraint("x").severity(),
            ErrorSeverity::Critical
        );
    }

    #[test]
    fn test_validation_error_equality() {
        let err1 = ValidationError::not_finite("field");
        let err2 = ValidationError::not_finite("field");
        assert_eq!(err1, err2);
    }
}
