//! Speed preference to baseline gain mapping.
//!
//! The user-facing speed setting lives in `[-1, 1]` with `0` as the tuned
//! default. It is shifted to `[0, 2]` and passed through a four-parameter
//! logistic fitted to `(0, 0)`, `(0.1, 0.1)`, `(1, 1)` and `(2, 5)`, so
//! `-1` slows the pointer almost to a halt, `0` is close to unity and `1`
//! gives a five-fold speed-up. Resolution is finer at the low end, where a
//! too-small gain swallows small movements.

use glide_errors::ValidationError;

/// Lowest accepted speed preference.
pub const SPEED_MIN: f64 = -1.0;

/// Highest accepted speed preference.
pub const SPEED_MAX: f64 = 1.0;

const FIT_UPPER: f64 = 435_837.2;
const FIT_LOWER: f64 = 0.047_626_36;
const FIT_INFLECTION: f64 = 240.454_9;
const FIT_SLOPE: f64 = 2.377_168;

/// Check that a speed preference is finite and within `[-1, 1]`.
///
/// # Errors
///
/// Returns [`ValidationError::NotFinite`] for NaN/infinite input and
/// [`ValidationError::OutOfRange`] for values outside `[-1, 1]`.
pub fn validate_speed(preference: f64) -> Result<f64, ValidationError> {
    if !preference.is_finite() {
        return Err(ValidationError::not_finite("speed"));
    }
    if !(SPEED_MIN..=SPEED_MAX).contains(&preference) {
        return Err(ValidationError::out_of_range(
            "speed", preference, SPEED_MIN, SPEED_MAX,
        ));
    }
    Ok(preference)
}

/// Map a speed preference in `[-1, 1]` to a positive baseline gain.
///
/// # Errors
///
/// Out-of-range or non-finite preferences are a contract breach; see
/// [`validate_speed`]. Callers are expected to clamp first.
///
/// # Example
///
/// ```
/// use glide_curves::speed_factor;
///
/// let neutral = speed_factor(0.0)?;
/// assert!((neutral - 1.0).abs() < 0.01);
/// assert!(speed_factor(1.5).is_err());
/// # Ok::<(), glide_errors::ValidationError>(())
/// ```
pub fn speed_factor(preference: f64) -> Result<f64, ValidationError> {
    let preference = validate_speed(preference)?;
    let shifted = preference + 1.0;
    Ok(FIT_UPPER
        + (FIT_LOWER - FIT_UPPER) / (1.0 + (shifted / FIT_INFLECTION).powf(FIT_SLOPE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn must<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
        match result {
            Ok(v) => v,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }

    #[test]
    fn test_minimum_is_near_zero() {
        let gain = must(speed_factor(-1.0));
        assert_abs_diff_eq!(gain, FIT_LOWER, epsilon = 1e-9);
        assert!(gain > 0.0);
    }

    #[test]
    fn test_neutral_is_near_unity() {
        let gain = must(speed_factor(0.0));
        assert_abs_diff_eq!(gain, 1.0, epsilon = 0.01);
    }

    #[test]
    fn test_maximum_is_near_five() {
        let gain = must(speed_factor(1.0));
        assert_abs_diff_eq!(gain, 5.0, epsilon = 0.05);
    }

    #[test]
    fn test_calibration_point_at_tenth() {
        // Shifted 0.1 was fitted to 0.1; the fit is loose at that end.
        let gain = must(speed_factor(-0.9));
        assert!(gain > FIT_LOWER && gain < 0.1, "got {}", gain);
    }

    #[test]
    fn test_increasing_over_range() {
        let mut previous = must(speed_factor(-1.0));
        for step in 1..=200 {
            let preference = -1.0 + f64::from(step) * 0.01;
            let gain = must(speed_factor(preference.min(1.0)));
            assert!(gain > previous, "not increasing at {}", preference);
            previous = gain;
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            speed_factor(1.5),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            speed_factor(-1.0001),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert_eq!(speed_factor(f64::NAN), Err(ValidationError::not_finite("speed")));
        assert!(speed_factor(f64::INFINITY).is_err());
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(must(speed_factor(0.3)).to_bits(), must(speed_factor(0.3)).to_bits());
    }
}
