//! Property-based tests for profile evaluation.
//!
//! These tests verify clamp, interpolation and monotonicity properties that
//! must hold for every valid control-point table.

use glide_curves::{ControlPoint, CustomCurve, PiecewiseLinearProfile, speed_factor};
use proptest::prelude::*;
use quickcheck_macros::quickcheck;

fn sanitize_f64(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else if v.is_infinite() {
        if v > 0.0 { 1e6 } else { -1e6 }
    } else {
        v
    }
}

/// Strictly increasing speeds with non-decreasing factors.
fn monotonic_table() -> impl Strategy<Value = Vec<ControlPoint>> {
    prop::collection::vec((0.1f64..50.0, 0.0f64..2.0), 2..8).prop_map(|steps| {
        let mut speed = 0.0;
        let mut factor = 0.0;
        steps
            .into_iter()
            .map(|(ds, df)| {
                speed += ds;
                factor += df;
                ControlPoint::new(speed, factor)
            })
            .collect()
    })
}

/// Strictly increasing speeds with arbitrary non-negative factors.
fn any_table() -> impl Strategy<Value = Vec<ControlPoint>> {
    prop::collection::vec((0.1f64..50.0, 0.0f64..5.0), 2..8).prop_map(|steps| {
        let mut speed = 0.0;
        steps
            .into_iter()
            .map(|(ds, factor)| {
                speed += ds;
                ControlPoint::new(speed, factor)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn below_first_point_returns_first_factor(points in any_table(), below in 0.0f64..1000.0) {
        let first = points[0];
        let profile = PiecewiseLinearProfile::new(points)?;
        let factor = profile.evaluate(first.speed - below);
        prop_assert_eq!(factor.to_bits(), first.factor.to_bits());
    }

    #[test]
    fn above_last_point_returns_last_factor(points in any_table(), above in 0.0f64..1000.0) {
        let last = points[points.len() - 1];
        let profile = PiecewiseLinearProfile::new(points)?;
        let factor = profile.evaluate(last.speed + above);
        prop_assert_eq!(factor.to_bits(), last.factor.to_bits());
    }

    #[test]
    fn monotonic_table_gives_monotonic_curve(
        points in monotonic_table(),
        a in 0.0f64..400.0,
        b in 0.0f64..400.0,
    ) {
        let profile = PiecewiseLinearProfile::new(points)?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(profile.evaluate(lo) <= profile.evaluate(hi) + 1e-12);
    }

    #[test]
    fn output_within_table_factor_range(points in any_table(), speed in -100.0f64..500.0) {
        let min = points.iter().map(|p| p.factor).fold(f64::INFINITY, f64::min);
        let max = points.iter().map(|p| p.factor).fold(f64::NEG_INFINITY, f64::max);
        let profile = PiecewiseLinearProfile::new(points)?;
        let factor = profile.evaluate(speed);
        prop_assert!(factor >= min - 1e-12 && factor <= max + 1e-12);
    }

    #[test]
    fn control_points_are_reproduced(points in any_table()) {
        let profile = PiecewiseLinearProfile::new(points.clone())?;
        for point in points {
            prop_assert!((profile.evaluate(point.speed) - point.factor).abs() < 1e-9);
        }
    }

    #[test]
    fn custom_curve_accepts_any_insert_order(mut speeds in prop::collection::vec(0.0f64..50_000.0, 1..32)) {
        let mut curve = CustomCurve::new();
        for &speed in &speeds {
            curve.set_point(speed, 1.0)?;
        }
        speeds.sort_by(f64::total_cmp);
        speeds.dedup();
        let stored: Vec<f64> = curve.points().iter().map(|p| p.speed).collect();
        prop_assert_eq!(stored, speeds);
    }
}

#[quickcheck]
fn prop_default_profile_output_in_range(speed: f64) -> bool {
    let speed = sanitize_f64(speed);
    let factor = PiecewiseLinearProfile::touchpad_default().evaluate(speed);
    (0.05..=1.0).contains(&factor)
}

#[quickcheck]
fn prop_speed_factor_positive_in_domain(preference: f64) -> bool {
    let preference = sanitize_f64(preference).clamp(-1.0, 1.0);
    matches!(speed_factor(preference), Ok(gain) if gain > 0.0 && gain < 5.1)
}

#[quickcheck]
fn prop_speed_factor_rejects_outside_domain(preference: f64) -> bool {
    let preference = sanitize_f64(preference);
    if (-1.0..=1.0).contains(&preference) {
        return true;
    }
    speed_factor(preference).is_err()
}

#[quickcheck]
fn prop_speed_factor_idempotent(preference: f64) -> bool {
    let preference = sanitize_f64(preference).clamp(-1.0, 1.0);
    match (speed_factor(preference), speed_factor(preference)) {
        (Ok(a), Ok(b)) => a.to_bits() == b.to_bits(),
        _ => false,
    }
}
