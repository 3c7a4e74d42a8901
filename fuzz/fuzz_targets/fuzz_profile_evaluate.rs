//! Fuzz control-point tables and curve evaluation.
//!
//! Arbitrary bytes are read as `f64` values: a probe speed followed by
//! `(speed, factor)` pairs. Whatever the tables accept must evaluate
//! without panicking and never yield a negative factor.
//!
//! Run with:
//!   cargo fuzz run fuzz_profile_evaluate

#![no_main]

use glide_curves::{ControlPoint, CustomCurve, PiecewiseLinearProfile};
use libfuzzer_sys::fuzz_target;

fn read_f64s(data: &[u8]) -> Vec<f64> {
    data.chunks_exact(8)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let values = read_f64s(data);
    let Some((&probe, rest)) = values.split_first() else {
        return;
    };
    let points: Vec<ControlPoint> = rest
        .chunks_exact(2)
        .map(|pair| ControlPoint::new(pair[0], pair[1]))
        .collect();

    if let Ok(profile) = PiecewiseLinearProfile::new(points.clone()) {
        let factor = profile.evaluate(probe);
        assert!(!(factor < 0.0));
    }

    let mut curve = CustomCurve::new();
    for point in points {
        // Rejected points are expected; the curve must stay consistent.
        let _ = curve.set_point(point.speed, point.factor);
    }
    assert!(curve.len() <= CustomCurve::MAX_POINTS);
    assert!(curve.points().windows(2).all(|w| w[0].speed < w[1].speed));
    assert!(curve.evaluate(probe) >= 0.0);
});
