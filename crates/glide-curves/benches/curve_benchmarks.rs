//! Benchmark tests for curve evaluation.
//!
//! Run with: cargo bench --bench curve_benchmarks

use criterion::{Criterion, criterion_group, criterion_main};
use glide_curves::{ControlPoint, CustomCurve, PiecewiseLinearProfile, speed_factor};

fn bench_touchpad_profile_evaluate(c: &mut Criterion) {
    let profile = PiecewiseLinearProfile::touchpad_default();
    let speeds: Vec<f64> = (0..=1000).map(|i| f64::from(i) * 0.15).collect();

    c.bench_function("touchpad_profile_evaluate", |b| {
        b.iter(|| {
            for &speed in &speeds {
                std::hint::black_box(profile.evaluate(std::hint::black_box(speed)));
            }
        });
    });
}

fn bench_wide_profile_evaluate(c: &mut Criterion) {
    let points: Vec<ControlPoint> = (0..16)
        .map(|i| ControlPoint::new(f64::from(i) * 10.0, f64::from(i) * 0.1))
        .collect();
    let Ok(profile) = PiecewiseLinearProfile::new(points) else {
        return;
    };
    let speeds: Vec<f64> = (0..=1000).map(|i| f64::from(i) * 0.16).collect();

    c.bench_function("wide_profile_evaluate", |b| {
        b.iter(|| {
            for &speed in &speeds {
                std::hint::black_box(profile.evaluate(std::hint::black_box(speed)));
            }
        });
    });
}

fn bench_custom_curve_evaluate(c: &mut Criterion) {
    let Ok(curve) = CustomCurve::from_points((0..32).map(|i| {
        ControlPoint::new(f64::from(i) * 100.0, 1.0 + f64::from(i) * 0.05)
    })) else {
        return;
    };

    c.bench_function("custom_curve_evaluate", |b| {
        b.iter(|| {
            for i in 0..=1000 {
                std::hint::black_box(curve.evaluate(std::hint::black_box(f64::from(i) * 3.3)));
            }
        });
    });
}

fn bench_speed_factor(c: &mut Criterion) {
    c.bench_function("speed_factor", |b| {
        b.iter(|| {
            for i in -100..=100 {
                let preference = f64::from(i) / 100.0;
                std::hint::black_box(speed_factor(std::hint::black_box(preference)).ok());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_touchpad_profile_evaluate,
    bench_wide_profile_evaluate,
    bench_custom_curve_evaluate,
    bench_speed_factor
);
criterion_main!(benches);
