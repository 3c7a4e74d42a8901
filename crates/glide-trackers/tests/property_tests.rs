//! Property-based tests for velocity tracking.

use glide_trackers::prelude::*;
use glide_trackers::simpsons;
use proptest::prelude::*;

fn delta_strategy() -> impl Strategy<Value = (f64, f64)> {
    (-50.0f64..50.0, -50.0f64..50.0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn velocity_is_finite_and_non_negative(
        deltas in prop::collection::vec((delta_strategy(), 1u64..100_000), 0..40),
        averaging in any::<bool>(),
    ) {
        let mut trackers = PointerTrackers::with_averaging(averaging);
        trackers.reset(0);
        let mut time = 0u64;
        for ((x, y), step) in deltas {
            time += step;
            trackers.feed(DeviceFloatCoords::new(x, y), time);
            let velocity = trackers.velocity(time);
            prop_assert!(velocity.is_finite());
            prop_assert!(velocity >= 0.0);
        }
    }

    #[test]
    fn velocity_is_pure(
        deltas in prop::collection::vec(delta_strategy(), 1..20),
    ) {
        let mut trackers = PointerTrackers::default();
        trackers.reset(0);
        let mut time = 0u64;
        for (x, y) in deltas {
            time += 8_000;
            trackers.feed(DeviceFloatCoords::new(x, y), time);
        }
        prop_assert_eq!(trackers.velocity(time).to_bits(), trackers.velocity(time).to_bits());
    }

    #[test]
    fn reset_forgets_history(
        deltas in prop::collection::vec(delta_strategy(), 1..20),
        gap in 0u64..2_000_000,
    ) {
        let mut trackers = PointerTrackers::default();
        trackers.reset(0);
        let mut time = 0u64;
        for (x, y) in &deltas {
            time += 8_000;
            trackers.feed(DeviceFloatCoords::new(*x, *y), time);
        }

        trackers.reset(time + gap);
        prop_assert_eq!(trackers.velocity(time + gap), 0.0);
    }

    #[test]
    fn direction_masks_are_never_empty(x in -1000.0f64..1000.0, y in -1000.0f64..1000.0) {
        prop_assert!(!Direction::of(x, y).is_empty());
    }

    #[test]
    fn simpsons_stays_within_monotonic_profile_bounds(
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let profile = |v: f64| 0.5 + 2.0 * v;
        let factor = simpsons(profile, a, b);
        let low = profile(a.min(b));
        let high = profile(a.max(b));
        prop_assert!(factor >= low - 1e-12 && factor <= high + 1e-12);
    }
}
