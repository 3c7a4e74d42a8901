//! Quickcheck properties for direction classification and the tracker ring.

use glide_trackers::{DeviceFloatCoords, Direction, PointerTrackers, VelocityTracker};
use quickcheck_macros::quickcheck;

#[quickcheck]
fn nonzero_delta_has_a_direction(x: i16, y: i16) -> bool {
    if x == 0 && y == 0 {
        return true;
    }
    let dir = Direction::of(f64::from(x), f64::from(y));
    let bits = dir.bits().count_ones();
    !dir.is_empty() && (1..=3).contains(&bits)
}

#[quickcheck]
fn reversed_delta_shares_no_octant(x: i16, y: i16) -> bool {
    if x == 0 && y == 0 {
        return true;
    }
    let (x, y) = (f64::from(x), f64::from(y));
    Direction::of(x, y).intersect(Direction::of(-x, -y)).is_empty()
}

#[quickcheck]
fn velocity_is_finite_and_non_negative(deltas: Vec<(i16, i16, u16)>, averaging: bool) -> bool {
    let mut trackers = PointerTrackers::with_averaging(averaging);
    trackers.reset(0);

    let mut time = 0u64;
    for (dx, dy, step) in deltas {
        time += u64::from(step);
        trackers.feed(DeviceFloatCoords::new(f64::from(dx), f64::from(dy)), time);
        let velocity = trackers.velocity(time);
        if !velocity.is_finite() || velocity < 0.0 {
            return false;
        }
    }
    true
}

#[quickcheck]
fn reset_forgets_everything(deltas: Vec<(i16, i16)>) -> bool {
    let mut trackers = PointerTrackers::default();
    trackers.reset(0);
    for (i, (dx, dy)) in deltas.iter().enumerate() {
        trackers.feed(
            DeviceFloatCoords::new(f64::from(*dx), f64::from(*dy)),
            (i as u64 + 1) * 7_000,
        );
    }

    let now = (deltas.len() as u64 + 1) * 7_000;
    trackers.reset(now);
    trackers.velocity(now) == 0.0
}
