//! Motion history and velocity estimation.
//!
//! [`PointerTrackers`] keeps a fixed ring of motion trackers. Every tracker
//! accumulates all motion since its own timestamp, so the tracker `n` slots
//! behind the head holds the total delta over the last `n` events. The
//! velocity estimate walks that history from newest to oldest and keeps
//! extending the averaging window while motion stays in a consistent
//! direction at a consistent speed.

use serde::{Deserialize, Serialize};

use crate::coords::DeviceFloatCoords;
use crate::direction::Direction;

/// History older than this (µs) no longer contributes to velocity.
pub const MOTION_TIMEOUT_US: u64 = 1_000_000;

/// Largest velocity difference (units/µs) still considered the same motion.
pub const MAX_VELOCITY_DIFF: f64 = 0.001;

/// Velocity source consumed by the acceleration filters.
///
/// Velocities are in device units per microsecond. Timestamps are
/// monotonically non-decreasing microseconds chosen by the host.
pub trait VelocityTracker: Send {
    /// Record a motion delta observed at `time_us`.
    fn feed(&mut self, delta: DeviceFloatCoords, time_us: u64);

    /// Current velocity estimate as of `time_us`.
    fn velocity(&self, time_us: u64) -> f64;

    /// Forget all motion history; `time_us` becomes the new origin.
    fn reset(&mut self, time_us: u64);
}

/// Replacement for implausibly short time deltas.
///
/// Some transports (Bluetooth in particular) batch events, so two deltas
/// can arrive a few microseconds apart although they were sampled
/// milliseconds apart. Time deltas below `threshold_us` are replaced with
/// `value_us`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaSmoothener {
    /// Time deltas below this are replaced
    pub threshold_us: u64,
    /// Replacement time delta
    pub value_us: u64,
}

impl DeltaSmoothener {
    /// Preset for batched Bluetooth transports.
    pub const BLUETOOTH: Self = Self {
        threshold_us: 50_000,
        value_us: 10_000,
    };

    /// Create a smoothener.
    pub const fn new(threshold_us: u64, value_us: u64) -> Self {
        Self {
            threshold_us,
            value_us,
        }
    }

    /// Whether this smoothener changes anything.
    pub const fn is_active(&self) -> bool {
        self.threshold_us > 0
    }

    /// An active smoothener needs a non-zero replacement value.
    pub const fn is_valid(&self) -> bool {
        self.threshold_us == 0 || self.value_us > 0
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct MotionTracker {
    delta: DeviceFloatCoords,
    time_us: u64,
    direction: Direction,
}

/// Ring of motion trackers, the stock [`VelocityTracker`].
#[derive(Clone, Debug)]
pub struct PointerTrackers {
    trackers: Box<[MotionTracker]>,
    cur: usize,
    smoothener: Option<DeltaSmoothener>,
    anchored: bool,
}

impl PointerTrackers {
    /// History length when velocity averaging is enabled.
    pub const AVERAGING_HISTORY: usize = 16;

    /// History length without averaging: the head plus one.
    pub const MINIMAL_HISTORY: usize = 2;

    /// Create a ring with `capacity` trackers (at least two).
    ///
    /// The ring has no time origin until the first [`VelocityTracker::reset`]
    /// or [`VelocityTracker::feed`]; a first feed anchors the history at its
    /// own timestamp, exactly as a reset at that timestamp would.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(Self::MINIMAL_HISTORY);
        Self {
            trackers: vec![MotionTracker::default(); capacity].into_boxed_slice(),
            cur: 0,
            smoothener: None,
            anchored: false,
        }
    }

    /// Create a ring sized for averaging or for instantaneous velocity.
    pub fn with_averaging(use_averaging: bool) -> Self {
        Self::new(if use_averaging {
            Self::AVERAGING_HISTORY
        } else {
            Self::MINIMAL_HISTORY
        })
    }

    /// Install a time-delta smoothener. Inactive smootheners are dropped.
    #[must_use]
    pub fn with_smoothener(mut self, smoothener: DeltaSmoothener) -> Self {
        self.smoothener = smoothener.is_active().then_some(smoothener);
        self
    }

    /// Number of trackers in the ring.
    pub fn capacity(&self) -> usize {
        self.trackers.len()
    }

    /// The active smoothener, if any.
    pub fn smoothener(&self) -> Option<DeltaSmoothener> {
        self.smoothener
    }

    #[inline]
    fn index_of(&self, offset: usize) -> usize {
        let n = self.trackers.len();
        (self.cur + n - offset) % n
    }

    #[inline]
    fn by_offset(&self, offset: usize) -> &MotionTracker {
        &self.trackers[self.index_of(offset)]
    }

    fn tracker_velocity(&self, tracker: &MotionTracker, time_us: u64) -> f64 {
        let mut tdelta = time_us.saturating_sub(tracker.time_us) + 1;
        if let Some(smoothener) = self.smoothener {
            if tdelta < smoothener.threshold_us {
                tdelta = smoothener.value_us;
            }
        }
        tracker.delta.length() / tdelta as f64
    }
}

impl Default for PointerTrackers {
    fn default() -> Self {
        Self::with_averaging(true)
    }
}

impl VelocityTracker for PointerTrackers {
    fn feed(&mut self, delta: DeviceFloatCoords, time_us: u64) {
        if !self.anchored {
            self.reset(time_us);
        }

        for tracker in self.trackers.iter_mut() {
            tracker.delta += delta;
        }

        self.cur = (self.cur + 1) % self.trackers.len();
        let head = &mut self.trackers[self.cur];
        head.delta = DeviceFloatCoords::default();
        head.time_us = time_us;
        head.direction = Direction::of(delta.x, delta.y);
    }

    fn velocity(&self, time_us: u64) -> f64 {
        let mut result = 0.0;
        let mut initial_velocity = 0.0;
        let mut direction = self.by_offset(0).direction;

        // The head carries no delta yet; start one behind it.
        for offset in 1..self.trackers.len() {
            let tracker = self.by_offset(offset);

            if tracker.time_us > time_us {
                break;
            }

            if time_us - tracker.time_us > MOTION_TIMEOUT_US {
                if offset == 1 {
                    result = self.tracker_velocity(
                        tracker,
                        tracker.time_us.saturating_add(MOTION_TIMEOUT_US),
                    );
                }
                break;
            }

            let velocity = self.tracker_velocity(tracker, time_us);

            direction = direction.intersect(tracker.direction);
            if direction.is_empty() {
                if offset == 1 {
                    result = velocity;
                }
                break;
            }

            if initial_velocity == 0.0 {
                initial_velocity = velocity;
                result = velocity;
            } else {
                if (initial_velocity - velocity).abs() > MAX_VELOCITY_DIFF {
                    break;
                }
                result = velocity;
            }
        }

        result
    }

    fn reset(&mut self, time_us: u64) {
        for offset in 1..self.trackers.len() {
            let index = self.index_of(offset);
            self.trackers[index] = MotionTracker::default();
        }

        let head = &mut self.trackers[self.cur];
        head.delta = DeviceFloatCoords::default();
        head.time_us = time_us;
        head.direction = Direction::UNDEFINED;
        self.anchored = true;
    }
}
