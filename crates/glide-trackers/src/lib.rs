//! Velocity Tracking for Pointer Acceleration
//!
//! This crate provides the collaborators an acceleration filter consumes but
//! does not own the policy of:
//!
//! - **[`VelocityTracker`]**: ingests timestamped deltas, reports a velocity
//!   estimate in device units/µs, and can be reset at motion boundaries
//! - **[`PointerTrackers`]**: the stock tracker, a fixed ring of motion
//!   trackers that averages over recent motion in a consistent direction
//! - **[`FactorSmoother`]**: optional integration of the acceleration profile
//!   over the interval between the previous and current velocity
//!
//! # Hot Path
//!
//! `feed`, `velocity` and `reset` never allocate; the ring is sized once at
//! construction.
//!
//! # Example
//!
//! ```
//! use glide_trackers::prelude::*;
//!
//! let mut trackers = PointerTrackers::with_averaging(false);
//! trackers.reset(0);
//! trackers.feed(DeviceFloatCoords::new(10.0, 0.0), 10_000);
//!
//! let velocity = trackers.velocity(10_000);
//! assert!(velocity > 0.0);
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod coords;
pub mod direction;
pub mod prelude;
pub mod smoothing;
pub mod tracker;

pub use coords::DeviceFloatCoords;
pub use direction::Direction;
pub use smoothing::{FactorSmoother, simpsons};
pub use tracker::{
    DeltaSmoothener, MAX_VELOCITY_DIFF, MOTION_TIMEOUT_US, PointerTrackers, VelocityTracker,
};
