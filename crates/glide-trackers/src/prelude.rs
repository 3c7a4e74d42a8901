//! Prelude for the trackers crate.

pub use crate::coords::DeviceFloatCoords;
pub use crate::direction::Direction;
pub use crate::smoothing::FactorSmoother;
pub use crate::tracker::{DeltaSmoothener, PointerTrackers, VelocityTracker};
