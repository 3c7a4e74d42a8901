//! Eight-way motion direction masks.
//!
//! Each delta is classified into one or more compass octants. The tracker
//! intersects masks across history and stops averaging once the intersection
//! is empty, i.e. once the motion changed direction.

use core::f64::consts::{FRAC_1_PI, PI};

/// Bitmask of compass octants, `N` in bit 0 through `NW` in bit 7.
///
/// Screen coordinates: positive `y` points south.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Direction(u8);

impl Direction {
    /// No direction; intersecting with this always yields an empty mask.
    pub const NONE: Self = Self(0);
    /// North
    pub const N: Self = Self(1 << 0);
    /// North-east
    pub const NE: Self = Self(1 << 1);
    /// East
    pub const E: Self = Self(1 << 2);
    /// South-east
    pub const SE: Self = Self(1 << 3);
    /// South
    pub const S: Self = Self(1 << 4);
    /// South-west
    pub const SW: Self = Self(1 << 5);
    /// West
    pub const W: Self = Self(1 << 6);
    /// North-west
    pub const NW: Self = Self(1 << 7);
    /// Any direction; the identity for [`Direction::intersect`].
    pub const UNDEFINED: Self = Self(0xff);

    /// Raw bit representation.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Union of two masks.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Intersection of two masks.
    pub const fn intersect(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Whether no octant is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Classify a delta.
    ///
    /// Small deltas (both axes under 2 units) carry little angular
    /// information and get a coarse three-octant mask from their signs.
    /// Larger deltas get the one or two octants within a tenth of an octant
    /// of their angle. A zero delta is [`Direction::UNDEFINED`].
    pub fn of(x: f64, y: f64) -> Self {
        if x.abs() < 2.0 && y.abs() < 2.0 {
            return if x > 0.0 && y > 0.0 {
                Self::S.union(Self::SE).union(Self::E)
            } else if x > 0.0 && y < 0.0 {
                Self::N.union(Self::NE).union(Self::E)
            } else if x < 0.0 && y > 0.0 {
                Self::S.union(Self::SW).union(Self::W)
            } else if x < 0.0 && y < 0.0 {
                Self::N.union(Self::NW).union(Self::W)
            } else if x > 0.0 {
                Self::NE.union(Self::E).union(Self::SE)
            } else if x < 0.0 {
                Self::NW.union(Self::W).union(Self::SW)
            } else if y > 0.0 {
                Self::SE.union(Self::S).union(Self::SW)
            } else if y < 0.0 {
                Self::NE.union(Self::N).union(Self::NW)
            } else {
                Self::UNDEFINED
            };
        }

        // Angle in octants, [0, 8) with 0 at north, clockwise.
        let angle = (y.atan2(x) + 2.5 * PI) % (2.0 * PI);
        let octant = angle * 4.0 * FRAC_1_PI;

        let d1 = octant_index(octant + 0.9);
        let d2 = octant_index(octant + 0.1);
        Self((1u8 << d1) | (1u8 << d2))
    }
}

#[inline]
fn octant_index(value: f64) -> u32 {
    // value is in [0.1, 8.9); truncation then wrap to 0..8.
    (value.max(0.0) as u32) % 8
}
