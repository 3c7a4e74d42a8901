//! Acceleration-factor smoothing between consecutive velocities.

use serde::{Deserialize, Serialize};

/// How the acceleration factor is derived from the current and previous
/// velocity.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FactorSmoother {
    /// Approximate the mean factor over `[last, current]` with Simpson's
    /// rule. Damps jumps when velocity changes sharply between events.
    #[default]
    Simpsons,
    /// Use the factor at the current velocity only.
    None,
}

impl FactorSmoother {
    /// Compute the factor for `velocity` given the previous event's
    /// `last_velocity`, evaluating `profile` as needed.
    #[inline]
    pub fn apply<F>(self, profile: F, velocity: f64, last_velocity: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Self::Simpsons => simpsons(profile, velocity, last_velocity),
            Self::None => profile(velocity),
        }
    }
}

/// Simpson's-rule average of `profile` over `[last_velocity, velocity]`.
///
/// `(p(v) + p(last) + 4 p((v + last) / 2)) / 6`
#[inline]
pub fn simpsons<F>(profile: F, velocity: f64, last_velocity: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let midpoint = (velocity + last_velocity) / 2.0;
    (profile(velocity) + profile(last_velocity) + 4.0 * profile(midpoint)) / 6.0
}
