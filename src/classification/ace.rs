//! Accumulated Cyclone Energy

use super::category::TROPICAL_STORM_KT;

/// ACE contributed by one observation, in units of 10^4 kt^2.
///
/// Only tropical-storm strength winds (>= 34 kt) count.
pub fn ace_contribution(wind_kt: f64) -> f64 {
    if wind_kt.is_nan() || wind_kt < TROPICAL_STORM_KT {
        return 0.0;
    }
    wind_kt * wind_kt / 10_000.0
}

/// Total ACE over a run of wind speeds
pub fn total_ace(winds: impl IntoIterator<Item = f64>) -> f64 {
    winds.into_iter().map(ace_contribution).sum()
}
