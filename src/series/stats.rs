//! Season headline statistics

use std::collections::{BTreeSet, HashSet};

use crate::config::year_range;
use crate::models::{Observation, SeasonStats, StormKey};

/// Distinct storms, strongest wind and latest timestamp of a season
pub fn season_stats(all: &[Observation], active: &[&Observation], year: i32) -> SeasonStats {
    let total_storms = active
        .iter()
        .map(|o| &o.key)
        .collect::<HashSet<&StormKey>>()
        .len();
    let strongest_wind_kt = active.iter().map(|o| o.max_wind_kt).fold(0.0, f64::max);
    let last_update = active.iter().filter_map(|o| o.timestamp).max();

    SeasonStats {
        year,
        total_storms,
        strongest_wind_kt,
        last_update,
        available_years: available_years(all),
        year_range: year_range().into_inner(),
    }
}

/// Years with at least one timestamped observation, ascending
pub fn available_years(observations: &[Observation]) -> Vec<i32> {
    observations
        .iter()
        .filter_map(Observation::year)
        .collect::<BTreeSet<i32>>()
        .into_iter()
        .collect()
}
