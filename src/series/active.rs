//! Narrowing the loaded observations to the active season and storm

use std::collections::HashSet;

use crate::models::{Observation, StormKey};

/// Observations belonging to `year`.
///
/// A storm belongs to a year when one of its timestamped observations falls
/// in it (UTC). Its untimestamped observations come along so they still
/// count toward peak wind, but they never take part in ordering.
pub fn season_observations(observations: &[Observation], year: i32) -> Vec<&Observation> {
    let storms_in_year: HashSet<&StormKey> = observations
        .iter()
        .filter(|o| o.year() == Some(year))
        .map(|o| &o.key)
        .collect();

    observations
        .iter()
        .filter(|o| match o.year() {
            Some(y) => y == year,
            None => storms_in_year.contains(&o.key),
        })
        .collect()
}

/// The subset of `active` belonging to one storm; empty when it is absent
pub fn storm_observations<'a>(active: &[&'a Observation], key: &StormKey) -> Vec<&'a Observation> {
    active.iter().copied().filter(|o| &o.key == key).collect()
}

/// Apply an optional storm selection; `None` keeps the whole season
pub fn selected_observations<'a>(
    active: &[&'a Observation],
    selection: Option<&StormKey>,
) -> Vec<&'a Observation> {
    match selection {
        Some(key) => storm_observations(active, key),
        None => active.to_vec(),
    }
}
