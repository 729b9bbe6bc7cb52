//! Per-storm summary attributes

use std::collections::BTreeMap;

use crate::classification::category;
use crate::models::{Observation, StormKey, StormSummary};

use super::grouper::StormTrack;

/// Peak intensity, label and id of one storm.
///
/// Category is that of the storm's peak wind, not of any single point.
pub fn summarize(track: &StormTrack<'_>) -> StormSummary {
    let max_wind_kt = track.max_wind_kt();
    StormSummary {
        key: track.key.clone(),
        id: track.id(),
        display_name: track.display_name(),
        max_wind_kt,
        category: category(max_wind_kt),
    }
}

/// The strongest observation of each storm.
///
/// A fold rather than a bare max so callers keep the whole peak record; on
/// ties the first observation seen wins.
pub fn peak_by_storm<'a, I>(observations: I) -> BTreeMap<StormKey, &'a Observation>
where
    I: IntoIterator<Item = &'a Observation>,
{
    observations
        .into_iter()
        .fold(BTreeMap::new(), |mut peaks, observation| {
            peaks
                .entry(observation.key.clone())
                .and_modify(|peak: &mut &'a Observation| {
                    if observation.max_wind_kt > peak.max_wind_kt {
                        *peak = observation;
                    }
                })
                .or_insert(observation);
            peaks
        })
}
