//! Partition a flat observation stream into per-storm tracks

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

use crate::models::{Observation, StormKey};

/// One storm's observations.
///
/// `points` holds the timestamped observations in ascending time order, ties
/// kept in input order. Observations without a timestamp cannot be ordered
/// and live in `untimed`; they still count toward the storm's peak wind.
#[derive(Debug, Clone, PartialEq)]
pub struct StormTrack<'a> {
    pub key: StormKey,
    pub points: Vec<&'a Observation>,
    pub untimed: Vec<&'a Observation>,
}

impl<'a> StormTrack<'a> {
    pub fn id(&self) -> String {
        self.key.id()
    }

    /// Every observation of the storm, ordered points first
    pub fn observations(&self) -> impl Iterator<Item = &'a Observation> + '_ {
        self.points.iter().chain(self.untimed.iter()).copied()
    }

    pub fn max_wind_kt(&self) -> f64 {
        self.observations()
            .map(|o| o.max_wind_kt)
            .fold(0.0, f64::max)
    }

    pub fn display_name(&self) -> String {
        self.observations()
            .next()
            .map(|o| o.display_name.clone())
            .unwrap_or_else(|| crate::models::display_name(&self.key, None))
    }

    pub fn start(&self) -> Option<DateTime<Utc>> {
        self.points.first().and_then(|o| o.timestamp)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.points.last().and_then(|o| o.timestamp)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Group observations by storm key.
///
/// Input may be in any order and span several seasons. Storms with no
/// timestamped observation have no orderable track and are left out.
pub fn group_storms<'a, I>(observations: I) -> BTreeMap<StormKey, StormTrack<'a>>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut tracks: BTreeMap<StormKey, StormTrack<'a>> = BTreeMap::new();

    for observation in observations {
        let track = tracks
            .entry(observation.key.clone())
            .or_insert_with(|| StormTrack {
                key: observation.key.clone(),
                points: Vec::new(),
                untimed: Vec::new(),
            });
        if observation.timestamp.is_some() {
            track.points.push(observation);
        } else {
            track.untimed.push(observation);
        }
    }

    tracks.retain(|_, track| !track.points.is_empty());

    for track in tracks.values_mut() {
        // sort_by_key is stable, so equal timestamps keep input order
        track.points.sort_by_key(|o| o.timestamp);
    }

    tracing::trace!(storms = tracks.len(), "Grouped observations into storm tracks");
    tracks
}

/// Track for a single storm, if it has any timestamped observation
pub fn find_track<'a, I>(observations: I, key: &StormKey) -> Option<StormTrack<'a>>
where
    I: IntoIterator<Item = &'a Observation>,
{
    group_storms(observations.into_iter().filter(|o| &o.key == key)).remove(key)
}
