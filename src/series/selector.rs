//! Storm selector options

use crate::models::{Observation, StormOption};
use crate::storms::{group_storms, summarize};

/// One option per storm in the season, ordered by cyclone number and then
/// label. "All storms" is the absence of a selection and is not listed.
pub fn storm_options(active: &[&Observation]) -> Vec<StormOption> {
    let mut options: Vec<StormOption> = group_storms(active.iter().copied())
        .values()
        .map(|track| {
            let summary = summarize(track);
            StormOption {
                label: format!("{} – {} kt", summary.display_name, summary.max_wind_kt),
                id: summary.id,
                key: summary.key,
            }
        })
        .collect();

    options.sort_by(|a, b| {
        a.key
            .cyclone_number
            .cmp(&b.key.cyclone_number)
            .then_with(|| a.label.cmp(&b.label))
    });
    options
}
