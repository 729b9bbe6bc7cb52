//! Cumulative ACE by calendar date

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::classification::ace_contribution;
use crate::models::{AcePoint, Observation};

/// ACE summed per UTC calendar day across all storms, then accumulated in
/// date order. Observations without a timestamp are skipped.
pub fn cumulative_ace_by_date<'a, I>(observations: I) -> Vec<AcePoint>
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for observation in observations {
        if let Some(date) = observation.date() {
            *daily.entry(date).or_insert(0.0) += ace_contribution(observation.max_wind_kt);
        }
    }

    let mut running_total = 0.0;
    daily
        .into_iter()
        .map(|(date, ace)| {
            running_total += ace;
            AcePoint {
                date,
                cumulative_ace: running_total,
            }
        })
        .collect()
}

/// Season total: the last cumulative value, or zero
pub fn season_ace(points: &[AcePoint]) -> f64 {
    points.last().map(|p| p.cumulative_ace).unwrap_or(0.0)
}
