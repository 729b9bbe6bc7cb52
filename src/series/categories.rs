//! Storm counts per peak category

use crate::classification::category;
use crate::models::{CategoryCounts, Observation};
use crate::storms::peak_by_storm;

/// Bucket distinct storms by the category of their peak wind.
///
/// Counts sum to the number of distinct storms, not observations.
pub fn category_counts<'a, I>(observations: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a Observation>,
{
    let mut counts = CategoryCounts::default();
    for peak in peak_by_storm(observations).values() {
        counts.0[usize::from(category(peak.max_wind_kt))] += 1;
    }
    counts
}
