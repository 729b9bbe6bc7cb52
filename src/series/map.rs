//! Map layers: storm paths and observation markers

use crate::classification::{category, category_color, color};
use crate::models::{Emphasis, Observation, StormKey, TrackPath, TrackPoint};
use crate::storms::group_storms;

/// Fewest positions that make a drawable path
pub const MIN_PATH_POSITIONS: usize = 2;

pub fn emphasis_for(key: &StormKey, selection: Option<&StormKey>) -> Emphasis {
    match selection {
        None => Emphasis::Normal,
        Some(selected) if selected == key => Emphasis::Highlighted,
        Some(_) => Emphasis::Dimmed,
    }
}

/// One path per storm through its plottable positions in time order,
/// coloured by the storm's peak category. Storms with fewer than two
/// positions are omitted.
pub fn track_paths(active: &[&Observation], selection: Option<&StormKey>) -> Vec<TrackPath> {
    group_storms(active.iter().copied())
        .values()
        .filter_map(|track| {
            let positions: Vec<(f64, f64)> =
                track.points.iter().filter_map(|o| o.position).collect();
            if positions.len() < MIN_PATH_POSITIONS {
                return None;
            }
            Some(TrackPath {
                key: track.key.clone(),
                display_name: track.display_name(),
                color: category_color(category(track.max_wind_kt())),
                emphasis: emphasis_for(&track.key, selection),
                positions,
            })
        })
        .collect()
}

/// A marker for every timestamped, plottable observation, coloured by its
/// own wind speed
pub fn track_points(active: &[&Observation], selection: Option<&StormKey>) -> Vec<TrackPoint> {
    active
        .iter()
        .filter_map(|o| {
            let timestamp = o.timestamp?;
            let position = o.position?;
            Some(TrackPoint {
                key: o.key.clone(),
                display_name: o.display_name.clone(),
                timestamp,
                position,
                max_wind_kt: o.max_wind_kt,
                min_pressure_mb: o.min_pressure_mb,
                color: color(o.max_wind_kt),
                emphasis: emphasis_for(&o.key, selection),
            })
        })
        .collect()
}
