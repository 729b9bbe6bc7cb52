//! Wind and pressure series per storm

use crate::classification::color;
use crate::models::{IntensitySeries, Observation, PressureReading, StormKey};
use crate::storms::{find_track, group_storms, StormTrack};

/// Wind and pressure along one track.
///
/// Winds cover every timestamped point; pressures only the points that
/// carry a reading.
pub fn storm_intensity(track: &StormTrack<'_>) -> IntensitySeries {
    let max_wind_kt = track.max_wind_kt();
    let mut series = IntensitySeries {
        key: Some(track.key.clone()),
        label: intensity_label(&track.display_name(), max_wind_kt),
        max_wind_kt,
        ..IntensitySeries::default()
    };

    for point in &track.points {
        let Some(timestamp) = point.timestamp else {
            continue;
        };
        series.times.push(timestamp);
        series.winds.push(point.max_wind_kt);
        series.colors.push(color(point.max_wind_kt));
        if let Some(min_pressure_mb) = point.min_pressure_mb {
            series.pressures.push(PressureReading {
                timestamp,
                min_pressure_mb,
            });
        }
    }

    series
}

/// Series for the selected storm; the empty series when nothing is selected
/// or the selection is not among `active`.
pub fn selected_intensity(
    active: &[&Observation],
    selection: Option<&StormKey>,
) -> IntensitySeries {
    selection
        .and_then(|key| find_track(active.iter().copied(), key))
        .map(|track| storm_intensity(&track))
        .unwrap_or_default()
}

/// One series per storm of the season, or just the selected one
pub fn intensity_view(
    active: &[&Observation],
    selection: Option<&StormKey>,
) -> Vec<IntensitySeries> {
    group_storms(active.iter().copied())
        .values()
        .filter(|track| selection.map_or(true, |key| &track.key == key))
        .map(storm_intensity)
        .collect()
}

fn intensity_label(display_name: &str, max_wind_kt: f64) -> String {
    format!("{} – {} kt", display_name, max_wind_kt)
}
