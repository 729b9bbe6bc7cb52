//! Wind-radii growth per storm
//!
//! The feed carries no radii, so [`SimulatedRadii`] synthesizes them from
//! wind speed. Output built from it is flagged `simulated` and must not be
//! presented as measured data. A model backed by real radii can replace it
//! through [`RadiiModel`].

use crate::models::{Landfall, Observation, RadiiSample, StormKey, WindRadiiSeries};
use crate::storms::{find_track, StormTrack};

/// Fraction of a track's length at which the landfall marker is placed
pub const LANDFALL_FRACTION: f64 = 0.6;

/// Source of wind radii for track points
pub trait RadiiModel {
    /// Radii at the `index`-th point of a track
    fn sample(&self, index: usize, observation: &Observation) -> RadiiSample;

    /// Whether samples are synthesized rather than observed
    fn is_simulated(&self) -> bool;

    /// Index of the landfall marker for a track of `len` points
    fn landfall_index(&self, len: usize) -> Option<usize>;
}

/// Placeholder radii derived from wind speed alone
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedRadii;

impl RadiiModel for SimulatedRadii {
    fn sample(&self, index: usize, observation: &Observation) -> RadiiSample {
        let wind = observation.max_wind_kt;

        // Sinusoid is purely for visual variation along the track
        let r34 = (wind * 2.0).clamp(20.0, 300.0) + (index as f64 * 0.5).sin() * 40.0;
        let r50 = if wind >= 50.0 { wind.clamp(10.0, 200.0) } else { 0.0 };
        let r64 = if wind >= 64.0 { (wind / 2.0).clamp(5.0, 100.0) } else { 0.0 };

        RadiiSample { r34, r50, r64 }
    }

    fn is_simulated(&self) -> bool {
        true
    }

    fn landfall_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(((len as f64 * LANDFALL_FRACTION).floor() as usize).min(len - 1))
    }
}

/// Radii series along one track
pub fn wind_radii<M: RadiiModel + ?Sized>(track: &StormTrack<'_>, model: &M) -> WindRadiiSeries {
    let mut series = WindRadiiSeries {
        key: Some(track.key.clone()),
        label: format!("{} - wind-radii growth", track.display_name()),
        simulated: model.is_simulated(),
        ..WindRadiiSeries::default()
    };

    for (index, point) in track.points.iter().enumerate() {
        let Some(timestamp) = point.timestamp else {
            continue;
        };
        let sample = model.sample(index, point);
        series.times.push(timestamp);
        series.r34.push(sample.r34);
        series.r50.push(sample.r50);
        series.r64.push(sample.r64);
    }

    series.landfall = model
        .landfall_index(series.times.len())
        .and_then(|index| {
            series
                .times
                .get(index)
                .map(|&timestamp| Landfall { index, timestamp })
        });

    series
}

/// Radii for the selected storm; empty when nothing resolves
pub fn selected_wind_radii<M: RadiiModel + ?Sized>(
    active: &[&Observation],
    selection: Option<&StormKey>,
    model: &M,
) -> WindRadiiSeries {
    selection
        .and_then(|key| find_track(active.iter().copied(), key))
        .map(|track| wind_radii(&track, model))
        .unwrap_or_default()
}
