//! Unit tests for the wind-radii series

use hurricane_lens::models::{Observation, RadiiSample, StormKey};
use hurricane_lens::series::{selected_wind_radii, wind_radii, RadiiModel, SimulatedRadii};
use hurricane_lens::storms::group_storms;

use crate::fixtures::obs;

fn ten_point_track() -> Vec<Observation> {
    (0..10)
        .map(|i| obs("IDA", 9, &format!("2021-08-{:02} 00:00", i + 20), 30.0 + i as f64 * 10.0))
        .collect()
}

#[test]
fn test_simulated_radii_thresholds() {
    let model = SimulatedRadii;
    let weak = model.sample(0, &obs("ANA", 1, "2021-05-22", 40.0));
    assert_eq!(weak, RadiiSample { r34: 80.0, r50: 0.0, r64: 0.0 });

    let strong = model.sample(0, &obs("IDA", 9, "2021-08-29", 130.0));
    assert_eq!(strong.r34, 260.0);
    assert_eq!(strong.r50, 130.0);
    assert_eq!(strong.r64, 65.0);

    let calm = model.sample(0, &obs("ANA", 1, "2021-05-22", 0.0));
    assert_eq!(calm.r34, 20.0);
}

#[test]
fn test_series_shape_and_landfall_marker() {
    let feed = ten_point_track();
    let tracks = group_storms(&feed);
    let series = wind_radii(&tracks[&StormKey::new("IDA", 9)], &SimulatedRadii);

    assert!(series.simulated);
    assert_eq!(series.times.len(), 10);
    assert_eq!(series.r34.len(), 10);
    assert_eq!(series.r50.len(), 10);
    assert_eq!(series.r64.len(), 10);

    let landfall = series.landfall.unwrap();
    assert_eq!(landfall.index, 6);
    assert_eq!(landfall.timestamp, series.times[6]);
}

#[test]
fn test_landfall_index_for_short_tracks() {
    let model = SimulatedRadii;
    assert_eq!(model.landfall_index(0), None);
    assert_eq!(model.landfall_index(1), Some(0));
    assert_eq!(model.landfall_index(2), Some(1));
    assert_eq!(model.landfall_index(5), Some(3));
}

#[test]
fn test_unresolved_selection_gives_empty_series() {
    let feed = ten_point_track();
    let active: Vec<&Observation> = feed.iter().collect();
    let series = selected_wind_radii(&active, Some(&StormKey::new("NOPE", 99)), &SimulatedRadii);
    assert!(series.is_empty());
    assert!(series.landfall.is_none());
}

struct MeasuredRadii;

impl RadiiModel for MeasuredRadii {
    fn sample(&self, _index: usize, _observation: &Observation) -> RadiiSample {
        RadiiSample { r34: 120.0, r50: 60.0, r64: 25.0 }
    }

    fn is_simulated(&self) -> bool {
        false
    }

    fn landfall_index(&self, _len: usize) -> Option<usize> {
        None
    }
}

#[test]
fn test_custom_model_replaces_simulation() {
    let feed = ten_point_track();
    let active: Vec<&Observation> = feed.iter().collect();
    let series = selected_wind_radii(&active, Some(&StormKey::new("IDA", 9)), &MeasuredRadii);
    assert!(!series.simulated);
    assert!(series.r64.iter().all(|&r| r == 25.0));
    assert!(series.landfall.is_none());
}
