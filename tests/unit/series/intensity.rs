//! Unit tests for wind/pressure series

use hurricane_lens::classification::color;
use hurricane_lens::models::StormKey;
use hurricane_lens::series::{intensity_view, season_observations, selected_intensity, storm_intensity};
use hurricane_lens::storms::group_storms;

use crate::fixtures::{at, two_storm_feed};

#[test]
fn test_winds_dense_pressures_sparse() {
    let feed = two_storm_feed();
    let tracks = group_storms(&feed);
    let series = storm_intensity(&tracks[&StormKey::new("ALPHA", 1)]);

    assert_eq!(series.winds, vec![45.0, 70.0, 90.0]);
    assert_eq!(series.times.len(), 3);
    assert_eq!(series.colors, vec![color(45.0), color(70.0), color(90.0)]);
    assert_eq!(series.pressures.len(), 2);
    assert_eq!(series.pressures[0].timestamp, at("2021-08-01 00:00"));
    assert_eq!(series.pressures[1].min_pressure_mb, 975.0);
    assert_eq!(series.max_wind_kt, 90.0);
    assert_eq!(series.label, "ALPHA (1) – 90 kt");
}

#[test]
fn test_unresolved_selection_is_empty() {
    let feed = two_storm_feed();
    let season = season_observations(&feed, 2021);

    let missing = StormKey::new("BRAVO", 2);
    assert!(selected_intensity(&season, Some(&missing)).is_empty());
    assert!(selected_intensity(&season, None).is_empty());
}

#[test]
fn test_intensity_view_respects_selection() {
    let mut feed = two_storm_feed();
    feed.push(crate::fixtures::obs("CHARLIE", 3, "2021-09-01 00:00", 50.0));
    let season = season_observations(&feed, 2021);

    assert_eq!(intensity_view(&season, None).len(), 2);

    let key = StormKey::new("CHARLIE", 3);
    let selected = intensity_view(&season, Some(&key));
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].key, Some(key));
}
