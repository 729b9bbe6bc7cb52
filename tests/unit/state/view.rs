//! Unit tests for the dashboard view bundle

use hurricane_lens::models::{CategoryCounts, Emphasis, StormKey};
use hurricane_lens::{DashboardView, StormStore};

use crate::fixtures::{obs, two_storm_feed};

fn loaded_store() -> StormStore {
    let store = StormStore::new();
    let mut feed = two_storm_feed();
    feed.push(obs("ALPHA", 1, "2021-08-02 12:00", 60.0).with_position(25.0, -70.0));
    feed.push(obs("ALPHA", 1, "2021-08-03 00:00", 50.0).with_position(27.0, -72.0));
    feed.push(obs("CHARLIE", 3, "2021-09-01 00:00", 40.0).with_position(15.0, -40.0));
    feed.push(obs("CHARLIE", 3, "2021-09-01 12:00", 45.0).with_position(16.0, -42.0));
    store.init(feed);
    store
}

#[test]
fn test_two_storm_scenario() {
    let store = StormStore::new();
    store.init(two_storm_feed());

    store.set_year(2021);
    let view = DashboardView::derive(&store.snapshot());
    assert_eq!(view.stats.total_storms, 1);
    assert_eq!(view.category_counts, CategoryCounts([0, 0, 1, 0, 0, 0]));

    store.set_year(2022);
    let view = DashboardView::derive(&store.snapshot());
    assert_eq!(view.stats.total_storms, 1);
    assert_eq!(view.category_counts, CategoryCounts([0, 0, 0, 0, 0, 1]));
    assert_eq!(view.storms[0].max_wind_kt, 150.0);
    // only the timestamped observation takes part in ordering
    assert_eq!(view.cumulative_ace.len(), 1);
}

#[test]
fn test_no_selection_shows_whole_season() {
    let store = loaded_store();
    store.set_year(2021);
    let view = DashboardView::derive(&store.snapshot());

    assert!(view.selected_storm.is_none());
    assert_eq!(view.storms.len(), 2);
    assert_eq!(view.storm_options.len(), 2);
    assert_eq!(view.intensity.len(), 2);
    assert!(view.wind_radii.is_empty());
    assert_eq!(view.track_paths.len(), 2);
    assert!(view.track_paths.iter().all(|p| p.emphasis == Emphasis::Normal));
}

#[test]
fn test_selection_narrows_per_storm_views() {
    let store = loaded_store();
    store.set_year(2021);
    store.set_storm(Some(StormKey::new("CHARLIE", 3)));
    let view = DashboardView::derive(&store.snapshot());

    assert_eq!(view.selected_storm.as_ref().unwrap().id, "CHARLIE-3");
    assert_eq!(view.intensity.len(), 1);
    assert_eq!(view.wind_radii.times.len(), 2);
    assert!(view.wind_radii.simulated);
    // season-wide views ignore the selection
    assert_eq!(view.category_counts.total(), 2);
    assert_eq!(view.stats.total_storms, 2);

    let charlie = view
        .track_paths
        .iter()
        .find(|p| p.key == StormKey::new("CHARLIE", 3))
        .unwrap();
    assert_eq!(charlie.emphasis, Emphasis::Highlighted);
    assert!(view
        .track_paths
        .iter()
        .filter(|p| p.key != charlie.key)
        .all(|p| p.emphasis == Emphasis::Dimmed));
}

#[test]
fn test_selection_from_another_year_is_treated_as_none() {
    let store = loaded_store();
    store.set_year(2021);
    store.set_storm(Some(StormKey::new("BRAVO", 2)));
    let view = DashboardView::derive(&store.snapshot());

    assert!(view.selected_storm.is_none());
    assert!(view.wind_radii.is_empty());
    assert_eq!(view.intensity.len(), 2);
    assert!(view.track_paths.iter().all(|p| p.emphasis == Emphasis::Normal));
}

#[test]
fn test_empty_store_renders_empty_view() {
    let view = DashboardView::derive(&StormStore::new().snapshot());
    assert_eq!(view.year, 2024);
    assert!(view.storms.is_empty());
    assert!(view.cumulative_ace.is_empty());
    assert_eq!(view.category_counts.total(), 0);
    assert!(view.track_points.is_empty());
}

#[test]
fn test_view_serializes_to_json() {
    let store = loaded_store();
    store.set_year(2021);
    let json = serde_json::to_value(DashboardView::derive(&store.snapshot())).unwrap();
    assert_eq!(json["year"], 2021);
    assert_eq!(json["category_counts"], serde_json::json!([1, 0, 1, 0, 0, 0]));
    assert_eq!(json["track_paths"][0]["emphasis"], "normal");
}
