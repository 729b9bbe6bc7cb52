//! Feed through store to derived dashboard views

use hurricane_lens::models::{CategoryCounts, Emphasis, StormKey};
use hurricane_lens::services::load_storm_data;
use hurricane_lens::{DashboardView, StormStore};

use crate::test_utils::{http_feed, mock_feed, SAMPLE_FEED};

async fn loaded_store() -> StormStore {
    let server = mock_feed(200, SAMPLE_FEED).await;
    let store = StormStore::new();
    load_storm_data(&http_feed(&server), &store)
        .await
        .expect("load succeeds");
    store
}

#[tokio::test]
async fn season_views_follow_year_selection() {
    let store = loaded_store().await;

    // default year has no data but still renders
    let view = DashboardView::derive(&store.snapshot());
    assert_eq!(view.year, 2024);
    assert_eq!(view.stats.total_storms, 0);
    assert_eq!(view.stats.available_years, vec![2021, 2022]);

    store.set_year(2021);
    let view = DashboardView::derive(&store.snapshot());
    assert_eq!(view.stats.total_storms, 2);
    assert_eq!(view.stats.strongest_wind_kt, 130.0);
    assert_eq!(view.category_counts, CategoryCounts([0, 1, 0, 0, 1, 0]));
    let ids: Vec<&str> = view.storm_options.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["ELSA-5", "IDA-9"]);
    assert_eq!(view.cumulative_ace.len(), 6);

    store.set_year(2022);
    let view = DashboardView::derive(&store.snapshot());
    assert_eq!(view.stats.total_storms, 1);
    assert_eq!(view.category_counts, CategoryCounts([0, 0, 0, 0, 0, 1]));
    assert_eq!(view.storms[0].max_wind_kt, 145.0);
}

#[tokio::test]
async fn storm_selection_drives_per_storm_views() {
    let store = loaded_store().await;
    store.set_year(2021);
    store.set_storm_id("IDA-9").expect("valid id");

    let view = DashboardView::derive(&store.snapshot());
    let selected = view.selected_storm.expect("IDA resolves");
    assert_eq!(selected.display_name, "IDA (9)");
    assert_eq!(selected.category, 4);

    assert_eq!(view.intensity.len(), 1);
    assert_eq!(view.intensity[0].winds, vec![35.0, 130.0, 60.0]);
    assert_eq!(view.intensity[0].pressures.len(), 3);

    assert_eq!(view.wind_radii.times.len(), 3);
    assert_eq!(view.wind_radii.landfall.map(|l| l.index), Some(1));

    for path in &view.track_paths {
        let expected = if path.key == StormKey::new("IDA", 9) {
            Emphasis::Highlighted
        } else {
            Emphasis::Dimmed
        };
        assert_eq!(path.emphasis, expected);
    }

    // same cyclone number in another season is a different storm
    store.set_year(2022);
    let view = DashboardView::derive(&store.snapshot());
    assert!(view.selected_storm.is_none());
    assert_eq!(store.snapshot().selected_storm_id(), "none");
}
