//! Everything the dashboard renders, derived from one snapshot

use serde::Serialize;

use crate::models::{
    AcePoint, CategoryCounts, IntensitySeries, SeasonStats, StormOption, StormSummary, TrackPath,
    TrackPoint, WindRadiiSeries,
};
use crate::series::{
    category_counts, cumulative_ace_by_date, intensity_view, season_stats, selected_wind_radii,
    storm_options, track_paths, track_points, RadiiModel, SimulatedRadii,
};
use crate::storms::{group_storms, summarize};

use super::store::StormState;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub year: i32,
    /// Selected storm, if it exists in the active year
    pub selected_storm: Option<StormSummary>,
    pub stats: SeasonStats,
    pub storms: Vec<StormSummary>,
    pub storm_options: Vec<StormOption>,
    pub category_counts: CategoryCounts,
    pub cumulative_ace: Vec<AcePoint>,
    pub intensity: Vec<IntensitySeries>,
    pub wind_radii: WindRadiiSeries,
    pub track_paths: Vec<TrackPath>,
    pub track_points: Vec<TrackPoint>,
}

impl DashboardView {
    pub fn derive(state: &StormState) -> Self {
        Self::derive_with(state, &SimulatedRadii)
    }

    /// Derive with a specific radii source.
    ///
    /// Season-wide views (stats, categories, ACE) ignore the selection. A
    /// selection that names no storm of the year is treated as no selection.
    pub fn derive_with<M: RadiiModel + ?Sized>(state: &StormState, radii: &M) -> Self {
        let active = state.active();
        let tracks = group_storms(active.iter().copied());

        let selected_track = state.selected.as_ref().and_then(|key| tracks.get(key));
        let selection = selected_track.map(|track| &track.key);

        tracing::debug!(
            year = state.year,
            observations = active.len(),
            storms = tracks.len(),
            selected = %state.selected_storm_id(),
            resolved = selection.is_some(),
            "Deriving dashboard view"
        );

        Self {
            year: state.year,
            selected_storm: selected_track.map(summarize),
            stats: season_stats(&state.observations, &active, state.year),
            storms: tracks.values().map(summarize).collect(),
            storm_options: storm_options(&active),
            category_counts: category_counts(active.iter().copied()),
            cumulative_ace: cumulative_ace_by_date(active.iter().copied()),
            intensity: intensity_view(&active, selection),
            wind_radii: selected_wind_radii(&active, selection, radii),
            track_paths: track_paths(&active, selection),
            track_points: track_points(&active, selection),
        }
    }
}
