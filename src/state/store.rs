//! Selection store
//!
//! Holds the loaded observations, the active year and the selected storm.
//! Every mutation publishes a complete new snapshot through a
//! `tokio::sync::watch` channel, so readers never see a half-applied update
//! and subscribers are told to recompute from the latest snapshot.

use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::config::{Config, DEFAULT_YEAR};
use crate::models::{Observation, ParseStormKeyError, StormKey};
use crate::series::season_observations;

/// Ids that mean "no storm selected"
const NO_SELECTION_IDS: [&str; 3] = ["", "none", "all"];

/// One consistent snapshot of the selection state
#[derive(Debug, Clone, PartialEq)]
pub struct StormState {
    pub observations: Arc<[Observation]>,
    pub year: i32,
    pub selected: Option<StormKey>,
}

impl StormState {
    pub fn with_year(year: i32) -> Self {
        Self {
            observations: Arc::from(Vec::new()),
            year,
            selected: None,
        }
    }

    /// Observations of the active year
    pub fn active(&self) -> Vec<&Observation> {
        season_observations(&self.observations, self.year)
    }

    /// Selected storm id, or `"none"`
    pub fn selected_storm_id(&self) -> String {
        self.selected
            .as_ref()
            .map(StormKey::id)
            .unwrap_or_else(|| "none".to_string())
    }
}

impl Default for StormState {
    fn default() -> Self {
        Self::with_year(DEFAULT_YEAR)
    }
}

/// Single-writer store shared by every view of a session
pub struct StormStore {
    initial_year: i32,
    tx: watch::Sender<StormState>,
}

impl StormStore {
    pub fn new() -> Self {
        Self::with_year(DEFAULT_YEAR)
    }

    pub fn with_year(year: i32) -> Self {
        let (tx, _rx) = watch::channel(StormState::with_year(year));
        Self {
            initial_year: year,
            tx,
        }
    }

    /// Store seeded with the configured year and optional storm
    pub fn from_config(config: &Config) -> Self {
        let store = Self::with_year(config.initial_year);
        if config.initial_storm.is_some() {
            store.set_storm(config.initial_storm.clone());
        }
        store
    }

    /// Replace the whole observation set; year and selection are untouched
    pub fn init(&self, observations: Vec<Observation>) {
        let count = observations.len();
        self.tx.send_modify(|state| {
            state.observations = Arc::from(observations);
        });
        info!(observations = count, "Storm store initialized");
    }

    /// Change the active year. The selected storm is cleared since a storm id
    /// does not carry across seasons.
    pub fn set_year(&self, year: i32) {
        self.tx.send_modify(|state| {
            state.year = year;
            state.selected = None;
        });
        debug!(year = year, "Year selected");
    }

    /// Select a storm, or `None` for every storm of the year. The key is not
    /// checked against the loaded data.
    pub fn set_storm(&self, selection: Option<StormKey>) {
        debug!(
            storm = %selection.as_ref().map(StormKey::id).unwrap_or_else(|| "none".to_string()),
            "Storm selected"
        );
        self.tx.send_modify(|state| {
            state.selected = selection;
        });
    }

    /// Select by string id; `none`, `all` and the empty string clear the
    /// selection
    pub fn set_storm_id(&self, id: &str) -> Result<(), ParseStormKeyError> {
        let id = id.trim();
        if NO_SELECTION_IDS.iter().any(|none| none.eq_ignore_ascii_case(id)) {
            self.set_storm(None);
            return Ok(());
        }
        let key = id.parse::<StormKey>()?;
        self.set_storm(Some(key));
        Ok(())
    }

    /// Back to the empty session state, as on a full reload
    pub fn reset(&self) {
        self.tx.send_replace(StormState::with_year(self.initial_year));
        debug!("Storm store reset");
    }

    pub fn snapshot(&self) -> StormState {
        self.tx.borrow().clone()
    }

    /// Receiver notified after every mutation
    pub fn subscribe(&self) -> watch::Receiver<StormState> {
        self.tx.subscribe()
    }
}

impl Default for StormStore {
    fn default() -> Self {
        Self::new()
    }
}
