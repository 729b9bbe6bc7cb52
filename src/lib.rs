//! Hurricane Lens: storm-track aggregation and derivation engine.
//!
//! Turns a flat table of storm observations into the per-storm, per-category
//! and per-date structures a dashboard renders.

pub mod classification;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod series;
pub mod services;
pub mod state;
pub mod storms;

pub use error::{FeedError, ParseStormKeyError, RowRejection};
pub use models::{Observation, StormKey};
pub use state::{DashboardView, StormState, StormStore};
