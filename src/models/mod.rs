//! Shared data models spanning the engine layers.

pub mod feed_row;
pub mod observation;
pub mod views;

pub use feed_row::{FeedRow, REQUIRED_COLUMNS};
pub use crate::error::ParseStormKeyError;
pub use observation::{display_name, parse_timestamp, Observation, StormKey};
pub use views::{
    AcePoint, CategoryCounts, Emphasis, IntensitySeries, Landfall, PressureReading, RadiiSample,
    SeasonStats, StormOption, StormSummary, TrackPath, TrackPoint, WindRadiiSeries,
};
