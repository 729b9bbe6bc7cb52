//! View contracts: the shapes derivations hand to rendering components

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::observation::StormKey;

/// Peak-intensity summary of one storm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormSummary {
    pub key: StormKey,
    pub id: String,
    pub display_name: String,
    pub max_wind_kt: f64,
    pub category: u8,
}

/// Running ACE total at the end of one calendar day (UTC)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AcePoint {
    pub date: NaiveDate,
    pub cumulative_ace: f64,
}

/// Distinct storms per peak category, indices 0 (tropical storm) to 5
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts(pub [usize; 6]);

impl CategoryCounts {
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    pub fn get(&self, category: u8) -> usize {
        self.0.get(category as usize).copied().unwrap_or(0)
    }
}

/// A pressure reading; only observations that carry one appear
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressureReading {
    pub timestamp: DateTime<Utc>,
    pub min_pressure_mb: f64,
}

/// Wind and pressure over one storm's lifetime.
///
/// `times`, `winds` and `colors` are index-aligned; `pressures` is sparse
/// and must not be indexed alongside them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IntensitySeries {
    pub key: Option<StormKey>,
    pub label: String,
    pub times: Vec<DateTime<Utc>>,
    pub winds: Vec<f64>,
    pub colors: Vec<&'static str>,
    pub pressures: Vec<PressureReading>,
    pub max_wind_kt: f64,
}

impl IntensitySeries {
    pub fn is_empty(&self) -> bool {
        self.winds.is_empty()
    }
}

/// Radii (nautical miles) of 34, 50 and 64 kt winds at one track point
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadiiSample {
    pub r34: f64,
    pub r50: f64,
    pub r64: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landfall {
    pub index: usize,
    pub timestamp: DateTime<Utc>,
}

/// Wind-radii growth of one storm.
///
/// When `simulated` is set the radii are synthesized from wind speed and the
/// landfall marker is a visual annotation, not an observed event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindRadiiSeries {
    pub key: Option<StormKey>,
    pub label: String,
    pub times: Vec<DateTime<Utc>>,
    pub r34: Vec<f64>,
    pub r50: Vec<f64>,
    pub r64: Vec<f64>,
    pub landfall: Option<Landfall>,
    pub simulated: bool,
}

impl WindRadiiSeries {
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Entry in the storm selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StormOption {
    pub key: StormKey,
    pub id: String,
    pub label: String,
}

/// How strongly a map feature is drawn relative to the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Normal,
    Highlighted,
    Dimmed,
}

/// Polyline of one storm's plottable positions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPath {
    pub key: StormKey,
    pub display_name: String,
    pub color: &'static str,
    pub emphasis: Emphasis,
    pub positions: Vec<(f64, f64)>,
}

/// Map marker for a single plottable observation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackPoint {
    pub key: StormKey,
    pub display_name: String,
    pub timestamp: DateTime<Utc>,
    pub position: (f64, f64),
    pub max_wind_kt: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pressure_mb: Option<f64>,
    pub color: &'static str,
    pub emphasis: Emphasis,
}

/// Headline numbers for the selected season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonStats {
    pub year: i32,
    pub total_storms: usize,
    pub strongest_wind_kt: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update: Option<DateTime<Utc>>,
    pub available_years: Vec<i32>,
    /// Inclusive bounds of the year selector
    pub year_range: (i32, i32),
}
