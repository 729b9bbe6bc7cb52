//! Raw feed row as it appears in the CSV

use serde::{Deserialize, Serialize};

/// One CSV row with every column optional.
///
/// Numeric cells that do not parse decode as `None` rather than failing the
/// row; turning a row into an [`Observation`](super::Observation) is the only
/// place that decides what a gap means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedRow {
    #[serde(rename = "StormName", default)]
    pub storm_name: Option<String>,
    #[serde(rename = "CycloneNum", default)]
    pub cyclone_num: Option<String>,
    #[serde(rename = "Basin", default)]
    pub basin: Option<String>,
    #[serde(rename = "DateTime", default)]
    pub date_time: Option<String>,
    #[serde(
        rename = "MaxWind_kt",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub max_wind_kt: Option<f64>,
    #[serde(
        rename = "MinPressure_mb",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub min_pressure_mb: Option<f64>,
    #[serde(rename = "Latitude", default, deserialize_with = "csv::invalid_option")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default, deserialize_with = "csv::invalid_option")]
    pub longitude: Option<f64>,
}

/// Columns the feed header must carry
pub const REQUIRED_COLUMNS: [&str; 4] = ["StormName", "CycloneNum", "DateTime", "MaxWind_kt"];
