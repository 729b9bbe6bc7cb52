//! Storm identity and the validated observation record

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::classification::category;
use crate::error::{ParseStormKeyError, RowRejection};
use crate::models::feed_row::FeedRow;

/// Basin prefix used in fallback labels when the feed carries none
pub const DEFAULT_BASIN: &str = "AL";

const UNNAMED: &str = "UNNAMED";

/// Structured grouping key for a storm: name plus cyclone number.
///
/// Ordering is by cyclone number first so that sorted keys follow the
/// order in which storms formed during a season.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StormKey {
    pub name: Option<String>,
    pub cyclone_number: u32,
}

impl StormKey {
    pub fn new(name: impl Into<String>, cyclone_number: u32) -> Self {
        Self {
            name: normalize_name(Some(name.into())),
            cyclone_number,
        }
    }

    pub fn unnamed(cyclone_number: u32) -> Self {
        Self {
            name: None,
            cyclone_number,
        }
    }

    /// String id in `NAME-number` form
    pub fn id(&self) -> String {
        self.to_string()
    }
}

impl Ord for StormKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.cyclone_number
            .cmp(&other.cyclone_number)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for StormKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for StormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.name.as_deref().unwrap_or(UNNAMED),
            self.cyclone_number
        )
    }
}

impl FromStr for StormKey {
    type Err = ParseStormKeyError;

    /// Splits on the last `-`, so names that themselves contain `-` survive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, number) = s
            .trim()
            .rsplit_once('-')
            .ok_or_else(|| ParseStormKeyError(s.to_string()))?;
        let cyclone_number = number
            .parse::<u32>()
            .map_err(|_| ParseStormKeyError(s.to_string()))?;
        Ok(Self {
            name: normalize_name(Some(name.to_string())),
            cyclone_number,
        })
    }
}

/// One (storm, instant) measurement, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub key: StormKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub basin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub max_wind_kt: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_pressure_mb: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<(f64, f64)>,
    pub category: u8,
    pub display_name: String,
}

impl Observation {
    pub fn new(key: StormKey, timestamp: Option<DateTime<Utc>>, max_wind_kt: f64) -> Self {
        let max_wind_kt = sanitize_wind(Some(max_wind_kt));
        let display_name = display_name(&key, None);
        Self {
            key,
            basin: None,
            timestamp,
            max_wind_kt,
            min_pressure_mb: None,
            position: None,
            category: category(max_wind_kt),
            display_name,
        }
    }

    pub fn with_pressure(mut self, min_pressure_mb: f64) -> Self {
        self.min_pressure_mb = Some(min_pressure_mb).filter(|p| p.is_finite());
        self
    }

    pub fn with_position(mut self, latitude: f64, longitude: f64) -> Self {
        self.position = plottable(Some(latitude), Some(longitude));
        self
    }

    pub fn with_basin(mut self, basin: impl Into<String>) -> Self {
        let basin = basin.into().trim().to_uppercase();
        self.basin = Some(basin).filter(|b| !b.is_empty());
        self.display_name = display_name(&self.key, self.basin.as_deref());
        self
    }

    /// Validate a loosely-typed feed row. Only a missing or malformed cyclone
    /// number rejects the row; every other gap becomes an explicit absence.
    pub fn from_row(row: FeedRow) -> Result<Self, RowRejection> {
        let cyclone_number = parse_cyclone_number(row.cyclone_num.as_deref())?;
        let key = StormKey {
            name: normalize_name(row.storm_name),
            cyclone_number,
        };
        let timestamp = row.date_time.as_deref().and_then(parse_timestamp);

        let mut observation = Self::new(key, timestamp, sanitize_wind(row.max_wind_kt));
        observation.min_pressure_mb = row.min_pressure_mb.filter(|p| p.is_finite());
        observation.position = plottable(row.latitude, row.longitude);
        if let Some(basin) = row.basin {
            observation = observation.with_basin(basin);
        }
        Ok(observation)
    }

    pub fn year(&self) -> Option<i32> {
        self.timestamp.map(|t| t.year())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|t| t.date_naive())
    }
}

/// `NAME (n)` for named storms, basin prefix plus number otherwise
pub fn display_name(key: &StormKey, basin: Option<&str>) -> String {
    match &key.name {
        Some(name) => format!("{} ({})", name, key.cyclone_number),
        None => format!(
            "{}{:02}",
            basin.unwrap_or(DEFAULT_BASIN),
            key.cyclone_number
        ),
    }
}

fn normalize_name(name: Option<String>) -> Option<String> {
    let name = name?;
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNNAMED) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_cyclone_number(raw: Option<&str>) -> Result<u32, RowRejection> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(RowRejection::MissingCycloneNumber)?;

    if let Ok(n) = raw.parse::<u32>() {
        return Ok(n);
    }

    // Spreadsheet exports sometimes write integers as `5.0`
    match raw.parse::<f64>() {
        Ok(n) if n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX) => Ok(n as u32),
        _ => Err(RowRejection::InvalidCycloneNumber(raw.to_string())),
    }
}

fn sanitize_wind(wind: Option<f64>) -> f64 {
    match wind {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => 0.0,
    }
}

fn plottable(latitude: Option<f64>, longitude: Option<f64>) -> Option<(f64, f64)> {
    match (latitude, longitude) {
        (Some(lat), Some(lon))
            if lat.is_finite() && lon.is_finite() && (-90.0..=90.0).contains(&lat) =>
        {
            Some((lat, lon))
        }
        _ => None,
    }
}

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a feed timestamp as UTC. Unrecognized text is treated as missing.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Some(t.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}
