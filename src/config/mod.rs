//! Environment-driven configuration
//!
//! Every knob has a default so the engine runs with an empty environment.
//! The binary loads `.env` (via `dotenvy`) before anything here is read.

use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::FeedError;
use crate::models::StormKey;

/// Public Atlantic best-track extract, 2010 through 2024
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/MiamiCrypto/hurricane-lens/refs/heads/main/data/atl_2010_2024_clean.csv";

pub const DEFAULT_YEAR: i32 = 2024;
/// Seasons covered by the default feed; the year selector is bounded to these
pub const MIN_YEAR: i32 = 2010;
pub const MAX_YEAR: i32 = 2024;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where the observation feed is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedLocation {
    Http(Url),
    File(PathBuf),
}

impl FeedLocation {
    /// Interpret a raw location string: `http(s)://` and `file://` are URLs,
    /// anything else is a local path.
    pub fn parse(raw: &str) -> Result<Self, FeedError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(FeedError::InvalidLocation("empty feed location".to_string()));
        }

        if raw.contains("://") {
            let url = Url::parse(raw)
                .map_err(|e| FeedError::InvalidLocation(format!("{}: {}", raw, e)))?;
            return match url.scheme() {
                "http" | "https" => Ok(Self::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(Self::File)
                    .map_err(|_| FeedError::InvalidLocation(raw.to_string())),
                other => Err(FeedError::InvalidLocation(format!(
                    "unsupported scheme '{}' in {}",
                    other, raw
                ))),
            };
        }

        Ok(Self::File(PathBuf::from(raw)))
    }
}

impl std::fmt::Display for FeedLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(url) => write!(f, "{}", url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Session configuration assembled from the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    pub feed: FeedLocation,
    pub request_timeout: Duration,
    pub initial_year: i32,
    pub initial_storm: Option<StormKey>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            feed: FeedLocation::Http(
                Url::parse(DEFAULT_FEED_URL).expect("default feed url is valid"),
            ),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            initial_year: DEFAULT_YEAR,
            initial_storm: None,
        }
    }
}

impl Config {
    /// Read the whole configuration from the environment
    pub fn from_env() -> Result<Self, FeedError> {
        Ok(Self {
            environment: get_environment(),
            feed: get_feed_location()?,
            request_timeout: get_request_timeout(),
            initial_year: get_initial_year(),
            initial_storm: get_initial_storm(),
        })
    }
}

/// `APP_ENV`, lowercased; `sandbox` when unset
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.to_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

pub fn get_feed_location() -> Result<FeedLocation, FeedError> {
    let raw = env::var("STORM_FEED_URL").unwrap_or_else(|_| DEFAULT_FEED_URL.to_string());
    FeedLocation::parse(&raw)
}

pub fn get_request_timeout() -> Duration {
    let secs = env::var("STORM_FEED_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

pub fn year_range() -> RangeInclusive<i32> {
    MIN_YEAR..=MAX_YEAR
}

pub fn get_initial_year() -> i32 {
    parse_initial_year(env::var("STORM_YEAR").ok().as_deref())
}

/// Unparseable or out-of-range years fall back to [`DEFAULT_YEAR`]
pub fn parse_initial_year(raw: Option<&str>) -> i32 {
    let Some(raw) = raw else {
        return DEFAULT_YEAR;
    };
    match raw.trim().parse::<i32>() {
        Ok(year) if year_range().contains(&year) => year,
        Ok(year) => {
            tracing::warn!(
                year,
                min = MIN_YEAR,
                max = MAX_YEAR,
                "STORM_YEAR out of range, using default"
            );
            DEFAULT_YEAR
        }
        Err(e) => {
            tracing::warn!(storm_year = %raw, error = %e, "Ignoring unparseable STORM_YEAR");
            DEFAULT_YEAR
        }
    }
}

/// `STORM_ID` in `NAME-number` form; unparseable ids are ignored
pub fn get_initial_storm() -> Option<StormKey> {
    let raw = env::var("STORM_ID").ok()?;
    match raw.parse::<StormKey>() {
        Ok(key) => Some(key),
        Err(e) => {
            tracing::warn!(storm_id = %raw, error = %e, "Ignoring unparseable STORM_ID");
            None
        }
    }
}
