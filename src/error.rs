//! Error types for the feed boundary
//!
//! Derivations past the load boundary are total, so these are the only
//! failure types in the crate.

use thiserror::Error;

/// Failure to fetch or decode the observation feed as a whole
#[derive(Error, Debug)]
pub enum FeedError {
    #[error("Invalid feed location: {0}")]
    InvalidLocation(String),
    #[error("Feed request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Feed request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("Failed to read feed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to decode feed: {0}")]
    Csv(#[from] csv::Error),
    #[error("Feed is missing required column '{0}'")]
    MissingColumn(&'static str),
}

/// Why a single feed row did not become an observation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowRejection {
    #[error("row has no cyclone number")]
    MissingCycloneNumber,
    #[error("cyclone number {0} is not a non-negative integer")]
    InvalidCycloneNumber(String),
}

/// A storm id that is not in `NAME-number` form
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid storm id '{0}', expected NAME-number")]
pub struct ParseStormKeyError(pub String);
