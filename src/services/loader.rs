//! One-shot load of the feed into the selection store

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::FeedError;
use crate::models::Observation;
use crate::state::StormStore;

use super::feed::StormFeed;
use super::parser::parse_feed;

/// Outcome of a successful load
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub rows: usize,
    pub accepted: usize,
    pub rejected: usize,
    pub undecodable: usize,
    pub untimed: usize,
}

/// Validate decoded CSV text into observations
pub fn observations_from_text(text: &str) -> Result<(Vec<Observation>, LoadReport), FeedError> {
    let parsed = parse_feed(text)?;
    let mut report = LoadReport {
        rows: parsed.rows.len() + parsed.undecodable,
        undecodable: parsed.undecodable,
        ..LoadReport::default()
    };

    let mut observations = Vec::with_capacity(parsed.rows.len());
    for row in parsed.rows {
        match Observation::from_row(row) {
            Ok(observation) => {
                if observation.timestamp.is_none() {
                    report.untimed += 1;
                }
                observations.push(observation);
            }
            Err(rejection) => {
                debug!(reason = %rejection, "Rejected feed row");
                report.rejected += 1;
            }
        }
    }
    report.accepted = observations.len();

    Ok((observations, report))
}

/// Fetch, decode and validate the feed, then `init` the store once.
///
/// On failure the store is left as it was and the error is both logged and
/// returned so a host can offer a retry.
pub async fn load_storm_data(
    feed: &dyn StormFeed,
    store: &StormStore,
) -> Result<LoadReport, FeedError> {
    let source = feed.describe();

    let loaded = match feed.fetch_text().await {
        Ok(text) => observations_from_text(&text),
        Err(e) => Err(e),
    };

    let (observations, report) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => {
            error!(source = %source, error = %e, "Failed to load storm data");
            return Err(e);
        }
    };

    if report.rejected > 0 || report.undecodable > 0 {
        warn!(
            rejected = report.rejected,
            undecodable = report.undecodable,
            "Some feed rows were dropped"
        );
    }

    store.init(observations);
    info!(
        source = %source,
        rows = report.rows,
        accepted = report.accepted,
        untimed = report.untimed,
        "Loaded storm data"
    );

    Ok(report)
}
