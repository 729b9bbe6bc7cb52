//! CSV decoding of the feed

use tracing::warn;

use crate::error::FeedError;
use crate::models::{FeedRow, REQUIRED_COLUMNS};

/// Decoded rows plus the number of rows that could not be decoded
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFeed {
    pub rows: Vec<FeedRow>,
    pub undecodable: usize,
}

/// Decode CSV text with a header row.
///
/// A missing required column fails the whole feed; a malformed row is
/// skipped and counted.
pub fn parse_feed(text: &str) -> Result<ParsedFeed, FeedError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(FeedError::MissingColumn(column));
        }
    }

    let mut parsed = ParsedFeed::default();
    for (index, record) in reader.deserialize::<FeedRow>().enumerate() {
        match record {
            Ok(row) => parsed.rows.push(row),
            Err(e) => {
                // header is line 1, first record line 2
                warn!(line = index + 2, error = %e, "Skipping undecodable feed row");
                parsed.undecodable += 1;
            }
        }
    }

    Ok(parsed)
}
