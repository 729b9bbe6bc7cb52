//! Per-storm grouping and aggregation.

pub mod aggregator;
pub mod grouper;

pub use aggregator::*;
pub use grouper::*;
