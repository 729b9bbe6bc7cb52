//! Stateless classification of wind speed: Saffir-Simpson category,
//! ACE contribution and display colour.

pub mod ace;
pub mod category;
pub mod palette;

pub use ace::*;
pub use category::*;
pub use palette::*;
