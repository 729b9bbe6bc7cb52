//! Feed access: fetching, decoding and loading storm observations.

pub mod feed;
pub mod loader;
pub mod parser;

pub use feed::*;
pub use loader::*;
pub use parser::*;
