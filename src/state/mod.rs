//! Session selection state and the view bundle derived from it.

pub mod store;
pub mod view;

pub use store::*;
pub use view::*;
