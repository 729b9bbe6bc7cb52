//! Time-series and view derivations.
//!
//! Every function here is a pure function of the observations it is given
//! (plus, for per-storm views, the selected storm); none carries state
//! between calls.

pub mod ace;
pub mod active;
pub mod categories;
pub mod intensity;
pub mod map;
pub mod radii;
pub mod selector;
pub mod stats;

pub use ace::*;
pub use active::*;
pub use categories::*;
pub use intensity::*;
pub use map::*;
pub use radii::*;
pub use selector::*;
pub use stats::*;
