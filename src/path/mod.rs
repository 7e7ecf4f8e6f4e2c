//! The output of a successful search.

mod direction;
pub use direction::Direction;

mod generic_path;
pub use generic_path::*;

mod stats;
pub use stats::SearchStats;
