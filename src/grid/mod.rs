//! The map, the frontiers and the search algorithms that run on it.
//!
//! Every algorithm module exposes the same two functions:
//! - `search(map, start, goal)` with the default [`SearchConfig`]
//! - `search_with(map, start, goal, &config)`
//!
//! Both return the found [`Path`](crate::path::Path) or a
//! [`SearchError`](crate::SearchError). [`Algorithm`] picks one of them at runtime.

mod map;
pub use map::{Cell, GridMap, GridMapBuilder};

mod parse;

mod frontier;
mod search;

pub mod a_star;
pub mod bidirectional;
pub mod breadth_first;
pub mod depth_first;
pub mod dijkstra;
pub mod greedy;

mod algorithm;
pub use algorithm::{Algorithm, UnknownAlgorithm};

mod tour;
pub use tour::tour;

/// Number of expansions after which a search gives up with
/// [`SearchExhausted`](crate::SearchError::SearchExhausted).
pub const DEFAULT_MAX_ITERATIONS: usize = 100_000;

/// Options shared by all search algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SearchConfig {
    /// Returns a copy with a different iteration budget.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
