//! Depth-First search.
//!
//! Expands the most recently discovered node first. Finds *a* path quickly on open maps,
//! but the path is usually far from the shortest one.

use super::{
    frontier::Stack,
    search::{run, Costs, Strategy},
    GridMap, SearchConfig,
};
use crate::{graph::SearchNode, path::Path, Position, SearchError};

pub(crate) struct DepthFirst;

impl Strategy for DepthFirst {
    type Frontier = Stack;
    const NAME: &'static str = "dfs";

    fn frontier(&self) -> Stack {
        Stack::default()
    }
    fn costs(&self, _: &GridMap, _: &SearchNode, _: Position, _: Position) -> Costs {
        Costs::ZERO
    }
    fn improves(&self, _: Costs, _: &SearchNode) -> bool {
        false
    }
}

/// Searches `map` from `start` to `goal` with the default [`SearchConfig`].
pub fn search(map: &GridMap, start: Position, goal: Position) -> Result<Path, SearchError> {
    search_with(map, start, goal, &SearchConfig::default())
}

/// Searches `map` from `start` to `goal`.
pub fn search_with(
    map: &GridMap,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<Path, SearchError> {
    run(DepthFirst, map, start, goal, config)
}
