//! Breadth-First search.
//!
//! Expands nodes level by level. Because every move costs the same, the first time the goal
//! is taken from the queue it has been reached with the fewest possible moves.

use super::{
    frontier::Queue,
    search::{run, Costs, Strategy},
    GridMap, SearchConfig,
};
use crate::{graph::SearchNode, path::Path, Position, SearchError};

pub(crate) struct BreadthFirst;

impl Strategy for BreadthFirst {
    type Frontier = Queue;
    const NAME: &'static str = "bfs";

    fn frontier(&self) -> Queue {
        Queue::default()
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
    run(BreadthFirst, map, start, goal, config)
}
