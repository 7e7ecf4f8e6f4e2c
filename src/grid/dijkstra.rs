//! Uniform-Cost search (Dijkstra's algorithm with unit move costs).
//!
//! Expands the queued node with the smallest accumulated cost `g`. Under unit costs this
//! explores in the same rings as [Breadth-First](super::breadth_first), but through an
//! explicit cost comparison, so it finds a Path with the fewest moves as well.

use super::{
    frontier::{Priority, PriorityFrontier},
    search::{run, Costs, Strategy},
    GridMap, SearchConfig,
};
use crate::{graph::SearchNode, path::Path, Position, SearchError};

/// Cost of a single move
const STEP_COST: usize = 1;

pub(crate) struct UniformCost;

fn priority(node: &SearchNode) -> Priority {
    (node.g_cost(), 0)
}

impl Strategy for UniformCost {
    type Frontier = PriorityFrontier;
    const NAME: &'static str = "uniform-cost";

    fn frontier(&self) -> PriorityFrontier {
        PriorityFrontier::new(priority)
    }
    fn costs(&self, _: &GridMap, selected: &SearchNode, _: Position, _: Position) -> Costs {
        Costs {
            g: selected.g_cost + STEP_COST,
            h: 0,
        }
    }
    fn improves(&self, candidate: Costs, queued: &SearchNode) -> bool {
        queued.g_cost > candidate.g
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
    run(UniformCost, map, start, goal, config)
}
