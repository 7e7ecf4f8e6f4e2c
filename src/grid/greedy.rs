//! Greedy Best-First search.
//!
//! Always expands the queued node that looks closest to the goal by Manhattan distance,
//! ignoring the distance already travelled. Usually very fast, but not optimal.

use super::{
    frontier::{Priority, PriorityFrontier},
    search::{run, Costs, Strategy},
    GridMap, SearchConfig,
};
use crate::{graph::SearchNode, path::Path, Position, SearchError};

pub(crate) struct GreedyBestFirst;

fn priority(node: &SearchNode) -> Priority {
    (node.h_cost(), 0)
}

impl Strategy for GreedyBestFirst {
    type Frontier = PriorityFrontier;
    const NAME: &'static str = "greedy";

    fn frontier(&self) -> PriorityFrontier {
        PriorityFrontier::new(priority)
    }
    fn origin(&self, map: &GridMap, start: Position, goal: Position) -> Costs {
        Costs {
            g: 0,
            h: map.heuristic(start, goal),
        }
    }
    fn costs(&self, map: &GridMap, _: &SearchNode, neighbor: Position, goal: Position) -> Costs {
        Costs {
            g: 0,
            h: map.heuristic(neighbor, goal),
        }
    }
    fn improves(&self, candidate: Costs, queued: &SearchNode) -> bool {
        queued.h_cost > candidate.h
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
    run(GreedyBestFirst, map, start, goal, config)
}
