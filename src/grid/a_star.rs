//! A* search.
//!
//! Expands the queued node with the smallest `f = g + h`, preferring the smaller `h` on
//! ties. With the Manhattan heuristic on a 4-connected grid of unit cost moves, the
//! heuristic is admissible and consistent, so the returned Path is a shortest one.

use super::{
    frontier::{Priority, PriorityFrontier},
    search::{run, Costs, Strategy},
    GridMap, SearchConfig,
};
use crate::{graph::SearchNode, path::Path, Position, SearchError};

pub(crate) struct AStar;

fn priority(node: &SearchNode) -> Priority {
    (node.f_cost(), node.h_cost())
}

impl Strategy for AStar {
    type Frontier = PriorityFrontier;
    const NAME: &'static str = "a*";

    fn frontier(&self) -> PriorityFrontier {
        PriorityFrontier::new(priority)
    }
    fn origin(&self, map: &GridMap, start: Position, goal: Position) -> Costs {
        Costs {
            g: 0,
            h: map.heuristic(start, goal),
        }
    }
    fn costs(
        &self,
        map: &GridMap,
        selected: &SearchNode,
        neighbor: Position,
        goal: Position,
    ) -> Costs {
        Costs {
            // always 1 for orthogonal steps
            g: selected.g_cost + map.heuristic(selected.position, neighbor),
            h: map.heuristic(neighbor, goal),
        }
    }
    fn improves(&self, candidate: Costs, queued: &SearchNode) -> bool {
        candidate.f() < queued.f_cost()
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
    run(AStar, map, start, goal, config)
}
