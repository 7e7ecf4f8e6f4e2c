//! The expand/select/terminate loop shared by all single-direction searches.

use super::{frontier::Frontier, GridMap, SearchConfig};
use crate::{
    graph::{NodeList, SearchNode},
    path::{Path, SearchStats},
    PointSet, Position, SearchError,
};

/// Costs proposed for a neighbor of the node being expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Costs {
    pub g: usize,
    pub h: usize,
}

impl Costs {
    pub const ZERO: Costs = Costs { g: 0, h: 0 };

    pub fn f(self) -> usize {
        self.g + self.h
    }
}

/// What distinguishes one search algorithm from another.
pub(crate) trait Strategy {
    type Frontier: Frontier;

    const NAME: &'static str;

    fn frontier(&self) -> Self::Frontier;

    /// Costs of the origin node. `g` should be 0.
    fn origin(&self, _map: &GridMap, _start: Position, _goal: Position) -> Costs {
        Costs::ZERO
    }

    /// Costs of `neighbor` when reached through `selected`.
    fn costs(
        &self,
        map: &GridMap,
        selected: &SearchNode,
        neighbor: Position,
        goal: Position,
    ) -> Costs;

    /// Whether `candidate` should replace the costs and parent of the already queued
    /// `queued`. Equality of nodes never implies this, it has to be checked explicitly.
    fn improves(&self, candidate: Costs, queued: &SearchNode) -> bool;
}

pub(crate) fn run<S: Strategy>(
    strategy: S,
    map: &GridMap,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<Path, SearchError> {
    map.check_bounds(start)?;
    map.check_bounds(goal)?;

    search_debug!("{}: searching from {} to {}", S::NAME, start, goal);

    let mut nodes = NodeList::new();
    let mut frontier = strategy.frontier();
    let mut closed = PointSet::default();
    let mut neighbors = Vec::with_capacity(4);

    let origin = strategy.origin(map, start, goal);
    let origin = nodes.add_node(SearchNode::origin(start, origin.h));
    frontier.push(origin, &nodes[origin]);

    let stats = |closed: &PointSet, nodes: &NodeList, frontier: &S::Frontier| SearchStats {
        expanded: closed.len(),
        discovered: nodes.len(),
        frontier: frontier.len(),
    };

    while let Some(current) = frontier.pop() {
        let current_pos = nodes[current].position;
        closed.insert(current_pos);

        if current_pos == goal {
            let stats = stats(&closed, &nodes, &frontier);
            search_debug!("{}: reached {} ({:?})", S::NAME, goal, stats);
            return Ok(Path::from_chain(&nodes, current, stats));
        }

        if closed.len() > config.max_iterations {
            search_debug!(
                "{}: giving up after {} expansions",
                S::NAME,
                config.max_iterations
            );
            return Err(SearchError::SearchExhausted {
                limit: config.max_iterations,
                stats: stats(&closed, &nodes, &frontier),
            });
        }

        search_trace!(
            "{}: expanding {} (g = {}, h = {})",
            S::NAME,
            current_pos,
            nodes[current].g_cost,
            nodes[current].h_cost
        );

        neighbors.clear();
        map.get_neighbors(current_pos, &mut neighbors);

        for &next in neighbors.iter() {
            if !map.is_traversable(next) || closed.contains(&next) {
                continue;
            }
            let candidate = strategy.costs(map, &nodes[current], next, goal);

            match nodes.id_at(next) {
                None => {
                    let node = SearchNode::new(next, current, candidate.g, candidate.h);
                    let id = nodes.add_node(node);
                    frontier.push(id, &nodes[id]);
                }
                // not closed, so it is queued
                Some(id) => {
                    if strategy.improves(candidate, &nodes[id]) {
                        let node = &mut nodes[id];
                        node.parent = Some(current);
                        node.g_cost = candidate.g;
                        node.h_cost = candidate.h;
                        frontier.update(id, &nodes[id]);
                    }
                }
            }
        }
    }

    search_debug!(
        "{}: no path from {} to {} after {} expansions",
        S::NAME,
        start,
        goal,
        closed.len()
    );
    Err(SearchError::NoPathFound {
        stats: stats(&closed, &nodes, &frontier),
    })
}
