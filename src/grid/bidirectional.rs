//! Bidirectional Breadth-First search.
//!
//! Two Breadth-First searches run in lockstep, one rooted at the start and one rooted at
//! the goal. Each round expands one node on the start side, then one node on the goal side.
//! Each side keeps its own closed set.
//!
//! After every round the search checks whether a node that one side just queued has already
//! been discovered by the other side. The first such position is the meeting point. The
//! Path is then stitched together from the start side's chain (start to meeting point) and
//! the goal side's chain (meeting point to goal).
//!
//! On a straight corridor this returns the same Path as [Breadth-First](super::breadth_first).
//! In general the two halves are each shortest, but the joined Path is not guaranteed to be.

use super::{
    frontier::{Frontier, Queue},
    GridMap, SearchConfig,
};
use crate::{
    graph::{NodeId, NodeList, SearchNode},
    path::{Path, SearchStats},
    PointSet, Position, SearchError,
};

/// One of the two halves of the search.
struct Side {
    nodes: NodeList,
    frontier: Queue,
    closed: PointSet,
}

impl Side {
    fn new(origin: Position) -> Side {
        let mut nodes = NodeList::new();
        let mut frontier = Queue::default();
        let id = nodes.add_node(SearchNode::origin(origin, 0));
        frontier.push(id, &nodes[id]);
        Side {
            nodes,
            frontier,
            closed: PointSet::default(),
        }
    }

    /// Expands the next queued node. Returns the ids (own, other's) of the first newly
    /// queued node that `other` has discovered as well.
    fn step(
        &mut self,
        map: &GridMap,
        other: &Side,
        neighbors: &mut Vec<Position>,
    ) -> Option<(NodeId, NodeId)> {
        let current = self.frontier.pop()?;
        let current_pos = self.nodes[current].position;
        self.closed.insert(current_pos);

        search_trace!("bidirectional: expanding {}", current_pos);

        let mut meeting = None;
        neighbors.clear();
        map.get_neighbors(current_pos, neighbors);
        for &next in neighbors.iter() {
            if !map.is_traversable(next)
                || self.closed.contains(&next)
                || self.nodes.id_at(next).is_some()
            {
                continue;
            }
            let g = self.nodes[current].g_cost + 1;
            let id = self.nodes.add_node(SearchNode::new(next, current, g, 0));
            self.frontier.push(id, &self.nodes[id]);

            if meeting.is_none() {
                meeting = other.nodes.id_at(next).map(|other_id| (id, other_id));
            }
        }
        meeting
    }

    fn stats(&self) -> SearchStats {
        SearchStats {
            expanded: self.closed.len(),
            discovered: self.nodes.len(),
            frontier: self.frontier.len(),
        }
    }
}

/// Searches `map` from `start` to `goal` with the default [`SearchConfig`].
pub fn search(map: &GridMap, start: Position, goal: Position) -> Result<Path, SearchError> {
    search_with(map, start, goal, &SearchConfig::default())
}

/// Searches `map` from `start` to `goal`.
///
/// `config.max_iterations` limits the expansions of both sides combined.
pub fn search_with(
    map: &GridMap,
    start: Position,
    goal: Position,
    config: &SearchConfig,
) -> Result<Path, SearchError> {
    map.check_bounds(start)?;
    map.check_bounds(goal)?;

    search_debug!("bidirectional: searching from {} to {}", start, goal);

    if start == goal {
        let mut nodes = NodeList::new();
        let origin = nodes.add_node(SearchNode::origin(start, 0));
        let stats = SearchStats {
            expanded: 1,
            discovered: 1,
            frontier: 0,
        };
        return Ok(Path::from_chain(&nodes, origin, stats));
    }
    if map.is_wall(goal) {
        // the goal side would otherwise grow out of a wall
        return Err(SearchError::NoPathFound {
            stats: SearchStats::default(),
        });
    }

    let mut forward = Side::new(start);
    let mut backward = Side::new(goal);
    let mut neighbors = Vec::with_capacity(4);

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        let mut meeting = None;

        for forward_turn in [true, false] {
            let expanded = forward.closed.len() + backward.closed.len();
            if expanded >= config.max_iterations {
                search_debug!(
                    "bidirectional: giving up after {} expansions",
                    config.max_iterations
                );
                return Err(SearchError::SearchExhausted {
                    limit: config.max_iterations,
                    stats: forward.stats() + backward.stats(),
                });
            }

            if forward_turn {
                let found = forward.step(map, &backward, &mut neighbors);
                meeting = meeting.or(found);
            } else {
                let found = backward.step(map, &forward, &mut neighbors);
                meeting = meeting.or(found.map(|(own, other)| (other, own)));
            }
        }

        if let Some((meet_forward, meet_backward)) = meeting {
            let stats = forward.stats() + backward.stats();
            search_debug!(
                "bidirectional: met at {} ({:?})",
                forward.nodes[meet_forward].position,
                stats
            );
            return Ok(Path::stitch(
                &forward.nodes,
                meet_forward,
                &backward.nodes,
                meet_backward,
                stats,
            ));
        }
    }

    search_debug!("bidirectional: no path from {} to {}", start, goal);
    Err(SearchError::NoPathFound {
        stats: forward.stats() + backward.stats(),
    })
}
