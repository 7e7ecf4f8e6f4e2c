use std::fmt;

use super::{Direction, SearchStats};
use crate::{
    graph::{NodeId, NodeList, SearchNode},
    Position,
};

/// A route found by a search, origin first.
///
/// Consecutive nodes are always adjacent on the grid and no position repeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<SearchNode>,
    stats: SearchStats,
}

impl Path {
    /// Walks the parent links from `terminal` back to the root of `nodes` and reverses the
    /// result, so that the root comes first.
    pub(crate) fn from_chain(nodes: &NodeList, terminal: NodeId, stats: SearchStats) -> Path {
        let mut steps: Vec<SearchNode> = nodes.ancestors(terminal).cloned().collect();
        steps.reverse();
        Path {
            nodes: steps,
            stats,
        }
    }

    /// Joins the two halves of a bidirectional search.
    ///
    /// `forward` is rooted at the start and `backward` at the goal; `meet_forward` and
    /// `meet_backward` are the nodes of the same position in the two lists. The forward
    /// chain has to be reversed while the backward chain already runs towards the goal.
    pub(crate) fn stitch(
        forward: &NodeList,
        meet_forward: NodeId,
        backward: &NodeList,
        meet_backward: NodeId,
        stats: SearchStats,
    ) -> Path {
        debug_assert_eq!(forward[meet_forward], backward[meet_backward]);

        let mut steps: Vec<SearchNode> = forward.ancestors(meet_forward).cloned().collect();
        steps.reverse();
        // the meeting node is already the last forward step
        steps.extend(backward.ancestors(meet_backward).skip(1).cloned());
        Path {
            nodes: steps,
            stats,
        }
    }

    /// Number of nodes on the Path, including both ends
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Number of moves needed to walk the Path. Every move costs 1, so this is also the
    /// cost of the Path.
    pub fn edge_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// The Position the Path begins at
    pub fn start(&self) -> Position {
        self.nodes[0].position
    }

    /// The Position the Path ends at
    pub fn end(&self) -> Position {
        self.nodes[self.nodes.len() - 1].position
    }

    /// The nodes of the Path, origin first
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// An Iterator over the Positions of the Path, origin first
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.nodes.iter().map(SearchNode::position)
    }

    /// The moves needed to walk the Path, one fewer than its [`len`](Path::len)
    pub fn directions(&self) -> Vec<Direction> {
        self.nodes
            .windows(2)
            .filter_map(|pair| Direction::between(pair[0].position, pair[1].position))
            .collect()
    }

    /// Counters of the search that produced this Path
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl std::ops::Index<usize> for Path {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: usize) -> &SearchNode {
        &self.nodes[index]
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", node.position)?;
        }
        Ok(())
    }
}
