use std::hash::{Hash, Hasher};

use super::NodeId;
use crate::Position;

/// A grid cell as seen by one search invocation.
///
/// Equality and hashing only look at the [`position`](SearchNode::position). Cost
/// fields never take part in it, so "same cell" always means "same node". A search that
/// finds a cheaper way to a queued cell has to update that node itself.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub(crate) position: Position,
    pub(crate) parent: Option<NodeId>,
    pub(crate) g_cost: usize,
    pub(crate) h_cost: usize,
}

impl SearchNode {
    pub(crate) fn origin(position: Position, h_cost: usize) -> SearchNode {
        SearchNode {
            position,
            parent: None,
            g_cost: 0,
            h_cost,
        }
    }

    pub(crate) fn new(
        position: Position,
        parent: NodeId,
        g_cost: usize,
        h_cost: usize,
    ) -> SearchNode {
        SearchNode {
            position,
            parent: Some(parent),
            g_cost,
            h_cost,
        }
    }

    /// The cell this node stands for
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether this node is the root of its search, i.e. was not reached from another node.
    ///
    /// On a [`Path`](crate::path::Path) the first node is an origin. A bidirectional Path
    /// ends in a second one, the root of the half that grew from the goal. The parent link
    /// itself is an index into the arena of the finished search and is not exposed.
    pub fn is_origin(&self) -> bool {
        self.parent.is_none()
    }

    /// Accumulated cost from the origin
    pub fn g_cost(&self) -> usize {
        self.g_cost
    }

    /// Heuristic estimate of the remaining cost
    pub fn h_cost(&self) -> usize {
        self.h_cost
    }

    /// `g_cost + h_cost`
    pub fn f_cost(&self) -> usize {
        self.g_cost + self.h_cost
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &SearchNode) -> bool {
        self.position == other.position
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn identity_ignores_costs() {
        let a = SearchNode::origin(Position::new(2, 3), 7);
        let b = SearchNode::new(Position::new(2, 3), 4, 12, 0);
        let c = SearchNode::origin(Position::new(3, 2), 7);

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<SearchNode> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn f_cost() {
        let node = SearchNode::new(Position::new(0, 0), 0, 3, 4);
        assert_eq!(node.f_cost(), 7);
        assert_eq!(node.parent, Some(0));
        assert!(!node.is_origin());
        assert!(SearchNode::origin(Position::new(1, 1), 2).is_origin());
    }
}
