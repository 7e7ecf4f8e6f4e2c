//! Open-set containers.
//!
//! A frontier only stores [`NodeId`]s. Whether a position is queued is answered by the
//! search itself: a node that exists in the search's [`NodeList`](crate::graph::NodeList)
//! and is not closed is in the frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::graph::{NodeId, SearchNode};

pub(crate) trait Frontier {
    /// Adds a freshly admitted node.
    fn push(&mut self, id: NodeId, node: &SearchNode);

    /// Called after the costs of a queued node were lowered in place.
    fn update(&mut self, id: NodeId, node: &SearchNode);

    /// Removes the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// LIFO: the most recently pushed node comes out first.
#[derive(Debug, Default)]
pub(crate) struct Stack(Vec<NodeId>);

impl Frontier for Stack {
    fn push(&mut self, id: NodeId, _: &SearchNode) {
        self.0.push(id);
    }
    fn update(&mut self, _: NodeId, _: &SearchNode) {}
    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// FIFO: the oldest node comes out first.
#[derive(Debug, Default)]
pub(crate) struct Queue(VecDeque<NodeId>);

impl Frontier for Queue {
    fn push(&mut self, id: NodeId, _: &SearchNode) {
        self.0.push_back(id);
    }
    fn update(&mut self, _: NodeId, _: &SearchNode) {}
    fn pop(&mut self) -> Option<NodeId> {
        self.0.pop_front()
    }
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Ordering key of a node in a [`PriorityFrontier`]. Smaller is expanded first.
pub(crate) type Priority = (usize, usize);

#[derive(Debug, PartialEq, Eq)]
struct Element(Priority, NodeId);

// reversed so that the max-heap yields the smallest Priority. Ties go to the smaller
// NodeId, i.e. the node that was admitted first.
impl Ord for Element {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0).then_with(|| other.1.cmp(&self.1))
    }
}
impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-heap on a key derived from the node costs.
///
/// Updated nodes are pushed again with their new key and keep their NodeId, so they keep
/// their place among equal keys. Outdated heap entries are skipped when popped.
pub(crate) struct PriorityFrontier {
    key: fn(&SearchNode) -> Priority,
    heap: BinaryHeap<Element>,
    current: hashbrown::HashMap<NodeId, Priority>,
}

impl PriorityFrontier {
    pub fn new(key: fn(&SearchNode) -> Priority) -> PriorityFrontier {
        PriorityFrontier {
            key,
            heap: BinaryHeap::new(),
            current: hashbrown::HashMap::new(),
        }
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, id: NodeId, node: &SearchNode) {
        let priority = (self.key)(node);
        self.current.insert(id, priority);
        self.heap.push(Element(priority, id));
    }

    fn update(&mut self, id: NodeId, node: &SearchNode) {
        self.push(id, node);
    }

    fn pop(&mut self) -> Option<NodeId> {
        while let Some(Element(priority, id)) = self.heap.pop() {
            if self.current.get(&id) == Some(&priority) {
                self.current.remove(&id);
                return Some(id);
            }
            // outdated entry of an updated node
        }
        None
    }

    fn len(&self) -> usize {
        self.current.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn node(g: usize, h: usize) -> SearchNode {
        SearchNode::new(Position::new(g, h), 0, g, h)
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<NodeId> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn stack_and_queue() {
        let mut stack = Stack::default();
        let mut queue = Queue::default();
        for id in 0..3 {
            stack.push(id, &node(0, 0));
            queue.push(id, &node(0, 0));
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(drain(&mut stack), [2, 1, 0]);
        assert_eq!(drain(&mut queue), [0, 1, 2]);
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn priority_ties_by_admission() {
        let mut frontier = PriorityFrontier::new(|n| (n.g_cost(), 0));
        frontier.push(0, &node(3, 0));
        frontier.push(1, &node(1, 0));
        frontier.push(2, &node(3, 1));
        frontier.push(3, &node(1, 1));
        assert_eq!(drain(&mut frontier), [1, 3, 0, 2]);
    }

    #[test]
    fn priority_secondary_key() {
        let mut frontier = PriorityFrontier::new(|n| (n.f_cost(), n.h_cost()));
        frontier.push(0, &node(2, 2));
        frontier.push(1, &node(3, 1));
        frontier.push(2, &node(1, 4));
        assert_eq!(drain(&mut frontier), [1, 0, 2]);
    }

    #[test]
    fn priority_update() {
        let mut frontier = PriorityFrontier::new(|n| (n.g_cost(), 0));
        frontier.push(0, &node(2, 0));
        frontier.push(1, &node(5, 0));
        frontier.push(2, &node(3, 0));
        frontier.update(1, &node(2, 0));
        assert_eq!(frontier.len(), 3);
        // 1 now ties with 0, but 0 was admitted first
        assert_eq!(drain(&mut frontier), [0, 1, 2]);
        assert_eq!(frontier.len(), 0);
    }
}
