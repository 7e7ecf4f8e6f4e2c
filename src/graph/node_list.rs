use super::{NodeId, SearchNode};
use crate::{Position, PointMap};

/// Owns every node of one search invocation.
///
/// Parents are stored as [`NodeId`]s into this list, so the parent links form a tree
/// whose lifetime ends with the search. Each position is stored at most once.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    nodes: Vec<SearchNode>,
    pos_map: PointMap<NodeId>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Adds a new node. The position must not be in the list yet.
    #[track_caller]
    pub fn add_node(&mut self, node: SearchNode) -> NodeId {
        let id = self.nodes.len();
        let previous = self.pos_map.insert(node.position, id);
        debug_assert!(previous.is_none(), "{} added twice", node.position);
        self.nodes.push(node);
        id
    }

    pub fn id_at(&self, pos: Position) -> Option<NodeId> {
        self.pos_map.get(&pos).copied()
    }

    /// Walks the parent links from `id` to the root, yielding `id` first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &SearchNode> + '_ {
        std::iter::successors(Some(&self.nodes[id]), move |node| {
            node.parent.map(|parent| &self.nodes[parent])
        })
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeId> for NodeList {
    type Output = SearchNode;
    #[track_caller]
    fn index(&self, index: NodeId) -> &SearchNode {
        &self.nodes[index]
    }
}
impl IndexMut<NodeId> for NodeList {
    #[track_caller]
    fn index_mut(&mut self, index: NodeId) -> &mut SearchNode {
        &mut self.nodes[index]
    }
}

#[test]
fn ancestors() {
    let mut nodes = NodeList::new();
    let root = nodes.add_node(SearchNode::origin(Position::new(0, 0), 0));
    let child = nodes.add_node(SearchNode::new(Position::new(0, 1), root, 1, 0));
    let grandchild = nodes.add_node(SearchNode::new(Position::new(1, 1), child, 2, 0));
    let _sibling = nodes.add_node(SearchNode::new(Position::new(1, 0), root, 1, 0));

    assert_eq!(nodes.len(), 4);
    assert_eq!(nodes.id_at(Position::new(1, 1)), Some(grandchild));
    assert_eq!(nodes.id_at(Position::new(5, 5)), None);

    let chain: Vec<Position> = nodes.ancestors(grandchild).map(|n| n.position).collect();
    assert_eq!(
        chain,
        [Position::new(1, 1), Position::new(0, 1), Position::new(0, 0)]
    );

    nodes[grandchild].parent = Some(root);
    assert_eq!(nodes.ancestors(grandchild).count(), 2);
}
