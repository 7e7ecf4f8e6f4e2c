//! Nodes discovered during a single search, and the arena that owns them.

mod node;
pub use node::SearchNode;

mod node_list;
pub(crate) use node_list::NodeList;

/// Index of a [`SearchNode`] inside the arena of the search that created it.
///
/// Only meaningful for the search invocation it came from.
pub type NodeId = usize;
