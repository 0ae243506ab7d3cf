//! Index-based storage for tree nodes.
//!
//! Every node of a tree lives in one `Arena` owned by the tree handle.
//! Nodes refer to each other through `NodeId`s, so a parent link is a plain
//! index and never keeps a node alive on its own.

use crate::tree234::Node;

/// Position of a node in its `Arena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone)]
pub(crate) struct Arena<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Arena<T> {
    pub(crate) fn new() -> Self {
        Arena { nodes: Vec::new() }
    }

    /// Store a new node and return its id.
    /// Panics if the arena already holds `u32::MAX` nodes
    pub(crate) fn alloc(&mut self, node: Node<T>) -> NodeId {
        assert!(self.nodes.len() < u32::MAX as usize, "Arena is full");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Panics if `id` does not come from this arena
    pub(crate) fn get(&self, id: NodeId) -> &Node<T> {
        &self.nodes[id.index()]
    }

    /// Panics if `id` does not come from this arena
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<T> {
        &mut self.nodes[id.index()]
    }

    /// Number of stored nodes
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Drop every node. Ids handed out before are invalid afterwards
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }
}
