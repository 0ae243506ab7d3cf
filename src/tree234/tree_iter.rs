use super::node::Node;
use crate::arena::{Arena, NodeId};

struct TreeIterState<'a, T> {
    node: &'a Node<T>,
    pos: usize,
}

impl<'a, T> Clone for TreeIterState<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for TreeIterState<'a, T> {}

/// In-order iterator over the keys of a [`Tree234`](super::Tree234)
pub struct TreeIter<'a, T> {
    arena: &'a Arena<T>,
    /// List of parent nodes and current child position in them
    tail_states: Vec<TreeIterState<'a, T>>,
    /// The current node and the next key position to return. `None` for an empty tree
    head_state: Option<TreeIterState<'a, T>>,
    len: usize,
}

impl<'a, T> TreeIter<'a, T> {
    pub(super) fn new(arena: &'a Arena<T>, root: Option<NodeId>, len: usize) -> Self {
        // Create initial state, by recursing into child at the bottom
        let mut iter = TreeIter {
            arena,
            tail_states: vec![],
            head_state: None,
            len,
        };
        if let Some(root) = root {
            iter.prepare_state_from(root);
        }
        iter
    }

    fn prepare_state_from(&mut self, id: NodeId) {
        let mut node = self.arena.get(id);
        self.head_state = Some(TreeIterState { node, pos: 0 });
        while let Some(&child) = node.children().first() {
            node = self.arena.get(child);
            let next_state = TreeIterState { node, pos: 0 };
            if let Some(head) = self.head_state.replace(next_state) {
                self.tail_states.push(head);
            }
        }
    }
}

impl<'a, T> Iterator for TreeIter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        let TreeIterState { node, pos } = self.head_state?;
        if pos < node.arity() {
            // Iterate in node
            let res = &node.keys()[pos];
            let next_state = TreeIterState { node, pos: pos + 1 };
            if node.is_leaf() {
                self.head_state = Some(next_state);
            } else {
                self.tail_states.push(next_state);
                self.prepare_state_from(node.children()[pos + 1]);
            }
            self.len -= 1;
            Some(res)
        } else {
            // Walk over the chain
            match self.tail_states.pop() {
                None => None,
                Some(parent_state) => {
                    self.head_state = Some(parent_state);
                    self.next()
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> ExactSizeIterator for TreeIter<'a, T> {}
impl<'a, T> std::iter::FusedIterator for TreeIter<'a, T> {}
