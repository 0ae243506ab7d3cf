use super::*;
use crate::arena::{Arena, NodeId};
use arrayvec::ArrayVec;
use std::fmt;

#[derive(Clone)]
pub(crate) struct Node<T> {
    keys: ArrayVec<[T; MAX_KEYS]>,
    /// Empty for leaves, `keys.len() + 1` entries otherwise
    children: ArrayVec<[NodeId; MAX_KEYS + 1]>,
    parent: Option<NodeId>,
}

impl<T> Node<T> {
    /// Build a parentless leaf holding a single key
    pub(crate) fn leaf(key: T) -> Self {
        Node {
            keys: single(key),
            children: ArrayVec::new(),
            parent: None,
        }
    }

    /// Build a parentless 2-node over two existing subtrees
    pub(super) fn with_children(key: T, left: NodeId, right: NodeId) -> Self {
        let mut children = ArrayVec::new();
        children.push(left);
        children.push(right);
        Node {
            keys: single(key),
            children,
            parent: None,
        }
    }

    pub(crate) fn keys(&self) -> &[T] {
        &self.keys
    }

    pub(crate) fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub(crate) fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub(crate) fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// Number of keys in use
    pub(crate) fn arity(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether this is a 4-node, which must be split before anything descends through it
    pub(crate) fn is_full(&self) -> bool {
        self.keys.is_full()
    }

    /// Return the first index `i` such that `i == arity()` or `value < keys[i]`.
    /// Equal keys route to the right
    pub(super) fn find_slot<E, F>(&self, value: &T, compare: &mut F) -> Result<usize, E>
    where
        F: FnMut(&T, &T) -> Result<Ordering, E>,
    {
        for (i, key) in self.keys.iter().enumerate() {
            if is_less(compare, value, key)? {
                return Ok(i);
            }
        }
        Ok(self.keys.len())
    }

    /// Insert `value` at `index` of this non-full leaf
    pub(super) fn insert_key(&mut self, index: usize, value: T) {
        assert!(self.is_leaf());
        assert!(!self.is_full());
        self.keys.insert(index, value);
    }

    /// Split this full node into (left, median, right).
    /// Self will become left and the other two values will be returned.
    /// The right node inherits this node's parent; its children still point
    /// back at self and must be re-linked by the caller
    pub(super) fn split(&mut self) -> (T, Node<T>) {
        assert!(self.is_full(), "Cannot split a node with {} keys", self.arity());
        assert!(self.is_leaf() || self.children.is_full());

        let keys = std::mem::replace(&mut self.keys, ArrayVec::new());
        let [left_key, median, right_key] = match keys.into_inner() {
            Ok(keys) => keys,
            Err(_) => unreachable!(),
        };

        let half = self.children.len() / 2;
        let right_children = self.children[half..].iter().copied().collect();
        let left_children = self.children[..half].iter().copied().collect();

        self.keys = single(left_key);
        self.children = left_children;
        let right = Node {
            keys: single(right_key),
            children: right_children,
            parent: self.parent,
        };
        (median, right)
    }

    /// Take the median of a split child at `slot`.
    /// `children[slot]` already refers to the left half (the split reuses its slot),
    /// so only the median and the right half are inserted
    pub(super) fn insert_split(&mut self, slot: usize, median: T, right: NodeId) {
        assert!(!self.is_leaf());
        assert!(!self.is_full());
        assert!(slot <= self.arity());
        self.keys.insert(slot, median);
        self.children.insert(slot + 1, right);
    }
}

fn single<T>(key: T) -> ArrayVec<[T; MAX_KEYS]> {
    let mut keys = ArrayVec::new();
    keys.push(key);
    keys
}

/// Read-only handle to a node of a [`Tree234`].
///
/// Gives the key list and the ordered child list of a node, enough for a
/// renderer or any other external consumer to walk the tree's shape.
pub struct NodeRef<'a, T> {
    arena: &'a Arena<T>,
    id: NodeId,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(arena: &'a Arena<T>, id: NodeId) -> Self {
        NodeRef { arena, id }
    }

    fn node(&self) -> &'a Node<T> {
        self.arena.get(self.id)
    }

    /// Keys of this node, in ascending order
    pub fn keys(&self) -> &'a [T] {
        self.node().keys()
    }

    /// Children of this node, left to right. Empty for leaves
    pub fn children(&self) -> impl ExactSizeIterator<Item = NodeRef<'a, T>> + 'a {
        let arena = self.arena;
        self.node()
            .children()
            .iter()
            .map(move |&id| NodeRef::new(arena, id))
    }

    /// Return the child at the given index, if any
    pub fn child(&self, index: usize) -> Option<NodeRef<'a, T>> {
        self.node()
            .children()
            .get(index)
            .map(|&id| NodeRef::new(self.arena, id))
    }

    /// Node that holds this one as a child, or `None` for the root
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.node().parent().map(|id| NodeRef::new(self.arena, id))
    }

    /// Number of keys held: 1 for a 2-node, 2 for a 3-node, 3 for a 4-node
    pub fn arity(&self) -> usize {
        self.node().arity()
    }

    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

/// Two handles are equal when they point to the same node of the same tree
impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.arena, other.arena) && self.id == other.id
    }
}

impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("keys", &self.keys())
            .field("children", &self.node().children().len())
            .finish()
    }
}
