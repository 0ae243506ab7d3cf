use super::node::{Node, NodeRef};
use super::*;
use crate::arena::{Arena, NodeId};
use crate::error::{ComparisonError, Result};
use crate::tracing_helpers::{debug_log, trace_log};
use arrayvec::ArrayVec;
use std::convert::Infallible;
use std::fmt;

/// A 2-3-4 tree: every node holds 1 to 3 keys and every leaf sits at the same depth.
///
/// Insertion splits each full node it meets on the way down, so a leaf
/// always has room for the new key when the descent reaches it. Keys equal
/// to existing ones are kept and placed after them.
#[derive(Clone)]
pub struct Tree234<T> {
    arena: Arena<T>,
    root: Option<NodeId>,
    len: usize,
}

impl<T> Tree234<T> {
    pub fn new() -> Self {
        Tree234 {
            arena: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Insert `value`, ordering keys with `compare`.
    ///
    /// If `compare` returns `None` the insertion stops with a `ComparisonError`.
    /// The tree is then left well-formed, but may have split some nodes on the
    /// path the value was taking
    pub fn add_by<F>(&mut self, value: T, mut compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> Option<std::cmp::Ordering>,
    {
        self.insert_with(value, |a, b| {
            compare(a, b).ok_or_else(|| {
                debug_log!("incomparable keys, insertion aborted");
                ComparisonError
            })
        })
    }

    /// Return the total number of keys in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of levels, 0 for an empty tree
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut current = self.root;
        while let Some(id) = current {
            height += 1;
            current = self.arena.get(id).children().first().copied();
        }
        height
    }

    /// Return the number of nodes in the tree
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Remove every key
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Return a read-only handle to the root node, if the tree is not empty
    pub fn root(&self) -> Option<NodeRef<T>> {
        self.root.map(|id| NodeRef::new(&self.arena, id))
    }

    /// Return a sorted iterator over references to keys in the tree
    pub fn iter(&self) -> TreeIter<T> {
        TreeIter::new(&self.arena, self.root, self.len)
    }

    /// Seed an empty tree or run the descent from the root
    fn insert_with<E, F>(&mut self, value: T, mut compare: F) -> std::result::Result<(), E>
    where
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        match self.root {
            None => {
                let root = self.arena.alloc(Node::leaf(value));
                self.root = Some(root);
                trace_log!("seeded empty tree");
            }
            Some(root) => self.insert_into(value, root, &mut compare)?,
        }
        self.len += 1;
        Ok(())
    }

    /// Recursive descent: split `id` if full, then place `value` in it (leaf)
    /// or continue into the child that covers it
    fn insert_into<E, F>(
        &mut self,
        value: T,
        id: NodeId,
        compare: &mut F,
    ) -> std::result::Result<(), E>
    where
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        let current = if self.arena.get(id).is_full() {
            self.split(id, &value, compare)?
        } else {
            id
        };

        let node = self.arena.get(current);
        let index = node.find_slot(&value, compare)?;
        if node.is_leaf() {
            trace_log!(index, arity = node.arity(), "placing key in leaf");
            self.arena.get_mut(current).insert_key(index, value);
            Ok(())
        } else {
            let child = node.children()[index];
            self.insert_into(value, child, compare)
        }
    }

    /// Split the full node `id` around its median and return the half `value` belongs to.
    ///
    /// The left half keeps the slot of `id`. The median goes up into the
    /// parent, or into a new root if `id` was the root. Every comparison is
    /// made before the first mutation, so an error leaves the tree untouched
    fn split<E, F>(
        &mut self,
        id: NodeId,
        value: &T,
        compare: &mut F,
    ) -> std::result::Result<NodeId, E>
    where
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        let node = self.arena.get(id);
        let goes_left = is_less(compare, value, &node.keys()[1])?;
        let parent_slot = match node.parent() {
            None => None,
            Some(parent) => {
                // The slot is found by routing `value` through the parent again, which
                // lands on the child the descent came from
                let slot = self.arena.get(parent).find_slot(value, compare)?;
                debug_assert_eq!(self.arena.get(parent).children()[slot], id);
                Some((parent, slot))
            }
        };

        let (median, right) = self.arena.get_mut(id).split();
        let right = self.arena.alloc(right);
        self.adopt_children(right);

        match parent_slot {
            None => {
                let root = self.arena.alloc(Node::with_children(median, id, right));
                self.arena.get_mut(id).set_parent(Some(root));
                self.arena.get_mut(right).set_parent(Some(root));
                self.root = Some(root);
                debug_log!(height = self.height(), "split root");
            }
            Some((parent, slot)) => {
                self.arena.get_mut(parent).insert_split(slot, median, right);
                debug_log!(slot, "split node into its parent");
            }
        }

        Ok(if goes_left { id } else { right })
    }

    /// Point the children of `id` back at it
    fn adopt_children(&mut self, id: NodeId) {
        let children: ArrayVec<[NodeId; MAX_KEYS + 1]> =
            self.arena.get(id).children().iter().copied().collect();
        for child in children {
            self.arena.get_mut(child).set_parent(Some(id));
        }
    }
}

impl<T: PartialOrd> Tree234<T> {
    /// Insert a new key into the tree.
    ///
    /// Fails only when two keys have no defined order, e.g. a float `NaN`
    pub fn add(&mut self, value: T) -> Result<()> {
        self.add_by(value, T::partial_cmp)
    }

    /// Insert every key in order, as if calling `add` for each one.
    /// Stops at the first key that fails
    pub fn add_all<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value)?;
        }
        Ok(())
    }

    /// Return whether some key in the tree is equal to `value`
    pub fn contains(&self, value: &T) -> Result<bool> {
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.arena.get(id);
            let mut index = node.arity();
            for (i, key) in node.keys().iter().enumerate() {
                match value.partial_cmp(key).ok_or(ComparisonError)? {
                    Ordering::Equal => return Ok(true),
                    Ordering::Less => {
                        index = i;
                        break;
                    }
                    Ordering::Greater => {}
                }
            }
            current = node.children().get(index).copied();
        }
        Ok(false)
    }
}

impl<T: Ord> Tree234<T> {
    /// Insert a new key into the tree. Keys with a total order never fail
    pub fn insert(&mut self, value: T) {
        let result: std::result::Result<(), Infallible> =
            self.insert_with(value, |a, b| Ok(a.cmp(b)));
        if let Err(never) = result {
            match never {}
        }
    }
}

impl<T> Default for Tree234<T> {
    fn default() -> Self {
        Tree234::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Tree234<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Tree234<T> {
    type Item = &'a T;
    type IntoIter = TreeIter<'a, T>;

    fn into_iter(self) -> TreeIter<'a, T> {
        self.iter()
    }
}

impl<T: Ord> Extend<T> for Tree234<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> std::iter::FromIterator<T> for Tree234<T> {
    /// Create a tree by inserting every value in iteration order
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree234::new();
        tree.extend(iter);
        tree
    }
}
