mod node;
mod tree;
mod tree_iter;

pub(crate) use node::Node;
pub use node::NodeRef;
pub use tree::Tree234;
pub use tree_iter::TreeIter;

use std::cmp::Ordering;

/// Maximum number of keys in a node: a full node is a 4-node
pub const MAX_KEYS: usize = 3;

/// Whether `a < b` under a fallible comparator
fn is_less<T, E, F>(compare: &mut F, a: &T, b: &T) -> Result<bool, E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    Ok(compare(a, b)? == Ordering::Less)
}
