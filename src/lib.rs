//! A 2-3-4 tree: a balanced search tree whose nodes hold 1, 2 or 3 keys.
//!
//! Insertion walks from the root to a leaf and splits every full node
//! (a 4-node) it passes through, promoting the middle key into the parent or
//! into a new root. All leaves therefore stay at the same depth.
//!
//! ```
//! use tree234::Tree234;
//!
//! let mut tree = Tree234::new();
//! tree.add_all("abcpqrsdte".chars()).unwrap();
//! assert_eq!(tree.iter().collect::<String>(), "abcdepqrst");
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.keys(), &['p']);
//! assert_eq!(root.children().count(), 2);
//! ```


mod arena;
mod error;
mod tracing_helpers;
mod tree234;

pub use crate::error::{ComparisonError, Result};
pub use crate::tree234::{NodeRef, Tree234, TreeIter, MAX_KEYS};
