//! Shared helpers for the integration tests.
//!
//! Set `RUST_LOG` (e.g. `tree234=trace`) and build with `--features tracing`
//! to see split events while a test runs.

#![allow(dead_code)]

use std::fmt::Debug;
use std::sync::Once;

use tracing_subscriber::EnvFilter;
use tree234::{NodeRef, Tree234, MAX_KEYS};

static INIT: Once = Once::new();

/// Install a test-friendly subscriber once per test binary.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Assert every structural invariant of `tree` through its read-only view:
/// key counts, child counts, key ranges, parent links and leaf depth.
pub fn assert_well_formed<T: PartialOrd + Debug>(tree: &Tree234<T>) {
    match tree.root() {
        None => {
            assert_eq!(tree.len(), 0);
            assert_eq!(tree.height(), 0);
        }
        Some(root) => {
            assert_eq!(root.parent(), None, "root has a parent");
            let (depth, count) = check_subtree(root, None, None);
            assert_eq!(depth, tree.height());
            assert_eq!(count, tree.len());
        }
    }
}

/// Return (leaf depth, number of keys) of the subtree under `node`
fn check_subtree<T: PartialOrd + Debug>(
    node: NodeRef<T>,
    lower: Option<&T>,
    upper: Option<&T>,
) -> (usize, usize) {
    let keys = node.keys();
    assert!(
        (1..=MAX_KEYS).contains(&keys.len()),
        "node with {} keys",
        keys.len()
    );
    for pair in keys.windows(2) {
        assert!(pair[0] <= pair[1], "unsorted keys {:?}", keys);
    }
    for key in keys {
        if let Some(lower) = lower {
            assert!(lower <= key, "{:?} below bound {:?}", key, lower);
        }
        if let Some(upper) = upper {
            assert!(key <= upper, "{:?} above bound {:?}", key, upper);
        }
    }

    if node.is_leaf() {
        return (1, keys.len());
    }

    assert_eq!(node.children().len(), keys.len() + 1);
    let mut depth = None;
    let mut count = keys.len();
    for (i, child) in node.children().enumerate() {
        let occurrences = node.children().filter(|c| *c == child).count();
        assert_eq!(occurrences, 1, "child listed twice");
        assert_eq!(child.parent(), Some(node), "stale parent link");

        let child_lower = if i == 0 { lower } else { Some(&keys[i - 1]) };
        let child_upper = if i == keys.len() { upper } else { Some(&keys[i]) };
        let (child_depth, child_count) = check_subtree(child, child_lower, child_upper);
        assert_eq!(
            *depth.get_or_insert(child_depth),
            child_depth,
            "leaves at different depths"
        );
        count += child_count;
    }
    (depth.unwrap_or(0) + 1, count)
}
