//! Error type for tree operations.

use thiserror::Error;

/// Result type alias using `ComparisonError`.
pub type Result<T> = std::result::Result<T, ComparisonError>;

/// Two keys could not be ordered relative to each other.
///
/// Raised when `PartialOrd::partial_cmp` (or a comparator given to
/// [`Tree234::add_by`](crate::Tree234::add_by)) returns `None` for a pair the
/// insertion needs to order, e.g. a `NaN` float against anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("keys cannot be ordered relative to each other")]
pub struct ComparisonError;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            ComparisonError.to_string(),
            "keys cannot be ordered relative to each other"
        );
    }
}
