//! Error types for sorted containers.
//!
//! Lookups and removals report missing elements through `Option`, so the only
//! fallible operation is adopting a buffer that claims to be sorted already.

use std::fmt;

/// A buffer handed to `try_from_sorted_vec` was not sorted under the
/// container's comparator.
///
/// # Examples
///
/// ```rust
/// use ordseq::sorted::{NaturalOrder, SortedVec, UnsortedInputError};
///
/// let error = SortedVec::try_from_sorted_vec(vec![1, 3, 2], NaturalOrder).unwrap_err();
/// assert_eq!(error, UnsortedInputError { position: 2 });
/// assert_eq!(
///     error.to_string(),
///     "input is not sorted: element at position 2 is ordered before its predecessor"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsortedInputError {
    /// Index of the first element that compares less than the one before it.
    pub position: usize,
}

impl fmt::Display for UnsortedInputError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "input is not sorted: element at position {} is ordered before its predecessor",
            self.position
        )
    }
}

impl std::error::Error for UnsortedInputError {}
