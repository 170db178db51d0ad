//! Hybrid search over comparator-sorted slices.
//!
//! [`search`] locates an element or the position where it would have to be
//! inserted to keep the slice sorted. The strategy is picked per call:
//!
//! 1. an empty slice answers immediately;
//! 2. the last element is checked first, so appending in ascending order
//!    never pays for a full search;
//! 3. slices shorter than [`LINEAR_SCAN_THRESHOLD`] are scanned linearly;
//! 4. longer slices use a lower-bound binary search.

use std::cmp::Ordering;

use super::Comparator;

/// Slices shorter than this are scanned linearly instead of bisected.
pub const LINEAR_SCAN_THRESHOLD: usize = 8;

/// The result of searching a sorted slice.
///
/// # Examples
///
/// ```rust
/// use ordseq::sorted::{search, NaturalOrder, SearchOutcome};
///
/// let values = [1, 3, 5];
/// assert_eq!(search(&values, &3, &NaturalOrder), SearchOutcome::Found(1));
/// assert_eq!(search(&values, &4, &NaturalOrder), SearchOutcome::NotFound(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOutcome {
    /// An element comparator-equal to the target is stored at this index.
    Found(usize),
    /// No equal element exists; inserting at this index keeps the order.
    NotFound(usize),
}

impl SearchOutcome {
    /// Returns the index carried by either variant.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Found(index) | Self::NotFound(index) => index,
        }
    }

    /// Returns `true` for [`SearchOutcome::Found`].
    #[inline]
    #[must_use]
    pub const fn is_found(self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Returns the index of the equal element, if one was found.
    #[inline]
    #[must_use]
    pub const fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::NotFound(_) => None,
        }
    }
}

/// Converts into the `Ok(found) / Err(insertion)` convention of
/// [`slice::binary_search`].
impl From<SearchOutcome> for Result<usize, usize> {
    #[inline]
    fn from(outcome: SearchOutcome) -> Self {
        match outcome {
            SearchOutcome::Found(index) => Ok(index),
            SearchOutcome::NotFound(index) => Err(index),
        }
    }
}

/// Searches `slice`, which must be sorted ascending under `comparator`, for
/// `target`.
///
/// With duplicates, the tail check reports the last element when it is equal
/// to `target`; otherwise the leftmost equal element is reported.
///
/// # Complexity
///
/// O(1) when `target` is not less than the last element, O(n) below
/// [`LINEAR_SCAN_THRESHOLD`], O(log n) otherwise.
pub fn search<T, C>(slice: &[T], target: &T, comparator: &C) -> SearchOutcome
where
    C: Comparator<T> + ?Sized,
{
    let Some(last) = slice.last() else {
        return SearchOutcome::NotFound(0);
    };

    let last_index = slice.len() - 1;
    match comparator.compare(last, target) {
        Ordering::Equal => return SearchOutcome::Found(last_index),
        Ordering::Less => return SearchOutcome::NotFound(slice.len()),
        Ordering::Greater => {}
    }

    if slice.len() < LINEAR_SCAN_THRESHOLD {
        for (index, element) in slice.iter().enumerate() {
            match comparator.compare(element, target) {
                Ordering::Equal => return SearchOutcome::Found(index),
                Ordering::Greater => return SearchOutcome::NotFound(index),
                Ordering::Less => {}
            }
        }
        return SearchOutcome::NotFound(slice.len());
    }

    let position =
        slice.partition_point(|element| comparator.compare(element, target) == Ordering::Less);
    match slice.get(position) {
        Some(element) if comparator.compare(element, target) == Ordering::Equal => {
            SearchOutcome::Found(position)
        }
        _ => SearchOutcome::NotFound(position),
    }
}

/// Which end of a run of equal elements an insertion point refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tie {
    /// Before every element equal to the target (lower bound).
    Before,
    /// After every element equal to the target (upper bound).
    After,
}

impl Tie {
    /// Returns `true` if an element ordered `ordering` relative to the target
    /// belongs in front of the insertion point.
    #[inline]
    const fn precedes(self, ordering: Ordering) -> bool {
        match self {
            Self::Before => matches!(ordering, Ordering::Less),
            Self::After => !matches!(ordering, Ordering::Greater),
        }
    }
}

/// Returns the lower or upper bound of `target` in `slice`, using the same
/// tail check and linear-scan cutoff as [`search`].
pub(crate) fn insertion_point<T, C>(slice: &[T], target: &T, comparator: &C, tie: Tie) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let Some(last) = slice.last() else {
        return 0;
    };

    if tie.precedes(comparator.compare(last, target)) {
        return slice.len();
    }

    if slice.len() < LINEAR_SCAN_THRESHOLD {
        return slice
            .iter()
            .position(|element| !tie.precedes(comparator.compare(element, target)))
            .unwrap_or(slice.len());
    }

    slice.partition_point(|element| tie.precedes(comparator.compare(element, target)))
}
