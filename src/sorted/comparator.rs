//! Three-way ordering functions supplied to sorted containers.
//!
//! A [`Comparator`] is fixed at construction time and is assumed to describe
//! a total order: consistent across calls and transitive. Violating that
//! precondition does not cause undefined behavior, but the resulting element
//! order is unspecified.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sorted::{Comparator, Inverted, NaturalOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert_eq!(Inverted(NaturalOrder).compare(&1, &2), Ordering::Greater);
//!
//! // Any `Fn(&T, &T) -> Ordering` is a comparator.
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"ab", &"c"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A three-way ordering function over pairs of `T`.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` against `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering + ?Sized,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// Orders elements by their [`Ord`] implementation.
///
/// This is the default comparator of [`SortedVec`](super::SortedVec) and
/// [`SplitSortedVec`](super::SplitSortedVec).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Reverses the order described by the wrapped comparator.
///
/// # Examples
///
/// ```rust
/// use ordseq::sorted::{Inverted, NaturalOrder, SortedVec};
///
/// let mut descending = SortedVec::with_comparator(Inverted(NaturalOrder));
/// descending.extend([1, 3, 2]);
/// assert_eq!(descending.as_slice(), &[3, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Inverted<C>(pub C);

impl<C> Inverted<C> {
    /// Returns a reference to the wrapped comparator.
    #[inline]
    pub const fn inner(&self) -> &C {
        &self.0
    }

    /// Unwraps the inner comparator.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Inverted<C> {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(left, right).reverse()
    }
}
