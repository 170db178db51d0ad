//! A growable vector that keeps its elements sorted.
//!
//! This module provides [`SortedVec`], a single contiguous buffer ordered by a
//! [`Comparator`] supplied at construction time. Every mutation goes through
//! the container, so the buffer is sorted at all times and can be read back
//! without a sort step.
//!
//! # Time Complexity
//!
//! | Operation      | Append (tail)   | General         |
//! |----------------|-----------------|-----------------|
//! | `insert`       | O(1) amortized  | O(n)            |
//! | `upsert`       | O(1) amortized  | O(n)            |
//! | `delete`       | O(1)            | O(n)            |
//! | `delete_at`    | O(1)            | O(n)            |
//! | `search`       | O(1)            | O(log n)        |
//! | `first`/`last` | O(1)            | O(1)            |
//!
//! The tail column applies when the target is not less than the current
//! maximum: the search answers from the last element and nothing is shifted.
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sorted::SortedVec;
//!
//! let mut values = SortedVec::new();
//! for value in [3, 1, 4, 1, 5] {
//!     values.insert(value);
//! }
//! assert_eq!(values.as_slice(), &[1, 1, 3, 4, 5]);
//!
//! assert_eq!(values.delete(&4), Some(4));
//! assert_eq!(values.delete(&9), None);
//! assert_eq!(values.first(), Some(&1));
//! assert_eq!(values.last(), Some(&5));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use super::search::{Tie, insertion_point};
use super::{Comparator, NaturalOrder, SearchOutcome, UnsortedInputError, search};

/// What [`SortedVec::upsert`] and
/// [`SplitSortedVec::upsert`](super::SplitSortedVec::upsert) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Upserted<T> {
    /// No equal element existed; the value was inserted at this index.
    Inserted(usize),
    /// An equal element was overwritten in place; it is returned here.
    Updated(T),
}

impl<T> Upserted<T> {
    /// Returns `true` if the value was inserted.
    #[inline]
    pub const fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted(_))
    }

    /// Returns `true` if an existing element was overwritten.
    #[inline]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated(_))
    }

    /// Returns the overwritten element, if any.
    #[inline]
    pub fn replaced(self) -> Option<T> {
        match self {
            Self::Inserted(_) => None,
            Self::Updated(previous) => Some(previous),
        }
    }
}

/// A vector whose elements are always sorted under a [`Comparator`].
///
/// Elements that compare equal are all kept. [`insert`](Self::insert) places a
/// new element after the ones it compares equal to, so equal elements stay in
/// insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The comparator. Defaults to [`NaturalOrder`], which uses `Ord`.
///
/// # Examples
///
/// ```rust
/// use ordseq::sorted::SortedVec;
///
/// let mut by_length = SortedVec::new_by(|left: &&str, right: &&str| left.len().cmp(&right.len()));
/// by_length.extend(["ccc", "a", "bb", "d"]);
/// assert_eq!(by_length.as_slice(), &["a", "d", "bb", "ccc"]);
/// ```
#[derive(Clone)]
pub struct SortedVec<T, C = NaturalOrder> {
    elements: Vec<T>,
    comparator: C,
}

impl<T: Ord> SortedVec<T> {
    /// Creates an empty vector ordered by `Ord`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::SortedVec;
    ///
    /// let values: SortedVec<i32> = SortedVec::new();
    /// assert!(values.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Creates an empty vector ordered by `Ord` with room for `capacity`
    /// elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, NaturalOrder)
    }

    /// Sorts `elements` by `Ord` and adopts them as the backing buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::SortedVec;
    ///
    /// let values = SortedVec::from_unsorted(vec![3, 1, 2]);
    /// assert_eq!(values.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_unsorted(elements: Vec<T>) -> Self {
        Self::from_unsorted_with(elements, NaturalOrder)
    }
}

impl<T, F> SortedVec<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Creates an empty vector ordered by a comparison closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::SortedVec;
    ///
    /// let mut descending = SortedVec::new_by(|left: &i32, right: &i32| right.cmp(left));
    /// descending.extend([1, 3, 2]);
    /// assert_eq!(descending.as_slice(), &[3, 2, 1]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new_by(compare: F) -> Self {
        Self::with_comparator(compare)
    }
}

impl<T, C: Comparator<T>> SortedVec<T, C> {
    /// Creates an empty vector ordered by `comparator`.
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            elements: Vec::new(),
            comparator,
        }
    }

    /// Creates an empty vector with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity_and_comparator(capacity: usize, comparator: C) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// Sorts `elements` with `comparator` and adopts them as the backing
    /// buffer, skipping per-element insertion.
    ///
    /// The sort is stable, so equal elements keep their input order.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn from_unsorted_with(mut elements: Vec<T>, comparator: C) -> Self {
        elements.sort_by(|left, right| comparator.compare(left, right));
        tracing::trace!(len = elements.len(), "adopted sorted buffer");
        Self {
            elements,
            comparator,
        }
    }

    /// Adopts `elements` as the backing buffer if they are already sorted
    /// under `comparator`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedInputError`] naming the first element that compares
    /// less than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::{NaturalOrder, SortedVec};
    ///
    /// let values = SortedVec::try_from_sorted_vec(vec![1, 1, 2], NaturalOrder).unwrap();
    /// assert_eq!(values.len(), 3);
    ///
    /// assert!(SortedVec::try_from_sorted_vec(vec![2, 1], NaturalOrder).is_err());
    /// ```
    pub fn try_from_sorted_vec(elements: Vec<T>, comparator: C) -> Result<Self, UnsortedInputError> {
        let misplaced = elements
            .windows(2)
            .position(|pair| comparator.compare(&pair[0], &pair[1]) == Ordering::Greater);

        if let Some(predecessor) = misplaced {
            let position = predecessor + 1;
            tracing::debug!(position, "rejected unsorted buffer");
            return Err(UnsortedInputError { position });
        }

        Ok(Self {
            elements,
            comparator,
        })
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the buffer can hold without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.elements.reserve(additional);
    }

    /// Releases unused buffer capacity.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.elements.shrink_to_fit();
    }

    /// Returns the comparator that orders this vector.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Locates `value` or the index where it would be inserted.
    ///
    /// See [`search`](super::search()) for the lookup strategy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::{SearchOutcome, SortedVec};
    ///
    /// let values = SortedVec::from_unsorted(vec![10, 30, 20]);
    /// assert_eq!(values.search(&20), SearchOutcome::Found(1));
    /// assert_eq!(values.search(&25), SearchOutcome::NotFound(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn search(&self, value: &T) -> SearchOutcome {
        search(&self.elements, value, &self.comparator)
    }

    /// Returns `true` if an element comparator-equal to `value` is stored.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_found()
    }

    /// Inserts `value`, returning the index it was placed at.
    ///
    /// Duplicates are accepted. Unlike a lower-bound insert at the index
    /// [`search`](Self::search) reports, the new element goes after every
    /// element it compares equal to, so equal elements keep insertion order.
    /// Elements at or after the returned index shift right by one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::SortedVec;
    ///
    /// let mut values = SortedVec::from_unsorted(vec![1, 2, 4]);
    /// assert_eq!(values.insert(3), 2);
    /// assert_eq!(values.insert(4), 4);
    /// assert_eq!(values.as_slice(), &[1, 2, 3, 4, 4]);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        self.insert_with_tie(value, Tie::After)
    }

    /// Removes and returns an element comparator-equal to `value`.
    ///
    /// Returns `None` and leaves the vector untouched if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::SortedVec;
    ///
    /// let mut values = SortedVec::from_unsorted(vec![1, 2, 3]);
    /// assert_eq!(values.delete(&2), Some(2));
    /// assert_eq!(values.as_slice(), &[1, 3]);
    /// assert_eq!(values.delete(&2), None);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T> {
        self.search(value)
            .found()
            .map(|index| self.elements.remove(index))
    }

    /// Removes and returns the element at `index`, or `None` if out of bounds.
    pub fn delete_at(&mut self, index: usize) -> Option<T> {
        (index < self.elements.len()).then(|| self.elements.remove(index))
    }

    /// Overwrites an element comparator-equal to `value` in place, or inserts
    /// `value` if there is none.
    ///
    /// Overwriting never shifts elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::{SortedVec, Upserted};
    ///
    /// let mut values = SortedVec::new();
    /// assert_eq!(values.upsert(1), Upserted::Inserted(0));
    /// assert_eq!(values.upsert(1), Upserted::Updated(1));
    /// assert_eq!(values.as_slice(), &[1]);
    /// ```
    pub fn upsert(&mut self, value: T) -> Upserted<T> {
        match self.search(&value) {
            SearchOutcome::Found(index) => Upserted::Updated(self.replace_at(index, value)),
            SearchOutcome::NotFound(index) => {
                self.elements.insert(index, value);
                Upserted::Inserted(index)
            }
        }
    }

    /// Removes every element. The allocation is kept for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        self.delete_at(0)
    }

    /// Removes and returns the largest element.
    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// Removal preserves the order of the remaining elements.
    pub fn retain<P>(&mut self, predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.retain(predicate);
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// Each call starts a fresh pass over the current contents.
    #[inline]
    pub fn iter(&self) -> SortedVecIter<'_, T> {
        SortedVecIter {
            inner: self.elements.iter(),
        }
    }

    /// Consumes the vector, returning the sorted backing buffer.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Adopts a buffer the caller has already sorted under `comparator`.
    pub(crate) fn from_sorted_unchecked(elements: Vec<T>, comparator: C) -> Self {
        debug_assert!(
            elements
                .windows(2)
                .all(|pair| comparator.compare(&pair[0], &pair[1]) != Ordering::Greater),
            "from_sorted_unchecked requires elements sorted under the comparator"
        );
        Self {
            elements,
            comparator,
        }
    }

    /// Returns the index `value` would be inserted at with the given tie
    /// placement.
    pub(crate) fn insertion_point(&self, value: &T, tie: Tie) -> usize {
        insertion_point(&self.elements, value, &self.comparator, tie)
    }

    pub(crate) fn insert_with_tie(&mut self, value: T, tie: Tie) -> usize {
        let position = self.insertion_point(&value, tie);
        self.elements.insert(position, value);
        position
    }

    /// Inserts `value` at a position already known to keep the order.
    pub(crate) fn insert_at_sorted_position(&mut self, position: usize, value: T) {
        debug_assert!(position <= self.elements.len());
        self.elements.insert(position, value);
    }

    /// Swaps `value` into `index`, which must hold an element comparator-equal
    /// to it.
    pub(crate) fn replace_at(&mut self, index: usize, value: T) -> T {
        std::mem::replace(&mut self.elements[index], value)
    }
}

impl<T, C: Default> Default for SortedVec<T, C> {
    #[inline]
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            comparator: C::default(),
        }
    }
}

/// Iterator over references to the elements of a [`SortedVec`], ascending.
#[derive(Debug, Clone)]
pub struct SortedVecIter<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for SortedVecIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for SortedVecIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for SortedVecIter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for SortedVecIter<'_, T> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a SortedVec<T, C> {
    type Item = &'a T;
    type IntoIter = SortedVecIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for SortedVec<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for SortedVec<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted_with(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedVec<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, C> From<SortedVec<T, C>> for Vec<T> {
    #[inline]
    fn from(sorted: SortedVec<T, C>) -> Self {
        sorted.elements
    }
}

impl<T: fmt::Debug, C> fmt::Debug for SortedVec<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(&self.elements).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for SortedVec<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: PartialEq, C> PartialEq for SortedVec<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq, C> Eq for SortedVec<T, C> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C> serde::Serialize for SortedVec<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.elements.len()))?;
        for element in &self.elements {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct SortedVecVisitor<T, C> {
    marker: std::marker::PhantomData<(T, C)>,
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::de::Visitor<'de> for SortedVecVisitor<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = SortedVec<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        // Incoming order is not trusted; collect and sort once.
        let mut elements = Vec::with_capacity(access.size_hint().unwrap_or(0).min(4096));
        while let Some(element) = access.next_element()? {
            elements.push(element);
        }
        Ok(SortedVec::from_unsorted_with(elements, C::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for SortedVec<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedVecVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorted::Inverted;
    use rstest::rstest;

    fn is_sorted<T, C: Comparator<T>>(values: &SortedVec<T, C>) -> bool {
        values
            .as_slice()
            .windows(2)
            .all(|pair| values.comparator().compare(&pair[0], &pair[1]) != Ordering::Greater)
    }

    #[rstest]
    fn test_new_creates_empty() {
        let values: SortedVec<i32> = SortedVec::new();
        assert!(values.is_empty());
        assert_eq!(values.len(), 0);
        assert_eq!(values.first(), None);
        assert_eq!(values.last(), None);
    }

    #[rstest]
    fn test_insert_scenario_from_unordered_input() {
        let mut values = SortedVec::new();
        for value in [3, 1, 4, 1, 5] {
            values.insert(value);
        }
        assert_eq!(values.iter().copied().collect::<Vec<_>>(), vec![1, 1, 3, 4, 5]);
    }

    #[rstest]
    #[case::append(vec![1, 2, 3], 4, 3)]
    #[case::prepend(vec![1, 2, 3], 0, 0)]
    #[case::middle(vec![1, 3, 5], 4, 2)]
    #[case::into_empty(vec![], 7, 0)]
    #[case::duplicate_goes_last(vec![1, 2, 2, 3], 2, 3)]
    fn test_insert_returns_position(
        #[case] initial: Vec<i32>,
        #[case] value: i32,
        #[case] expected: usize,
    ) {
        let mut values = SortedVec::from_unsorted(initial);
        assert_eq!(values.insert(value), expected);
        assert_eq!(values.get(expected), Some(&value));
        assert!(is_sorted(&values));
    }

    #[rstest]
    fn test_insert_keeps_equal_elements_in_insertion_order() {
        let mut pairs = SortedVec::new_by(|left: &(i32, char), right: &(i32, char)| left.0.cmp(&right.0));
        for pair in [(2, 'a'), (1, 'b'), (2, 'c'), (2, 'd'), (1, 'e')] {
            pairs.insert(pair);
        }
        assert_eq!(
            pairs.as_slice(),
            &[(1, 'b'), (1, 'e'), (2, 'a'), (2, 'c'), (2, 'd')]
        );
    }

    #[rstest]
    fn test_insert_beyond_linear_threshold_stays_sorted() {
        let mut values = SortedVec::new();
        for value in [50, 10, 40, 20, 30, 25, 35, 45, 15, 5, 55, 33] {
            values.insert(value);
            assert!(is_sorted(&values));
        }
        assert_eq!(values.len(), 12);
    }

    #[rstest]
    fn test_delete_present_value() {
        let mut values = SortedVec::from_unsorted(vec![1, 2, 3]);
        assert_eq!(values.delete(&2), Some(2));
        assert_eq!(values.as_slice(), &[1, 3]);
    }

    #[rstest]
    fn test_delete_absent_value_leaves_vector_untouched() {
        let mut values = SortedVec::from_unsorted(vec![1, 3]);
        assert_eq!(values.delete(&2), None);
        assert_eq!(values.as_slice(), &[1, 3]);
    }

    #[rstest]
    fn test_delete_removes_single_duplicate() {
        let mut values = SortedVec::from_unsorted(vec![4, 4, 4]);
        assert_eq!(values.delete(&4), Some(4));
        assert_eq!(values.len(), 2);
    }

    #[rstest]
    #[case(0, Some(10))]
    #[case(2, Some(30))]
    #[case(3, None)]
    #[case(usize::MAX, None)]
    fn test_delete_at(#[case] index: usize, #[case] expected: Option<i32>) {
        let mut values = SortedVec::from_unsorted(vec![30, 10, 20]);
        let before = values.len();
        assert_eq!(values.delete_at(index), expected);
        assert_eq!(values.len(), before - usize::from(expected.is_some()));
    }

    #[rstest]
    fn test_upsert_inserts_then_updates() {
        let mut values = SortedVec::new();
        assert!(values.upsert(1).is_inserted());
        assert!(values.upsert(1).is_updated());
        assert_eq!(values.as_slice(), &[1]);
    }

    #[rstest]
    fn test_upsert_overwrites_in_place() {
        let mut entries =
            SortedVec::new_by(|left: &(u32, &str), right: &(u32, &str)| left.0.cmp(&right.0));
        entries.extend([(1, "one"), (2, "two"), (3, "three")]);

        let outcome = entries.upsert((2, "TWO"));
        assert_eq!(outcome.replaced(), Some((2, "two")));
        assert_eq!(entries.as_slice(), &[(1, "one"), (2, "TWO"), (3, "three")]);
    }

    #[rstest]
    fn test_upsert_insert_reports_index() {
        let mut values = SortedVec::from_unsorted(vec![1, 5]);
        assert_eq!(values.upsert(3), Upserted::Inserted(1));
        assert_eq!(values.as_slice(), &[1, 3, 5]);
    }

    #[rstest]
    fn test_clear_keeps_capacity() {
        let mut values = SortedVec::from_unsorted((0..100).collect());
        let capacity = values.capacity();
        values.clear();
        assert!(values.is_empty());
        assert_eq!(values.capacity(), capacity);
        values.shrink_to_fit();
        assert!(values.capacity() < capacity);
    }

    #[rstest]
    fn test_with_capacity_preallocates() {
        let mut values = SortedVec::with_capacity(16);
        assert!(values.capacity() >= 16);
        values.extend([2, 1]);
        assert_eq!(values.as_slice(), &[1, 2]);
    }

    #[rstest]
    fn test_first_and_last() {
        let values = SortedVec::from_unsorted(vec![5, -2, 9, 0]);
        assert_eq!(values.first(), Some(&-2));
        assert_eq!(values.last(), Some(&9));
    }

    #[rstest]
    fn test_pop_first_and_last() {
        let mut values = SortedVec::from_unsorted(vec![2, 3, 1]);
        assert_eq!(values.pop_first(), Some(1));
        assert_eq!(values.pop_last(), Some(3));
        assert_eq!(values.pop_last(), Some(2));
        assert_eq!(values.pop_first(), None);
    }

    #[rstest]
    fn test_retain_preserves_order() {
        let mut values = SortedVec::from_unsorted((0..10).rev().collect());
        values.retain(|value| value % 3 == 0);
        assert_eq!(values.as_slice(), &[0, 3, 6, 9]);
    }

    #[rstest]
    fn test_from_unsorted_with_inverted_comparator() {
        let values = SortedVec::from_unsorted_with(vec![1, 3, 2], Inverted(NaturalOrder));
        assert_eq!(values.as_slice(), &[3, 2, 1]);
        assert_eq!(values.first(), Some(&3));
    }

    #[rstest]
    fn test_try_from_sorted_vec_accepts_duplicates() {
        let values = SortedVec::try_from_sorted_vec(vec![1, 2, 2, 3], NaturalOrder);
        assert_eq!(values.map(SortedVec::into_vec), Ok(vec![1, 2, 2, 3]));
    }

    #[rstest]
    #[case(vec![2, 1], 1)]
    #[case(vec![1, 2, 3, 0], 3)]
    fn test_try_from_sorted_vec_reports_position(#[case] input: Vec<i32>, #[case] position: usize) {
        let result = SortedVec::try_from_sorted_vec(input, NaturalOrder);
        assert_eq!(result.err(), Some(UnsortedInputError { position }));
    }

    #[rstest]
    fn test_iteration_is_restartable() {
        let values = SortedVec::from_unsorted(vec![3, 1, 2]);
        let first_pass: Vec<_> = values.iter().collect();
        let second_pass: Vec<_> = (&values).into_iter().collect();
        assert_eq!(first_pass, second_pass);
        assert_eq!(values.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(values.iter().len(), 3);
    }

    #[rstest]
    fn test_owned_into_iter() {
        let values = SortedVec::from_unsorted(vec![3, 1, 2]);
        assert_eq!(values.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_collect_sorts() {
        let values: SortedVec<i32> = [9, 3, 6].into_iter().collect();
        assert_eq!(values.as_slice(), &[3, 6, 9]);
        let descending: SortedVec<i32, Inverted<NaturalOrder>> = [9, 3, 6].into_iter().collect();
        assert_eq!(descending.as_slice(), &[9, 6, 3]);
    }

    #[rstest]
    fn test_display_and_debug() {
        let values = SortedVec::from_unsorted(vec![2, 1]);
        assert_eq!(format!("{values}"), "[1, 2]");
        assert_eq!(format!("{values:?}"), "[1, 2]");
        let empty: SortedVec<i32> = SortedVec::new();
        assert_eq!(format!("{empty}"), "[]");
    }

    #[rstest]
    fn test_equality_compares_elements() {
        let left = SortedVec::from_unsorted(vec![1, 2, 3]);
        let right: SortedVec<i32> = [3, 2, 1].into_iter().collect();
        assert_eq!(left, right);
        assert_ne!(left, SortedVec::from_unsorted(vec![1, 2]));
    }
}
