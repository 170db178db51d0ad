//! A sorted sequence stored as two partitions growing away from the middle.
//!
//! This module provides [`SplitSortedVec`], which keeps its elements in two
//! [`SortedVec`]s:
//!
//! - `low` holds the smaller elements under the [`Inverted`] comparator, so its
//!   buffer is descending: its tail is the overall minimum and its head is the
//!   largest element of the lower part.
//! - `high` holds the larger elements ascending: its head is the smallest
//!   element of the upper part and its tail the overall maximum.
//!
//! Every element of `low` is ordered before or equal to every element of
//! `high`. Reading `low` back to front and then `high` front to back yields
//! the whole sequence in order.
//!
//! Because both buffers grow at their tails, ascending input appends to
//! `high`, descending input appends to `low`, and insertions around the
//! middle shift at most one of two shorter buffers.
//!
//! ```text
//!          low (descending)              high (ascending)
//!     ┌────┬────┬────┬────┬────┐    ┌────┬────┬────┬────┬────┐
//!     │ 40 │ 30 │ 20 │ 10 │  0 │    │ 50 │ 60 │ 70 │ 80 │ 90 │
//!     └────┴────┴────┴────┴────┘    └────┴────┴────┴────┴────┘
//!       head            tail ◄─┘      head            tail ─►
//!   logical:  0  10  20  30  40  50  60  70  80  90
//! ```
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sorted::SplitSortedVec;
//!
//! let mut values = SplitSortedVec::new();
//! for value in [5, 3, 7, 1, 9] {
//!     values.insert(value);
//! }
//! assert_eq!(values.to_vec(), vec![1, 3, 5, 7, 9]);
//! assert_eq!(values.get(1), Some(&3));
//! assert_eq!(values.get(5), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{FusedIterator, Rev};

use super::search::Tie;
use super::sorted_vec::SortedVecIter;
use super::{Comparator, Inverted, NaturalOrder, SortedVec, Upserted};

/// How [`SplitSortedVec::insert`] picks the partition for a new element.
///
/// Both strategies keep the sequence sorted; they differ only in how much
/// work an insertion costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoutingStrategy {
    /// Compute the insertion point in every partition that may legally take
    /// the value and choose the one that shifts fewer elements.
    ///
    /// Costs up to two searches per insertion. Elements that compare equal
    /// stay in insertion order.
    #[default]
    ShiftDistance,
    /// Compare against the extremes of `low` only:
    ///
    /// - into an empty sequence, insert into `high`;
    /// - with `low` empty, insert into `low` if the value is not greater than
    ///   the minimum of `high`, otherwise into `high`;
    /// - otherwise insert into `low` if the value is not greater than the
    ///   maximum of `low` (this includes values below its minimum), and into
    ///   `high` if it is.
    ///
    /// Costs at most one comparison before the search. The relative order of
    /// equal elements that straddle the partitions is not preserved.
    Boundary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Partition {
    Low,
    High,
}

/// Where a value is about to be stored.
#[derive(Debug, Clone, Copy)]
struct Placement {
    partition: Partition,
    position: usize,
}

/// A sorted sequence split into two partitions to shorten insertion shifts.
///
/// The public surface mirrors [`SortedVec`]; positions are always logical
/// positions in the full sorted sequence.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The comparator. Defaults to [`NaturalOrder`]. `with_comparator`,
///   `with_strategy` and `from_unsorted_with` require `C: Clone` because each
///   partition owns a copy.
///
/// # Examples
///
/// ```rust
/// use ordseq::sorted::{RoutingStrategy, SplitSortedVec};
///
/// let mut descending_input = SplitSortedVec::new();
/// for value in (1..=10).rev() {
///     descending_input.insert(value);
/// }
/// assert_eq!(descending_input.to_vec(), (1..=10).collect::<Vec<_>>());
///
/// let mut boundary = SplitSortedVec::with_strategy(
///     |left: &i32, right: &i32| left.cmp(right),
///     RoutingStrategy::Boundary,
/// );
/// boundary.extend([4, 8, 2, 6]);
/// assert_eq!(boundary.to_vec(), vec![2, 4, 6, 8]);
/// ```
#[derive(Clone)]
pub struct SplitSortedVec<T, C = NaturalOrder> {
    low: SortedVec<T, Inverted<C>>,
    high: SortedVec<T, C>,
    strategy: RoutingStrategy,
}

impl<T: Ord> SplitSortedVec<T> {
    /// Creates an empty sequence ordered by `Ord`.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            low: SortedVec::with_comparator(Inverted(NaturalOrder)),
            high: SortedVec::with_comparator(NaturalOrder),
            strategy: RoutingStrategy::ShiftDistance,
        }
    }

    /// Sorts `elements` by `Ord` and distributes them over both partitions.
    #[must_use]
    pub fn from_unsorted(elements: Vec<T>) -> Self {
        Self::from_unsorted_with(elements, NaturalOrder)
    }
}

impl<T, F> SplitSortedVec<T, F>
where
    F: Fn(&T, &T) -> Ordering + Clone,
{
    /// Creates an empty sequence ordered by a comparison closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::SplitSortedVec;
    ///
    /// let mut descending = SplitSortedVec::new_by(|left: &i32, right: &i32| right.cmp(left));
    /// descending.extend([1, 3, 2]);
    /// assert_eq!(descending.to_vec(), vec![3, 2, 1]);
    /// ```
    #[must_use]
    pub fn new_by(compare: F) -> Self {
        Self::with_comparator(compare)
    }
}

impl<T, C: Comparator<T> + Clone> SplitSortedVec<T, C> {
    /// Creates an empty sequence ordered by `comparator`, routing with
    /// [`RoutingStrategy::ShiftDistance`].
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_strategy(comparator, RoutingStrategy::default())
    }

    /// Creates an empty sequence ordered by `comparator`, routing with
    /// `strategy`.
    #[must_use]
    pub fn with_strategy(comparator: C, strategy: RoutingStrategy) -> Self {
        Self {
            low: SortedVec::with_comparator(Inverted(comparator.clone())),
            high: SortedVec::with_comparator(comparator),
            strategy,
        }
    }

    /// Sorts `elements` with `comparator`; the lower half becomes `low` and
    /// the upper half `high`, so later insertions on either side start
    /// balanced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::{NaturalOrder, SplitSortedVec};
    ///
    /// let values = SplitSortedVec::from_unsorted_with(vec![4, 1, 3, 2], NaturalOrder);
    /// assert_eq!(values.to_vec(), vec![1, 2, 3, 4]);
    /// assert_eq!((values.low_len(), values.high_len()), (2, 2));
    /// ```
    #[must_use]
    pub fn from_unsorted_with(mut elements: Vec<T>, comparator: C) -> Self {
        elements.sort_by(|left, right| comparator.compare(left, right));
        let upper = elements.split_off(elements.len() / 2);
        let mut lower = elements;
        lower.reverse();
        tracing::trace!(
            low = lower.len(),
            high = upper.len(),
            "distributed sorted input over partitions"
        );
        Self {
            low: SortedVec::from_sorted_unchecked(lower, Inverted(comparator.clone())),
            high: SortedVec::from_sorted_unchecked(upper, comparator),
            strategy: RoutingStrategy::default(),
        }
    }
}

impl<T, C: Comparator<T>> SplitSortedVec<T, C> {
    /// Returns the total number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }

    /// Returns `true` if neither partition holds an element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.low.is_empty() && self.high.is_empty()
    }

    /// Returns the number of elements in the lower partition.
    #[inline]
    #[must_use]
    pub fn low_len(&self) -> usize {
        self.low.len()
    }

    /// Returns the number of elements in the upper partition.
    #[inline]
    #[must_use]
    pub fn high_len(&self) -> usize {
        self.high.len()
    }

    /// Returns the routing strategy in use.
    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> RoutingStrategy {
        self.strategy
    }

    /// Switches the routing strategy for subsequent insertions.
    #[inline]
    pub const fn set_strategy(&mut self, strategy: RoutingStrategy) {
        self.strategy = strategy;
    }

    /// Returns the comparator that orders this sequence.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.high.comparator()
    }

    /// Returns the element at logical position `index`, or `None` if out of
    /// bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.locate_index(index)? {
            (Partition::Low, position) => self.low.get(position),
            (Partition::High, position) => self.high.get(position),
        }
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.low.last().or_else(|| self.high.first())
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.high.last().or_else(|| self.low.first())
    }

    /// Returns `true` if an element comparator-equal to `value` is stored.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Inserts `value`, returning its logical position.
    ///
    /// The partition is chosen by the configured [`RoutingStrategy`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::SplitSortedVec;
    ///
    /// let mut values = SplitSortedVec::new();
    /// assert_eq!(values.insert(10), 0);
    /// assert_eq!(values.insert(30), 1);
    /// assert_eq!(values.insert(20), 1);
    /// assert_eq!(values.to_vec(), vec![10, 20, 30]);
    /// ```
    pub fn insert(&mut self, value: T) -> usize {
        let Placement {
            partition,
            position,
        } = self.route(&value);
        tracing::trace!(?partition, position, strategy = ?self.strategy, "routed insertion");

        match partition {
            Partition::Low => {
                self.low.insert_at_sorted_position(position, value);
                self.low.len() - 1 - position
            }
            Partition::High => {
                self.high.insert_at_sorted_position(position, value);
                self.low.len() + position
            }
        }
    }

    /// Removes and returns one element comparator-equal to `value`.
    ///
    /// The lower partition is tried first. Returns `None` and leaves the
    /// sequence untouched if no element matches.
    pub fn delete(&mut self, value: &T) -> Option<T> {
        self.low.delete(value).or_else(|| self.high.delete(value))
    }

    /// Removes and returns the element at logical position `index`, or `None`
    /// if out of bounds.
    pub fn delete_at(&mut self, index: usize) -> Option<T> {
        match self.locate_index(index)? {
            (Partition::Low, position) => self.low.delete_at(position),
            (Partition::High, position) => self.high.delete_at(position),
        }
    }

    /// Overwrites an element comparator-equal to `value` in place, or inserts
    /// `value` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordseq::sorted::{SplitSortedVec, Upserted};
    ///
    /// let mut values = SplitSortedVec::new();
    /// assert_eq!(values.upsert(1), Upserted::Inserted(0));
    /// assert_eq!(values.upsert(1), Upserted::Updated(1));
    /// assert_eq!(values.len(), 1);
    /// ```
    pub fn upsert(&mut self, value: T) -> Upserted<T> {
        match self.find(&value) {
            Some((Partition::Low, position)) => Upserted::Updated(self.low.replace_at(position, value)),
            Some((Partition::High, position)) => {
                Upserted::Updated(self.high.replace_at(position, value))
            }
            None => Upserted::Inserted(self.insert(value)),
        }
    }

    /// Removes every element from both partitions.
    pub fn clear(&mut self) {
        self.low.clear();
        self.high.clear();
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        self.low.pop_last().or_else(|| self.high.pop_first())
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<T> {
        self.high.pop_last().or_else(|| self.low.pop_first())
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// Each call starts a fresh pass over the current contents.
    #[inline]
    pub fn iter(&self) -> SplitSortedVecIter<'_, T> {
        SplitSortedVecIter {
            low: self.low.iter().rev(),
            high: self.high.iter(),
        }
    }

    /// Copies the elements, in order, into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes the sequence, returning its elements in order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = self.low.into_vec();
        elements.reverse();
        elements.extend(self.high);
        elements
    }

    /// Maps a logical position onto a partition and a buffer position.
    fn locate_index(&self, index: usize) -> Option<(Partition, usize)> {
        let low_len = self.low.len();
        if index < low_len {
            Some((Partition::Low, low_len - 1 - index))
        } else if index - low_len < self.high.len() {
            Some((Partition::High, index - low_len))
        } else {
            None
        }
    }

    /// Finds the partition and buffer position of an element equal to
    /// `value`.
    ///
    /// Anything not greater than the maximum of `low` can only be stored in
    /// `low`; anything greater can only be stored in `high`.
    fn find(&self, value: &T) -> Option<(Partition, usize)> {
        let comparator = self.high.comparator();
        let within_low = self
            .low
            .first()
            .is_some_and(|maximum| comparator.compare(value, maximum) != Ordering::Greater);

        if within_low {
            self.low
                .search(value)
                .found()
                .map(|position| (Partition::Low, position))
        } else {
            self.high
                .search(value)
                .found()
                .map(|position| (Partition::High, position))
        }
    }

    fn route(&self, value: &T) -> Placement {
        match self.strategy {
            RoutingStrategy::ShiftDistance => self.route_by_shift_distance(value),
            RoutingStrategy::Boundary => self.place(self.route_by_boundary(value), value),
        }
    }

    fn place(&self, partition: Partition, value: &T) -> Placement {
        // Equal elements go logically after existing ones; in `low` that is
        // before them in buffer order.
        let position = match partition {
            Partition::Low => self.low.insertion_point(value, Tie::Before),
            Partition::High => self.high.insertion_point(value, Tie::After),
        };
        Placement {
            partition,
            position,
        }
    }

    fn route_by_shift_distance(&self, value: &T) -> Placement {
        let comparator = self.high.comparator();
        let fits_low = self
            .high
            .first()
            .is_none_or(|minimum| comparator.compare(value, minimum) == Ordering::Less);
        let fits_high = self
            .low
            .first()
            .is_none_or(|maximum| comparator.compare(value, maximum) != Ordering::Less);

        match (fits_low, fits_high) {
            (true, true) => {
                let low = self.place(Partition::Low, value);
                let high = self.place(Partition::High, value);
                let low_shift = self.low.len() - low.position;
                let high_shift = self.high.len() - high.position;
                if low_shift < high_shift { low } else { high }
            }
            (true, false) => self.place(Partition::Low, value),
            // The boundary invariant rules out (false, false).
            _ => self.place(Partition::High, value),
        }
    }

    fn route_by_boundary(&self, value: &T) -> Partition {
        let comparator = self.high.comparator();
        let not_greater = |bound: &T| comparator.compare(value, bound) != Ordering::Greater;

        if self.is_empty() {
            return Partition::High;
        }

        match self.low.first() {
            None if self.high.first().is_some_and(not_greater) => Partition::Low,
            None => Partition::High,
            // Also catches values at or below the minimum of `low`.
            Some(maximum) if not_greater(maximum) => Partition::Low,
            Some(_) => Partition::High,
        }
    }
}

impl<T, C: Default> Default for SplitSortedVec<T, C> {
    #[inline]
    fn default() -> Self {
        Self {
            low: SortedVec::default(),
            high: SortedVec::default(),
            strategy: RoutingStrategy::default(),
        }
    }
}

/// Iterator over references to the elements of a [`SplitSortedVec`],
/// ascending.
#[derive(Debug, Clone)]
pub struct SplitSortedVecIter<'a, T> {
    low: Rev<SortedVecIter<'a, T>>,
    high: SortedVecIter<'a, T>,
}

impl<'a, T> Iterator for SplitSortedVecIter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.low.next().or_else(|| self.high.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.low.len() + self.high.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for SplitSortedVecIter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.high.next_back().or_else(|| self.low.next_back())
    }
}

impl<T> ExactSizeIterator for SplitSortedVecIter<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.low.len() + self.high.len()
    }
}

impl<T> FusedIterator for SplitSortedVecIter<'_, T> {}

impl<'a, T, C: Comparator<T>> IntoIterator for &'a SplitSortedVec<T, C> {
    type Item = &'a T;
    type IntoIter = SplitSortedVecIter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C: Comparator<T>> IntoIterator for SplitSortedVec<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

impl<T, C: Comparator<T> + Clone + Default> FromIterator<T> for SplitSortedVec<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_unsorted_with(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for SplitSortedVec<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug, C: Comparator<T>> fmt::Debug for SplitSortedVec<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C: Comparator<T>> fmt::Display for SplitSortedVec<T, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
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

impl<T: PartialEq, C: Comparator<T>> PartialEq for SplitSortedVec<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, C: Comparator<T>> Eq for SplitSortedVec<T, C> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C: Comparator<T>> serde::Serialize for SplitSortedVec<T, C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

/// Reads a plain sequence and redistributes it as
/// [`from_unsorted_with`](SplitSortedVec::from_unsorted_with) does.
///
/// The routing strategy is not part of the wire format; a deserialized
/// sequence always starts with [`RoutingStrategy::default()`].
#[cfg(feature = "serde")]
impl<'de, T, C> serde::Deserialize<'de> for SplitSortedVec<T, C>
where
    T: serde::Deserialize<'de>,
    C: Comparator<T> + Clone + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let elements = <Vec<T> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_unsorted_with(elements, C::default()))
    }
}
