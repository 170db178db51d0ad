//! Incrementally maintained sorted sequences.
//!
//! This module provides two containers that keep their elements ordered by a
//! [`Comparator`] at all times, so reading them never requires a sort:
//!
//! - [`SortedVec`]: one contiguous buffer with a hybrid search
//! - [`SplitSortedVec`]: two [`SortedVec`] partitions growing away from the
//!   middle, which shortens the shifts an insertion causes
//!
//! Both accept duplicates, report missing elements as `None`, and iterate in
//! ascending order. Neither keeps indices stable across mutation.
//!
//! # Choosing a Container
//!
//! | Workload                         | `SortedVec`     | `SplitSortedVec` |
//! |----------------------------------|-----------------|------------------|
//! | Ascending appends                | O(1) amortized  | O(1) amortized   |
//! | Descending inserts               | O(n)            | O(1) amortized   |
//! | Inserts around the median        | O(n)            | O(n / 2)         |
//! | Positional read (`get`)          | O(1)            | O(1)             |
//!
//! # Examples
//!
//! ```rust
//! use ordseq::sorted::{SortedVec, SplitSortedVec};
//!
//! let mut single = SortedVec::new();
//! let mut split = SplitSortedVec::new();
//! for value in [5, 3, 7, 1, 9] {
//!     single.insert(value);
//!     split.insert(value);
//! }
//! assert_eq!(single.as_slice(), split.to_vec().as_slice());
//! ```
//!
//! # Concurrency
//!
//! The containers are plain owned values with no interior mutability. Borrow
//! rules already prevent mutation while an iterator is alive; sharing across
//! threads requires external synchronization like any other collection.

mod comparator;
mod error;
mod search;
mod sorted_vec;
mod split_sorted_vec;

pub use comparator::{Comparator, Inverted, NaturalOrder};
pub use error::UnsortedInputError;
pub use search::{LINEAR_SCAN_THRESHOLD, SearchOutcome, search};
pub use sorted_vec::{SortedVec, SortedVecIter, Upserted};
pub use split_sorted_vec::{RoutingStrategy, SplitSortedVec, SplitSortedVecIter};

static_assertions::assert_impl_all!(SortedVec<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SplitSortedVec<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(UnsortedInputError: std::error::Error, Send, Sync);
static_assertions::assert_not_impl_any!(SortedVec<std::rc::Rc<i32>>: Send, Sync);
