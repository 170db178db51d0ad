//! # ordseq
//!
//! Sorted sequences maintained incrementally rather than sorted on demand.
//!
//! ## Overview
//!
//! Every container in this crate keeps its elements ordered by a comparator
//! supplied at construction time. Insertion pays for the ordering so that
//! iteration, positional reads, and `first`/`last` never do:
//!
//! - **Comparators**: [`Comparator`](sorted::Comparator) is implemented by
//!   any `Fn(&T, &T) -> Ordering`, by [`NaturalOrder`](sorted::NaturalOrder),
//!   and by the order-reversing [`Inverted`](sorted::Inverted) wrapper
//! - **Search**: a hybrid tail check / linear scan / binary search returning
//!   a tagged [`SearchOutcome`](sorted::SearchOutcome)
//! - **`SortedVec`**: a single sorted buffer with insert, delete, upsert
//! - **`SplitSortedVec`**: two partitions that grow away from the middle, so
//!   descending input and inserts near the median stay cheap
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize` / `Deserialize` for both containers
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use ordseq::prelude::*;
//!
//! let mut values = SplitSortedVec::new();
//! for value in (1..=5).rev() {
//!     values.insert(value);
//! }
//! assert_eq!(values.to_vec(), vec![1, 2, 3, 4, 5]);
//! assert_eq!(values.first(), Some(&1));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use ordseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sorted::*;
}

pub mod sorted;
