//! Binary searches over slices whose elements are ordered by some monotonic
//! key.
//!
//! The predicates given to these functions must be monotonic over the
//! slice.  For the "first" family, the predicate is false for a (possibly
//! empty) prefix of the slice and true for the rest:
//!
//! ```text
//!     F F F F T T T T
//!             ^ find_first_index_or_len
//! ```
//!
//! For the "last" family, it is true for a prefix and false for the rest:
//!
//! ```text
//!     T T T T F F F F
//!           ^ find_last_index
//! ```
//!
//! Nothing checks that the predicate is monotonic; calling these with a
//! non-monotonic predicate returns an unspecified index.

use bisection::bisect_right_by;
use std::cmp::Ordering;

/// Index of the first element for which the predicate holds, or the length
/// of the slice if it never holds.  The predicate must be false-then-true.
pub fn find_first_index_or_len<T, F>(items: &[T], mut predicate: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    // bisect_right_by expects the ordering of the searched value relative
    // to each item: Less once the item is past the boundary.
    bisect_right_by(items, |item| {
        if predicate(item) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    })
}

/// Index of the last element for which the predicate holds, or None if it
/// never holds.  The predicate must be true-then-false.
pub fn find_last_index<T, F>(items: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    find_first_index_or_len(items, |item| !predicate(item)).checked_sub(1)
}

/// First element for which the (false-then-true) predicate holds.
pub fn find_first_monotonous<T, F>(items: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    items.get(find_first_index_or_len(items, predicate))
}

/// Last element for which the (true-then-false) predicate holds.
pub fn find_last_monotonous<T, F>(items: &[T], predicate: F) -> Option<&T>
where
    F: FnMut(&T) -> bool,
{
    find_last_index(items, predicate).and_then(|idx| items.get(idx))
}

/// A cursor for a sequence of [`find_last_monotonous`] queries.
///
/// Each query's predicate must be weaker than (or equal to) the previous
/// one, i.e. every element accepted by a query is also accepted by the
/// next one.  Querying with ascending thresholds, like "start <= line" for
/// increasing lines, is the typical case.  The search then only looks at
/// the part of the slice that follows the previous answer.
pub struct MonotonousSlice<'a, T> {
    items: &'a [T],

    // Number of leading elements known to satisfy all future predicates.
    known_true: usize,
}

impl<'a, T> MonotonousSlice<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            known_true: 0,
        }
    }

    /// Last element for which the predicate holds.
    pub fn find_last_monotonous<F>(&mut self, mut predicate: F) -> Option<&'a T>
    where
        F: FnMut(&T) -> bool,
    {
        let rest = self.items.get(self.known_true..).unwrap_or_default();
        debug_assert!(
            self.items
                .iter()
                .take(self.known_true)
                .all(&mut predicate),
            "MonotonousSlice: predicate must be weaker than the previous one",
        );
        self.known_true +=
            find_first_index_or_len(rest, |item| !predicate(item));
        self.known_true
            .checked_sub(1)
            .and_then(|idx| self.items.get(idx))
    }
}
