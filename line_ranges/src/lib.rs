//! This crate provides exact arithmetic on ranges of lines, as used by a
//! text editor to describe which lines are affected by edits, diffs, folds
//! or decorations.
//!
//! A [`LineRange`] is a half-open interval `[start, end_exclusive)` of
//! 1-based line numbers.  A [`LineRangeSet`] is a set of lines, stored as
//! a sorted list of ranges that never overlap nor touch.  This canonical
//! form is preserved by every operation, whatever the order in which
//! ranges are added.
//!
//! Given two ranges, we can compute the following:
//!
//! ```text
//!        [------ A ------)
//!               [----- B -------)
//!
//!        [----------------------)     Join (convex hull)
//!               [--------)            Intersect
//!        [------)                     Subtract (A - B)
//! ```
//!
//! Ranges that only touch are adjacent, not overlapping.  They are merged
//! by a set, but have no line in common:
//!
//! ```text
//!        [--- A ---)
//!                  [--- B ---)
//!
//!        [-------------------)        Join, and union in a set
//!                  []                 Intersect is empty (but not None)
//!                                     intersects_strict is false
//!                                     overlap_or_touch is true
//! ```
//!
//! The sets support union, intersection and subtraction, implemented as
//! merges of the sorted lists of ranges, and use binary searches (see
//! [`monotonic`]) to find the ranges affected by a change.

pub mod character_classifier;
pub mod edit_operation;
pub mod errors;
pub mod line_range;
pub mod line_range_set;
pub mod monotonic;
pub mod offset_range;
pub mod text_range;

pub use crate::edit_operation::EditOperation;
pub use crate::errors::Error;
pub use crate::line_range::{LineRange, Remainder};
pub use crate::line_range_set::LineRangeSet;
pub use crate::offset_range::OffsetRange;
pub use crate::text_range::{Position, TextRange};
