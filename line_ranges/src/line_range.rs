use crate::errors::Error;
use crate::offset_range::OffsetRange;
use crate::text_range::TextRange;
use serde::{Deserialize, Serialize};
use std::cmp::{max, min};

/// A range of lines `[start, end_exclusive)`.  Line numbers are 1-based by
/// convention, though 0 is accepted.
///
/// The range is a small immutable value.  All operations return new
/// ranges.  A range is never inverted: `start <= end_exclusive` always
/// holds, and [`LineRange::new`] panics otherwise.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(try_from = "(u32, u32)", into = "(u32, u32)")]
pub struct LineRange {
    start: u32,
    end_exclusive: u32,
}

impl LineRange {
    /// Construct the range `[start, end_exclusive)`.
    /// Panics if `start > end_exclusive`: this is a bug in the caller.
    pub fn new(start: u32, end_exclusive: u32) -> Self {
        assert!(
            start <= end_exclusive,
            "invalid line range [{start},{end_exclusive}): start is after end"
        );
        LineRange {
            start,
            end_exclusive,
        }
    }

    /// Same as [`LineRange::new`], but reports inverted bounds as an error.
    pub fn try_new(start: u32, end_exclusive: u32) -> Result<Self, Error> {
        if start <= end_exclusive {
            Ok(LineRange {
                start,
                end_exclusive,
            })
        } else {
            Err(Error::InvalidRange {
                start,
                end: end_exclusive,
            })
        }
    }

    /// The range of `length` lines starting at `start`.
    pub fn of_length(start: u32, length: u32) -> Self {
        let end = start.checked_add(length).unwrap_or_else(|| {
            panic!("{length} lines from line {start} go past the last line")
        });
        LineRange::new(start, end)
    }

    /// The range starting at `range.start.line` and including
    /// `range.end.line`.
    pub fn from_inclusive_range(range: &TextRange) -> Self {
        let last = range.end.line;
        let end = last.checked_add(1).unwrap_or_else(|| {
            panic!("line {last} is the last line, it cannot be included")
        });
        LineRange::new(range.start.line, end)
    }

    /// Convert from 0-based offsets (e.g. indexes in an array of lines).
    pub fn from_offset_range(range: &OffsetRange) -> Self {
        let as_line = |offset: usize| {
            u32::try_from(offset + 1).unwrap_or_else(|_| {
                panic!("offset {offset} does not fit in a line number")
            })
        };
        LineRange::new(as_line(range.start), as_line(range.end_exclusive))
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end_exclusive(&self) -> u32 {
        self.end_exclusive
    }

    /// Number of lines in the range.
    pub fn len(&self) -> u32 {
        self.end_exclusive - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end_exclusive
    }

    /// Whether the line is in the range.
    pub fn contains(&self, line: u32) -> bool {
        self.start <= line && line < self.end_exclusive
    }

    /// Whether every line of other is also in self.
    pub fn contains_range(&self, other: &LineRange) -> bool {
        self.start <= other.start && other.end_exclusive <= self.end_exclusive
    }

    /// Whether self ends before (or exactly where) other starts.
    pub fn is_before(&self, other: &LineRange) -> bool {
        self.end_exclusive <= other.start
    }

    /// Whether self starts after (or exactly where) other ends.
    pub fn is_after(&self, other: &LineRange) -> bool {
        self.start >= other.end_exclusive
    }

    /// Shift both bounds by `offset` lines.
    /// Panics if the result would start before line 0.
    #[must_use]
    pub fn delta(&self, offset: i64) -> Self {
        LineRange::new(
            shift(self.start, offset),
            shift(self.end_exclusive, offset),
        )
    }

    #[must_use]
    pub fn delta_start(&self, offset: i64) -> Self {
        LineRange::new(shift(self.start, offset), self.end_exclusive)
    }

    #[must_use]
    pub fn delta_end(&self, offset: i64) -> Self {
        LineRange::new(self.start, shift(self.end_exclusive, offset))
    }

    /// Grow (or shrink, for a negative offset) the range at its end.
    #[must_use]
    pub fn delta_length(&self, offset: i64) -> Self {
        self.delta_end(offset)
    }

    /// The convex hull of the two ranges, i.e. the smallest range that
    /// contains both.  If the ranges are disjoint, the lines between them
    /// are included too.
    #[must_use]
    pub fn join(&self, other: &LineRange) -> Self {
        LineRange {
            start: min(self.start, other.start),
            end_exclusive: max(self.end_exclusive, other.end_exclusive),
        }
    }

    /// The lines common to both ranges.
    /// Returns an empty range when the two ranges only touch, and None when
    /// they do not even touch.
    /// ```text
    ///    [---A---)             [---A---)           [---A---)
    ///        [---B---)                 [---B---)              [---B---)
    ///        [---)                     []                     None
    /// ```
    #[must_use]
    pub fn intersect(&self, other: &LineRange) -> Option<Self> {
        let start = max(self.start, other.start);
        let end_exclusive = min(self.end_exclusive, other.end_exclusive);
        if start <= end_exclusive {
            Some(LineRange {
                start,
                end_exclusive,
            })
        } else {
            None
        }
    }

    /// Whether the two ranges overlap or are adjacent.
    pub fn overlap_or_touch(&self, other: &LineRange) -> bool {
        self.start <= other.end_exclusive && other.start <= self.end_exclusive
    }

    /// Whether the two ranges have at least one line in common.  Adjacent
    /// ranges do not intersect.
    pub fn intersects_strict(&self, other: &LineRange) -> bool {
        self.start < other.end_exclusive && other.start < self.end_exclusive
    }

    /// Removes the lines of `b` from `a`.  Subtracting nothing (`b` is None)
    /// returns `a` unchanged.
    /// ```text
    ///      [-------- A --------)
    ///           [--- B ---)
    ///      [----)         [----)    b strictly inside a
    ///
    ///      [-------- A --------)
    ///    [------------ B ---------)
    ///                                b contains a
    ///
    ///      [-------- A --------)
    ///   [--- B ---)
    ///             [------------)    b covers the head of a
    ///
    ///      [-------- A --------)
    ///                   [--- B ---)
    ///      [------------)           b covers the tail of a
    /// ```
    #[must_use]
    pub fn subtract(a: &LineRange, b: Option<&LineRange>) -> Remainder {
        let Some(b) = b else {
            return Remainder::One(*a);
        };
        if a.start < b.start && b.end_exclusive < a.end_exclusive {
            Remainder::Two(
                LineRange::new(a.start, b.start),
                LineRange::new(b.end_exclusive, a.end_exclusive),
            )
        } else if b.start <= a.start && a.end_exclusive <= b.end_exclusive {
            Remainder::Empty
        } else if b.end_exclusive < a.end_exclusive {
            Remainder::One(LineRange::new(
                max(b.end_exclusive, a.start),
                a.end_exclusive,
            ))
        } else {
            Remainder::One(LineRange::new(
                a.start,
                min(b.start, a.end_exclusive),
            ))
        }
    }

    /// Returns the result of removing all lines of other from self.
    #[must_use]
    pub fn difference(&self, other: &LineRange) -> Remainder {
        LineRange::subtract(self, Some(other))
    }

    /// Number of lines between the two ranges, or 0 if they touch or
    /// overlap.
    pub fn distance_to_range(&self, other: &LineRange) -> u32 {
        if self.end_exclusive <= other.start {
            other.start - self.end_exclusive
        } else if other.end_exclusive <= self.start {
            self.start - other.end_exclusive
        } else {
            0
        }
    }

    /// The line of the range closest to `line`.
    /// Panics if the range is empty.
    pub fn clip(&self, line: u32) -> u32 {
        assert!(!self.is_empty(), "cannot clip to empty range {self}");
        line.clamp(self.start, self.end_exclusive - 1)
    }

    /// The lines in the range, in ascending order.
    pub fn lines(&self) -> std::ops::Range<u32> {
        self.start..self.end_exclusive
    }

    pub fn map_to_line_array<T, F>(&self, f: F) -> Vec<T>
    where
        F: FnMut(u32) -> T,
    {
        self.lines().map(f).collect()
    }

    /// The text range from the first column of the first line to the last
    /// column of the last line, or None if self is empty.
    pub fn to_inclusive_range(&self) -> Option<TextRange> {
        if self.is_empty() {
            None
        } else {
            Some(TextRange::new(
                self.start,
                1,
                self.end_exclusive - 1,
                u32::MAX,
            ))
        }
    }

    /// The text range from the first column of the first line to the first
    /// column of the line after the range.
    pub fn to_exclusive_range(&self) -> TextRange {
        TextRange::new(self.start, 1, self.end_exclusive, 1)
    }

    /// Convert to 0-based offsets.
    /// Panics if the range starts at line 0.
    pub fn to_offset_range(&self) -> OffsetRange {
        assert!(self.start >= 1, "line 0 has no offset: {self}");
        OffsetRange::new(
            (self.start - 1) as usize,
            (self.end_exclusive - 1) as usize,
        )
    }

    /// Merges a list of sorted lists of ranges into a single normalized
    /// list.
    pub fn join_many(lists: &[Vec<LineRange>]) -> Vec<LineRange> {
        crate::line_range_set::LineRangeSet::join_many(lists)
            .ranges()
            .to_vec()
    }
}

/// Shift a line number, panicking if the result is not a valid line.
fn shift(line: u32, offset: i64) -> u32 {
    i64::from(line)
        .checked_add(offset)
        .and_then(|l| u32::try_from(l).ok())
        .unwrap_or_else(|| {
            panic!("line {line} shifted by {offset} is not a valid line")
        })
}

impl TryFrom<(u32, u32)> for LineRange {
    type Error = Error;

    fn try_from(value: (u32, u32)) -> Result<Self, Self::Error> {
        LineRange::try_new(value.0, value.1)
    }
}

impl From<LineRange> for (u32, u32) {
    fn from(value: LineRange) -> Self {
        (value.start, value.end_exclusive)
    }
}

impl std::fmt::Display for LineRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{})", self.start, self.end_exclusive)
    }
}

impl std::str::FromStr for LineRange {
    type Err = Error;

    /// Parses either `[start,end)` or `start..end`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bounds = match s.strip_prefix('[') {
            Some(rest) => rest
                .strip_suffix(')')
                .and_then(|inner| inner.split_once(',')),
            None => s.split_once(".."),
        };
        let Some((start, end)) = bounds else {
            return Err(Error::Parse(format!(
                "expected '[start,end)' or 'start..end', got '{s}'"
            )));
        };
        LineRange::try_new(start.trim().parse()?, end.trim().parse()?)
    }
}

/// What remains of a line range after removing another one from it: zero,
/// one or two ranges, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder {
    Empty,
    One(LineRange),
    Two(LineRange, LineRange),
}

impl Remainder {
    pub fn to_vec(&self) -> Vec<LineRange> {
        (*self).into_iter().collect()
    }
}

impl IntoIterator for Remainder {
    type Item = LineRange;
    type IntoIter = std::iter::Flatten<std::array::IntoIter<Option<LineRange>, 2>>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Remainder::Empty => [None, None],
            Remainder::One(r) => [Some(r), None],
            Remainder::Two(r1, r2) => [Some(r1), Some(r2)],
        }
        .into_iter()
        .flatten()
    }
}
