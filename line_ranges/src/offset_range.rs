/// A 0-based half-open range `[start, end)` of offsets.  This is how line
/// ranges are expressed when indexing into an array of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetRange {
    pub start: usize,
    pub end_exclusive: usize,
}

impl OffsetRange {
    /// Panics if `start > end_exclusive`.
    pub fn new(start: usize, end_exclusive: usize) -> Self {
        assert!(
            start <= end_exclusive,
            "invalid offset range [{start}, {end_exclusive})"
        );
        OffsetRange {
            start,
            end_exclusive,
        }
    }

    pub fn len(&self) -> usize {
        self.end_exclusive - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end_exclusive
    }

    /// The corresponding slice of `items`, or None if the range goes past
    /// the end of `items`.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> Option<&'a [T]> {
        items.get(self.start..self.end_exclusive)
    }
}

impl From<OffsetRange> for std::ops::Range<usize> {
    fn from(value: OffsetRange) -> Self {
        value.start..value.end_exclusive
    }
}

impl std::fmt::Display for OffsetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end_exclusive)
    }
}
