use crate::errors::Error;
use crate::line_range::LineRange;
use crate::monotonic::{
    find_first_index_or_len, find_last_index, find_last_monotonous,
    MonotonousSlice,
};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::max;

/// A set of lines, stored as a list of normalized line ranges:
///   - sorted by start line,
///   - no two ranges overlap or touch (touching ranges are merged),
///   - no range is empty.
///
/// The set only grows through [`LineRangeSet::add_range`].  All other
/// operations return a new set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<LineRange>", from = "Vec<LineRange>")]
pub struct LineRangeSet {
    ranges: Vec<LineRange>,
}

impl LineRangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from ranges that are already normalized.
    /// This is not checked in release builds, and the result of any
    /// operation on a set built from unnormalized ranges is unspecified.
    /// Use [`LineRangeSet::from_iter`] when in doubt.
    pub fn from_normalized(ranges: Vec<LineRange>) -> Self {
        debug_assert!(
            is_normalized(&ranges),
            "ranges are not normalized: {}",
            ranges.iter().join(", "),
        );
        Self { ranges }
    }

    /// The normalized ranges
    pub fn ranges(&self) -> &[LineRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRange> {
        self.ranges.iter()
    }

    /// Number of ranges (not lines) in the set.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of lines in the set.
    pub fn line_count(&self) -> u64 {
        self.ranges.iter().map(|r| u64::from(r.len())).sum()
    }

    /// Adds all lines of range to the set, merging it with any range it
    /// overlaps or touches.
    /// ```text
    ///     [---)  [---)    [--)        [--)
    ///          [-- range --)
    ///     [-------------------)       [--)
    /// ```
    pub fn add_range(&mut self, range: LineRange) {
        if range.is_empty() {
            return;
        }

        let (first, end) = self.touching_run(&range);
        debug_assert!(end >= first, "touching run {first}..{end} is inverted");
        match end.saturating_sub(first) {
            0 => self.ranges.insert(first, range),
            1 => {
                if let Some(existing) = self.ranges.get_mut(first) {
                    log::trace!("add_range: join {range} with {existing}");
                    *existing = existing.join(&range);
                }
            }
            count => {
                let joined = self
                    .ranges
                    .iter()
                    .skip(first)
                    .take(count)
                    .fold(range, |acc, r| acc.join(r));
                log::trace!("add_range: {range} merges {count} ranges");
                self.ranges.splice(first..end, std::iter::once(joined));
            }
        }
    }

    /// Bounds `first..end` of the ranges that overlap or touch range.
    /// When there are none, first == end is where range would be inserted.
    fn touching_run(&self, range: &LineRange) -> (usize, usize) {
        let first = find_first_index_or_len(&self.ranges, |r| {
            r.end_exclusive() >= range.start()
        });
        let end = find_last_index(&self.ranges, |r| {
            r.start() <= range.end_exclusive()
        })
        .map_or(0, |idx| idx + 1);
        (first, end)
    }

    /// Whether the line belongs to the set.
    pub fn contains(&self, line: u32) -> bool {
        find_last_monotonous(&self.ranges, |r| r.start() <= line)
            .is_some_and(|r| r.end_exclusive() > line)
    }

    /// For each line of `lines`, which must be sorted in ascending order,
    /// whether it belongs to the set.
    pub fn contains_lines(&self, lines: &[u32]) -> Vec<bool> {
        debug_assert!(
            lines.iter().tuple_windows().all(|(a, b)| a <= b),
            "lines must be sorted"
        );
        let mut cursor = MonotonousSlice::new(&self.ranges);
        lines
            .iter()
            .map(|&line| {
                cursor
                    .find_last_monotonous(|r| r.start() <= line)
                    .is_some_and(|r| r.end_exclusive() > line)
            })
            .collect()
    }

    /// Whether all lines of range belong to the set.
    pub fn contains_range(&self, range: &LineRange) -> bool {
        find_last_monotonous(&self.ranges, |r| r.start() <= range.start())
            .is_some_and(|r| r.contains_range(range))
    }

    /// Whether at least one line of range belongs to the set.
    /// A range that only touches the set does not intersect it.
    pub fn intersects(&self, range: &LineRange) -> bool {
        !range.is_empty()
            && find_last_monotonous(&self.ranges, |r| {
                r.start() < range.end_exclusive()
            })
            .is_some_and(|r| r.end_exclusive() > range.start())
    }

    /// Lines that are in either set.
    #[must_use]
    pub fn union(&self, other: &LineRangeSet) -> LineRangeSet {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        LineRangeSet {
            ranges: merge_sorted(&self.ranges, &other.ranges),
        }
    }

    /// Lines that are in both sets.
    #[must_use]
    pub fn intersection(&self, other: &LineRangeSet) -> LineRangeSet {
        let mut result = Vec::new();
        let mut i1 = 0;
        let mut i2 = 0;
        while let (Some(r1), Some(r2)) =
            (self.ranges.get(i1), other.ranges.get(i2))
        {
            if let Some(common) = r1.intersect(r2) {
                if !common.is_empty() {
                    result.push(common);
                }
            }

            // The range that ends first cannot intersect anything else on
            // the other side.
            if r1.end_exclusive() < r2.end_exclusive() {
                i1 += 1;
            } else {
                i2 += 1;
            }
        }
        LineRangeSet { ranges: result }
    }

    /// The lines of range that are not in the set.
    /// ```text
    ///     set:     [---)    [-----)       [--)
    ///     range:      [-----------------)
    ///     result:      [----)     [-----)
    /// ```
    #[must_use]
    pub fn subtract_from(&self, range: &LineRange) -> LineRangeSet {
        if range.is_empty() {
            return LineRangeSet::new();
        }
        let (first, end) = self.touching_run(range);
        if first == end {
            return LineRangeSet {
                ranges: vec![*range],
            };
        }

        let mut result = Vec::new();
        let mut start = range.start();
        for r in self.ranges.get(first..end).unwrap_or_default() {
            if r.start() > start {
                result.push(LineRange::new(start, r.start()));
            }
            start = r.end_exclusive();
        }
        if start < range.end_exclusive() {
            result.push(LineRange::new(start, range.end_exclusive()));
        }
        LineRangeSet { ranges: result }
    }

    /// Lines that are in self but not in other.
    #[must_use]
    pub fn subtract(&self, other: &LineRangeSet) -> LineRangeSet {
        LineRangeSet {
            ranges: self
                .ranges
                .iter()
                .flat_map(|r| other.subtract_from(r).ranges)
                .collect(),
        }
    }

    /// All ranges shifted by `offset` lines.
    /// Panics if a range would start before line 0.
    #[must_use]
    pub fn with_delta(&self, offset: i64) -> LineRangeSet {
        LineRangeSet {
            ranges: self.ranges.iter().map(|r| r.delta(offset)).collect(),
        }
    }

    /// The union of several lists of line ranges.  Each list must be sorted
    /// by start line, but its ranges may touch or overlap.  Empty ranges
    /// are dropped, since they contain no line.
    pub fn join_many(lists: &[Vec<LineRange>]) -> LineRangeSet {
        log::debug!("join_many: merging {} lists", lists.len());
        lists.iter().fold(LineRangeSet::new(), |acc, list| LineRangeSet {
            ranges: merge_sorted(&acc.ranges, list),
        })
    }
}

/// Merge two lists of ranges sorted by start line into a normalized list.
/// Ranges that overlap or touch are joined, even within a single list.
fn merge_sorted(left: &[LineRange], right: &[LineRange]) -> Vec<LineRange> {
    let mut result = Vec::with_capacity(max(left.len(), right.len()));
    let mut current: Option<LineRange> = None;
    let mut i1 = 0;
    let mut i2 = 0;

    loop {
        let next = match (left.get(i1), right.get(i2)) {
            (Some(r1), Some(r2)) if r1.start() < r2.start() => {
                i1 += 1;
                r1
            }
            (Some(_) | None, Some(r2)) => {
                i2 += 1;
                r2
            }
            (Some(r1), None) => {
                i1 += 1;
                r1
            }
            (None, None) => break,
        };
        if next.is_empty() {
            continue;
        }

        current = Some(match current {
            None => *next,
            Some(c) if c.end_exclusive() >= next.start() => LineRange::new(
                c.start(),
                max(c.end_exclusive(), next.end_exclusive()),
            ),
            Some(c) => {
                result.push(c);
                *next
            }
        });
    }

    result.extend(current);
    result
}

fn is_normalized(ranges: &[LineRange]) -> bool {
    ranges.iter().all(|r| !r.is_empty())
        && ranges
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.end_exclusive() < b.start())
}

impl FromIterator<LineRange> for LineRangeSet {
    /// Collect ranges given in any order into a normalized set.
    fn from_iter<I: IntoIterator<Item = LineRange>>(iter: I) -> Self {
        let mut set = LineRangeSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<LineRange> for LineRangeSet {
    fn extend<I: IntoIterator<Item = LineRange>>(&mut self, iter: I) {
        for range in iter {
            self.add_range(range);
        }
    }
}

impl<'a> IntoIterator for &'a LineRangeSet {
    type Item = &'a LineRange;
    type IntoIter = std::slice::Iter<'a, LineRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Normalizes the ranges, which can be given in any order.
impl From<Vec<LineRange>> for LineRangeSet {
    fn from(value: Vec<LineRange>) -> Self {
        value.into_iter().collect()
    }
}

impl From<LineRangeSet> for Vec<LineRange> {
    fn from(value: LineRangeSet) -> Self {
        value.ranges
    }
}

impl std::fmt::Display for LineRangeSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ranges.iter().join(", "))
    }
}

impl std::str::FromStr for LineRangeSet {
    type Err = Error;

    /// Parses a list of ranges separated by commas or spaces, for instance
    /// `"[1,5), [10,15)"` or `"1..5 10..15"`.  The ranges can be given in
    /// any order and may overlap.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let is_separator = |c: char| c == ',' || c.is_whitespace();
        let mut set = LineRangeSet::new();
        let mut rest = s.trim_start_matches(is_separator);
        while !rest.is_empty() {
            let token_len = if rest.starts_with('[') {
                rest.find(')').map(|idx| idx + 1).ok_or_else(|| {
                    Error::Parse(format!("missing ')' in '{rest}'"))
                })?
            } else {
                rest.find(is_separator).unwrap_or(rest.len())
            };
            let (token, tail) = rest.split_at(token_len);
            set.add_range(token.parse()?);
            rest = tail.trim_start_matches(is_separator);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    fn lr(start: u32, end: u32) -> LineRange {
        LineRange::new(start, end)
    }

    fn set(ranges: &[(u32, u32)]) -> LineRangeSet {
        LineRangeSet::from_normalized(
            ranges.iter().map(|(s, e)| lr(*s, *e)).collect(),
        )
    }

    fn assert_normalized(set: &LineRangeSet) {
        assert!(is_normalized(set.ranges()), "not normalized: {set}");
    }

    fn range_strategy() -> impl Strategy<Value = LineRange> {
        (0u32..40, 0u32..8)
            .prop_map(|(start, len)| LineRange::of_length(start, len))
    }

    fn set_strategy() -> impl Strategy<Value = LineRangeSet> {
        prop::collection::vec(range_strategy(), 0..6)
            .prop_map(|ranges| ranges.into_iter().collect())
    }

    #[test]
    fn test_add_range() {
        let mut s = LineRangeSet::new();
        s.add_range(lr(1, 3));
        s.add_range(lr(5, 7));
        assert_eq!(s.ranges(), &[lr(1, 3), lr(5, 7)]);
        s.add_range(lr(3, 5)); // touches both neighbors
        assert_eq!(s.ranges(), &[lr(1, 7)]);

        s.add_range(lr(10, 12)); // after
        s.add_range(lr(0, 0)); // empty, ignored
        s.add_range(lr(20, 20));
        assert_eq!(s.ranges(), &[lr(1, 7), lr(10, 12)]);

        s.add_range(lr(8, 9)); // in the gap, not touching
        assert_eq!(s.ranges(), &[lr(1, 7), lr(8, 9), lr(10, 12)]);

        s.add_range(lr(9, 10)); // joins two
        assert_eq!(s.ranges(), &[lr(1, 7), lr(8, 12)]);

        s.add_range(lr(0, 1)); // before, touching
        assert_eq!(s.ranges(), &[lr(0, 7), lr(8, 12)]);

        s.add_range(lr(3, 4)); // already included
        assert_eq!(s.ranges(), &[lr(0, 7), lr(8, 12)]);

        s.add_range(lr(2, 30)); // covers everything after 2
        assert_eq!(s.ranges(), &[lr(0, 30)]);
    }

    #[test]
    fn test_single_range_lookups() {
        let s = set(&[(2, 8)]);
        assert!(s.contains(2));
        assert!(s.contains(3));
        assert!(s.contains(7));
        assert!(!s.contains(8));
        assert!(!s.contains(1));
        assert!(s.contains_range(&lr(3, 5)));
        assert!(s.intersects(&lr(7, 9)));
        assert_eq!(s.subtract_from(&lr(1, 10)), set(&[(1, 2), (8, 10)]));

        let mut s = LineRangeSet::new();
        s.add_range(lr(5, 6));
        s.add_range(lr(1, 3));
        assert_eq!(s.ranges(), &[lr(1, 3), lr(5, 6)]);
        s.add_range(lr(6, 8));
        assert_eq!(s.ranges(), &[lr(1, 3), lr(5, 8)]);
    }

    #[test]
    fn test_contains() {
        let s = set(&[(1, 5), (10, 15)]);
        assert!(!s.contains(0));
        assert!(s.contains(1));
        assert!(s.contains(4));
        assert!(!s.contains(5));
        assert!(!s.contains(9));
        assert!(s.contains(10));
        assert!(s.contains(14));
        assert!(!s.contains(15));
        assert!(!LineRangeSet::new().contains(1));

        assert_eq!(
            s.contains_lines(&[0, 1, 4, 5, 9, 10, 14, 15, 100]),
            vec![false, true, true, false, false, true, true, false, false]
        );
        assert_eq!(s.contains_lines(&[]), Vec::<bool>::new());

        assert!(s.contains_range(&lr(1, 5)));
        assert!(s.contains_range(&lr(11, 13)));
        assert!(!s.contains_range(&lr(4, 11)));
        assert!(!s.contains_range(&lr(0, 2)));
        assert!(!s.contains_range(&lr(14, 16)));
    }

    #[test]
    fn test_intersects() {
        let s = set(&[(1, 5), (10, 15)]);
        assert!(s.intersects(&lr(4, 6)));
        assert!(s.intersects(&lr(0, 20)));
        assert!(s.intersects(&lr(6, 11)));
        assert!(!s.intersects(&lr(5, 10))); // touches on both sides
        assert!(!s.intersects(&lr(15, 20)));
        assert!(!s.intersects(&lr(0, 1)));
        assert!(!s.intersects(&lr(3, 3))); // no line at all
        assert!(!LineRangeSet::new().intersects(&lr(0, 10)));
    }

    #[test]
    fn test_union() {
        assert_eq!(
            set(&[(1, 5)]).union(&set(&[(5, 10)])).ranges(),
            &[lr(1, 10)]
        );
        assert_eq!(
            set(&[(1, 3), (8, 10)]).union(&set(&[(4, 5), (9, 12)])).ranges(),
            &[lr(1, 3), lr(4, 5), lr(8, 12)]
        );
        assert_eq!(
            set(&[(1, 3), (5, 7), (9, 11)])
                .union(&set(&[(2, 10)]))
                .ranges(),
            &[lr(1, 11)]
        );

        let s = set(&[(1, 3), (8, 10)]);
        assert_eq!(s.union(&LineRangeSet::new()), s);
        assert_eq!(LineRangeSet::new().union(&s), s);
        assert_eq!(s.union(&s), s);
    }

    #[test]
    fn test_intersection() {
        assert_eq!(
            set(&[(1, 5), (10, 15)])
                .intersection(&set(&[(3, 12)]))
                .ranges(),
            &[lr(3, 5), lr(10, 12)]
        );

        // touching ranges have no line in common
        assert!(set(&[(1, 5)]).intersection(&set(&[(5, 9)])).is_empty());

        assert_eq!(
            set(&[(1, 20)])
                .intersection(&set(&[(2, 4), (6, 8), (19, 25)]))
                .ranges(),
            &[lr(2, 4), lr(6, 8), lr(19, 20)]
        );
        assert!(set(&[(1, 5)]).intersection(&LineRangeSet::new()).is_empty());
    }

    #[test]
    fn test_subtract_from() {
        assert_eq!(
            set(&[(2, 8)]).subtract_from(&lr(0, 10)).ranges(),
            &[lr(0, 2), lr(8, 10)]
        );
        assert_eq!(
            set(&[(1, 3), (5, 7), (12, 15)])
                .subtract_from(&lr(2, 13))
                .ranges(),
            &[lr(3, 5), lr(7, 12)]
        );

        // nothing touches the range
        assert_eq!(
            set(&[(1, 3)]).subtract_from(&lr(5, 8)).ranges(),
            &[lr(5, 8)]
        );

        // touching on each side
        assert_eq!(
            set(&[(1, 5), (8, 10)]).subtract_from(&lr(5, 8)).ranges(),
            &[lr(5, 8)]
        );

        // fully covered
        assert!(set(&[(1, 10)]).subtract_from(&lr(3, 6)).is_empty());
        assert!(set(&[(1, 10)]).subtract_from(&lr(5, 5)).is_empty());
        assert!(LineRangeSet::new().subtract_from(&lr(5, 5)).is_empty());
    }

    #[test]
    fn test_subtract() {
        assert_eq!(
            set(&[(1, 10), (20, 30)])
                .subtract(&set(&[(3, 5), (9, 22)]))
                .ranges(),
            &[lr(1, 3), lr(5, 9), lr(22, 30)]
        );
        let s = set(&[(1, 10)]);
        assert_eq!(s.subtract(&LineRangeSet::new()), s);
        assert!(s.subtract(&s).is_empty());
    }

    #[test]
    fn test_with_delta() {
        let s = set(&[(1, 5), (10, 15)]);
        assert_eq!(s.with_delta(3).ranges(), &[lr(4, 8), lr(13, 18)]);
        assert_eq!(s.with_delta(-1).ranges(), &[lr(0, 4), lr(9, 14)]);
        assert_eq!(s.with_delta(0), s);
    }

    #[test]
    #[should_panic(expected = "not a valid line")]
    fn test_with_delta_below_zero() {
        let _ = set(&[(1, 5)]).with_delta(-2);
    }

    #[test]
    fn test_join_many() {
        assert!(LineRangeSet::join_many(&[]).is_empty());
        assert_eq!(
            LineRangeSet::join_many(&[vec![lr(1, 3), lr(3, 5)]]).ranges(),
            &[lr(1, 5)]
        );
        assert_eq!(
            LineRangeSet::join_many(&[
                vec![lr(10, 12)],
                vec![lr(1, 2), lr(4, 4), lr(11, 20)],
                vec![],
                vec![lr(2, 3)],
            ])
            .ranges(),
            &[lr(1, 3), lr(10, 20)]
        );

        // Empty ranges never reach the result.
        assert!(LineRangeSet::join_many(&[vec![lr(3, 3)]]).is_empty());
        assert_eq!(
            LineRangeSet::join_many(&[vec![lr(5, 5)], vec![lr(1, 2), lr(7, 7)]])
                .ranges(),
            &[lr(1, 2)]
        );
    }

    #[test]
    fn test_io() {
        let s = set(&[(1, 5), (10, 15)]);
        assert_eq!(format!("{s}"), "[1,5), [10,15)");
        assert_eq!(format!("{}", LineRangeSet::new()), "");

        assert_eq!("[1,5), [10,15)".parse::<LineRangeSet>(), Ok(s.clone()));
        assert_eq!("10..15 1..5".parse::<LineRangeSet>(), Ok(s.clone()));
        assert_eq!("[1,3),3..5,[10,15)".parse::<LineRangeSet>(), Ok(s));
        assert_eq!("".parse::<LineRangeSet>(), Ok(LineRangeSet::new()));
        assert!(matches!(
            "[1,5".parse::<LineRangeSet>(),
            Err(Error::Parse(_))
        ));
        assert_eq!(
            "[5,1)".parse::<LineRangeSet>(),
            Err(Error::InvalidRange { start: 5, end: 1 })
        );
    }

    #[test]
    fn test_serde() {
        let s = set(&[(1, 5), (10, 15)]);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[[1,5],[10,15]]");
        assert_eq!(
            serde_json::from_str::<LineRangeSet>("[[10,15],[4,11],[1,2]]")
                .unwrap()
                .ranges(),
            &[lr(1, 2), lr(4, 15)]
        );
        assert!(serde_json::from_str::<LineRangeSet>("[[5,1]]").is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Adding ranges in any order gives the same normalized set, which
        /// covers exactly the lines of the ranges.
        #[test]
        fn prop_add_range_any_order(
            ranges in prop::collection::vec(range_strategy(), 0..10)
        ) {
            let forward: LineRangeSet = ranges.iter().copied().collect();
            let backward: LineRangeSet = ranges.iter().rev().copied().collect();
            assert_normalized(&forward);
            prop_assert_eq!(&forward, &backward);
            for line in 0..60 {
                prop_assert_eq!(
                    forward.contains(line),
                    ranges.iter().any(|r| r.contains(line))
                );
            }
            let covered = (0..60u32)
                .filter(|line| ranges.iter().any(|r| r.contains(*line)))
                .count();
            prop_assert_eq!(forward.line_count(), covered as u64);
        }

        /// Set operations agree with the same operations on lines.
        #[test]
        fn prop_algebra_matches_lines(
            a in set_strategy(),
            b in set_strategy(),
            range in range_strategy(),
        ) {
            let union = a.union(&b);
            let inter = a.intersection(&b);
            let diff = a.subtract(&b);
            let gaps = a.subtract_from(&range);
            for s in [&union, &inter, &diff, &gaps] {
                assert_normalized(s);
            }
            for line in 0..60 {
                let (in_a, in_b) = (a.contains(line), b.contains(line));
                prop_assert_eq!(union.contains(line), in_a || in_b);
                prop_assert_eq!(inter.contains(line), in_a && in_b);
                prop_assert_eq!(diff.contains(line), in_a && !in_b);
                prop_assert_eq!(
                    gaps.contains(line),
                    range.contains(line) && !in_a
                );
            }
            prop_assert_eq!(
                a.intersects(&range),
                range.lines().any(|line| a.contains(line))
            );
            prop_assert_eq!(
                a.contains_range(&range),
                range.lines().all(|line| a.contains(line))
                    && (!range.is_empty()
                        || a.iter().any(|r| r.contains_range(&range)))
            );
        }

        /// Union and intersection with itself give the same set, and the
        /// empty set is neutral for union.
        #[test]
        fn prop_idempotence(a in set_strategy()) {
            prop_assert_eq!(&a.union(&a), &a);
            prop_assert_eq!(&a.intersection(&a), &a);
            prop_assert_eq!(&a.union(&LineRangeSet::new()), &a);
            prop_assert!(a.subtract(&a).is_empty());
        }

        /// Shifting a set shifts each of its lines, in both directions.
        #[test]
        fn prop_with_delta_shifts_lines(
            a in set_strategy(),
            delta in -10i64..10,
        ) {
            let lowest = a.iter().next().map_or(0, |r| i64::from(r.start()));
            prop_assume!(lowest + delta >= 0);
            let shifted = a.with_delta(delta);
            assert_normalized(&shifted);
            prop_assert_eq!(shifted.line_count(), a.line_count());
            for line in 0..60u32 {
                let moved = i64::from(line) + delta;
                if let Ok(moved) = u32::try_from(moved) {
                    prop_assert_eq!(shifted.contains(moved), a.contains(line));
                }
            }
        }
    }
}
