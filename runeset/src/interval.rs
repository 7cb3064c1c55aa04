//! Interval set builder.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use itertools::Itertools;

use crate::picker::Picker;
use crate::table::RangeTable;

/// Last scalar value before the surrogate gap.
const BEFORE_GAP: char = '\u{D7FF}';
/// First scalar value after the surrogate gap.
const AFTER_GAP: char = '\u{E000}';

/// Inclusive run of Unicode scalar values.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub struct Interval {
    pub lo: char,
    pub hi: char,
}

impl Interval {
    /// Return the number of scalar values in the interval.
    pub fn len(&self) -> u64 {
        self.hi as u64 - self.lo as u64 + 1
    }

    /// Compare the interval against a single value.
    ///
    /// A value is `Equal` to an interval iff it lies within its bounds.
    fn locate_value(&self, value: char) -> Ordering {
        if self.hi < value {
            Ordering::Less
        } else if self.lo > value {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Mutable set of runes stored as sorted, disjoint intervals.
///
/// Two intervals may be numerically touching (`a.hi + 1 == b.lo`) after any
/// sequence of insertions; merging them into maximal runs is an explicit
/// post-processing step done by [`RuneSet::merge_adjacent`].
///
/// ```
/// use runeset::RuneSet;
///
/// let mut set = RuneSet::new();
/// set.add_range('a', 'c');
/// set.add('e');
///
/// assert!(set.contains('b'));
/// assert!(!set.contains('d'));
/// assert_eq!(set.to_string(), "a-ce-e");
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RuneSet {
    intervals: Vec<Interval>,
}

impl RuneSet {
    /// Return a new empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the intervals of the set, sorted by lower bound.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Return `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Return `true` if the set contains `c`.
    pub fn contains(&self, c: char) -> bool {
        self.search(c).1
    }

    /// Insert a single rune.
    ///
    /// No-op if the rune is already covered. The new singleton is not merged
    /// with a numerically adjacent interval; that is deferred to
    /// [`RuneSet::merge_adjacent`].
    pub fn add(&mut self, c: char) {
        let (i, found) = self.search(c);
        if !found {
            self.intervals.insert(i, Interval { lo: c, hi: c });
        }
    }

    /// Insert the inclusive range `lo..=hi`, absorbing every interval it
    /// overlaps.
    ///
    /// Intervals outside the queried span are left untouched, even when
    /// numerically adjacent to the new bounds. A range whose interior crosses
    /// the surrogate gap is split into the two valid sub-ranges, so intervals
    /// only ever cover scalar values.
    ///
    /// Panics if `lo > hi`.
    pub fn add_range(&mut self, lo: char, hi: char) {
        assert!(lo <= hi, "runeset: lo must be smaller than or equal to hi");
        if lo <= BEFORE_GAP && hi >= AFTER_GAP {
            self.splice_range(lo, BEFORE_GAP);
            self.splice_range(AFTER_GAP, hi);
        } else {
            self.splice_range(lo, hi);
        }
    }

    /// Bulk import a range table.
    ///
    /// Blocks with stride 1 go through [`RuneSet::add_range`]; larger strides
    /// insert one member at a time. Linear in the size of the table.
    pub fn add_table(&mut self, table: &RangeTable) {
        for block in table.blocks() {
            assert!(block.stride >= 1, "runeset: table stride must be >= 1");
            if block.stride == 1 {
                self.add_range(block.lo, block.hi);
            } else {
                let mut x = block.lo as u32;
                while x <= block.hi as u32 {
                    if let Some(c) = char::from_u32(x) {
                        self.add(c);
                    }
                    x += block.stride;
                }
            }
        }
    }

    /// Merge numerically touching intervals into maximal runs.
    ///
    /// Single left-to-right pass; idempotent.
    pub fn merge_adjacent(&mut self) {
        self.intervals = mem::take(&mut self.intervals)
            .into_iter()
            .coalesce(|a, b| {
                if a.hi as u32 + 1 == b.lo as u32 {
                    Ok(Interval { lo: a.lo, hi: b.hi })
                } else {
                    Err((a, b))
                }
            })
            .collect();
    }

    /// Freeze an independent snapshot of the set into a [`Picker`].
    ///
    /// The builder remains usable; later mutations do not affect the
    /// returned picker.
    pub fn picker(&self) -> Picker {
        Picker::new(self.intervals.clone())
    }

    /// Locate the interval containing `value`, or its insertion point.
    fn search(&self, value: char) -> (usize, bool) {
        match self.intervals.binary_search_by(|iv| iv.locate_value(value)) {
            Ok(i) => (i, true),
            Err(i) => (i, false),
        }
    }

    /// Replace every interval overlapping `lo..=hi` with their union.
    fn splice_range(&mut self, mut lo: char, mut hi: char) {
        let (i, found_lo) = self.search(lo);
        let (mut j, found_hi) = self.search(hi);
        if found_lo {
            lo = self.intervals[i].lo;
        }
        if found_hi {
            hi = self.intervals[j].hi;
            j += 1;
        }
        self.intervals.drain(i..j);
        self.intervals.insert(i, Interval { lo, hi });
    }
}

impl fmt::Display for RuneSet {
    /// Debug representation: each interval as `lo-hi`, in ascending order.
    ///
    /// Not meant to round-trip through the CSET parser (a literal `-` is not
    /// escaped on output).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for iv in &self.intervals {
            write!(f, "{}-{}", iv.lo, iv.hi)?;
        }
        Ok(())
    }
}
