//! Immutable sampler over a frozen interval list.

use rand::Rng;
use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::interval::Interval;

/// Frozen, queryable view of a [`RuneSet`](crate::RuneSet).
///
/// Owns its own copy of the interval list together with a parallel array of
/// cumulative member counts. Never mutated after construction, so a picker
/// can be shared and queried from multiple threads without synchronization.
#[derive(Clone, Debug)]
pub struct Picker {
    intervals: Vec<Interval>,
    cum_sizes: Vec<u64>,
    size: u64,
}

impl Picker {
    pub(crate) fn new(intervals: Vec<Interval>) -> Self {
        let mut size = 0;
        let mut cum_sizes = Vec::with_capacity(intervals.len());
        for iv in &intervals {
            size += iv.len();
            cum_sizes.push(size);
        }
        Self { intervals, cum_sizes, size }
    }

    /// Return the total number of members.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Return the i-th member in global sorted order.
    ///
    /// Panics if `i >= size()`.
    pub fn get(&self, i: u64) -> char {
        assert!(i < self.size, "runeset: index out of bounds");
        let ri = self.cum_sizes.partition_point(|&c| c <= i);
        let offset = if ri > 0 { i - self.cum_sizes[ri - 1] } else { i };
        char::from_u32(self.intervals[ri].lo as u32 + offset as u32)
            .expect("intervals only cover scalar values")
    }

    /// Return one uniformly random member.
    ///
    /// The index is drawn from the operating system's secure random source
    /// with rejection sampling, never by modulo reduction, so every member is
    /// equally likely. A failure of the random source panics; the process
    /// never falls back to a weaker source.
    ///
    /// Panics if the set is empty.
    pub fn random(&self) -> char {
        assert!(self.size > 0, "runeset: cannot sample from an empty set");
        let i = OsRng.unwrap_err().random_range(0..self.size);
        self.get(i)
    }
}
