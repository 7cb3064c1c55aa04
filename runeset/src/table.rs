//! Read-only range table interface for bulk imports.

/// One block of a range table: the members `lo, lo+stride, ..., <= hi`.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub struct RangeBlock {
    pub lo: char,
    pub hi: char,
    pub stride: u32,
}

/// Ordered list of range blocks describing a character class.
///
/// This is the minimal interface between the interval set and whichever
/// Unicode database produces the class data, so the set itself carries no
/// dependency on a specific database format.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct RangeTable {
    blocks: Vec<RangeBlock>,
}

impl RangeTable {
    /// Return a table over the given blocks.
    pub fn new(blocks: Vec<RangeBlock>) -> Self {
        Self { blocks }
    }

    /// Return the blocks of the table.
    pub fn blocks(&self) -> &[RangeBlock] {
        &self.blocks
    }
}

impl FromIterator<(char, char)> for RangeTable {
    /// Build a table of stride-1 blocks from inclusive ranges.
    fn from_iter<I: IntoIterator<Item = (char, char)>>(iter: I) -> Self {
        let blocks = iter
            .into_iter()
            .map(|(lo, hi)| RangeBlock { lo, hi, stride: 1 })
            .collect();
        Self { blocks }
    }
}
