//! Character sets as sorted rune intervals, with a small description
//! language and an unbiased cryptographically secure sampler.
//!
//! A [`RuneSet`] is a mutable builder over disjoint, sorted intervals of
//! Unicode scalar values. It is usually produced by [`parse`] from a CSET
//! description such as `a-z\d\p{Greek}`, then frozen into an immutable
//! [`Picker`] from which the generation layer draws random members.

pub mod interval;
pub mod parser;
pub mod picker;
pub mod table;
pub mod unicode;

pub use interval::Interval;
pub use interval::RuneSet;
pub use parser::ParseError;
pub use parser::parse;
pub use picker::Picker;
pub use table::RangeBlock;
pub use table::RangeTable;
