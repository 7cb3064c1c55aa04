//! Unicode character class lookup.
//!
//! Resolves General Category and Script names to range tables using the
//! Unicode property data shipped with `regex-syntax`.

use regex_syntax::Parser;
use regex_syntax::hir::Class;
use regex_syntax::hir::HirKind;

use crate::table::RangeTable;

/// Resolve a character class name to a range table.
///
/// `name` is a one-letter General Category (`L`, `N`, ...) or a full General
/// Category or Script name (`Lu`, `Greek`, ...). Return `None` if the name
/// is unknown.
pub fn class_table(name: &str) -> Option<RangeTable> {
    // Reject anything that could alter the lookup pattern itself. Property
    // names only contain alphanumerics plus the separators ignored by loose
    // matching.
    let plain = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | ' ');
    if name.is_empty() || !name.chars().all(plain) {
        return None;
    }
    let hir = Parser::new().parse(&format!(r"\p{{{name}}}")).ok()?;
    match hir.kind() {
        HirKind::Class(Class::Unicode(class)) => Some(
            class.ranges().iter().map(|r| (r.start(), r.end())).collect(),
        ),
        // Single-member classes may be canonicalized into a literal.
        HirKind::Literal(lit) => {
            let s = std::str::from_utf8(&lit.0).ok()?;
            Some(s.chars().map(|c| (c, c)).collect())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classes_resolve() {
        for name in ["L", "Lu", "Nd", "Greek", "Hiragana"] {
            assert!(class_table(name).is_some(), "{name} should resolve");
        }
    }

    #[test]
    fn unknown_classes_fail() {
        for name in ["", "INVALID", "Lx", "{", "a}b", r"a\b"] {
            assert!(class_table(name).is_none(), "{name} should not resolve");
        }
    }

    #[test]
    fn digits_table_is_plausible() {
        let table = class_table("Nd").unwrap();
        let covers = |c: char| {
            table.blocks().iter().any(|b| b.lo <= c && c <= b.hi)
        };
        assert!(covers('0'));
        assert!(covers('9'));
        assert!(!covers('a'));
    }
}
