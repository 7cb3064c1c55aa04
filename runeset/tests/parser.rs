//! CSET grammar coverage, checked through the serialized representation.

use runeset::ParseError;
use runeset::RuneSet;
use runeset::parse;
use runeset::unicode::class_table;

/// Serialized form of a class imported directly from the Unicode tables,
/// bypassing the parser.
fn class_set(name: &str) -> String {
    let mut set = RuneSet::new();
    set.add_table(&class_table(name).expect("known class"));
    set.merge_adjacent();
    set.to_string()
}

#[test]
fn literals_escapes_and_ranges() {
    let tests = [
        ("", ""),
        ("a", "a-a"),
        (r"\-", "---"),
        (r"\\", "\\-\\"),
        (r"\0", "\0-\0"),
        (r"\a", "\u{07}-\u{07}"),
        (r"\b", "\u{08}-\u{08}"),
        (r"\t", "\t-\t"),
        (r"\n", "\n-\n"),
        (r"\v", "\u{0B}-\u{0B}"),
        (r"\f", "\u{0C}-\u{0C}"),
        (r"\r", "\r-\r"),
        (r"\e", "\u{1B}-\u{1B}"),
        (r"\xFF", "\u{FF}-\u{FF}"),
        (r"\u3042", "あ-あ"),
        (r"\U0001F200", "\u{1F200}-\u{1F200}"),
        ("ABCabc012", "0-2A-Ca-c"),
        ("A-Ca-c0-2", "0-2A-Ca-c"),
        ("a-zA-Z0-A", "0-Za-z"),
        ("ぁ-ゖ", "ぁ-ゖ"),
        (r"ぁ-\u3096", "ぁ-ゖ"),
        (r"\u3041-ゖ", "ぁ-ゖ"),
        (r"\u3041-\u3096", "ぁ-ゖ"),
        (r"\U00020000-\U0002A6DF", "\u{20000}-\u{2A6DF}"),
        (r"\d", "0-9"),
        (r"\l", "a-z"),
        (r"\L", "A-Z"),
        (r"\w", "0-9A-Za-z"),
        (r"\s", "!-/:-@[-`{-~"),
        (r"\g", "!-~"),
    ];

    for (input, want) in tests {
        let set = parse(input).unwrap_or_else(|e| panic!("parse({input:?}): {e}"));
        assert_eq!(set.to_string(), want, "parse({input:?})");
    }
}

#[test]
fn dash_fallback_rules() {
    let tests = [
        ("-a", "---a-a"),
        ("a-", "---a-a"),
        (r"a\-z", "---a-az-z"),
        (r"a\\-z", "\\-z"),
        ("!--/", "!--/-/"),
        (r"\w-_", "---0-9A-Z_-_a-z"),
        (r"--\d-\L--", "---0-9A-Z"),
    ];

    for (input, want) in tests {
        let set = parse(input).unwrap_or_else(|e| panic!("parse({input:?}): {e}"));
        assert_eq!(set.to_string(), want, "parse({input:?})");
    }
}

#[test]
fn unicode_classes() {
    let tests = [
        (r"\pL", class_set("L")),
        (r"\p{Hiragana}", class_set("Hiragana")),
        (r"\w\s\g\p{Lo}", format!("!-~{}", class_set("Lo"))),
    ];

    for (input, want) in tests {
        let set = parse(input).unwrap_or_else(|e| panic!("parse({input:?}): {e}"));
        assert_eq!(set.to_string(), want, "parse({input:?})");
    }
}

#[test]
fn malformed_inputs_are_rejected() {
    let tests = [
        r"\",
        r"\?",
        r"\x",
        r"\x0",
        r"\xXX",
        r"\u",
        r"\u00",
        r"\uXXXX",
        r"\uD800",
        r"\U",
        r"\U0000",
        r"\UXXXXXXXX",
        r"\U00110000",
        r"\p",
        r"\pX",
        r"\p{",
        r"\p{}",
        r"\p{Greek",
        r"\p{INVALID}",
        r"z-a",
    ];

    for input in tests {
        assert!(parse(input).is_err(), "parse({input:?}) should fail");
    }
}

#[test]
fn errors_carry_the_offending_substring() {
    let tests = [
        (r"\", ParseError::TruncatedEscape(r"\".into())),
        (r"\?", ParseError::InvalidEscape(r"\?".into())),
        (r"ab\x0", ParseError::TruncatedEscape(r"\x0".into())),
        (r"\xZZzz", ParseError::InvalidEscape(r"\xZZ".into())),
        (r"\uD800", ParseError::InvalidEscape(r"\uD800".into())),
        (r"\p{Greek", ParseError::UnterminatedEscape(r"\p{Greek".into())),
        (r"\p{INVALID}x", ParseError::InvalidClassName(r"\p{INVALID}".into())),
        (r"\pXy", ParseError::InvalidClassName(r"\pX".into())),
        (r"z-a!", ParseError::BadRange("z-a".into())),
    ];

    for (input, want) in tests {
        assert_eq!(parse(input), Err(want.clone()), "parse({input:?})");
    }
}

#[test]
fn dash_fallback_does_not_mask_later_errors() {
    // The failed range endpoint is re-decoded as a top-level item, where its
    // own error surfaces.
    assert_eq!(
        parse(r"a-\xZZ"),
        Err(ParseError::InvalidEscape(r"\xZZ".into()))
    );
    // A class escape after the dash is valid on its own.
    assert_eq!(parse(r"a-\d").unwrap().to_string(), "---0-9a-a");
}

#[test]
fn parse_result_is_compacted() {
    let set = parse("acbd").unwrap();
    assert_eq!(set.to_string(), "a-d");
    assert_eq!(set.intervals().len(), 1);
}

#[test]
fn member_round_trip() {
    let set = parse(r"\w!-/").unwrap();
    let picker = set.picker();

    let mut rebuilt = RuneSet::new();
    for i in 0..picker.size() {
        rebuilt.add(picker.get(i));
    }
    rebuilt.merge_adjacent();
    assert_eq!(rebuilt, set);
}
