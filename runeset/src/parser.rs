//! CSET parsing.
//!
//! A CSET description is a flat sequence of items consumed left to right:
//! predefined class escapes (`\d`, `\w`, `\p{Greek}`, ...), literal
//! characters, single-character escapes (`\n`, `\x41`, `あ`, ...) and
//! `lo-hi` ranges between two decoded characters.

use thiserror::Error;

use crate::interval::RuneSet;
use crate::unicode;

/// Error raised while parsing a CSET description.
///
/// Parsing stops at the first fault; each variant carries the offending
/// substring.
#[derive(Error, Clone, Eq, PartialEq, Debug)]
pub enum ParseError {
    #[error("truncated escape sequence: {0}")]
    TruncatedEscape(String),
    #[error("invalid escape sequence: {0}")]
    InvalidEscape(String),
    #[error("invalid character class name: {0}")]
    InvalidClassName(String),
    #[error("unterminated escape sequence: {0}")]
    UnterminatedEscape(String),
    #[error("bad character range: {0}")]
    BadRange(String),
    /// End of input reached while decoding a range endpoint. Never escapes
    /// [`parse`]: the caller falls back to a literal interpretation.
    #[error("unexpected end of input")]
    UnexpectedEnd,
}

/// Parse a CSET description into a compacted [`RuneSet`].
///
/// ```
/// use runeset::parse;
///
/// let set = parse(r"a-z\d").unwrap();
/// assert!(set.contains('q'));
/// assert!(set.contains('7'));
/// assert!(!set.contains('A'));
/// ```
pub fn parse(s: &str) -> Result<RuneSet, ParseError> {
    let mut set = RuneSet::new();
    let mut s = s;

    while !s.is_empty() {
        if let Some(size) = decode_class(&mut set, s)? {
            s = &s[size..];
            continue;
        }
        let (lo, size) = decode_char(s)?;
        if s.len() > size && s.as_bytes()[size] == b'-' {
            // A decode failure after the dash is not an error: the dash is
            // then treated as a literal item on the next iteration.
            if let Ok((hi, hi_size)) = decode_char(&s[size + 1..]) {
                if lo > hi {
                    return Err(ParseError::BadRange(s[..size + 1 + hi_size].to_string()));
                }
                set.add_range(lo, hi);
                s = &s[size + 1 + hi_size..];
                continue;
            }
        }
        set.add(lo);
        s = &s[size..];
    }

    set.merge_adjacent();
    Ok(set)
}

/// Decode a class escape at the start of `s` into `set`.
///
/// Return the number of bytes consumed, or `None` if `s` does not start with
/// a class escape. Class escapes always take priority over single-character
/// decoding, so a class can never become a range endpoint.
fn decode_class(set: &mut RuneSet, s: &str) -> Result<Option<usize>, ParseError> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'\\' {
        return Ok(None);
    }
    match bytes[1] {
        b'd' => {
            set.add_range('0', '9');
            Ok(Some(2))
        }
        b'l' => {
            set.add_range('a', 'z');
            Ok(Some(2))
        }
        b'L' => {
            set.add_range('A', 'Z');
            Ok(Some(2))
        }
        b'w' => {
            set.add_range('0', '9');
            set.add_range('A', 'Z');
            set.add_range('a', 'z');
            Ok(Some(2))
        }
        b's' => {
            set.add_range('!', '/');
            set.add_range(':', '@');
            set.add_range('[', '`');
            set.add_range('{', '~');
            Ok(Some(2))
        }
        b'g' => {
            set.add_range('!', '~');
            Ok(Some(2))
        }
        b'p' => {
            if s.len() < 3 {
                return Err(ParseError::TruncatedEscape(s.to_string()));
            }
            if bytes[2] != b'{' {
                // One-letter General Category.
                let name = s[2..].chars().next().expect("length checked above");
                let consumed = 2 + name.len_utf8();
                match unicode::class_table(&s[2..consumed]) {
                    Some(table) => {
                        set.add_table(&table);
                        Ok(Some(consumed))
                    }
                    None => Err(ParseError::InvalidClassName(clip(s, consumed))),
                }
            } else {
                match s.find('}') {
                    None => Err(ParseError::UnterminatedEscape(s.to_string())),
                    Some(end) => match unicode::class_table(&s[3..end]) {
                        Some(table) => {
                            set.add_table(&table);
                            Ok(Some(end + 1))
                        }
                        None => Err(ParseError::InvalidClassName(s[..end + 1].to_string())),
                    },
                }
            }
        }
        _ => Ok(None),
    }
}

/// Decode one literal character or single-character escape at the start of
/// `s`, returning it with the number of bytes consumed.
fn decode_char(s: &str) -> Result<(char, usize), ParseError> {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return Err(ParseError::UnexpectedEnd);
    };
    if first != b'\\' {
        let c = s.chars().next().expect("s is not empty");
        return Ok((c, c.len_utf8()));
    }
    if bytes.len() == 1 {
        return Err(ParseError::TruncatedEscape(s.to_string()));
    }
    match bytes[1] {
        b'-' | b'\\' => Ok((bytes[1] as char, 2)),
        b'0' => Ok(('\x00', 2)),
        b'a' => Ok(('\x07', 2)),
        b'b' => Ok(('\x08', 2)),
        b't' => Ok(('\x09', 2)),
        b'n' => Ok(('\x0A', 2)),
        b'v' => Ok(('\x0B', 2)),
        b'f' => Ok(('\x0C', 2)),
        b'r' => Ok(('\x0D', 2)),
        b'e' => Ok(('\x1B', 2)),
        b'x' => decode_hex(s, 2),
        b'u' => decode_hex(s, 4),
        b'U' => decode_hex(s, 8),
        _ => Err(ParseError::InvalidEscape(clip(s, 2))),
    }
}

/// Decode `\xHH`, `\uHHHH` or `\UHHHHHHHH` with exactly `digits` hex digits.
fn decode_hex(s: &str, digits: usize) -> Result<(char, usize), ParseError> {
    let bytes = s.as_bytes();
    let end = 2 + digits;
    if bytes.len() < end {
        return Err(ParseError::TruncatedEscape(s.to_string()));
    }
    if !bytes[2..end].iter().all(|b| b.is_ascii_hexdigit()) {
        return Err(ParseError::InvalidEscape(clip(s, end)));
    }
    let n = u32::from_str_radix(&s[2..end], 16).expect("checked hex digits");
    match char::from_u32(n) {
        Some(c) => Ok((c, end)),
        None => Err(ParseError::InvalidEscape(clip(s, end))),
    }
}

/// Clip `s` to at most `limit` bytes, extended forward to the next character
/// boundary so the offending substring is never cut mid-character.
fn clip(s: &str, limit: usize) -> String {
    let mut end = limit.min(s.len());
    while end < s.len() && !s.is_char_boundary(end) {
        end += 1;
    }
    s[..end].to_string()
}
