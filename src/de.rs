//! Struct tag parsing.
//!
//! This module provides the [`Parser`] that scans a struct tag into
//! `(key, value)` pairs.
//!
//! ## Overview
//!
//! - **Single-pass scanning**: the cursor only moves forward, O(n) in input length
//! - **Byte oriented**: any byte sequence is accepted as input and never panics
//! - **Fail fast**: scanning stops at the first violation, which is yielded once
//!
//! ## Usage
//!
//! Most users should use [`crate::parse`] or [`crate::parse_partial`]. The
//! parser itself is an iterator, useful when duplicate keys or input order
//! matter:
//!
//! ```rust
//! use structtag::Parser;
//!
//! let pairs: Vec<_> = Parser::new(r#"env:"A" env:"B""#)
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(
//!     pairs,
//!     vec![
//!         ("env".to_string(), "A".to_string()),
//!         ("env".to_string(), "B".to_string()),
//!     ]
//! );
//! ```

use crate::{Error, Result, TagMap};
use tracing::{debug, trace};

const DEL: u8 = 0x7f;

/// A forward-only cursor over a raw struct tag.
///
/// Yields `Ok((key, value))` for every well-formed pair and at most one
/// `Err`, after which it is exhausted.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a [u8],
    position: usize,
    failed: bool,
}

impl<'a> Parser<'a> {
    pub fn new<T>(input: &'a T) -> Self
    where
        T: AsRef<[u8]> + ?Sized,
    {
        Parser {
            input: input.as_ref(),
            position: 0,
            failed: false,
        }
    }

    /// Byte offset of the cursor into the input.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    fn remaining(&self) -> &'a [u8] {
        &self.input[self.position..]
    }

    fn at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Skips ASCII spaces only; tabs and newlines are not separators.
    fn skip_spaces(&mut self) {
        let count = self
            .remaining()
            .iter()
            .take_while(|&&b| b == b' ')
            .count();
        self.position += count;
    }

    /// Scans `key:` and leaves the cursor on the opening quote of the value.
    fn scan_key(&mut self) -> Result<String> {
        let rest = self.remaining();
        let mut len = 0;
        while let Some(&b) = rest.get(len) {
            if !is_key_byte(b) {
                break;
            }
            if b == b',' {
                return Err(Error::InvalidSeparator);
            }
            len += 1;
        }

        if len == 0 {
            return Err(Error::InvalidKey);
        }

        // The colon may not be the last byte.
        if rest.get(len) != Some(&b':') || rest.len() <= len + 1 {
            return Err(Error::InvalidSyntax);
        }

        if rest[len + 1] != b'"' {
            return Err(Error::InvalidValue);
        }

        let key = String::from_utf8_lossy(&rest[..len]).into_owned();
        self.position += len + 1;
        Ok(key)
    }

    /// Scans a quoted value starting at its opening quote and returns the
    /// bytes between the quotes, still escaped.
    fn scan_quoted(&mut self) -> Result<&'a [u8]> {
        let rest = self.remaining();
        let mut i = 1;
        while i < rest.len() && rest[i] != b'"' {
            if rest[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }

        if i >= rest.len() {
            return Err(Error::InvalidValue);
        }

        self.position += i + 1;
        Ok(&rest[1..i])
    }

    fn next_pair(&mut self) -> Result<Option<(String, String)>> {
        self.skip_spaces();
        if self.at_end() {
            return Ok(None);
        }

        let key = self.scan_key()?;
        let value = unquote(self.scan_quoted()?)?;
        trace!(position = self.position, key = %key, "scanned pair");
        Ok(Some((key, value)))
    }

    /// Consumes the parser, collecting every pair into a [`TagMap`].
    ///
    /// Later duplicates overwrite earlier ones. On failure the map holds the
    /// pairs scanned before the offending one.
    pub fn parse_partial(mut self) -> (TagMap, Option<Error>) {
        let mut tags = TagMap::new();
        while let Some(pair) = self.next() {
            match pair {
                Ok((key, value)) => {
                    tags.insert(key, value);
                }
                Err(err) => {
                    debug!(
                        error = ?err,
                        position = self.position,
                        pairs = tags.len(),
                        "struct tag rejected"
                    );
                    return (tags, Some(err));
                }
            }
        }
        (tags, None)
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<(String, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_pair() {
            Ok(pair) => pair.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Parser<'_> {}

#[inline]
fn is_key_byte(b: u8) -> bool {
    b > b' ' && b != b':' && b != b'"' && b != DEL
}

/// Interprets the body of a double-quoted string literal.
///
/// Escapes decode to raw bytes (`\xff` is the single byte `0xff`), so the
/// result is converted lossily once the whole body has been decoded.
fn unquote(body: &[u8]) -> Result<String> {
    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while let Some(&b) = body.get(i) {
        match b {
            b'\n' => return Err(Error::InvalidValue),
            b'\\' => i = unescape(body, i + 1, &mut out)?,
            _ => {
                out.push(b);
                i += 1;
            }
        }
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Decodes the escape sequence whose letter is at `at`, returning the index
/// just past it.
fn unescape(body: &[u8], at: usize, out: &mut Vec<u8>) -> Result<usize> {
    let &c = body.get(at).ok_or(Error::InvalidValue)?;
    let simple = match c {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0c),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0b),
        b'\\' => Some(b'\\'),
        b'"' => Some(b'"'),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return Ok(at + 1);
    }

    match c {
        b'x' => {
            let v = read_digits(body, at + 1, 2, 16)?;
            out.push(v as u8);
            Ok(at + 3)
        }
        b'0'..=b'7' => {
            let v = read_digits(body, at, 3, 8)?;
            let byte = u8::try_from(v).map_err(|_| Error::InvalidValue)?;
            out.push(byte);
            Ok(at + 3)
        }
        b'u' | b'U' => {
            let width = if c == b'u' { 4 } else { 8 };
            let v = read_digits(body, at + 1, width, 16)?;
            let ch = char::from_u32(v).ok_or(Error::InvalidValue)?;
            let mut buf = [0; 4];
            out.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
            Ok(at + 1 + width)
        }
        _ => Err(Error::InvalidValue),
    }
}

fn read_digits(body: &[u8], start: usize, width: usize, radix: u32) -> Result<u32> {
    let digits = body
        .get(start..start + width)
        .ok_or(Error::InvalidValue)?;
    let mut value = 0u32;
    for &d in digits {
        let digit = char::from(d).to_digit(radix).ok_or(Error::InvalidValue)?;
        value = value * radix + digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unquote_str(s: &str) -> Result<String> {
        unquote(s.as_bytes())
    }

    #[test]
    fn test_unquote_plain() {
        assert_eq!(unquote_str("localhost").unwrap(), "localhost");
        assert_eq!(unquote_str("").unwrap(), "");
        assert_eq!(unquote_str("héllo wörld").unwrap(), "héllo wörld");
    }

    #[test]
    fn test_unquote_simple_escapes() {
        assert_eq!(unquote_str(r#"say \"hi\""#).unwrap(), "say \"hi\"");
        assert_eq!(unquote_str(r"a\\b").unwrap(), "a\\b");
        assert_eq!(unquote_str(r"\n\r\t").unwrap(), "\n\r\t");
        assert_eq!(unquote_str(r"\a\b\f\v").unwrap(), "\x07\x08\x0c\x0b");
    }

    #[test]
    fn test_unquote_numeric_escapes() {
        assert_eq!(unquote_str(r"\x41").unwrap(), "A");
        assert_eq!(unquote_str(r"\101").unwrap(), "A");
        assert_eq!(unquote_str(r"\u00e9").unwrap(), "é");
        assert_eq!(unquote_str(r"\U0001F600").unwrap(), "\u{1F600}");
        // Byte escapes combine into UTF-8 sequences.
        assert_eq!(unquote_str(r"\xc3\xa9").unwrap(), "é");
    }

    #[test]
    fn test_unquote_rejects_malformed() {
        for body in [
            r"\q", r"\'", r"\x4", r"\x4g", r"\400", r"\18", r"\u12", r"\ud800", r"\U00110000",
            r"\u+041", "line\nbreak",
        ] {
            assert_eq!(unquote_str(body), Err(Error::InvalidValue), "{body:?}");
        }
    }

    #[test]
    fn test_unquote_invalid_utf8_is_replaced() {
        assert_eq!(unquote(b"a\xffb").unwrap(), "a\u{FFFD}b");
        assert_eq!(unquote_str(r"\xff").unwrap(), "\u{FFFD}");
    }

    #[test]
    fn test_skip_spaces_only_ascii_space() {
        let mut parser = Parser::new("  \tkey");
        parser.skip_spaces();
        assert_eq!(parser.position(), 2);
    }

    #[test]
    fn test_cursor_advances_past_each_pair() {
        let mut parser = Parser::new(r#"a:"1"  b:"2""#);
        assert_eq!(parser.next(), Some(Ok(("a".into(), "1".into()))));
        assert_eq!(parser.position(), 5);
        assert_eq!(parser.next(), Some(Ok(("b".into(), "2".into()))));
        assert_eq!(parser.position(), 12);
        assert_eq!(parser.next(), None);
    }

    #[test]
    fn test_iterator_fuses_after_error() {
        let mut parser = Parser::new(r#"a:"1" :"2" c:"3""#);
        assert!(matches!(parser.next(), Some(Ok(_))));
        assert_eq!(parser.next(), Some(Err(Error::InvalidKey)));
        assert_eq!(parser.next(), None);
        assert_eq!(parser.next(), None);
    }

    #[test]
    fn test_key_accepts_non_ascii_bytes() {
        let (tags, err) = Parser::new(r#"clé:"v""#).parse_partial();
        assert_eq!(err, None);
        assert_eq!(tags.get("clé"), Some("v"));
    }

    #[test]
    fn test_control_bytes_end_key() {
        assert_eq!(
            Parser::new("key\x7f:\"v\"").parse_partial().1,
            Some(Error::InvalidSyntax)
        );
        assert_eq!(
            Parser::new("\tkey:\"v\"").parse_partial().1,
            Some(Error::InvalidKey)
        );
    }

    #[test]
    fn test_partial_map_keeps_earlier_pairs() {
        let (tags, err) = Parser::new(r#"a:"1" b:"2" c:3"#).parse_partial();
        assert_eq!(err, Some(Error::InvalidValue));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.get("b"), Some("2"));
        assert!(!tags.contains_key("c"));
    }
}
