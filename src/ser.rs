//! Struct tag serialization.
//!
//! This module provides the [`Serializer`] that renders a [`TagMap`] as
//! `key:"value"` pairs separated by single spaces.
//!
//! ## Usage
//!
//! Most users should use [`crate::to_string`] or the `Display` impl of
//! [`TagMap`]. The serializer can also append several maps to one buffer:
//!
//! ```rust
//! use structtag::{tags, Serializer, TagOptions};
//!
//! let mut serializer = Serializer::new(TagOptions::new());
//! serializer.serialize(&tags! { "json" => "host" });
//! serializer.serialize(&tags! { "env" => "SERVER_HOST" });
//! assert_eq!(serializer.into_inner(), r#"json:"host" env:"SERVER_HOST""#);
//! ```

use crate::{TagMap, TagOptions, ValueEscaping};
use std::fmt::Write as _;

/// The struct tag serializer.
///
/// Keys are written verbatim; a key the parser would reject produces text
/// that does not parse back.
pub struct Serializer {
    output: String,
    options: TagOptions,
}

impl Serializer {
    pub fn new(options: TagOptions) -> Self {
        Serializer {
            output: String::with_capacity(64),
            options,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends every pair of `tags` to the output.
    pub fn serialize(&mut self, tags: &TagMap) {
        if self.options.sort_keys {
            let mut pairs: Vec<_> = tags.iter().collect();
            pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
            for (key, value) in pairs {
                self.write_pair(key, value);
            }
        } else {
            for (key, value) in tags {
                self.write_pair(key, value);
            }
        }
    }

    fn write_pair(&mut self, key: &str, value: &str) {
        if !self.output.is_empty() {
            self.output.push(' ');
        }
        self.output.push_str(key);
        self.output.push_str(":\"");
        match self.options.escaping {
            ValueEscaping::Standard => self.write_escaped(value),
            ValueEscaping::Raw => self.output.push_str(value),
        }
        self.output.push('"');
    }

    #[inline]
    fn write_escaped(&mut self, s: &str) {
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0007}' => self.output.push_str("\\a"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000B}' => self.output.push_str("\\v"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if c.is_ascii_control() => {
                    // Writing to a String cannot fail.
                    let _ = write!(self.output, "\\x{:02x}", u32::from(c));
                }
                _ => self.output.push(ch),
            }
        }
    }
}
