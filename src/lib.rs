//! # structtag
//!
//! A strict parser for struct tags: single-line strings of `key:"value"`
//! pairs attached as metadata to fields of structured types.
//!
//! ## Why another struct tag parser?
//!
//! Lookup-style tag readers re-scan the tag on every query and silently
//! skip anything malformed. This crate parses a tag once into a [`TagMap`]
//! and reports the first malformed pair as one of four distinguishable
//! [`Error`] kinds.
//!
//! ## Key Features
//!
//! - **Strict**: Rejects unquoted values, empty keys, missing colons and comma separators
//! - **Single Pass**: O(n) scanning with no backtracking, never panics on any input
//! - **Round Trip**: Serialization escapes values so the output parses back to the same map
//! - **Merging**: Combine tags from several sources with last-write-wins semantics
//! - **Serde Compatible**: [`TagMap`] serializes as a map and deserializes from a map or tag text
//!
//! ## Quick Start
//!
//! ```rust
//! use structtag::parse;
//!
//! let tags = parse(r#"json:"host" env:"SERVER_HOST" default:"localhost""#).unwrap();
//! assert_eq!(tags.get("json"), Some("host"));
//! assert_eq!(tags.get("env"), Some("SERVER_HOST"));
//! assert_eq!(tags.get("default"), Some("localhost"));
//! ```
//!
//! ### Detecting Malformed Tags
//!
//! ```rust
//! use structtag::{parse, Error};
//!
//! assert_eq!(parse("invalid syntax"), Err(Error::InvalidSyntax));
//! assert_eq!(parse(":value"), Err(Error::InvalidKey));
//! assert_eq!(parse("key:value"), Err(Error::InvalidValue));
//! assert_eq!(parse(r#"key:"value", other:"value""#), Err(Error::InvalidSeparator));
//! ```
//!
//! ### Merging and Rendering
//!
//! ```rust
//! use structtag::{merge, parse, tags};
//!
//! let field = parse(r#"json:"port" env:"SERVER_PORT""#).unwrap();
//! let defaults = tags! { "default" => "3000" };
//!
//! let merged = merge([&field, &defaults]);
//! assert_eq!(
//!     merged.to_string(),
//!     r#"json:"port" env:"SERVER_PORT" default:"3000""#
//! );
//! ```
//!
//! ## Logging
//!
//! The parser emits `tracing` events: `trace` for every scanned pair and
//! `debug` when a tag is rejected. No subscriber is installed by this crate.
//!
//! ## Grammar
//!
//! See the [`grammar`] module for the accepted syntax and escape sequences.

pub mod de;
pub mod error;
pub mod grammar;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;

pub use de::Parser;
pub use error::{Error, Result};
pub use map::{merge, TagMap};
pub use options::{TagOptions, ValueEscaping};
pub use ser::Serializer;

use std::io;

/// Parses a struct tag into a [`TagMap`].
///
/// Accepts `&str` as well as raw bytes. Leading, trailing and repeated spaces
/// are ignored; an empty tag yields an empty map. When a key appears more
/// than once the last value wins.
///
/// # Examples
///
/// ```rust
/// use structtag::parse;
///
/// let tags = parse(r#"env:"A" env:"B""#).unwrap();
/// assert_eq!(tags.get("env"), Some("B"));
///
/// assert!(parse("").unwrap().is_empty());
/// assert!(parse(b"  ").unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Returns the first grammar violation found scanning left to right.
pub fn parse<T>(input: &T) -> Result<TagMap>
where
    T: AsRef<[u8]> + ?Sized,
{
    match parse_partial(input) {
        (tags, None) => Ok(tags),
        (_, Some(err)) => Err(err),
    }
}

/// Parses a struct tag, returning the pairs scanned so far alongside the
/// first error.
///
/// The partial map is meant for diagnostics; a tag that produced an error
/// should be rejected as a whole.
///
/// # Examples
///
/// ```rust
/// use structtag::{parse_partial, Error};
///
/// let (tags, err) = parse_partial(r#"json:"host" env:SERVER_HOST"#);
/// assert_eq!(err, Some(Error::InvalidValue));
/// assert_eq!(tags.get("json"), Some("host"));
/// assert!(!tags.contains_key("env"));
/// ```
pub fn parse_partial<T>(input: &T) -> (TagMap, Option<Error>)
where
    T: AsRef<[u8]> + ?Sized,
{
    Parser::new(input).parse_partial()
}

/// Renders a [`TagMap`] as struct tag text with default options.
///
/// # Examples
///
/// ```rust
/// use structtag::{parse, to_string};
///
/// let tags = parse(r#"env:"SERVER_HOST""#).unwrap();
/// assert_eq!(to_string(&tags), r#"env:"SERVER_HOST""#);
/// ```
#[must_use]
pub fn to_string(tags: &TagMap) -> String {
    to_string_with_options(tags, &TagOptions::default())
}

/// Renders a [`TagMap`] as struct tag text with custom options.
#[must_use]
pub fn to_string_with_options(tags: &TagMap, options: &TagOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.serialize(tags);
    serializer.into_inner()
}

/// Writes a [`TagMap`] as struct tag text to a writer.
///
/// # Examples
///
/// ```rust
/// use structtag::{tags, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &tags! { "json" => "host" }).unwrap();
/// assert_eq!(buffer, br#"json:"host""#);
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, tags: &TagMap) -> io::Result<()>
where
    W: io::Write,
{
    writer.write_all(to_string(tags).as_bytes())
}
