//! Configuration options for struct tag serialization.
//!
//! This module provides types to customize the rendered tag text:
//!
//! - [`TagOptions`]: Main configuration struct
//! - [`ValueEscaping`]: How values are escaped inside their quotes
//!
//! ## Examples
//!
//! ```rust
//! use structtag::{tags, to_string_with_options, TagOptions, ValueEscaping};
//!
//! let tags = tags! { "json" => "host", "env" => "SERVER_HOST" };
//!
//! // Keys in byte order
//! let options = TagOptions::new().with_sorted_keys(true);
//! assert_eq!(
//!     to_string_with_options(&tags, &options),
//!     r#"env:"SERVER_HOST" json:"host""#
//! );
//!
//! // Values written exactly as stored
//! let options = TagOptions::new().with_escaping(ValueEscaping::Raw);
//! let tag = to_string_with_options(&tags, &options);
//! ```

/// How values are written between their quotes.
///
/// # Examples
///
/// ```rust
/// use structtag::{tags, to_string_with_options, TagOptions, ValueEscaping};
///
/// let tags = tags! { "doc" => r#"say "hi""# };
///
/// let standard = to_string_with_options(&tags, &TagOptions::new());
/// assert_eq!(standard, r#"doc:"say \"hi\"""#);
///
/// let raw = TagOptions::new().with_escaping(ValueEscaping::Raw);
/// assert_eq!(to_string_with_options(&tags, &raw), r#"doc:"say "hi"""#);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ValueEscaping {
    /// Escape quotes, backslashes and ASCII control characters so the output
    /// parses back to the same values.
    #[default]
    Standard,
    /// Write values verbatim. Values containing `"` or `\` will not parse back.
    Raw,
}

/// Configuration options for struct tag serialization.
#[derive(Clone, Debug, Default)]
pub struct TagOptions {
    pub escaping: ValueEscaping,
    /// Emit pairs in byte order of their keys instead of insertion order.
    pub sort_keys: bool,
}

impl TagOptions {
    /// Creates default options (standard escaping, insertion order).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structtag::{TagOptions, ValueEscaping};
    ///
    /// let options = TagOptions::new();
    /// assert_eq!(options.escaping, ValueEscaping::Standard);
    /// assert!(!options.sort_keys);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_escaping(mut self, escaping: ValueEscaping) -> Self {
        self.escaping = escaping;
        self
    }

    #[must_use]
    pub fn with_sorted_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
