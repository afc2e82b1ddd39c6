//! Error types for struct tag parsing.
//!
//! Parsing stops at the first grammar violation and reports it as one of four
//! fixed kinds. Errors carry no position and are compared by variant.
//!
//! ## Error Kinds
//!
//! - **InvalidSyntax**: a key was not followed by `:` and further content
//! - **InvalidKey**: no key characters at the current position
//! - **InvalidValue**: the value is not a well-formed quoted string
//! - **InvalidSeparator**: pairs were separated with a comma
//!
//! ## Examples
//!
//! ```rust
//! use structtag::{parse, Error};
//!
//! let err = parse(r#"key:"value", other:"value""#).unwrap_err();
//! assert_eq!(err, Error::InvalidSeparator);
//! eprintln!("{}: {}", err, err.help());
//! ```

use thiserror::Error;

/// The closed set of struct tag grammar violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// A key was found but not followed by `:` with trailing content.
    #[error("invalid syntax for key value pair")]
    InvalidSyntax,

    /// A key is missing or starts with a character that cannot begin a key.
    #[error("invalid key")]
    InvalidKey,

    /// A value is not quoted, is unterminated, or contains a bad escape.
    #[error("invalid value")]
    InvalidValue,

    /// A comma was used where pairs must be separated by spaces.
    #[error("invalid separator, key value pairs should be separated by spaces")]
    InvalidSeparator,
}

impl Error {
    /// Returns a short suggestion for fixing the offending tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use structtag::Error;
    ///
    /// assert!(Error::InvalidValue.help().contains("double quotes"));
    /// ```
    #[must_use]
    pub const fn help(&self) -> &'static str {
        match self {
            Error::InvalidSyntax => "write each pair as key:\"value\" with no space around ':'",
            Error::InvalidKey => "keys must be non-empty and may not contain spaces, ':' or '\"'",
            Error::InvalidValue => {
                "values must be wrapped in double quotes and use valid escape sequences"
            }
            Error::InvalidSeparator => "separate pairs with spaces, not commas",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
