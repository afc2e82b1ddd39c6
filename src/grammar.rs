//! Struct Tag Grammar
//!
//! This module documents the struct tag grammar accepted by [`crate::parse`]
//! and produced by [`crate::to_string`].
//!
//! # Overview
//!
//! A struct tag is a single line of metadata attached to a field of a
//! structured type, made of zero or more `key:"value"` pairs:
//!
//! ```text
//! json:"host" env:"SERVER_HOST" default:"localhost"
//! ```
//!
//! # Syntax
//!
//! ```text
//! tag   = { " " } { pair { " " } }
//! pair  = key ":" value
//! key   = keych { keych }
//! keych = any byte > 0x20 except ":" | "\"" | 0x7f
//! value = "\"" { char | escape } "\""
//! ```
//!
//! **Rules**:
//! - Only the ASCII space separates pairs; a tab or newline cannot start a key
//! - The space between pairs is optional: `a:"1"b:"2"` holds two pairs
//! - No space is allowed between the key, the `:` and the opening quote
//! - A comma inside a key is reported as a separator error, since it almost
//!   always means pairs were written as `a:"1", b:"2"`
//! - Later pairs overwrite earlier pairs with the same key
//! - Keys may contain non-ASCII bytes
//!
//! # Values
//!
//! Values follow double-quoted string literal rules. A raw newline is not
//! allowed inside a value.
//!
//! **Escape sequences**:
//! ```text
//! \"  - quote
//! \\  - backslash
//! \n  - newline
//! \r  - carriage return
//! \t  - tab
//! \a  - bell
//! \b  - backspace
//! \f  - form feed
//! \v  - vertical tab
//! \NNN       - byte, 3 octal digits (at most \377)
//! \xHH       - byte, 2 hex digits
//! \uHHHH     - Unicode scalar, 4 hex digits
//! \UHHHHHHHH - Unicode scalar, 8 hex digits
//! ```
//!
//! Byte escapes are decoded as raw bytes; the value is then read as UTF-8
//! with invalid sequences replaced by U+FFFD.
//!
//! # Errors
//!
//! | Input | Error |
//! |-------|-------|
//! | `invalid syntax` | [`InvalidSyntax`](crate::Error::InvalidSyntax) |
//! | `key:` | [`InvalidSyntax`](crate::Error::InvalidSyntax) |
//! | `:value` | [`InvalidKey`](crate::Error::InvalidKey) |
//! | `"":"value"` | [`InvalidKey`](crate::Error::InvalidKey) |
//! | `key:value` | [`InvalidValue`](crate::Error::InvalidValue) |
//! | `key: ""` | [`InvalidValue`](crate::Error::InvalidValue) |
//! | `key:"value` | [`InvalidValue`](crate::Error::InvalidValue) |
//! | `key:"\q"` | [`InvalidValue`](crate::Error::InvalidValue) |
//! | `key:"value", other:"value"` | [`InvalidSeparator`](crate::Error::InvalidSeparator) |
//!
//! The first violation ends parsing; pairs before it are still available
//! through [`crate::parse_partial`].
//!
//! # Serialization
//!
//! Pairs are written as `key:"value"` joined by single spaces with no
//! trailing space. With the default [`ValueEscaping::Standard`](crate::ValueEscaping)
//! values are escaped so the text parses back to the same map;
//! [`ValueEscaping::Raw`](crate::ValueEscaping) writes them verbatim.

// This module contains only documentation; no implementation code
