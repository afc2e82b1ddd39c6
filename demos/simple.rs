//! Parsing a struct tag and reading its values.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use structtag::parse;

fn main() -> Result<(), Box<dyn Error>> {
    let tag = r#"json:"host" env:"SERVER_HOST" default:"localhost""#;

    let tags = parse(tag)?;
    for (key, value) in &tags {
        println!("{key:>8} = {value}");
    }

    assert_eq!(tags.get("env"), Some("SERVER_HOST"));
    println!("\nRendered back: {tags}");

    Ok(())
}
