//! Building tags with the tags! macro.
//!
//! Run with: cargo run --example macro

use structtag::{parse, tags};

fn main() {
    let port = 3000;
    let tags = tags! {
        "json" => "port",
        "env" => "SERVER_PORT",
        "default" => port,
        "doc" => r#"the "listen" port"#,
    };

    let text = tags.to_string();
    println!("{text}");

    // Quotes in values are escaped, so the text parses back unchanged.
    assert_eq!(parse(&text), Ok(tags));
    println!("✓ Round-trip successful");
}
