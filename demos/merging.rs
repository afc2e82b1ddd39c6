//! Layering tags from several sources.
//!
//! Run with: cargo run --example merging

use std::error::Error;
use structtag::{merge, parse, tags};

fn main() -> Result<(), Box<dyn Error>> {
    let declared = parse(r#"json:"port" env:"SERVER_PORT" default:"3000""#)?;
    let overrides = tags! { "default" => "8080" };
    let extra = parse(r#"doc:"listen port""#)?;

    let merged = merge([&declared, &overrides, &extra]);
    println!("declared:  {declared}");
    println!("overrides: {overrides}");
    println!("merged:    {merged}");

    assert_eq!(merged.get("default"), Some("8080"));
    assert_eq!(declared.get("default"), Some("3000"));

    Ok(())
}
