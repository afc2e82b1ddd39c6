//! Customizing how tags are rendered.
//!
//! Run with: cargo run --example custom_options

use structtag::{tags, to_string_with_options, TagOptions, ValueEscaping};

fn main() {
    let tags = tags! {
        "json" => "path",
        "env" => "DATA_PATH",
        "default" => r"C:\data",
    };

    // Default: insertion order, values escaped
    let options = TagOptions::new();
    println!("Default:\n{}\n", to_string_with_options(&tags, &options));

    // Keys in byte order for stable output
    let options = TagOptions::new().with_sorted_keys(true);
    println!("Sorted:\n{}\n", to_string_with_options(&tags, &options));

    // Values written verbatim
    let options = TagOptions::new().with_escaping(ValueEscaping::Raw);
    println!("Raw:\n{}", to_string_with_options(&tags, &options));
}
