//! Reporting malformed tags, with parser events printed through tracing.
//!
//! Run with: RUST_LOG=structtag=trace cargo run --example diagnostics

use structtag::parse_partial;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let inputs = [
        r#"json:"host" env:"SERVER_HOST""#,
        "invalid syntax",
        r#":"value""#,
        r#"json:"host" env:SERVER_HOST"#,
        r#"json:"host", env:"SERVER_HOST""#,
        r#"doc:"bad \q escape""#,
    ];

    for input in inputs {
        let (tags, err) = parse_partial(input);
        match err {
            None => println!("ok      {input}"),
            Some(err) => {
                println!("error   {input}");
                println!("        {err}");
                println!("        help: {}", err.help());
                if !tags.is_empty() {
                    println!("        parsed before the error: {tags}");
                }
            }
        }
    }
}
