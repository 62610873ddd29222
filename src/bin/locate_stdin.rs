//! Reads a document from stdin and prints the Appearances lookup as JSON.
//!
//! Output: `{"marker": "...", "excerpt": {"position", "start", "end", "context"}}`,
//! with `"excerpt": null` when the marker is absent.

use marker_peek::{locate_bytes, Excerpt, Options, Target};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    marker: &'static str,
    excerpt: Option<Excerpt<'static>>,
}

fn main() {
    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let marker = Target::DEFAULT.marker;
    let excerpt = match locate_bytes(&html, marker, &Options::default()) {
        Ok(excerpt) => excerpt,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    println!("{}", serde_json::to_string(&Output { marker, excerpt }).unwrap_or_default());
}
