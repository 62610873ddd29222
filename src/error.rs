//! Error types for marker-peek.
//!
//! A missing marker is not an error; lookups return `None` for that case.
//! Only failures that make the document unreadable end up here.

use std::path::PathBuf;

/// Error type for loading and decoding a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid UTF-8.
    #[error(
        "failed to decode document as UTF-8: invalid byte sequence at byte {offset}{}",
        describe_declared(.declared.as_deref())
    )]
    Decode {
        /// Byte offset of the first malformed sequence.
        offset: usize,
        /// Charset the page declares in its head, if it names one other than UTF-8.
        declared: Option<&'static str>,
    },
}

fn describe_declared(declared: Option<&str>) -> String {
    declared
        .map(|name| format!(" (page declares {name})"))
        .unwrap_or_default()
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, Error>;
