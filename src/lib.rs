//! # marker-peek
//!
//! Find a literal marker in a cached HTML page and show the text around it.
//!
//! The document is read whole, searched once for the first occurrence of the
//! marker, and a window of characters around that occurrence is cut out for
//! manual inspection. No HTML parsing takes place: the page is plain text
//! here.
//!
//! ## Quick Start
//!
//! ```rust
//! use marker_peek::locate;
//!
//! let html = r#"xxxx id="Appearances"yyyy"#;
//!
//! let excerpt = locate(html, r#"id="Appearances""#).expect("marker present");
//! assert_eq!(excerpt.position, 5);
//! assert_eq!(excerpt.context, html);
//! ```
//!
//! ## Offsets
//!
//! Positions and window bounds are counted in characters, so text with
//! multi-byte characters reports the same numbers a character-indexed
//! reader would.

mod error;
mod options;

/// Document buffer loading.
pub mod document;

/// Strict UTF-8 decoding and newline normalization.
pub mod encoding;

/// Marker search and context windows.
pub mod locate;

/// Output formatting for lookups.
pub mod report;

use std::path::Path;

// Public API - re-exports
pub use document::Document;
pub use error::{Error, Result};
pub use locate::{find_context, Excerpt};
pub use options::{Options, Target, DEFAULT_AFTER, DEFAULT_BEFORE};
pub use report::{write_report, Report};

/// Finds `marker` in `text` using the default window (100 before, 2000 after).
///
/// Returns `None` when the marker does not occur.
///
/// # Example
///
/// ```rust
/// use marker_peek::locate;
///
/// assert!(locate("<h2 id=\"Appearances\">", "id=\"Appearances\"").is_some());
/// assert!(locate("<h2 id=\"Sources\">", "id=\"Appearances\"").is_none());
/// ```
#[must_use]
pub fn locate<'a>(text: &'a str, marker: &str) -> Option<Excerpt<'a>> {
    locate_with_options(text, marker, &Options::default())
}

/// Finds `marker` in `text` with custom window bounds.
///
/// # Example
///
/// ```rust
/// use marker_peek::{locate_with_options, Options};
///
/// let options = Options { before: 2, after: 6 };
/// let excerpt = locate_with_options("abcdMARKERxyz", "MARKER", &options);
/// assert_eq!(
///     excerpt.map(|e| e.context.into_owned()),
///     Some("cdMARKER".to_string())
/// );
/// ```
#[must_use]
pub fn locate_with_options<'a>(
    text: &'a str,
    marker: &str,
    options: &Options,
) -> Option<Excerpt<'a>> {
    find_context(text, marker, options)
}

/// Decodes raw document bytes and finds `marker` in the result.
///
/// Decoding follows [`encoding::decode_strict`]: strict UTF-8 with line
/// endings normalized to `\n`, so offsets count the normalized text.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the bytes are not valid UTF-8.
///
/// # Example
///
/// ```rust
/// use marker_peek::{locate_bytes, Options};
///
/// let html = b"<p>Caf\xC3\xA9</p>\r\n<h2 id=\"Appearances\">";
/// let excerpt = locate_bytes(html, "id=\"Appearances\"", &Options::default())?;
/// assert!(excerpt.is_some_and(|e| e.position == 16 && e.context.contains("Café")));
/// # Ok::<(), marker_peek::Error>(())
/// ```
pub fn locate_bytes(
    bytes: &[u8],
    marker: &str,
    options: &Options,
) -> Result<Option<Excerpt<'static>>> {
    let text = encoding::decode_strict(bytes)?;
    Ok(find_context(&text, marker, options).map(Excerpt::into_owned))
}

/// Reads the file at `path` and finds `marker` in it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Decode`] if
/// its content is not valid UTF-8.
pub fn inspect_file(
    path: impl AsRef<Path>,
    marker: &str,
    options: &Options,
) -> Result<Option<Excerpt<'static>>> {
    let document = Document::load(path)?;
    Ok(find_context(document.text(), marker, options).map(Excerpt::into_owned))
}
