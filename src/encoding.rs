//! Strict UTF-8 decoding of document bytes.
//!
//! Documents must be valid UTF-8. Nothing is ever replaced with U+FFFD: a
//! document that does not decode is an error, not a lossy string. When a page
//! declares another charset in its head, the declaration is reported in the
//! error so the failure is easier to diagnose.
//!
//! Line endings are normalized the way a text-mode reader sees them: `\r\n`
//! and lone `\r` both become `\n`, so character offsets line up with it.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Only the head of the document is scanned for a charset declaration.
const SNIFF_LIMIT: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("valid regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">` tag
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// Detect the charset declared in the document head.
///
/// Looks for `<meta charset="...">` first, then
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
/// Labels are resolved per WHATWG, so `ISO-8859-1` maps to windows-1252.
/// Returns `None` when nothing is declared or the label is unknown.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> Option<&'static Encoding> {
    let head = &html[..html.len().min(SNIFF_LIMIT)];
    let head_str = String::from_utf8_lossy(head);

    extract_charset(&head_str)
        .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        .or_else(|| {
            extract_content_type_charset(&head_str)
                .and_then(|charset| Encoding::for_label(charset.as_bytes()))
        })
}

fn extract_charset(html: &str) -> Option<String> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

fn extract_content_type_charset(html: &str) -> Option<String> {
    CONTENT_TYPE_CHARSET_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Decode document bytes as UTF-8 without replacement characters.
///
/// A UTF-8 byte-order mark is kept as U+FEFF. Line endings are normalized
/// to `\n`.
///
/// # Errors
///
/// Returns [`Error::Decode`] when the bytes are not valid UTF-8. The error
/// carries the byte offset of the first malformed sequence and, if the page
/// declares a charset other than UTF-8, that charset's name.
///
/// # Examples
///
/// ```
/// use marker_peek::encoding::decode_strict;
///
/// let text = decode_strict(b"<p>one\r\ntwo\rthree</p>")?;
/// assert_eq!(text, "<p>one\ntwo\nthree</p>");
///
/// let latin1 = b"<meta charset=\"ISO-8859-1\"><p>Caf\xE9</p>";
/// assert!(decode_strict(latin1).is_err());
/// # Ok::<(), marker_peek::Error>(())
/// ```
pub fn decode_strict(bytes: &[u8]) -> Result<String> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(normalize_newlines(text)),
        Err(err) => {
            let declared = detect_encoding(bytes)
                .filter(|encoding| *encoding != UTF_8)
                .map(Encoding::name);
            Err(Error::Decode {
                offset: err.valid_up_to(),
                declared,
            })
        }
    }
}

/// Translate `\r\n` and lone `\r` to `\n`.
fn normalize_newlines(text: &str) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text.to_owned()
    }
}
