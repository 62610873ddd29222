//! Literal marker lookup with a clamped context window.
//!
//! All positions are character offsets (Unicode scalar values). The search is
//! a plain forward substring search; only the first occurrence is reported.

use std::borrow::Cow;

use serde::Serialize;

use crate::options::Options;

/// A marker occurrence and the text around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt<'a> {
    /// Character offset of the first occurrence of the marker.
    pub position: usize,

    /// Character offset where the window starts (inclusive).
    pub start: usize,

    /// Character offset where the window ends (exclusive).
    pub end: usize,

    /// Document text inside the window, verbatim.
    pub context: Cow<'a, str>,
}

impl Excerpt<'_> {
    /// Detach the excerpt from the buffer it was cut from.
    #[must_use]
    pub fn into_owned(self) -> Excerpt<'static> {
        Excerpt {
            position: self.position,
            start: self.start,
            end: self.end,
            context: Cow::Owned(self.context.into_owned()),
        }
    }
}

/// Find the first occurrence of `marker` in `buffer` and cut a window around it.
///
/// The window spans `[max(0, position - before), min(len, position + after))`
/// in characters. Returns `None` when the marker does not occur. An empty
/// marker matches at offset 0.
#[must_use]
pub fn find_context<'a>(buffer: &'a str, marker: &str, options: &Options) -> Option<Excerpt<'a>> {
    let Some(byte_pos) = buffer.find(marker) else {
        tracing::debug!(marker, "marker not found");
        return None;
    };
    let position = buffer[..byte_pos].chars().count();

    let start = position.saturating_sub(options.before);
    let start_byte = buffer
        .char_indices()
        .nth(start)
        .map_or(byte_pos, |(i, _)| i);

    let tail = &buffer[byte_pos..];
    let end_byte = tail
        .char_indices()
        .nth(options.after)
        .map_or(buffer.len(), |(i, _)| byte_pos + i);
    let end = position + buffer[byte_pos..end_byte].chars().count();

    tracing::debug!(marker, position, start, end, "marker found");

    Some(Excerpt {
        position,
        start,
        end,
        context: Cow::Borrowed(&buffer[start_byte..end_byte]),
    })
}
