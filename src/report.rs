//! Human-readable output for a lookup.

use std::fmt;
use std::io::{self, Write};

use crate::locate::Excerpt;

/// The outcome of a lookup, displayed in one of its two fixed shapes.
///
/// Found:
///
/// ```text
/// Position: <offset>
/// Context:
/// <excerpt>
/// ```
///
/// Not found: `<label> not found`.
///
/// Both shapes end with a newline.
#[derive(Debug, Clone, Copy)]
pub struct Report<'e, 'a> {
    /// The excerpt, or `None` when the marker was absent.
    pub excerpt: Option<&'e Excerpt<'a>>,
    /// Name used in the not-found line.
    pub label: &'e str,
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.excerpt {
            Some(excerpt) => {
                writeln!(f, "Position: {}", excerpt.position)?;
                writeln!(f, "Context:")?;
                writeln!(f, "{}", excerpt.context)
            }
            None => writeln!(f, "{} not found", self.label),
        }
    }
}

/// Write the report for a lookup to `out`.
///
/// # Errors
///
/// Propagates any error from the writer.
pub fn write_report<W: Write>(
    out: &mut W,
    excerpt: Option<&Excerpt<'_>>,
    label: &str,
) -> io::Result<()> {
    write!(out, "{}", Report { excerpt, label })
}
