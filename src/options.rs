//! Configuration for marker lookups.
//!
//! `Options` bounds the context window; `Target` names the document and
//! marker the command-line tool inspects.

/// Characters kept before the marker by default.
pub const DEFAULT_BEFORE: usize = 100;

/// Characters kept from the marker onwards by default.
pub const DEFAULT_AFTER: usize = 2000;

/// Context window bounds for a lookup.
///
/// Both bounds count characters, not bytes. The window is clamped to the
/// document, so oversized values are harmless.
///
/// # Example
///
/// ```rust
/// use marker_peek::Options;
///
/// // Use defaults (100 before, 2000 after)
/// let options = Options::default();
///
/// // Narrow the window
/// let options = Options {
///     after: 200,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Characters to include before the marker's first character.
    ///
    /// Default: `100`
    pub before: usize,

    /// Characters to include starting at the marker's first character.
    ///
    /// Default: `2000`
    pub after: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            before: DEFAULT_BEFORE,
            after: DEFAULT_AFTER,
        }
    }
}

/// A fixed inspection target: which file to open and what to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    /// Path to the cached page, relative to the working directory.
    pub path: &'static str,

    /// Literal marker text.
    pub marker: &'static str,

    /// Human-readable name used in the not-found line.
    pub label: &'static str,
}

impl Target {
    /// The Appearances heading of the cached Luke Skywalker page.
    pub const DEFAULT: Self = Self {
        path: "fandom-cache/luke-skywalker.html",
        marker: r#"id="Appearances""#,
        label: "Appearances",
    };
}

impl Default for Target {
    fn default() -> Self {
        Self::DEFAULT
    }
}
