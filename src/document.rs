//! The in-memory document buffer.

use std::fs;
use std::path::{Path, PathBuf};

use crate::encoding;
use crate::error::{Error, Result};

/// Full decoded text of one input file.
///
/// Created by a single whole-file read and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    text: String,
}

impl Document {
    /// Read and decode the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Decode`] if its content is not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let document = Self {
            path: path.to_path_buf(),
            text: encoding::decode_strict(&bytes)?,
        };
        tracing::debug!(
            path = %path.display(),
            bytes = bytes.len(),
            chars = document.char_len(),
            "document loaded"
        );

        Ok(document)
    }

    /// Path the document was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decoded text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
