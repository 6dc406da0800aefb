//! Read-and-reverse in implicit- and explicit-dependency shapes.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::LiveFileSystem;
use crate::ambient;
use crate::ports::filesystem::{FileReader, ReadError};

/// Reverses `contents` by Unicode scalar value.
///
/// Grapheme clusters are not kept intact: a combining mark ends up ahead of
/// its base character.
fn reverse_text(contents: &str) -> String {
    contents.chars().rev().collect()
}

/// Reads the file at `path` through the process-wide reader and returns its
/// contents reversed.
///
/// The reader is resolved from [`ambient`] at call time; with nothing
/// installed that is the real filesystem.
///
/// # Errors
///
/// Fails with the reader's own error when the contents cannot be produced;
/// nothing is wrapped or added.
pub async fn reverse_file(path: &Path) -> Result<String, ReadError> {
    let reader = ambient::current();
    let contents = reader.read_to_string(path).await?;
    Ok(reverse_text(&contents))
}

/// Same operation with the reader supplied explicitly.
///
/// Nothing ambient is read or mutated, so substitution stays local: pass a
/// fake reader in, and there is no restore step afterwards. Prefer this
/// shape whenever the caller controls construction.
///
/// # Errors
///
/// Fails with the reader's own error, unmodified.
pub async fn reverse_file_with(reader: &dyn FileReader, path: &Path) -> Result<String, ReadError> {
    let contents = reader.read_to_string(path).await?;
    Ok(reverse_text(&contents))
}

/// Reverser with its reader chosen at construction.
///
/// The composition root selects the implementation once, before first use;
/// call sites stay free of wiring.
pub struct Reverser {
    reader: Arc<dyn FileReader>,
}

impl Reverser {
    /// Creates a reverser reading from the real filesystem.
    #[must_use]
    pub fn live() -> Self {
        Self { reader: Arc::new(LiveFileSystem) }
    }

    /// Creates a reverser reading through `reader`.
    #[must_use]
    pub fn with_reader(reader: Arc<dyn FileReader>) -> Self {
        Self { reader }
    }

    /// Reads the file at `path` and returns its contents reversed.
    ///
    /// # Errors
    ///
    /// Fails with the reader's own error, unmodified.
    pub async fn reverse(&self, path: &Path) -> Result<String, ReadError> {
        reverse_file_with(self.reader.as_ref(), path).await
    }
}
