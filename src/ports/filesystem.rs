//! Filesystem port for reading file contents.

use std::error::Error;
use std::future::Future;
use std::path::Path;
use std::pin::Pin;

/// Failure produced by a [`FileReader`].
///
/// Deliberately opaque: whatever the underlying reader reports reaches the
/// caller unmodified, with no translation or added context.
pub type ReadError = Box<dyn Error + Send + Sync>;

/// Boxed future type alias used by [`FileReader`] to keep the trait dyn-compatible.
pub type ReadFuture<'a> = Pin<Box<dyn Future<Output = Result<String, ReadError>> + Send + 'a>>;

/// Provides read access to full file contents.
///
/// Abstracting the read behind a trait allows tests to substitute canned or
/// in-memory implementations without touching the real disk.
pub trait FileReader: Send + Sync {
    /// Reads the entire contents of the file at `path` as a UTF-8 string.
    ///
    /// The read is a single step: the returned future resolves once with the
    /// full contents, or fails with whatever error the reader itself reports
    /// (file missing, permission denied, not valid UTF-8).
    fn read_to_string(&self, path: &Path) -> ReadFuture<'_>;
}
