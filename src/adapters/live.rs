//! Live adapter backed by real disk I/O.

use std::path::Path;

use crate::ports::filesystem::{FileReader, ReadFuture};

/// Reads files from the real filesystem via `tokio::fs`.
pub struct LiveFileSystem;

impl FileReader for LiveFileSystem {
    fn read_to_string(&self, path: &Path) -> ReadFuture<'_> {
        let path = path.to_path_buf();
        Box::pin(async move { Ok(tokio::fs::read_to_string(path).await?) })
    }
}
