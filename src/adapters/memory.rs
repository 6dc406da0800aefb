//! In-memory filesystem adapter for tests and deterministic fixtures.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::{FileReader, ReadFuture};

/// Serves file contents from an in-memory path map.
///
/// Fully isolated: constructing one never touches ambient or on-disk state,
/// and dropping it needs no cleanup.
#[derive(Debug, Default)]
pub struct InMemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl InMemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filesystem from a JSON object mapping paths to contents,
    /// e.g. `json!({"./foo": "bar"})`.
    ///
    /// # Panics
    ///
    /// Panics if `volume` is not a JSON object or any value is not a string.
    #[must_use]
    pub fn from_json(volume: serde_json::Value) -> Self {
        let object = volume.as_object().expect("volume must be a JSON object");
        let files = object
            .iter()
            .map(|(path, contents)| {
                let contents = contents
                    .as_str()
                    .unwrap_or_else(|| panic!("contents of {path:?} must be a string"));
                (PathBuf::from(path), contents.to_string())
            })
            .collect();
        Self { files: Mutex::new(files) }
    }

    /// Inserts or replaces a file.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut files = self.files.lock().expect("files lock poisoned");
        files.insert(path.into(), contents.into());
    }
}

impl FileReader for InMemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> ReadFuture<'_> {
        let found = {
            let files = self.files.lock().expect("files lock poisoned");
            files.get(path).cloned()
        };
        let path = path.to_path_buf();
        Box::pin(async move {
            match found {
                Some(contents) => Ok(contents),
                None => Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no such file: {}", path.display()),
                )
                .into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn serves_seeded_contents() {
        let fs = InMemoryFileSystem::from_json(json!({"./foo": "bar", "./baz": "qux"}));
        assert_eq!(fs.read_to_string(Path::new("./foo")).await.unwrap(), "bar");
        assert_eq!(fs.read_to_string(Path::new("./baz")).await.unwrap(), "qux");
    }

    #[tokio::test]
    async fn insert_replaces_existing_contents() {
        let fs = InMemoryFileSystem::new();
        fs.insert("./note", "first");
        fs.insert("./note", "second");
        assert_eq!(fs.read_to_string(Path::new("./note")).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn missing_path_fails_with_not_found() {
        let fs = InMemoryFileSystem::new();
        let error = fs.read_to_string(Path::new("./missing")).await.unwrap_err();
        let io = error.downcast_ref::<io::Error>().expect("io error");
        assert_eq!(io.kind(), io::ErrorKind::NotFound);
        assert!(error.to_string().contains("./missing"));
    }

    #[test]
    #[should_panic(expected = "volume must be a JSON object")]
    fn non_object_volume_panics() {
        let _ = InMemoryFileSystem::from_json(json!(["./foo"]));
    }
}
