//! Scripted adapter serving canned read outcomes per path.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::{FileReader, ReadError, ReadFuture};
use crate::script::format::{Exchange, Script};

/// Extracts a Result from an exchange output JSON value.
///
/// Expects `{"ok": <contents>}` or `{"err": "message"}`.
fn extract_result(output: &serde_json::Value, context: &str) -> Result<String, ReadError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").unwrap_or(output);
    serde_json::from_value(value.clone())
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

/// Serves canned outcomes for matching paths, recording every call.
///
/// Matching is by path, not by sequence: the first exchange whose path
/// matches is served, and repeated calls re-serve it. Unmatched paths fall
/// through to the optional inner reader, or fail when none is configured.
/// The stub is scoped — construct it in a test, drop it at the end; there is
/// nothing to restore.
pub struct ScriptedFileSystem {
    exchanges: Vec<Exchange>,
    calls: Mutex<Vec<PathBuf>>,
    fallthrough: Option<Box<dyn FileReader>>,
}

impl ScriptedFileSystem {
    /// Creates a stub with no canned exchanges.
    #[must_use]
    pub fn new() -> Self {
        Self { exchanges: Vec::new(), calls: Mutex::new(Vec::new()), fallthrough: None }
    }

    /// Creates a stub serving the exchanges of a captured script.
    #[must_use]
    pub fn from_script(script: Script) -> Self {
        Self {
            exchanges: script.exchanges,
            calls: Mutex::new(Vec::new()),
            fallthrough: None,
        }
    }

    /// Adds a canned successful read for `path`.
    #[must_use]
    pub fn respond_ok(mut self, path: impl Into<String>, contents: &str) -> Self {
        let seq = self.exchanges.last().map_or(0, |e| e.seq + 1);
        self.exchanges.push(Exchange::ok(seq, path, contents));
        self
    }

    /// Adds a canned failing read for `path`.
    #[must_use]
    pub fn respond_err(mut self, path: impl Into<String>, message: &str) -> Self {
        let seq = self.exchanges.last().map_or(0, |e| e.seq + 1);
        self.exchanges.push(Exchange::err(seq, path, message));
        self
    }

    /// Routes unmatched paths to `inner` instead of failing.
    #[must_use]
    pub fn with_fallthrough(mut self, inner: Box<dyn FileReader>) -> Self {
        self.fallthrough = Some(inner);
        self
    }

    /// Paths asked of this stub, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }

    fn canned(&self, path: &Path) -> Option<&Exchange> {
        self.exchanges.iter().find(|e| Path::new(&e.path) == path)
    }
}

impl Default for ScriptedFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileReader for ScriptedFileSystem {
    fn read_to_string(&self, path: &Path) -> ReadFuture<'_> {
        self.calls.lock().expect("calls lock poisoned").push(path.to_path_buf());

        if let Some(exchange) = self.canned(path) {
            let output = exchange.output.clone();
            return Box::pin(async move { extract_result(&output, "scripted read") });
        }
        match &self.fallthrough {
            Some(inner) => inner.read_to_string(path),
            None => {
                let message = format!("no scripted response for {}", path.display());
                Box::pin(async move { Err(message.into()) })
            }
        }
    }
}
