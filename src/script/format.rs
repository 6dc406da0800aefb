//! Script data structures for canned and captured read exchanges.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single read exchange: the path asked for and the outcome served.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exchange {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Path the read was asked for.
    pub path: String,
    /// Outcome as `{"ok": <contents>}` or `{"err": "message"}`.
    pub output: serde_json::Value,
}

impl Exchange {
    /// Builds a successful exchange.
    #[must_use]
    pub fn ok(seq: u64, path: impl Into<String>, contents: &str) -> Self {
        Self { seq, path: path.into(), output: serde_json::json!({ "ok": contents }) }
    }

    /// Builds a failing exchange carrying the error message.
    #[must_use]
    pub fn err(seq: u64, path: impl Into<String>, message: &str) -> Self {
        Self { seq, path: path.into(), output: serde_json::json!({ "err": message }) }
    }
}

/// An ordered collection of read exchanges.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Script {
    /// Human-readable name for this script.
    pub name: String,
    /// When this script was captured.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of exchanges.
    pub exchanges: Vec<Exchange>,
}

impl Script {
    /// Loads a script from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the script file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read script file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse script file {}: {e}", path.display()))
    }

    /// Writes the script as YAML to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let yaml = serde_yaml::to_string(self).map_err(std::io::Error::other)?;
        std::fs::write(path, yaml)
    }
}
