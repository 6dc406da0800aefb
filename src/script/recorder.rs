//! Captures read exchanges into a script.

use std::path::Path;

use chrono::Utc;

use super::format::{Exchange, Script};

/// Accumulates read exchanges and produces a [`Script`].
#[derive(Debug)]
pub struct ScriptRecorder {
    name: String,
    exchanges: Vec<Exchange>,
    next_seq: u64,
}

impl ScriptRecorder {
    /// Creates a recorder for a script with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), exchanges: Vec::new(), next_seq: 0 }
    }

    /// Records a successful read. The `seq` field is assigned automatically.
    pub fn record_ok(&mut self, path: &Path, contents: &str) {
        let exchange = Exchange::ok(self.next_seq, path.display().to_string(), contents);
        self.next_seq += 1;
        self.exchanges.push(exchange);
    }

    /// Records a failed read, keeping the error message.
    pub fn record_err(&mut self, path: &Path, message: &str) {
        let exchange = Exchange::err(self.next_seq, path.display().to_string(), message);
        self.next_seq += 1;
        self.exchanges.push(exchange);
    }

    /// Finishes recording, stamping the capture time.
    #[must_use]
    pub fn finish(self) -> Script {
        Script { name: self.name, recorded_at: Utc::now(), exchanges: self.exchanges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_sequence_numbers_in_order() {
        let mut recorder = ScriptRecorder::new("capture");
        recorder.record_ok(Path::new("./a"), "alpha");
        recorder.record_err(Path::new("./b"), "denied");
        recorder.record_ok(Path::new("./c"), "gamma");

        let script = recorder.finish();
        assert_eq!(script.name, "capture");
        assert_eq!(script.exchanges.len(), 3);
        assert_eq!(script.exchanges[0].seq, 0);
        assert_eq!(script.exchanges[1].seq, 1);
        assert_eq!(script.exchanges[2].seq, 2);
        assert_eq!(script.exchanges[0].path, "./a");
        assert_eq!(script.exchanges[1].output, serde_json::json!({"err": "denied"}));
    }
}
