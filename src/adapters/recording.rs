//! Recording adapter that captures read exchanges while delegating.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::ports::filesystem::{FileReader, ReadFuture};
use crate::script::recorder::ScriptRecorder;

/// Records every read against an inner reader into a shared [`ScriptRecorder`].
///
/// The outcome reaches the caller unchanged; the recorder keeps a copy (path
/// plus ok contents or err message) so the session can be replayed later
/// through a scripted stub.
pub struct RecordingFileSystem {
    inner: Box<dyn FileReader>,
    recorder: Arc<Mutex<ScriptRecorder>>,
}

impl RecordingFileSystem {
    /// Creates a recording reader wrapping the given implementation.
    pub fn new(inner: Box<dyn FileReader>, recorder: Arc<Mutex<ScriptRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl FileReader for RecordingFileSystem {
    fn read_to_string(&self, path: &Path) -> ReadFuture<'_> {
        let path = path.to_path_buf();
        Box::pin(async move {
            let result = self.inner.read_to_string(&path).await;
            {
                let mut recorder = self.recorder.lock().expect("recorder lock poisoned");
                match &result {
                    Ok(contents) => recorder.record_ok(&path, contents),
                    Err(error) => recorder.record_err(&path, &error.to_string()),
                }
            }
            result
        })
    }
}
