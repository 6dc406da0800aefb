//! Script format for canned and captured read exchanges.

pub mod format;
pub mod recorder;

pub use format::{Exchange, Script};
pub use recorder::ScriptRecorder;
