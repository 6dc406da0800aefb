//! Adapters implementing the [`FileReader`](crate::ports::FileReader) port.
//!
//! `live` touches the real disk; the rest exist to stand in for it:
//! `memory` for seeded fixtures, `scripted` for canned outcomes with call
//! verification, `recording` for capturing exchanges to replay later.

pub mod live;
pub mod memory;
pub mod recording;
pub mod scripted;

pub use live::LiveFileSystem;
pub use memory::InMemoryFileSystem;
pub use recording::RecordingFileSystem;
pub use scripted::ScriptedFileSystem;
