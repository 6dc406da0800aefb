//! Read a file and return its text reversed, with swappable filesystem access.
//!
//! The core is one operation in two shapes: [`reverse_file`] resolves the
//! process-wide reader from [`ambient`], while [`reverse_file_with`] and
//! [`Reverser`] take the reader explicitly. File access goes through the
//! [`ports::filesystem::FileReader`] port; the adapters cover real disk I/O,
//! in-memory fixtures, scripted stubs, and capture for later replay.

pub mod adapters;
pub mod ambient;
pub mod ports;
pub mod reverse;
pub mod script;

pub use ports::filesystem::{FileReader, ReadError, ReadFuture};
pub use reverse::{reverse_file, reverse_file_with, Reverser};
