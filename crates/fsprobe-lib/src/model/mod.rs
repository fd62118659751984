//! Request and response payloads for the handler operations.
//!
//! Field names follow the wire contract (camelCase), so these types serialize
//! straight into structured tool output.

pub mod file;
pub mod time;

pub use file::{DirEntry, ListDirectoryOutput, PathInput, ReadFileOutput};
pub use time::{TimeFormat, TimeInput, TimeOutput};
