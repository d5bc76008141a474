//! slackdir application layer
//!
//! Lazily initialized directory entries, the per-workspace entry table and
//! the use cases built on them.

pub mod directory;
pub mod entry;
pub mod init_task;
pub mod usecases;

pub use directory::WorkspaceDirectory;
pub use entry::{BotEntry, DirectoryEntry, EntryError, HumanEntry};
pub use init_task::InitializationTask;
