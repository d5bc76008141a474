//! # sd-core
//!
//! Core domain models for the slackdir directory-entry cache.
//!
//! This crate contains pure naming logic and the port traits the cache
//! depends on, without any runtime or transport dependencies.

pub mod color;
pub mod config;
pub mod context;
pub mod display_name;
pub mod ids;
pub mod ports;
pub mod profile;

// Re-export commonly used types at the crate root
pub use color::ColorToken;
pub use config::DirectoryConfig;
pub use context::WorkspaceContext;
pub use ids::{BotId, TeamId, UserId};
pub use ports::{DirectoryClientPort, FetchError, NickColorPort};
pub use profile::{BotInfo, BotInfoResponse, UserInfo, UserInfoResponse, UserProfile};

/// Lifecycle of a directory entry's profile.
///
/// `Pending` until the initial fetch succeeds; a failed fetch leaves the
/// entry `Pending`. There is no way back from `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InitState {
    Pending,
    Ready,
}

/// Variant tag of a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Human,
    Bot,
}
