//! Directory entries: lazily initialized humans and bots

mod bot;
mod error;
mod human;

pub use bot::BotEntry;
pub use error::EntryError;
pub use human::HumanEntry;

use std::sync::Arc;

use sd_core::{EntryKind, FetchError, InitState};

/// A shared handle to either kind of entry.
#[derive(Clone)]
pub enum DirectoryEntry {
    Human(Arc<HumanEntry>),
    Bot(Arc<BotEntry>),
}

impl DirectoryEntry {
    pub fn id(&self) -> &str {
        match self {
            DirectoryEntry::Human(entry) => entry.id().as_str(),
            DirectoryEntry::Bot(entry) => entry.id().as_str(),
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            DirectoryEntry::Human(entry) => entry.kind(),
            DirectoryEntry::Bot(entry) => entry.kind(),
        }
    }

    pub fn state(&self) -> InitState {
        match self {
            DirectoryEntry::Human(entry) => entry.state(),
            DirectoryEntry::Bot(entry) => entry.state(),
        }
    }

    pub async fn ensure_initialized(&self) -> Result<(), FetchError> {
        match self {
            DirectoryEntry::Human(entry) => entry.ensure_initialized().await,
            DirectoryEntry::Bot(entry) => entry.ensure_initialized().await,
        }
    }

    /// Display name for humans, bot nick for bots.
    pub fn nick(&self, colorize: bool) -> Result<String, EntryError> {
        match self {
            DirectoryEntry::Human(entry) => entry.display_name(colorize),
            DirectoryEntry::Bot(entry) => entry.nick(colorize),
        }
    }
}
