//! Use case for resolving an identifier to a display-ready nick

use std::sync::Arc;

use sd_core::{EntryKind, FetchError};
use thiserror::Error;
use tracing::{info, info_span, Instrument};

use crate::directory::WorkspaceDirectory;
use crate::entry::EntryError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveNickError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Entry(#[from] EntryError),
}

/// Use case for resolving an identifier to a nick.
///
/// ## Behavior
/// - Gets or creates the entry in the workspace directory
/// - Waits for its profile, joining a fetch that is already in flight
/// - Formats the nick (display name for humans, bot nick for bots)
pub struct ResolveNick {
    directory: Arc<WorkspaceDirectory>,
}

impl ResolveNick {
    pub fn new(directory: Arc<WorkspaceDirectory>) -> Self {
        Self { directory }
    }

    /// Execute the use case.
    ///
    /// # Returns
    /// - `Ok(String)` - The formatted nick
    /// - `Err(ResolveNickError::Fetch)` if the profile fetch failed
    pub async fn execute(
        &self,
        id: &str,
        kind: EntryKind,
        colorize: bool,
    ) -> Result<String, ResolveNickError> {
        let span = info_span!("usecase.resolve_nick.execute", id = %id, kind = ?kind);

        async {
            let entry = self.directory.entry(id, kind);
            entry.ensure_initialized().await?;

            let nick = entry.nick(colorize)?;
            info!("Nick resolved");
            Ok::<_, ResolveNickError>(nick)
        }
        .instrument(span)
        .await
    }
}
