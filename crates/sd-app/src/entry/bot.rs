use std::sync::Arc;

use sd_core::display_name::format_bot_nick;
use sd_core::{
    BotId, BotInfo, DirectoryClientPort, EntryKind, FetchError, InitState, NickColorPort,
    WorkspaceContext,
};
use tracing::{debug, debug_span, info, warn, Instrument};

use super::error::EntryError;
use crate::init_task::InitializationTask;

/// A bot integration of a workspace.
pub struct BotEntry {
    id: BotId,
    workspace: Arc<WorkspaceContext>,
    colors: Arc<dyn NickColorPort>,
    info: InitializationTask<BotInfo>,
}

impl BotEntry {
    /// Create the entry, fetching its profile unless `info` is supplied.
    ///
    /// Without `info` the fetch is spawned immediately, so this must run
    /// inside a Tokio runtime.
    pub fn new(
        workspace: Arc<WorkspaceContext>,
        client: Arc<dyn DirectoryClientPort>,
        colors: Arc<dyn NickColorPort>,
        id: BotId,
        info: Option<BotInfo>,
    ) -> Self {
        let info = match info {
            Some(info) => InitializationTask::ready(info),
            None => InitializationTask::spawn(fetch_bot(client, id.clone())),
        };

        Self {
            id,
            workspace,
            colors,
            info,
        }
    }

    pub fn id(&self) -> &BotId {
        &self.id
    }

    pub fn kind(&self) -> EntryKind {
        EntryKind::Bot
    }

    pub fn state(&self) -> InitState {
        self.info.state()
    }

    pub fn profile(&self) -> Option<Arc<BotInfo>> {
        self.info.get()
    }

    pub async fn ensure_initialized(&self) -> Result<(), FetchError> {
        self.info.wait().await.map(|_| ())
    }

    pub fn nick(&self, colorize: bool) -> Result<String, EntryError> {
        let info = self.info.get().ok_or_else(|| EntryError::NotInitialized {
            id: self.id.to_string(),
        })?;

        Ok(format_bot_nick(
            &info.name,
            colorize,
            &self.workspace,
            self.colors.as_ref(),
        ))
    }
}

async fn fetch_bot(client: Arc<dyn DirectoryClientPort>, id: BotId) -> Result<BotInfo, FetchError> {
    let span = debug_span!("directory.fetch_bot_info", bot_id = %id);

    async move {
        debug!("Fetching bot info");

        match client.fetch_bot_info(&id).await {
            Ok(response) => {
                info!(name = %response.bot.name, "Bot info fetched");
                Ok(response.bot)
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch bot info");
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}
