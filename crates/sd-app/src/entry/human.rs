use std::sync::Arc;

use sd_core::display_name::format_user_nick;
use sd_core::{
    DirectoryClientPort, EntryKind, FetchError, InitState, NickColorPort, UserId, UserInfo,
    WorkspaceContext,
};
use tracing::{debug, debug_span, info, warn, Instrument};

use super::error::EntryError;
use crate::init_task::InitializationTask;

/// A human account of a workspace.
pub struct HumanEntry {
    id: UserId,
    workspace: Arc<WorkspaceContext>,
    colors: Arc<dyn NickColorPort>,
    info: InitializationTask<UserInfo>,
}

impl HumanEntry {
    /// Create the entry, fetching its profile unless `info` is supplied.
    ///
    /// Without `info` the fetch is spawned immediately, so this must run
    /// inside a Tokio runtime.
    pub fn new(
        workspace: Arc<WorkspaceContext>,
        client: Arc<dyn DirectoryClientPort>,
        colors: Arc<dyn NickColorPort>,
        id: UserId,
        info: Option<UserInfo>,
    ) -> Self {
        let info = match info {
            Some(info) => InitializationTask::ready(info),
            None => InitializationTask::spawn(fetch_user(client, id.clone())),
        };

        Self {
            id,
            workspace,
            colors,
            info,
        }
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn kind(&self) -> EntryKind {
        EntryKind::Human
    }

    pub fn state(&self) -> InitState {
        self.info.state()
    }

    pub fn profile(&self) -> Option<Arc<UserInfo>> {
        self.info.get()
    }

    /// Wait until the profile is available.
    pub async fn ensure_initialized(&self) -> Result<(), FetchError> {
        self.info.wait().await.map(|_| ())
    }

    /// Whether this entry is the account the session is logged in as.
    pub fn is_self(&self) -> bool {
        self.workspace.is_self(&self.id)
    }

    /// Whether the account's home team is not this workspace.
    pub fn is_external(&self) -> Result<bool, EntryError> {
        let info = self.ready_profile()?;
        Ok(self.workspace.is_external_team(info.team()))
    }

    pub fn display_name(&self, colorize: bool) -> Result<String, EntryError> {
        let info = self.ready_profile()?;
        Ok(format_user_nick(
            &self.id,
            &info,
            &self.workspace,
            self.colors.as_ref(),
            colorize,
        ))
    }

    fn ready_profile(&self) -> Result<Arc<UserInfo>, EntryError> {
        self.info.get().ok_or_else(|| EntryError::NotInitialized {
            id: self.id.to_string(),
        })
    }
}

async fn fetch_user(
    client: Arc<dyn DirectoryClientPort>,
    id: UserId,
) -> Result<UserInfo, FetchError> {
    let span = debug_span!("directory.fetch_user_info", user_id = %id);

    async move {
        debug!("Fetching user info");

        match client.fetch_user_info(&id).await {
            Ok(response) => {
                info!(name = %response.user.name, "User info fetched");
                Ok(response.user)
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch user info");
                Err(err)
            }
        }
    }
    .instrument(span)
    .await
}
