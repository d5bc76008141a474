//! Dependency wiring: adapters in, workspace directory out

use std::sync::Arc;

use anyhow::Context;
use sd_app::WorkspaceDirectory;
use sd_core::WorkspaceContext;
use sd_infra::slack_api::AuthIdentity;
use sd_infra::{AppConfig, SlackDirectoryClient};
use tracing::info;

use super::config::require_token;

/// Build the workspace context, filling unset ids from `identity`.
pub fn workspace_context(
    config: &AppConfig,
    identity: Option<AuthIdentity>,
) -> anyhow::Result<WorkspaceContext> {
    let team_id = config
        .workspace
        .id
        .clone()
        .or_else(|| identity.as_ref().map(|i| i.team_id.clone()))
        .context("Workspace id is unknown; set [workspace].id")?;
    let my_user_id = config
        .workspace
        .my_user_id
        .clone()
        .or_else(|| identity.as_ref().map(|i| i.user_id.clone()))
        .context("Own user id is unknown; set [workspace].my_user_id")?;

    Ok(WorkspaceContext::new(
        team_id,
        my_user_id,
        config.directory_config(),
    ))
}

/// Wire the Slack client and palette colors into a workspace directory.
///
/// Calls `auth.test` only when the config leaves a workspace id unset.
pub async fn build_directory(
    config: &AppConfig,
    ansi: bool,
) -> anyhow::Result<Arc<WorkspaceDirectory>> {
    let token = require_token(config)?;
    let client = Arc::new(
        SlackDirectoryClient::new(&config.api, token).context("Failed to create directory client")?,
    );

    let identity = if config.workspace.id.is_some() && config.workspace.my_user_id.is_some() {
        None
    } else {
        let identity = client
            .auth_test()
            .await
            .context("Failed to identify workspace from token")?;
        info!(team_id = %identity.team_id, user_id = %identity.user_id, "Workspace identified");
        Some(identity)
    };

    let context = Arc::new(workspace_context(config, identity)?);
    let colors = Arc::new(config.nick_colors(ansi));

    Ok(Arc::new(WorkspaceDirectory::new(context, client, colors)))
}
