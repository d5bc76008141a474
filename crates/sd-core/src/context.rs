//! Read-only view of the owning workspace

use crate::config::DirectoryConfig;
use crate::ids::{TeamId, UserId};

/// Identity and configuration of the workspace that owns a set of entries.
///
/// Entries keep an `Arc<WorkspaceContext>` as their back-reference to the
/// workspace. The context holds no entries itself, so the handle never forms
/// a cycle; the workspace's entry table is the sole owner of its entries and
/// outlives them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceContext {
    pub id: TeamId,
    pub my_user_id: UserId,
    pub config: DirectoryConfig,
}

impl WorkspaceContext {
    pub fn new(id: TeamId, my_user_id: UserId, config: DirectoryConfig) -> Self {
        Self {
            id,
            my_user_id,
            config,
        }
    }

    /// Whether `user_id` is the account this session is logged in as.
    pub fn is_self(&self, user_id: &UserId) -> bool {
        &self.my_user_id == user_id
    }

    /// Whether `team` is a different organization than this workspace.
    pub fn is_external_team(&self, team: &TeamId) -> bool {
        &self.id != team
    }
}
