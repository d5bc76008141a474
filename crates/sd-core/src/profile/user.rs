use serde::{Deserialize, Serialize};

use crate::ids::{TeamId, UserId};

use super::empty_as_none;

/// Profile record of a human account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: UserId,

    /// Canonical account name (`name` on the wire). Always present.
    pub name: String,

    #[serde(default, deserialize_with = "empty_as_none")]
    pub real_name: Option<String>,

    pub profile: UserProfile,
}

/// The nested `profile` object of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub display_name: Option<String>,

    /// Home team of the account; differs from the workspace id for
    /// users shared in from another organization.
    pub team: TeamId,
}

/// `users.info` response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfoResponse {
    pub user: UserInfo,
}

impl UserInfo {
    pub fn display_name(&self) -> Option<&str> {
        self.profile.display_name.as_deref()
    }

    pub fn real_name(&self) -> Option<&str> {
        self.real_name.as_deref()
    }

    pub fn team(&self) -> &TeamId {
        &self.profile.team
    }
}
