//! Directory client port - abstracts the remote directory service
//!
//! Transport, authentication and timeout policy live behind this trait.

use async_trait::async_trait;

use crate::ids::{BotId, UserId};
use crate::profile::{BotInfoResponse, UserInfoResponse};

use super::errors::FetchError;

#[async_trait]
pub trait DirectoryClientPort: Send + Sync {
    /// Fetch the profile record of a human account.
    async fn fetch_user_info(&self, id: &UserId) -> Result<UserInfoResponse, FetchError>;

    /// Fetch the profile record of a bot integration.
    async fn fetch_bot_info(&self, id: &BotId) -> Result<BotInfoResponse, FetchError>;
}
