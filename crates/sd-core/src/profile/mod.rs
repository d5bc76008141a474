//! Profile records fetched from the directory service.
//!
//! Records mirror the Slack Web API wire format so that adapters can decode
//! responses straight into them. Optional text fields treat an empty string
//! the same as a missing field.

mod bot;
mod user;

pub use bot::{BotInfo, BotInfoResponse};
pub use user::{UserInfo, UserInfoResponse, UserProfile};

use serde::{Deserialize, Deserializer};

/// Decode an optional string, mapping `""` to `None`.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
