//! Name-formatting configuration shared by every entry of a workspace

use serde::{Deserialize, Serialize};

pub const DEFAULT_EXTERNAL_USER_SUFFIX: &str = "*";
pub const DEFAULT_BOT_USER_SUFFIX: &str = " :]";

/// Read-only formatting options consulted when deriving nicks.
///
/// Passed explicitly into the workspace context; entries never reach for
/// ambient configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Prefer the real name over the display name when both are set.
    pub use_real_names: bool,

    /// Appended to nicks of users whose home team is not this workspace.
    pub external_user_suffix: String,

    /// Appended to every bot nick.
    pub bot_user_suffix: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            use_real_names: false,
            external_user_suffix: DEFAULT_EXTERNAL_USER_SUFFIX.to_string(),
            bot_user_suffix: DEFAULT_BOT_USER_SUFFIX.to_string(),
        }
    }
}
