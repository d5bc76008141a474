//! On-disk configuration model

use serde::{Deserialize, Serialize};

use sd_core::config::{DEFAULT_BOT_USER_SUFFIX, DEFAULT_EXTERNAL_USER_SUFFIX};
use sd_core::{DirectoryConfig, TeamId, UserId};

use crate::colors::palette::{DEFAULT_PALETTE, DEFAULT_SELF_NICK_COLOR};
use crate::colors::PaletteNickColors;

pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration as read from `config.toml`.
///
/// Every section and field is optional in the file; missing values take
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub workspace: WorkspaceSection,
    pub look: LookSection,
    pub color: ColorSection,
    pub api: ApiConfig,
}

/// Identity of the workspace session.
///
/// Ids left unset are discovered from the token at startup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceSection {
    pub id: Option<TeamId>,
    pub my_user_id: Option<UserId>,
    pub use_real_names: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookSection {
    pub external_user_suffix: String,
    pub bot_user_suffix: String,
}

impl Default for LookSection {
    fn default() -> Self {
        Self {
            external_user_suffix: DEFAULT_EXTERNAL_USER_SUFFIX.to_string(),
            bot_user_suffix: DEFAULT_BOT_USER_SUFFIX.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSection {
    pub self_nick: String,
    pub palette: Vec<String>,
}

impl Default for ColorSection {
    fn default() -> Self {
        Self {
            self_nick: DEFAULT_SELF_NICK_COLOR.to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Directory service connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Formatting options handed to the workspace context.
    pub fn directory_config(&self) -> DirectoryConfig {
        DirectoryConfig {
            use_real_names: self.workspace.use_real_names,
            external_user_suffix: self.look.external_user_suffix.clone(),
            bot_user_suffix: self.look.bot_user_suffix.clone(),
        }
    }

    pub fn nick_colors(&self, ansi: bool) -> PaletteNickColors {
        PaletteNickColors::from_names(self.color.palette.as_slice(), &self.color.self_nick, ansi)
    }
}
