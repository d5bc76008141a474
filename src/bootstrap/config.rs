//! # Configuration bootstrap
//!
//! Locates the config file, loads it, and applies environment overrides.
//! Loading itself stays in `sd_infra::config`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sd_infra::config::{default_config_path, load_config};
use sd_infra::AppConfig;
use tracing::{debug, info};

pub const CONFIG_PATH_ENV: &str = "SLACKDIR_CONFIG";
pub const TOKEN_ENV: &str = "SLACKDIR_TOKEN";

/// Pick the config path: explicit flag, then `SLACKDIR_CONFIG`, then the
/// platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
        .or_else(default_config_path)
}

/// Load the effective configuration.
///
/// An explicitly requested file must exist. A missing default file yields
/// the built-in defaults.
pub fn load_app_config(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    let from_env = std::env::var_os(CONFIG_PATH_ENV).is_some();

    let mut config = match resolve_config_path(explicit) {
        Some(path) if explicit.is_some() || from_env || path.exists() => {
            info!(path = %path.display(), "Loading configuration");
            load_config(&path)?
        }
        _ => {
            debug!("No configuration file found, using defaults");
            AppConfig::default()
        }
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// Environment values win over the file.
pub fn apply_env_overrides(config: &mut AppConfig) {
    if let Ok(token) = std::env::var(TOKEN_ENV) {
        if !token.is_empty() {
            config.api.token = Some(token);
        }
    }
}

/// The API token, or an error explaining where to set it.
pub fn require_token(config: &AppConfig) -> anyhow::Result<String> {
    config
        .api
        .token
        .clone()
        .filter(|token| !token.is_empty())
        .with_context(|| format!("No API token configured; set [api].token or {TOKEN_ENV}"))
}
