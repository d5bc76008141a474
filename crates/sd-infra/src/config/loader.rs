//! # Configuration Loader
//!
//! Pure data loading: read the TOML file and map it onto [`AppConfig`].
//! No validation and no environment overrides happen here.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use super::AppConfig;

/// `$XDG_CONFIG_HOME/slackdir/config.toml` (or the platform equivalent).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slackdir").join("config.toml"))
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML or does not match the config structure
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    debug!(path = %config_path.display(), "Configuration loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    /// Test that valid TOML is parsed correctly
    #[test]
    fn test_load_config_reads_valid_toml() {
        let file = write_config(
            r#"
            [workspace]
            id = "T1"
            my_user_id = "UME"
            use_real_names = true

            [look]
            external_user_suffix = "[ext]"
            bot_user_suffix = " [BOT]"

            [color]
            self_nick = "lightred"
            palette = ["cyan", "green"]

            [api]
            base_url = "http://localhost:9000/api"
            token = "xoxp-abc"
            timeout_secs = 5
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.workspace.id.as_ref().map(|id| id.as_str()), Some("T1"));
        assert_eq!(
            config.workspace.my_user_id.as_ref().map(|id| id.as_str()),
            Some("UME")
        );
        assert!(config.workspace.use_real_names);
        assert_eq!(config.look.external_user_suffix, "[ext]");
        assert_eq!(config.color.palette, vec!["cyan", "green"]);
        assert_eq!(config.api.token.as_deref(), Some("xoxp-abc"));
        assert_eq!(config.api.timeout_secs, 5);

        let directory = config.directory_config();
        assert!(directory.use_real_names);
        assert_eq!(directory.bot_user_suffix, " [BOT]");
    }

    /// Test that missing values fall back to defaults
    #[test]
    fn test_load_config_defaults_missing_values() {
        let file = write_config("[workspace]\nid = \"T1\"\n");

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.workspace.my_user_id, None);
        assert!(!config.workspace.use_real_names);
        assert_eq!(config.look, crate::config::LookSection::default());
        assert_eq!(config.api.base_url, "https://slack.com/api");
        assert_eq!(config.api.token, None);
    }

    #[test]
    fn test_load_config_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_invalid_toml_is_error() {
        let file = write_config("[workspace\nid = ");
        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
