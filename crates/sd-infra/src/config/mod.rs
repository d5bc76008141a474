mod app_config;
mod loader;

pub use app_config::{ApiConfig, AppConfig, ColorSection, LookSection, WorkspaceSection};
pub use loader::{default_config_path, load_config};
