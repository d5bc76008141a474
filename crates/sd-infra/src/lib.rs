pub mod colors;
pub mod config;
pub mod slack_api;

pub use colors::PaletteNickColors;
pub use config::{load_config, AppConfig};
pub use slack_api::SlackDirectoryClient;
