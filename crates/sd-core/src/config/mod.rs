//! Configuration domain model

mod directory_config;

pub use directory_config::{DirectoryConfig, DEFAULT_BOT_USER_SUFFIX, DEFAULT_EXTERNAL_USER_SUFFIX};
