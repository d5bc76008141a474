//! Nick color port - the host environment's color table

use crate::color::ColorToken;

/// Color lookups provided by the hosting UI.
///
/// Implementations must be pure functions of their configuration: the same
/// name always yields the same token.
pub trait NickColorPort: Send + Sync {
    /// Hash-based color for a nick.
    fn color_for_name(&self, name: &str) -> ColorToken;

    /// Fixed color used for the local user's own nick.
    fn self_nick_color(&self) -> ColorToken;

    /// Render `text` wrapped in `color`, followed by a reset.
    fn colorize(&self, color: &ColorToken, text: &str) -> String;
}

#[cfg(test)]
mockall::mock! {
    pub NickColors {}

    impl NickColorPort for NickColors {
        fn color_for_name(&self, name: &str) -> ColorToken;
        fn self_nick_color(&self) -> ColorToken;
        fn colorize(&self, color: &ColorToken, text: &str) -> String;
    }
}
