//! Nick color assignment

use serde::{Deserialize, Serialize};

use crate::ports::NickColorPort;

/// Name of a color in the host's color table (e.g. `"lightcyan"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorToken(String);

impl ColorToken {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColorToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Pick the color for a nick.
///
/// The local user always gets the host's fixed self color; everyone else gets
/// the color the host hashes from `name`.
pub fn nick_color(colors: &dyn NickColorPort, name: &str, is_self: bool) -> ColorToken {
    if is_self {
        return colors.self_nick_color();
    }

    colors.color_for_name(name)
}

/// Wrap `text` in `color` using the host's rendering.
pub fn with_color(colors: &dyn NickColorPort, color: &ColorToken, text: &str) -> String {
    colors.colorize(color, text)
}
