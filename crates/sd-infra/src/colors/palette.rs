//! Terminal nick colors picked from a configurable palette

use std::hash::Hasher;

use sd_core::{ColorToken, NickColorPort};
use twox_hash::XxHash64;

pub const DEFAULT_PALETTE: &[&str] = &[
    "cyan",
    "magenta",
    "green",
    "brown",
    "lightblue",
    "default",
    "lightcyan",
    "lightmagenta",
    "lightgreen",
    "blue",
];

pub const DEFAULT_SELF_NICK_COLOR: &str = "white";

const FALLBACK_COLOR: &str = "default";

/// Hashes nicks onto a palette and renders colors as ANSI escapes.
///
/// With `ansi` disabled, `colorize` returns the text unchanged so output
/// stays plain when stdout is not a terminal.
#[derive(Debug, Clone)]
pub struct PaletteNickColors {
    palette: Vec<ColorToken>,
    self_color: ColorToken,
    ansi: bool,
}

impl PaletteNickColors {
    pub fn new(palette: Vec<ColorToken>, self_color: ColorToken, ansi: bool) -> Self {
        Self {
            palette,
            self_color,
            ansi,
        }
    }

    pub fn from_names<S: AsRef<str>>(palette: &[S], self_color: &str, ansi: bool) -> Self {
        Self::new(
            palette.iter().map(|name| ColorToken::new(name.as_ref())).collect(),
            ColorToken::new(self_color),
            ansi,
        )
    }

    fn hash(name: &str) -> u64 {
        let mut hasher = XxHash64::with_seed(0);
        hasher.write(name.as_bytes());
        hasher.finish()
    }
}

impl Default for PaletteNickColors {
    fn default() -> Self {
        Self::from_names(DEFAULT_PALETTE, DEFAULT_SELF_NICK_COLOR, true)
    }
}

impl NickColorPort for PaletteNickColors {
    fn color_for_name(&self, name: &str) -> ColorToken {
        if self.palette.is_empty() {
            return ColorToken::from(FALLBACK_COLOR);
        }

        let index = (Self::hash(name) % self.palette.len() as u64) as usize;
        self.palette[index].clone()
    }

    fn self_nick_color(&self) -> ColorToken {
        self.self_color.clone()
    }

    fn colorize(&self, color: &ColorToken, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }

        format!("\x1b[{}m{}\x1b[0m", sgr_code(color.as_str()), text)
    }
}

/// SGR foreground code for a color name. Unknown names use the default color.
fn sgr_code(name: &str) -> u8 {
    match name {
        "black" => 30,
        "red" => 31,
        "green" => 32,
        "brown" => 33,
        "blue" => 34,
        "magenta" => 35,
        "cyan" => 36,
        "gray" => 37,
        "darkgray" => 90,
        "lightred" => 91,
        "lightgreen" => 92,
        "yellow" => 93,
        "lightblue" => 94,
        "lightmagenta" => 95,
        "lightcyan" => 96,
        "white" => 97,
        _ => 39,
    }
}
