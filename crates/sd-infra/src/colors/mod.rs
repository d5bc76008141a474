pub(crate) mod palette;

pub use palette::PaletteNickColors;
