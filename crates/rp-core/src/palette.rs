//! The classic 28-swatch preset palette.

use crate::color::Color;

pub const PALETTE_SIZE: usize = 28;

const PRESETS: [Color; PALETTE_SIZE] = [
    // Row 1: darks
    Color::BLACK,
    Color::rgb(128, 128, 128),
    Color::rgb(128, 0, 0),
    Color::rgb(128, 64, 0),
    Color::rgb(128, 128, 0),
    Color::rgb(0, 128, 0),
    Color::rgb(0, 128, 128),
    Color::rgb(0, 0, 128),
    Color::rgb(64, 0, 128),
    Color::rgb(128, 0, 128),
    // Row 2: brights
    Color::WHITE,
    Color::rgb(191, 191, 191),
    Color::RED,
    Color::rgb(255, 128, 0),
    Color::YELLOW,
    Color::GREEN,
    Color::CYAN,
    Color::BLUE,
    Color::rgb(128, 0, 255),
    Color::MAGENTA,
    // Pastels and earth tones
    Color::rgb(255, 191, 204),
    Color::rgb(153, 102, 51),
    Color::rgb(255, 229, 153),
    Color::rgb(204, 255, 204),
    Color::rgb(153, 255, 255),
    Color::rgb(204, 204, 255),
    Color::rgb(255, 204, 255),
    Color::rgb(255, 153, 153),
];

/// Immutable ordered list of preset colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: &'static [Color; PALETTE_SIZE],
}

impl Default for Palette {
    fn default() -> Self {
        Self::classic()
    }
}

impl Palette {
    pub const fn classic() -> Self {
        Self { colors: &PRESETS }
    }

    /// Swatch at `index`, or `None` outside `[0, 28)`. Accepts signed indexes
    /// since hosts commonly use `-1` for "no selection".
    pub fn get(&self, index: i64) -> Option<Color> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.colors.get(i).copied())
    }

    pub fn colors(&self) -> &[Color] {
        self.colors
    }

    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
