//! Tile colors.
//!
//! A tile's color depends only on `log2(value)`: index `log2(v) - 1` into a
//! 16-entry palette, clamped at both ends. 2 and 4 are light tiles with dark
//! text; everything larger uses white text.

use crate::fb::{CellStyle, Rgb};

/// Tile backgrounds from 2 (index 0) up to 65536 (index 15).
pub const TILE_COLORS: [Rgb; 16] = [
    Rgb::new(238, 228, 218), // 2
    Rgb::new(237, 224, 200), // 4
    Rgb::new(242, 177, 121), // 8
    Rgb::new(245, 149, 99),  // 16
    Rgb::new(246, 124, 95),  // 32
    Rgb::new(246, 94, 59),   // 64
    Rgb::new(237, 207, 114), // 128
    Rgb::new(237, 204, 97),  // 256
    Rgb::new(237, 200, 80),  // 512
    Rgb::new(237, 197, 63),  // 1024
    Rgb::new(237, 194, 46),  // 2048
    Rgb::new(255, 100, 100), // 4096
    Rgb::new(255, 50, 50),   // 8192
    Rgb::new(200, 50, 255),  // 16384
    Rgb::new(100, 50, 255),  // 32768
    Rgb::new(50, 100, 255),  // 65536
];

const DARK_TEXT: Rgb = Rgb::new(80, 80, 80);
const LIGHT_TEXT: Rgb = Rgb::new(255, 255, 255);

/// Palette index for a tile value.
///
/// # Examples
///
/// ```
/// use falling_2048_term::palette::palette_index;
///
/// assert_eq!(palette_index(2), 0);
/// assert_eq!(palette_index(2048), 10);
/// assert_eq!(palette_index(65536), 15);
/// assert_eq!(palette_index(1 << 20), 15);
/// ```
pub fn palette_index(value: u32) -> usize {
    let log2 = value.max(1).ilog2() as usize;
    log2.saturating_sub(1).min(TILE_COLORS.len() - 1)
}

pub fn tile_color(value: u32) -> Rgb {
    TILE_COLORS[palette_index(value)]
}

pub fn text_color(value: u32) -> Rgb {
    if value <= 4 {
        DARK_TEXT
    } else {
        LIGHT_TEXT
    }
}

/// Complete style for a tile cell.
pub fn tile_style(value: u32) -> CellStyle {
    CellStyle::new(text_color(value), tile_color(value)).bold()
}
