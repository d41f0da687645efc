//! Widget color definitions

use embedded_graphics::pixelcolor::Rgb888;

use crate::types::Level;

/// Canvas background, also used to mask cells dated after today
pub const BACKGROUND: Rgb888 = Rgb888::new(0x1A, 0x1A, 0x2E);

/// Day and month label text
pub const LABEL: Rgb888 = Rgb888::new(0x88, 0x88, 0x88);

/// Cell colors indexed by level
pub const PALETTE: [Rgb888; Level::COUNT] = [
    Rgb888::new(0x2A, 0x2A, 0x2A), // 0: no data (dark gray)
    Rgb888::new(0xB7, 0x1C, 0x1C), // 1: none completed (dark red)
    Rgb888::new(0xE5, 0x39, 0x35), // 2: under half (red)
    Rgb888::new(0xFD, 0xD8, 0x35), // 3: half or more (yellow)
    Rgb888::new(0x2E, 0x7D, 0x32), // 4: all completed (dark green)
    Rgb888::new(0x81, 0xC7, 0x84), // 5: all + extra (light green)
];

/// Color for a level
pub fn level_color(level: Level) -> Rgb888 {
    PALETTE[level.index()]
}

/// Color for a cell, masking days after today
pub fn cell_color(level: Level, is_future: bool) -> Rgb888 {
    if is_future {
        BACKGROUND
    } else {
        level_color(level)
    }
}
