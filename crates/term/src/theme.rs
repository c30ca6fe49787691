//! Per-level colour schemes.

use crate::fb::Rgb;

/// Background and pipe colour for one level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl ColorScheme {
    pub const fn new(background: Rgb, foreground: Rgb) -> Self {
        Self {
            background,
            foreground,
        }
    }
}

/// Palette cycled through as levels advance
pub const SCHEMES: [ColorScheme; 6] = [
    ColorScheme::new(Rgb::new(0xE0, 0xE1, 0xDD), Rgb::new(0x41, 0x5A, 0x77)),
    ColorScheme::new(Rgb::new(0xF7, 0xF5, 0xFB), Rgb::new(0x08, 0x48, 0x87)),
    ColorScheme::new(Rgb::new(0xE5, 0xF7, 0x7D), Rgb::new(0x82, 0x30, 0x38)),
    ColorScheme::new(Rgb::new(0xF2, 0xF3, 0xAE), Rgb::new(0x02, 0x01, 0x22)),
    ColorScheme::new(Rgb::new(0xF4, 0xFF, 0xF8), Rgb::new(0x1C, 0x37, 0x38)),
    ColorScheme::new(Rgb::new(0xF4, 0xFA, 0xFF), Rgb::new(0x87, 0x89, 0xC0)),
];

/// Scheme for a zero-based level index
pub fn scheme_for_level(level: usize) -> ColorScheme {
    SCHEMES[level % SCHEMES.len()]
}
