//! Glyph module - visual projections of tile values
//!
//! Two fixed tables: a box-drawing character per tile for text dumps, and a
//! `(shape, counter-clockwise quarter turns)` pair per tile for vector
//! renderers. Shapes are drawn in a 64x64 cell in their base orientation.

use crate::types::{Tile, TILE_STATES};

/// Box-drawing glyph for every tile value
pub const UNICODE_MAP: [char; TILE_STATES] = [
    ' ', '╻', '╺', '┏', '╹', '┃', '┗', '┣', '╸', '┓', '━', '┳', '┛', '┫', '┻', '╋',
];

/// Plain ASCII fallback for terminals without box-drawing fonts
pub const ASCII_MAP: [char; TILE_STATES] = [
    ' ', 'v', '>', '+', '^', '|', '+', '+', '<', '+', '-', '+', '+', '+', '+', '+',
];

pub fn glyph(tile: Tile) -> char {
    UNICODE_MAP[tile.index()]
}

/// Base pipe shapes; every tile is one of these turned in quarter steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShape {
    Empty,
    /// Dead end: a stub with a small bulb at the centre
    Singlet,
    /// Elbow joining two adjacent edges
    Curve,
    /// Straight line joining opposite edges
    Line,
    /// Three-way junction
    Tee,
    /// Four-way junction
    Cross,
}

impl TileShape {
    /// SVG path data in a 64x64 cell, base orientation
    pub fn svg_path(self) -> &'static str {
        match self {
            TileShape::Empty => "",
            TileShape::Singlet => {
                "M 64 32 Q 64 32 40 32 Q 40 40 32 40 Q 24 40 24 32 Q 24 24 32 24 Q 40 24 40 32"
            }
            TileShape::Curve => "M 64 32 Q 32 32 32 64",
            TileShape::Line => "M 32 0 L 32 64",
            TileShape::Tee => "M 32 0 Q 32 32 64 32 Q 32 32 32 64",
            TileShape::Cross => "M 32 0 Q 32 32 64 32 Q 32 32 32 64 Q 32 32 0 32 Q 32 32 32 0",
        }
    }
}

/// Shape and counter-clockwise quarter turns for every tile value
pub const PATH_MAP: [(TileShape, u8); TILE_STATES] = [
    (TileShape::Empty, 0),
    (TileShape::Singlet, 3),
    (TileShape::Singlet, 0),
    (TileShape::Curve, 0),
    (TileShape::Singlet, 1),
    (TileShape::Line, 0),
    (TileShape::Curve, 1),
    (TileShape::Tee, 0),
    (TileShape::Singlet, 2),
    (TileShape::Curve, 3),
    (TileShape::Line, 1),
    (TileShape::Tee, 3),
    (TileShape::Curve, 2),
    (TileShape::Tee, 2),
    (TileShape::Tee, 1),
    (TileShape::Cross, 0),
];

pub fn path(tile: Tile) -> (TileShape, u8) {
    PATH_MAP[tile.index()]
}

/// SVG transform that turns the base shape into this tile's orientation
///
/// ```
/// use loopy_core::glyph::svg_transform;
/// use loopy_core::types::Tile;
///
/// assert_eq!(svg_transform(Tile::new(6).unwrap()), "rotate(-90 32 32)");
/// ```
pub fn svg_transform(tile: Tile) -> String {
    let (_, turns) = path(tile);
    format!("rotate({} 32 32)", -90 * i32::from(turns))
}
