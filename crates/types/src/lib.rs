//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (board logic, terminal rendering, input mapping).
//!
//! # Tile Encoding
//!
//! A tile is a 4-bit mask over the edges of its cell:
//!
//! | Side | Bit |
//! |------|-----|
//! | South | 1 |
//! | East | 2 |
//! | North | 4 |
//! | West | 8 |
//!
//! A set bit means the pipe segment in that cell reaches that edge. All 16
//! combinations are valid (0 = empty, 15 = four-way cross).
//!
//! # Board Dimensions
//!
//! Boards are at least 3x3 and at most 12x12.
//!
//! # Examples
//!
//! ```
//! use loopy_types::{Side, Tile, MAX_WIDTH, MIN_WIDTH};
//!
//! let elbow = Tile::EMPTY.with(Side::South).with(Side::East);
//! assert_eq!(elbow.bits(), 3);
//! assert!(elbow.faces(Side::East));
//! assert!(!elbow.faces(Side::West));
//!
//! assert_eq!(Side::North.opposite(), Side::South);
//! assert_eq!((MIN_WIDTH, MAX_WIDTH), (3, 12));
//! ```

use std::fmt;

/// Narrowest allowed board
pub const MIN_WIDTH: usize = 3;

/// Widest allowed board
pub const MAX_WIDTH: usize = 12;

/// Shortest allowed board
pub const MIN_HEIGHT: usize = 3;

/// Tallest allowed board
pub const MAX_HEIGHT: usize = 12;

/// Width used by `Board::default()`
pub const DEFAULT_WIDTH: usize = 3;

/// Height used by `Board::default()`
pub const DEFAULT_HEIGHT: usize = 3;

/// Number of distinct tile states
pub const TILE_STATES: usize = 16;

/// Mask of the four edge bits
pub const TILE_MASK: u8 = 0b1111;

/// One of the four edges of a cell
///
/// The discriminants are the tile bits, so `side as u8` can be used directly
/// as a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    South = 1,
    East = 2,
    North = 4,
    West = 8,
}

impl Side {
    /// All sides in bit order
    pub const ALL: [Side; 4] = [Side::South, Side::East, Side::North, Side::West];

    /// Bit value of this side
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// The side facing this one across a shared edge
    ///
    /// ```
    /// use loopy_types::Side;
    ///
    /// assert_eq!(Side::East.opposite(), Side::West);
    /// assert_eq!(Side::South.opposite(), Side::North);
    /// ```
    pub const fn opposite(self) -> Self {
        match self {
            Side::South => Side::North,
            Side::East => Side::West,
            Side::North => Side::South,
            Side::West => Side::East,
        }
    }

    /// (row, col) step towards the neighbour on this side
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Side::South => (1, 0),
            Side::East => (0, 1),
            Side::North => (-1, 0),
            Side::West => (0, -1),
        }
    }
}

/// A single cell's edge-occupancy mask, always in `0..=15`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Tile(u8);

impl Tile {
    /// No pipe at all
    pub const EMPTY: Tile = Tile(0);

    /// Four-way cross
    pub const CROSS: Tile = Tile(TILE_MASK);

    /// Build a tile from its raw value
    ///
    /// Returns `None` for values above 15.
    ///
    /// ```
    /// use loopy_types::Tile;
    ///
    /// assert_eq!(Tile::new(9).map(|t| t.bits()), Some(9));
    /// assert_eq!(Tile::new(16), None);
    /// ```
    pub const fn new(bits: u8) -> Option<Self> {
        if bits > TILE_MASK {
            None
        } else {
            Some(Tile(bits))
        }
    }

    /// Build a tile by masking off anything above the low four bits
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Tile(bits & TILE_MASK)
    }

    /// Raw value in `0..=15`
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Table index for this tile
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether the pipe reaches the given edge
    pub const fn faces(self, side: Side) -> bool {
        self.0 & side.bit() != 0
    }

    /// Same tile with the given edge set
    pub const fn with(self, side: Side) -> Self {
        Tile(self.0 | side.bit())
    }

    /// Same tile with the given edge cleared
    pub const fn without(self, side: Side) -> Self {
        Tile(self.0 & !side.bit() & TILE_MASK)
    }

    /// Same tile with the given edge flipped
    pub const fn toggled(self, side: Side) -> Self {
        Tile(self.0 ^ side.bit())
    }

    /// Number of edges the pipe reaches
    pub const fn degree(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        tile.0
    }
}

impl TryFrom<u8> for Tile {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Tile::new(value).ok_or(value)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Clockwise,
    CounterClockwise,
}

/// Gameplay actions
///
/// A click on a tile is `RotateCw`, a right-click `RotateCcw`. The cursor
/// stands in for the pointer in the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the cursor one cell towards the given side
    Move(Side),
    /// Rotate the tile under the cursor clockwise
    RotateCw,
    /// Rotate the tile under the cursor counter-clockwise
    RotateCcw,
    /// Go to the next level once the current one is solved
    Advance,
}

/// Level editor actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Move the cursor one cell towards the given side
    Move(Side),
    /// Flip the edge on the given side of the cursor cell (and its neighbour)
    ToggleEdge(Side),
    /// Add a row or column of empty tiles on the given side
    Grow(Side),
    /// Remove the row or column on the given side
    Shrink(Side),
    /// Produce the numeric dump of the board
    Dump,
}
