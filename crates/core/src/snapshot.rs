//! Read-only view of a session for renderers.

use crate::board::Board;
use crate::types::Tile;

/// Where a play session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    /// Tiles can be rotated
    #[default]
    Playing,
    /// Every shared edge matches; waiting to advance
    Solved,
    /// No levels left
    Finished,
}

/// Which session produced the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionKind {
    #[default]
    Play,
    Editor,
}

/// Cursor position as (row, col)
pub type Cursor = (usize, usize);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardSnapshot {
    pub kind: SessionKind,
    pub width: usize,
    pub height: usize,
    /// Row-major tiles; empty when there is no board
    pub tiles: Vec<Tile>,
    pub cursor: Cursor,
    /// Zero-based level index (play sessions only)
    pub level: usize,
    pub status: GameStatus,
    pub loose_ends: usize,
    /// One-line status text for the player
    pub message: Option<String>,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board, cursor: Cursor) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            tiles: board.tiles().to_vec(),
            cursor,
            loose_ends: board.loose_ends(),
            ..Self::default()
        }
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.tiles.get(row * self.width + col).copied()
    }

    pub fn has_board(&self) -> bool {
        !self.tiles.is_empty()
    }
}
