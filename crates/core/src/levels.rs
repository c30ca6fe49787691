//! Levels module - solved level layouts
//!
//! A level is the solved board as a row-major matrix of tile values. Levels
//! are shipped built in and can also be read from a JSON file holding an
//! array of matrices.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::LevelError;

/// One solved layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level {
    rows: Vec<Vec<u8>>,
}

impl Level {
    pub fn new(rows: Vec<Vec<u8>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Build a board of this level's size holding its tiles
    pub fn to_board(&self) -> Result<Board, crate::BoardError> {
        Board::from_matrix(&self.rows)
    }
}

/// Ordered list of levels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LevelPack {
    levels: Vec<Level>,
}

impl LevelPack {
    pub fn new(levels: Vec<Level>) -> Self {
        Self { levels }
    }

    /// The levels that ship with the game
    pub fn builtin() -> Self {
        let levels = BUILTIN
            .iter()
            .map(|rows| Level::new(rows.iter().map(|r| r.to_vec()).collect()))
            .collect();
        Self { levels }
    }

    /// Parse a JSON array of matrices
    ///
    /// Every level must be non-empty and must build a valid board.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let pack: LevelPack = serde_json::from_str(json)?;
        pack.validate()?;
        tracing::debug!(levels = pack.len(), "parsed level pack");
        Ok(pack)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), LevelError> {
        for (index, level) in self.levels.iter().enumerate() {
            if level.height() == 0 {
                return Err(LevelError::Empty(index));
            }
            level
                .to_board()
                .map_err(|source| LevelError::Board { index, source })?;
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level> {
        self.levels.iter()
    }
}

impl Default for LevelPack {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: &[&[&[u8]]] = &[
    &[
        &[3, 10, 10, 10, 9],
        &[7, 10, 10, 9, 5],
        &[7, 10, 9, 5, 5],
        &[7, 9, 5, 5, 5],
        &[6, 14, 14, 14, 12],
    ],
    &[
        &[3, 11, 9, 3, 9],
        &[7, 12, 6, 14, 13],
        &[6, 9, 3, 11, 13],
        &[3, 13, 7, 12, 5],
        &[6, 14, 14, 10, 12],
    ],
    &[
        &[0, 3, 9, 3, 8],
        &[3, 13, 5, 6, 9],
        &[7, 12, 5, 3, 13],
        &[6, 9, 5, 7, 12],
        &[2, 12, 6, 12, 0],
    ],
    &[
        &[3, 10, 9, 3, 9],
        &[6, 11, 13, 5, 4],
        &[0, 7, 15, 13, 0],
        &[1, 5, 7, 14, 9],
        &[6, 12, 6, 10, 12],
    ],
    &[
        &[3, 10, 10, 8, 3, 9],
        &[7, 10, 11, 10, 13, 5],
        &[7, 8, 7, 9, 4, 5],
        &[5, 1, 6, 13, 2, 13],
        &[5, 7, 10, 14, 10, 13],
        &[6, 12, 2, 10, 10, 12],
    ],
    &[
        &[1, 0, 3, 11, 10, 8],
        &[5, 0, 7, 13, 0, 0],
        &[7, 11, 15, 13, 3, 9],
        &[6, 12, 7, 15, 14, 13],
        &[0, 0, 7, 13, 0, 5],
        &[2, 10, 14, 12, 0, 4],
    ],
    &[
        &[3, 9, 3, 9, 3, 9],
        &[6, 13, 5, 5, 7, 12],
        &[2, 15, 14, 14, 13, 0],
        &[0, 7, 11, 11, 15, 8],
        &[3, 13, 5, 5, 7, 9],
        &[6, 12, 6, 12, 6, 12],
    ],
    &[
        &[3, 10, 10, 10, 11, 10, 9],
        &[4, 3, 11, 10, 14, 9, 5],
        &[1, 5, 7, 9, 1, 5, 5],
        &[5, 5, 7, 15, 13, 5, 5],
        &[5, 5, 4, 6, 13, 5, 4],
        &[5, 6, 11, 10, 14, 12, 1],
        &[6, 10, 14, 10, 10, 10, 12],
    ],
    &[
        &[3, 11, 8, 2, 10, 11, 9],
        &[7, 15, 10, 10, 9, 7, 13],
        &[4, 7, 11, 9, 5, 5, 4],
        &[0, 5, 7, 15, 13, 5, 0],
        &[1, 5, 5, 6, 14, 13, 1],
        &[7, 13, 6, 10, 10, 15, 13],
        &[6, 14, 10, 8, 2, 14, 12],
    ],
    &[
        &[3, 10, 11, 11, 11, 10, 9],
        &[7, 10, 13, 5, 7, 8, 5],
        &[7, 10, 15, 14, 15, 11, 13],
        &[7, 10, 13, 0, 5, 5, 5],
        &[7, 10, 15, 11, 15, 14, 13],
        &[5, 2, 13, 5, 7, 10, 13],
        &[6, 10, 14, 14, 14, 10, 12],
    ],
];
