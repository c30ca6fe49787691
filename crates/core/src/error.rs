//! Error types for board operations and progress storage.

/// Failures raised by [`crate::Board`] operations
///
/// Every variant is raised before the board is touched, so a failed call
/// leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Prospective dimensions fall outside the allowed range.
    #[error("Board size must be between 3×3 and 12×12.")]
    BoardSize { width: usize, height: usize },

    #[error("Block {row}/{col} doesn't fit in the matrix.")]
    OutOfBounds { row: i32, col: i32 },

    #[error("\"times\" argument must be >= 0, got {0}.")]
    NegativeTimes(i32),

    /// Level matrix shape disagrees with the board.
    #[error("Wrong matrix dimensions.")]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        /// Offending row, or `None` when the row count itself is wrong.
        row: Option<usize>,
        found: usize,
    },

    #[error("Tile value {value} at {row}/{col} is not in 0..=15.")]
    InvalidTile { row: usize, col: usize, value: u8 },
}

impl BoardError {
    /// Whether the message is meant to be shown to the player as-is
    pub fn is_friendly(&self) -> bool {
        matches!(self, BoardError::BoardSize { .. })
    }
}

/// Failures while reading or writing the progress store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("progress store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("progress store is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures while loading a level pack
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("level pack I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("level pack is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("level {0} has no rows")]
    Empty(usize),

    #[error("level {index}: {source}")]
    Board {
        index: usize,
        #[source]
        source: BoardError,
    },
}
