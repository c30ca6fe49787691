//! Core puzzle logic - pure, deterministic, and testable
//!
//! This crate holds the pipe-rotation puzzle: the board model and the small
//! sessions built on it. It has no dependencies on terminals or input
//! devices, so it runs the same headless, in tests, or behind any renderer.
//!
//! # Module Structure
//!
//! - [`board`]: the tile grid, rotation, completeness check, resizing with border repair, edge toggling
//! - [`rotation`]: quarter-turn lookup tables over the 16 tile states
//! - [`glyph`]: glyph and vector-path projections of tiles
//! - [`rng`]: seeded turn source for scrambling
//! - [`levels`]: built-in and JSON level packs
//! - [`progress`]: persisted current-level index
//! - [`game`]: play session (scramble, rotate, solve, advance)
//! - [`editor`]: authoring session (toggle edges, resize, dump)
//! - [`snapshot`]: read-only view handed to renderers
//!
//! # Rules
//!
//! Each tile is a 4-bit mask of the edges its pipe reaches (South=1, East=2,
//! North=4, West=8). A board is solved when every pair of adjacent tiles
//! agrees on their shared edge. Scrambling only re-orients tiles in place,
//! so every scrambled level can be solved again.
//!
//! # Example
//!
//! ```
//! use loopy_core::{Board, SimpleRng};
//! use loopy_core::types::Spin;
//!
//! let mut board = Board::new(5, 5).unwrap();
//! board
//!     .define_level(&[
//!         vec![0, 3, 9, 3, 8],
//!         vec![3, 13, 5, 6, 9],
//!         vec![7, 12, 5, 3, 13],
//!         vec![6, 9, 5, 7, 12],
//!         vec![2, 12, 6, 12, 0],
//!     ])
//!     .unwrap();
//! assert!(board.is_complete());
//!
//! board.scramble_with(|| 1).unwrap();
//! assert!(!board.is_complete());
//!
//! board.rotate(0, 1, Spin::CounterClockwise, 1).unwrap();
//!
//! let mut rng = SimpleRng::new(7);
//! board.scramble(&mut rng);
//! ```

pub mod board;
pub mod editor;
pub mod error;
pub mod game;
pub mod glyph;
pub mod levels;
pub mod progress;
pub mod rng;
pub mod rotation;
pub mod snapshot;

pub use loopy_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use editor::{Editor, EditorEvent};
pub use error::{BoardError, LevelError, StoreError};
pub use game::{Game, GameEvent};
pub use levels::{Level, LevelPack};
pub use progress::{FileStore, KeyValueStore, MemoryStore, Progress, CURRENT_LEVEL_KEY};
pub use rng::SimpleRng;
pub use snapshot::{BoardSnapshot, GameStatus, SessionKind};
