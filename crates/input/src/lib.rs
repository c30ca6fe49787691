//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] for play and
//! [`crate::types::EditorAction`] for authoring. Independent of any UI
//! framework; the caller owns the event loop.

pub mod map;

pub use loopy_types as types;

pub use map::{map_editor_key, map_play_key, should_quit};
