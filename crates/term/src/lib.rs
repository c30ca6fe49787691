//! Terminal rendering for the pipe puzzle.
//!
//! Sessions hand out a `BoardSnapshot`; [`BoardView`] lays it out into a
//! [`FrameBuffer`] and [`TerminalRenderer`] flushes that to the terminal,
//! writing only the cells that changed since the last frame.
//!
//! Everything except the renderer is pure and unit-testable.

pub mod board_view;
pub mod fb;
pub mod renderer;
pub mod theme;

pub use loopy_core as core;
pub use loopy_types as types;

pub use board_view::{AnchorY, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use theme::{scheme_for_level, ColorScheme, SCHEMES};
