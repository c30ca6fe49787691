//! Editor module - free-form level authoring
//!
//! Edges are toggled symmetrically across shared borders, and rows or
//! columns can be added or removed at any edge. Nothing here checks that the
//! result is solvable.

use crate::board::Board;
use crate::error::BoardError;
use crate::game::step_cursor;
use crate::snapshot::{BoardSnapshot, Cursor, SessionKind};
use crate::types::{EditorAction, Side};

/// Board size the editor opens with
pub const EDITOR_SIZE: usize = 7;

/// What an editor action produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    Ignored,
    CursorMoved,
    Edited,
    Resized { width: usize, height: usize },
    Dumped(String),
}

pub struct Editor {
    board: Board,
    cursor: Cursor,
    message: Option<String>,
}

impl Editor {
    pub fn new() -> Result<Self, BoardError> {
        Ok(Self::with_board(Board::new(EDITOR_SIZE, EDITOR_SIZE)?))
    }

    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            cursor: (0, 0),
            message: None,
        }
    }

    /// Apply an action
    ///
    /// Failures leave the board unchanged and are also kept as the status
    /// message so the view can show them.
    pub fn apply_action(&mut self, action: EditorAction) -> Result<EditorEvent, BoardError> {
        let result = self.apply_inner(action);
        self.message = match &result {
            Ok(EditorEvent::Resized { width, height }) => Some(format!("{width}×{height}")),
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };
        result
    }

    fn apply_inner(&mut self, action: EditorAction) -> Result<EditorEvent, BoardError> {
        match action {
            EditorAction::Move(side) => {
                let next = step_cursor(self.cursor, side, self.board.width(), self.board.height());
                if next == self.cursor {
                    return Ok(EditorEvent::Ignored);
                }
                self.cursor = next;
                Ok(EditorEvent::CursorMoved)
            }
            EditorAction::ToggleEdge(side) => {
                let (row, col) = self.cursor;
                self.board.toggle_bit(row as i32, col as i32, side)?;
                tracing::debug!(dump = %self.board.print_array(), "edited board");
                Ok(EditorEvent::Edited)
            }
            EditorAction::Grow(side) => {
                self.board.grow(side)?;
                if side == Side::North {
                    self.cursor.0 += 1;
                } else if side == Side::West {
                    self.cursor.1 += 1;
                }
                Ok(self.resized())
            }
            EditorAction::Shrink(side) => {
                self.board.shrink(side)?;
                if side == Side::North {
                    self.cursor.0 = self.cursor.0.saturating_sub(1);
                } else if side == Side::West {
                    self.cursor.1 = self.cursor.1.saturating_sub(1);
                }
                self.clamp_cursor();
                Ok(self.resized())
            }
            EditorAction::Dump => {
                let dump = self.board.print_array();
                tracing::info!(dump = %dump, "board dump");
                Ok(EditorEvent::Dumped(dump))
            }
        }
    }

    fn resized(&self) -> EditorEvent {
        tracing::debug!(dump = %self.board.print_array(), "resized board");
        EditorEvent::Resized {
            width: self.board.width(),
            height: self.board.height(),
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor.0 = self.cursor.0.min(self.board.height() - 1);
        self.cursor.1 = self.cursor.1.min(self.board.width() - 1);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = BoardSnapshot::from_board(&self.board, self.cursor);
        snap.kind = SessionKind::Editor;
        snap.message = self.message.clone();
        snap
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn opens_at_seven_by_seven() {
        let editor = Editor::new().unwrap();
        assert_eq!((editor.board().width(), editor.board().height()), (7, 7));
    }

    #[test]
    fn toggle_edge_draws_a_connection() {
        let mut editor = Editor::new().unwrap();
        editor.apply_action(EditorAction::Move(Side::South)).unwrap();
        editor.apply_action(EditorAction::ToggleEdge(Side::East)).unwrap();
        assert_eq!(editor.board().get(1, 0).unwrap().bits(), 2);
        assert_eq!(editor.board().get(1, 1).unwrap().bits(), 8);
        assert!(editor.board().is_complete());
    }

    #[test]
    fn shrink_past_minimum_reports_size_error() {
        let mut editor = Editor::with_board(Board::default());
        let err = editor.apply_action(EditorAction::Shrink(Side::East)).unwrap_err();
        assert!(err.is_friendly());
        assert_eq!(
            editor.snapshot().message.as_deref(),
            Some("Board size must be between 3×3 and 12×12.")
        );
        assert_eq!(editor.board().width(), 3);
    }

    #[test]
    fn cursor_follows_the_grid_through_resizes() {
        let mut editor = Editor::new().unwrap();
        for _ in 0..6 {
            editor.apply_action(EditorAction::Move(Side::East)).unwrap();
        }
        assert_eq!(editor.cursor(), (0, 6));

        editor.apply_action(EditorAction::Shrink(Side::East)).unwrap();
        assert_eq!(editor.cursor(), (0, 5));

        editor.apply_action(EditorAction::Grow(Side::West)).unwrap();
        assert_eq!(editor.cursor(), (0, 6));
        assert_eq!(
            editor.apply_action(EditorAction::Grow(Side::North)).unwrap(),
            EditorEvent::Resized {
                width: 7,
                height: 8
            }
        );
        assert_eq!(editor.cursor(), (1, 6));
        assert_eq!(editor.snapshot().message.as_deref(), Some("7×8"));
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn resizes_log_the_numeric_dump() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut editor = Editor::with_board(Board::default());
            editor.apply_action(EditorAction::Grow(Side::East)).unwrap();
            editor.apply_action(EditorAction::Shrink(Side::North)).unwrap();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logs.matches("resized board").count(), 2);
        assert!(logs.contains("[ 0,  0,  0,  0]"));
    }

    #[test]
    fn dump_returns_numeric_grid() {
        let mut editor = Editor::with_board(Board::default());
        editor.apply_action(EditorAction::ToggleEdge(Side::South)).unwrap();
        let EditorEvent::Dumped(dump) = editor.apply_action(EditorAction::Dump).unwrap() else {
            panic!("expected a dump");
        };
        assert_eq!(dump, "[\n  [ 1,  0,  0],\n  [ 4,  0,  0],\n  [ 0,  0,  0],\n]");
    }
}
