//! Game module - a play session over a level pack
//!
//! Ties together the level pack, the live board and the RNG. Loading a level
//! builds its solved board and scrambles it; the player then rotates tiles
//! until [`Board::is_complete`] holds, after which the session waits for an
//! explicit advance to the next level.

use crate::board::Board;
use crate::error::BoardError;
use crate::levels::LevelPack;
use crate::rng::SimpleRng;
use crate::snapshot::{BoardSnapshot, Cursor, GameStatus, SessionKind};
use crate::types::{GameAction, Side, Spin};

/// What an action did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Nothing changed (e.g. rotating after the level was solved)
    Ignored,
    CursorMoved,
    Rotated,
    /// The last rotation completed the board
    Solved { level: usize },
    /// A fresh, scrambled level is on the board
    LevelLoaded { level: usize },
    /// The pack ran out of levels
    Finished,
}

/// Move a cursor one cell towards `side`, staying on the board
pub(crate) fn step_cursor(cursor: Cursor, side: Side, width: usize, height: usize) -> Cursor {
    let (row, col) = cursor;
    match side {
        Side::North => (row.saturating_sub(1), col),
        Side::South => ((row + 1).min(height.saturating_sub(1)), col),
        Side::West => (row, col.saturating_sub(1)),
        Side::East => (row, (col + 1).min(width.saturating_sub(1))),
    }
}

pub struct Game {
    levels: LevelPack,
    level: usize,
    board: Option<Board>,
    cursor: Cursor,
    status: GameStatus,
    rng: SimpleRng,
}

impl Game {
    /// Start a session at `level`, scrambling with the given seed
    pub fn new(levels: LevelPack, level: usize, seed: u32) -> Result<Self, BoardError> {
        let mut game = Self {
            levels,
            level,
            board: None,
            cursor: (0, 0),
            status: GameStatus::Playing,
            rng: SimpleRng::new(seed),
        };
        game.load_level()?;
        Ok(game)
    }

    /// Build and scramble the current level, or finish if there is none
    pub fn load_level(&mut self) -> Result<GameEvent, BoardError> {
        let Some(level) = self.levels.get(self.level) else {
            tracing::info!(level = self.level, "no more levels");
            self.board = None;
            self.status = GameStatus::Finished;
            return Ok(GameEvent::Finished);
        };

        let mut board = level.to_board()?;
        board.scramble(&mut self.rng);
        tracing::info!(
            level = self.level,
            width = board.width(),
            height = board.height(),
            "loaded level"
        );
        self.board = Some(board);
        self.cursor = (0, 0);
        self.status = GameStatus::Playing;
        Ok(GameEvent::LevelLoaded { level: self.level })
    }

    pub fn apply_action(&mut self, action: GameAction) -> Result<GameEvent, BoardError> {
        match action {
            GameAction::Move(side) => Ok(self.move_cursor(side)),
            GameAction::RotateCw => self.rotate(Spin::Clockwise),
            GameAction::RotateCcw => self.rotate(Spin::CounterClockwise),
            GameAction::Advance => self.advance(),
        }
    }

    fn move_cursor(&mut self, side: Side) -> GameEvent {
        let Some(board) = &self.board else {
            return GameEvent::Ignored;
        };
        let next = step_cursor(self.cursor, side, board.width(), board.height());
        if next == self.cursor {
            return GameEvent::Ignored;
        }
        self.cursor = next;
        GameEvent::CursorMoved
    }

    /// Rotate the tile under the cursor one quarter turn
    ///
    /// Only allowed while playing.
    pub fn rotate(&mut self, spin: Spin) -> Result<GameEvent, BoardError> {
        if self.status != GameStatus::Playing {
            return Ok(GameEvent::Ignored);
        }
        let Some(board) = self.board.as_mut() else {
            return Ok(GameEvent::Ignored);
        };

        let (row, col) = self.cursor;
        board.rotate(row as i32, col as i32, spin, 1)?;
        if board.is_complete() {
            tracing::info!(level = self.level, "level solved");
            self.status = GameStatus::Solved;
            return Ok(GameEvent::Solved { level: self.level });
        }
        Ok(GameEvent::Rotated)
    }

    /// Go on to the next level once the current one is solved
    pub fn advance(&mut self) -> Result<GameEvent, BoardError> {
        if self.status != GameStatus::Solved {
            return Ok(GameEvent::Ignored);
        }
        self.level += 1;
        self.load_level()
    }

    /// Level to resume from after the current one is solved
    pub fn next_level(&self) -> usize {
        self.level + 1
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// Mutable board access for tests
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> Option<&mut Board> {
        self.board.as_mut()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut snap = match &self.board {
            Some(board) => BoardSnapshot::from_board(board, self.cursor),
            None => BoardSnapshot::default(),
        };
        snap.kind = SessionKind::Play;
        snap.level = self.level;
        snap.status = self.status;
        snap.message = match self.status {
            GameStatus::Playing => None,
            GameStatus::Solved => Some("Press Enter for the next level".to_string()),
            GameStatus::Finished => Some("Game complete!".to_string()),
        };
        snap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Level;
    use crate::types::Tile;

    fn tiny_pack() -> LevelPack {
        // A 3x3 ring: every tile has a rotation that breaks the loop.
        LevelPack::new(vec![Level::new(vec![
            vec![3, 10, 9],
            vec![5, 0, 5],
            vec![6, 10, 12],
        ])])
    }

    /// Rotate every cell back to the pack's solved layout through the public action API.
    fn solve(game: &mut Game) -> GameEvent {
        let target = tiny_pack().get(0).unwrap().to_board().unwrap();
        let mut last = GameEvent::Ignored;
        for row in 0..3 {
            for col in 0..3 {
                game.cursor = (row, col);
                let want = target.get(row as i32, col as i32).unwrap();
                for _ in 0..4 {
                    let have = game.board().unwrap().get(row as i32, col as i32).unwrap();
                    if have == want || game.status() != GameStatus::Playing {
                        break;
                    }
                    last = game.apply_action(GameAction::RotateCw).unwrap();
                }
            }
        }
        last
    }

    #[test]
    fn cursor_stays_on_board() {
        let mut game = Game::new(tiny_pack(), 0, 1).unwrap();
        assert_eq!(game.apply_action(GameAction::Move(Side::North)).unwrap(), GameEvent::Ignored);
        assert_eq!(game.apply_action(GameAction::Move(Side::West)).unwrap(), GameEvent::Ignored);
        for _ in 0..5 {
            game.apply_action(GameAction::Move(Side::South)).unwrap();
            game.apply_action(GameAction::Move(Side::East)).unwrap();
        }
        assert_eq!(game.cursor(), (2, 2));
    }

    #[test]
    fn solving_then_advancing_past_last_level_finishes() {
        let mut game = Game::new(tiny_pack(), 0, 3).unwrap();
        // Make sure at least one rotation is needed.
        game.board_mut()
            .unwrap()
            .rotate(0, 0, Spin::Clockwise, 1)
            .unwrap();
        assert!(!game.board().unwrap().is_complete());

        assert_eq!(solve(&mut game), GameEvent::Solved { level: 0 });
        assert_eq!(game.status(), GameStatus::Solved);
        assert_eq!(game.next_level(), 1);

        // Further rotations are ignored once solved.
        let before = game.board().unwrap().clone();
        assert_eq!(game.apply_action(GameAction::RotateCcw).unwrap(), GameEvent::Ignored);
        assert_eq!(game.board().unwrap(), &before);

        assert_eq!(game.apply_action(GameAction::Advance).unwrap(), GameEvent::Finished);
        assert_eq!(game.status(), GameStatus::Finished);
        assert!(game.board().is_none());
        assert_eq!(game.snapshot().message.as_deref(), Some("Game complete!"));
    }

    #[test]
    fn advance_is_ignored_while_playing() {
        let mut game = Game::new(tiny_pack(), 0, 5).unwrap();
        game.board_mut()
            .unwrap()
            .set_cell(1, 1, Tile::new(1).unwrap())
            .unwrap();
        assert_eq!(game.apply_action(GameAction::Advance).unwrap(), GameEvent::Ignored);
        assert_eq!(game.level(), 0);
    }

    #[test]
    fn starting_past_the_pack_is_finished() {
        let game = Game::new(tiny_pack(), 7, 1).unwrap();
        assert_eq!(game.status(), GameStatus::Finished);
        assert!(!game.snapshot().has_board());
    }

    #[test]
    fn scramble_keeps_tile_shapes() {
        let game = Game::new(LevelPack::builtin(), 0, 42).unwrap();
        let solved = LevelPack::builtin().get(0).unwrap().to_board().unwrap();
        for (a, b) in game.board().unwrap().tiles().iter().zip(solved.tiles()) {
            assert_eq!(a.degree(), b.degree());
        }
    }
}
