//! Key mapping from terminal events to session actions.

use crate::types::{EditorAction, GameAction, Side};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn arrow_side(code: KeyCode) -> Option<Side> {
    match code {
        KeyCode::Up => Some(Side::North),
        KeyCode::Down => Some(Side::South),
        KeyCode::Left => Some(Side::West),
        KeyCode::Right => Some(Side::East),
        _ => None,
    }
}

/// `w`/`a`/`s`/`d` as compass sides, case-insensitive.
fn wasd_side(c: char) -> Option<Side> {
    match c.to_ascii_lowercase() {
        'w' => Some(Side::North),
        's' => Some(Side::South),
        'a' => Some(Side::West),
        'd' => Some(Side::East),
        _ => None,
    }
}

/// Map keyboard input to play actions.
pub fn map_play_key(key: KeyEvent) -> Option<GameAction> {
    if let Some(side) = arrow_side(key.code) {
        return Some(GameAction::Move(side));
    }

    match key.code {
        // Movement
        KeyCode::Char('k') | KeyCode::Char('K') => Some(GameAction::Move(Side::North)),
        KeyCode::Char('j') | KeyCode::Char('J') => Some(GameAction::Move(Side::South)),
        KeyCode::Char('h') | KeyCode::Char('H') => Some(GameAction::Move(Side::West)),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::Move(Side::East)),

        // Rotation
        KeyCode::Char(' ') | KeyCode::Char('e') | KeyCode::Char('E') => Some(GameAction::RotateCw),
        KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('z')
        | KeyCode::Char('Z')
        | KeyCode::Backspace => Some(GameAction::RotateCcw),

        // Next level
        KeyCode::Enter | KeyCode::Char('n') | KeyCode::Char('N') => Some(GameAction::Advance),

        KeyCode::Char(c) => wasd_side(c).map(GameAction::Move),
        _ => None,
    }
}

/// Map keyboard input to editor actions.
///
/// Arrows move the cursor. `w`/`a`/`s`/`d` toggle the edge on that side,
/// with Shift they add a row or column there and with Ctrl they remove one.
pub fn map_editor_key(key: KeyEvent) -> Option<EditorAction> {
    if let Some(side) = arrow_side(key.code) {
        return Some(EditorAction::Move(side));
    }

    let KeyCode::Char(c) = key.code else {
        return None;
    };

    if c.eq_ignore_ascii_case(&'p') {
        return Some(EditorAction::Dump);
    }

    let side = wasd_side(c)?;
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        Some(EditorAction::Shrink(side))
    } else if key.modifiers.contains(KeyModifiers::SHIFT) || c.is_ascii_uppercase() {
        Some(EditorAction::Grow(side))
    } else {
        Some(EditorAction::ToggleEdge(side))
    }
}

/// Check if key should quit the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
