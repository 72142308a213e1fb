//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use noughts::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one cell.
    Cursor(KeyCode),
    /// Play the cell under the cursor.
    PlayCursor,
    /// Play a cell directly (index 0-8).
    PlayCell(usize),
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Position::from_keypad(c).map(|pos| Action::PlayCell(pos.to_index())),
        _ => None,
    }
}

/// Moves the cursor with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_coords(r, c))
        .unwrap_or(cursor)
}
