//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::Position;

/// Moves the board cursor one square with the arrow keys.
///
/// The cursor stops at the board edge; other keys leave it unchanged.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row_index(), cursor.col_index());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => return cursor,
    };
    Position::ROWS[row][col]
}

/// Moves the history cursor within `0..len`.
pub fn move_history_cursor(cursor: usize, len: usize, key: KeyCode) -> usize {
    let last = len.saturating_sub(1);
    match key {
        KeyCode::Up => cursor.saturating_sub(1),
        KeyCode::Down => (cursor + 1).min(last),
        KeyCode::Home => 0,
        KeyCode::End => last,
        _ => cursor.min(last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Enter), Position::Center);
    }

    #[test]
    fn test_history_cursor_clamps() {
        assert_eq!(move_history_cursor(0, 3, KeyCode::Up), 0);
        assert_eq!(move_history_cursor(2, 3, KeyCode::Down), 2);
        assert_eq!(move_history_cursor(1, 3, KeyCode::Down), 2);
        assert_eq!(move_history_cursor(2, 3, KeyCode::Home), 0);
        assert_eq!(move_history_cursor(0, 3, KeyCode::End), 2);
    }
}
