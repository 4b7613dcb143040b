//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use tracing::instrument;

/// Winning lines in evaluation order.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark holding the first complete line in row, column,
/// diagonal order, or `None` when no line is complete.
#[instrument(level = "trace", skip(board))]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.mark();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(mark: Mark, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(mark));
        }
        board
    }

    fn board_from(cells: [Option<Mark>; 9]) -> Board {
        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            if let (Some(mark), Some(pos)) = (cell, Position::from_index(i)) {
                board.set(pos, Square::Occupied(mark));
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_x() {
        for line in LINES {
            let board = board_with(Mark::X, &line);
            assert_eq!(check_winner(&board), Some(Mark::X), "line {:?}", line);
        }
    }

    #[test]
    fn test_every_line_wins_for_o() {
        for line in LINES {
            let board = board_with(Mark::O, &line);
            assert_eq!(check_winner(&board), Some(Mark::O), "line {:?}", line);
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_with(Mark::X, &[Position::TopLeft, Position::TopCenter]);
        board.set(Position::TopRight, Square::Occupied(Mark::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        use Mark::{O, X};
        // X O X / X O O / O X X
        let board = board_from([
            Some(X), Some(O), Some(X),
            Some(X), Some(O), Some(O),
            Some(O), Some(X), Some(X),
        ]);
        assert_eq!(board.occupied(), 9);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Not reachable in play, but the scan order decides.
        let mut board = board_with(Mark::O, &Position::ROWS[1]);
        for pos in Position::ROWS[0] {
            board.set(pos, Square::Occupied(Mark::X));
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }
}
