//! Draw detection logic for tic-tac-toe.

use super::win::find_winning_line;
use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Checks for a draw: a full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && find_winning_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn fill(layout: &str) -> Board {
        let mut board = Board::new();
        for (i, c) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
            match c {
                'X' => board.set(i, Mark::X).unwrap(),
                'O' => board.set(i, Mark::O).unwrap(),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let board = fill("XOX OX. ...");
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = fill("XOX OXX OXO");
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X completes the left column.
        let board = fill("XOX XOO XXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
