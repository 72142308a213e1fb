//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Line, Mark};
use tracing::instrument;

/// Finds the first completed line on the board.
///
/// Lines are checked rows first, then columns, then the two diagonals.
/// Returns the mark that owns the line together with the line.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board) -> Option<(Mark, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells();
        let Cell::Occupied(mark) = board.get(a)? else {
            return None;
        };
        let owned = |i| board.get(i) == Some(Cell::Occupied(mark));
        (owned(b) && owned(c)).then_some((mark, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(i, mark) in marks {
            board.set(i, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in Line::ALL {
            for mark in [Mark::X, Mark::O] {
                let board = board_with(&line.cells().map(|i| (i, mark)));
                assert_eq!(find_winning_line(&board), Some((mark, line)), "{line}");
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(0, Mark::X), (1, Mark::X)]);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_rows_reported_before_columns() {
        // X holds both row 0 and column 0.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        assert_eq!(find_winning_line(&board), Some((Mark::X, Line::Row0)));
    }
}
