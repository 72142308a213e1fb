//! Exhaustive checks of move application over every reachable position.

use noughts::{
    Board, Cell, Line, Mark, MoveError, MoveOutcome, RoundPhase, active_mark, apply_move,
    choose_move, rules,
};

/// Visits every position reachable in legal play, including terminal ones.
fn walk(board: &Board, turn: u32, visit: &mut impl FnMut(&Board, u32)) {
    visit(board, turn);
    if rules::find_winning_line(board).is_some() || rules::is_full(board) {
        return;
    }
    for index in board.open_cells() {
        let mut next = board.clone();
        let mut next_turn = turn;
        apply_move(&mut next, &mut next_turn, RoundPhase::Active, index).expect("Open cell");
        walk(&next, next_turn, visit);
    }
}

fn is_terminal(board: &Board) -> bool {
    rules::find_winning_line(board).is_some() || rules::is_full(board)
}

#[test]
fn test_open_cell_changes_exactly_one_cell() {
    walk(&Board::new(), 0, &mut |board, turn| {
        if is_terminal(board) {
            return;
        }
        for index in board.open_cells() {
            let mut next = board.clone();
            let mut next_turn = turn;
            let outcome = apply_move(&mut next, &mut next_turn, RoundPhase::Active, index)
                .expect("Open cell");

            let changed = (0..9).filter(|&i| board.get(i) != next.get(i)).count();
            assert_eq!(changed, 1);
            match outcome {
                MoveOutcome::Continue => {
                    assert_eq!(next_turn, turn + 1);
                    assert_eq!(active_mark(next_turn), active_mark(turn).opponent());
                }
                MoveOutcome::Win(..) | MoveOutcome::Draw => assert_eq!(next_turn, turn),
            }
        }
    });
}

#[test]
fn test_occupied_cell_is_idempotent_no_op() {
    walk(&Board::new(), 0, &mut |board, turn| {
        if is_terminal(board) {
            return;
        }
        for index in (0..9).filter(|&i| !board.is_empty(i)) {
            let mut next = board.clone();
            let mut next_turn = turn;
            let result = apply_move(&mut next, &mut next_turn, RoundPhase::Active, index);
            assert_eq!(result, Err(MoveError::CellOccupied(index)));
            assert_eq!(&next, board);
            assert_eq!(next_turn, turn);
        }
    });
}

#[test]
fn test_draw_iff_full_without_line() {
    let mut draws = 0;
    walk(&Board::new(), 0, &mut |board, _| {
        let expected = board.is_full() && rules::find_winning_line(board).is_none();
        assert_eq!(rules::is_draw(board), expected);
        if expected {
            draws += 1;
        }
    });
    assert!(draws > 0);
}

#[test]
fn test_reported_line_is_complete() {
    walk(&Board::new(), 0, &mut |board, _| {
        if let Some((mark, line)) = rules::find_winning_line(board) {
            let owned = |i: &usize| board.get(*i) == Some(Cell::Occupied(mark));
            assert!(line.cells().iter().all(owned));
            // No earlier line in detection order is complete.
            let earlier = Line::ALL.iter().take_while(|&&l| l != line);
            for other in earlier {
                let [a, b, c] = other.cells().map(|i| board.get(i));
                let complete = a == b && b == c && a != Some(Cell::Empty);
                assert!(!complete);
            }
        }
    });
}

#[test]
fn test_computer_always_picks_an_open_cell() {
    walk(&Board::new(), 0, &mut |board, turn| {
        if is_terminal(board) {
            return;
        }
        let mark: Mark = active_mark(turn);
        let chosen = choose_move(board, mark).expect("Open cells remain");
        assert!(board.is_empty(chosen.index));
    });
}
