//! Turn sequencing.
//!
//! The sequencer holds no board of its own. It reads the turn counter to pick
//! the active mark, writes that mark through the board, and asks the rules
//! whether the move ended the round.

use super::action::{MoveError, MoveOutcome};
use super::round::RoundPhase;
use super::rules::{find_winning_line, is_full};
use super::types::{Board, Mark};
use tracing::{debug, instrument};

/// Mark to play on the given turn: even turns are X, odd turns are O.
pub fn active_mark(turn: u32) -> Mark {
    if turn % 2 == 0 { Mark::X } else { Mark::O }
}

/// Applies the active mark at `index`.
///
/// On success the board holds one more mark. The turn counter advances only
/// when the round continues. On error nothing is modified.
#[instrument(skip(board, turn), fields(turn = *turn))]
pub fn apply_move(
    board: &mut Board,
    turn: &mut u32,
    phase: RoundPhase,
    index: usize,
) -> Result<MoveOutcome, MoveError> {
    match board.get(index) {
        None => return Err(MoveError::OutOfBounds(index)),
        Some(cell) if cell.mark().is_some() => return Err(MoveError::CellOccupied(index)),
        Some(_) => {}
    }
    if phase != RoundPhase::Active {
        return Err(MoveError::RoundAlreadyResolved);
    }

    let mark = active_mark(*turn);
    board.set(index, mark)?;
    debug!(%mark, index, "Mark placed");

    if let Some((winner, line)) = find_winning_line(board) {
        return Ok(MoveOutcome::Win(winner, line));
    }
    if is_full(board) {
        return Ok(MoveOutcome::Draw);
    }

    *turn += 1;
    Ok(MoveOutcome::Continue)
}
