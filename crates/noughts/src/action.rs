//! Move results and move errors.
//!
//! A move is a request to fill one cell with the active mark. It either
//! continues the round, ends it, or is rejected without touching any state.

use super::types::{Line, Mark};
use serde::{Deserialize, Serialize};

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// No line completed and open cells remain.
    Continue,
    /// The mark completed a line.
    Win(Mark, Line),
    /// The board filled up without a completed line.
    Draw,
}

impl MoveOutcome {
    /// Returns true if the move ended the round.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue)
    }
}

/// Error that can occur when applying a move.
///
/// None of these are fatal: a rejected move leaves the board, the turn
/// counter and the scores exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The index is not on the board.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The round is not accepting moves.
    #[display("Round is already resolved")]
    RoundAlreadyResolved,

    /// The active mark belongs to the computer opponent.
    #[display("It's the computer's turn")]
    ComputerToMove,
}

impl std::error::Error for MoveError {}
