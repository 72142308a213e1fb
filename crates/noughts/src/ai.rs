//! Heuristic computer opponent.
//!
//! One ply only: take a winning cell, otherwise block the opponent's winning
//! cell, otherwise take the lowest open cell. It does not search and can be
//! beaten with a fork.

use super::types::{Board, Cell, Line, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why the opponent picked its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// Completes one of its own lines.
    Win(Line),
    /// Stops the opponent completing a line.
    Block(Line),
    /// Lowest-indexed open cell.
    Fallback,
}

/// A cell chosen by the heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMove {
    /// Cell index (0-8).
    pub index: usize,
    /// Rule that produced the choice.
    pub reason: Reason,
}

/// Picks a cell for `mark`. Returns `None` only when the board is full.
#[instrument(skip(board))]
pub fn choose_move(board: &Board, mark: Mark) -> Option<AiMove> {
    let chosen = completing_cell(board, mark)
        .map(|(index, line)| AiMove {
            index,
            reason: Reason::Win(line),
        })
        .or_else(|| {
            completing_cell(board, mark.opponent()).map(|(index, line)| AiMove {
                index,
                reason: Reason::Block(line),
            })
        })
        .or_else(|| {
            board.open_cells().first().map(|&index| AiMove {
                index,
                reason: Reason::Fallback,
            })
        });

    debug!(?chosen, "Computer move chosen");
    chosen
}

/// First line holding two of `mark`, none of its opponent, and one empty cell.
fn completing_cell(board: &Board, mark: Mark) -> Option<(usize, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let cells = line.cells();
        let own = cells.iter().filter(|&&i| board.get(i) == Some(Cell::Occupied(mark))).count();
        let theirs = cells
            .iter()
            .filter(|&&i| board.get(i) == Some(Cell::Occupied(mark.opponent())))
            .count();
        if own != 2 || theirs != 0 {
            return None;
        }
        cells.into_iter().find(|&i| board.is_empty(i)).map(|i| (i, line))
    })
}
