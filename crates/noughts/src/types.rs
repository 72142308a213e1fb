//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Mark X (always played by the starting player).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// One of the eight fixed winning triples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Top row.
    #[display("top row")]
    Row0,
    /// Middle row.
    #[display("middle row")]
    Row1,
    /// Bottom row.
    #[display("bottom row")]
    Row2,
    /// Left column.
    #[display("left column")]
    Col0,
    /// Center column.
    #[display("center column")]
    Col1,
    /// Right column.
    #[display("right column")]
    Col2,
    /// Top-left to bottom-right diagonal.
    #[display("diagonal")]
    DiagLR,
    /// Top-right to bottom-left diagonal.
    #[display("anti-diagonal")]
    DiagRL,
}

impl Line {
    /// All lines in detection order.
    pub const ALL: [Line; 8] = [
        Line::Row0,
        Line::Row1,
        Line::Row2,
        Line::Col0,
        Line::Col1,
        Line::Col2,
        Line::DiagLR,
        Line::DiagRL,
    ];

    /// Cell indices covered by this line.
    pub fn cells(self) -> [usize; 3] {
        match self {
            Line::Row0 => [0, 1, 2],
            Line::Row1 => [3, 4, 5],
            Line::Row2 => [6, 7, 8],
            Line::Col0 => [0, 3, 6],
            Line::Col1 => [1, 4, 7],
            Line::Col2 => [2, 5, 8],
            Line::DiagLR => [0, 4, 8],
            Line::DiagRL => [2, 4, 6],
        }
    }

    /// Returns true if the line passes through the given cell.
    pub fn contains(self, index: usize) -> bool {
        self.cells().contains(&index)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Places a mark in an empty cell.
    ///
    /// A cell that already holds a mark is never overwritten.
    #[instrument(skip(self))]
    pub fn set(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cells.get_mut(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Cell::Occupied(_)) => Err(MoveError::CellOccupied(index)),
            Some(cell) => {
                *cell = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Clears all cells.
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of the empty cells, lowest first.
    pub fn open_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_rejects_occupied_cell() {
        let mut board = Board::new();
        board.set(4, Mark::X).unwrap();
        assert_eq!(board.set(4, Mark::O), Err(MoveError::CellOccupied(4)));
        assert_eq!(board.get(4), Some(Cell::Occupied(Mark::X)));
    }

    #[test]
    fn test_set_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.set(9, Mark::X), Err(MoveError::OutOfBounds(9)));
        assert_eq!(board.get(9), None);
    }

    #[test]
    fn test_reset_clears_all_cells() {
        let mut board = Board::new();
        for i in 0..CELL_COUNT {
            board.set(i, if i % 2 == 0 { Mark::X } else { Mark::O }).unwrap();
        }
        assert!(board.is_full());
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.open_cells().len(), CELL_COUNT);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(0, Mark::X).unwrap();
        board.set(4, Mark::O).unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_line_cells_cover_each_cell() {
        // Center sits on four lines, corners on three, edges on two.
        let on = |i| Line::ALL.iter().filter(|l| l.contains(i)).count();
        assert_eq!(on(4), 4);
        assert_eq!(on(0), 3);
        assert_eq!(on(1), 2);
    }
}
