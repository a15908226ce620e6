//! Board state with write-once cells and an append-only move history
//!
//! The board is the single source of truth for every analyzer. Cells hold one of
//! two outcome symbols or stay empty; a cell is never overwritten once set until
//! the board is explicitly cleared. The move history records the order in which
//! cells were filled, which several analyzers use for "most recent move" logic.

use ndarray::Array2;

use crate::io::configuration::BOARD_SIZE;
use crate::io::error::{AnalysisError, Result};

/// One of the two mutually exclusive result symbols recorded in a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    /// First outcome symbol
    A,
    /// Second outcome symbol
    B,
}

impl Outcome {
    /// The opposite outcome symbol
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }

    /// Single-character representation used by board files and reports
    pub const fn symbol(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
        }
    }
}

/// A single placed move: position plus the recorded outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Row index of the placed cell
    pub row: usize,
    /// Column index of the placed cell
    pub col: usize,
    /// Outcome recorded at the cell
    pub outcome: Outcome,
}

/// Ordered, append-only sequence of placed moves
///
/// Invariant: length equals the number of non-empty cells on the board it
/// accompanies, and the final entry is the most recently placed outcome.
#[derive(Debug, Clone, Default)]
pub struct MoveHistory {
    entries: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Create an empty history
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a move to the history
    pub fn push(&mut self, row: usize, col: usize, outcome: Outcome) {
        self.entries.push(MoveRecord { row, col, outcome });
    }

    /// The most recently placed move, if any
    pub fn last(&self) -> Option<&MoveRecord> {
        self.entries.last()
    }

    /// Number of recorded moves
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history holds no moves
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded moves in placement order
    pub fn as_slice(&self) -> &[MoveRecord] {
        &self.entries
    }

    /// The outcome sequence in placement order, positions discarded
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.entries.iter().map(|entry| entry.outcome).collect()
    }
}

/// Square board of write-once outcome cells
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Option<Outcome>>,
}

impl Default for Board {
    /// An empty board at the standard [`BOARD_SIZE`]
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl Board {
    /// Create an empty board with the given side length
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Outcome at a cell, or `None` when the cell is empty or out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Outcome> {
        self.cells.get([row, col]).copied().flatten()
    }

    /// Record an outcome at an empty cell
    ///
    /// # Errors
    ///
    /// Returns an error when the position lies outside the board or the cell
    /// already holds an outcome. Cells are write-once within a session.
    pub fn place(&mut self, row: usize, col: usize, outcome: Outcome) -> Result<()> {
        let size = self.size();
        let cell = self
            .cells
            .get_mut([row, col])
            .ok_or(AnalysisError::OutOfBounds { row, col, size })?;

        if cell.is_some() {
            return Err(AnalysisError::CellOccupied { row, col });
        }

        *cell = Some(outcome);
        Ok(())
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Number of cells holding the given outcome
    pub fn count(&self, outcome: Outcome) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Some(outcome))
            .count()
    }

    /// Outcome counts `(a, b)` within a rectangular region
    ///
    /// Rows or columns beyond the board contribute nothing, so a region larger
    /// than the board simply counts the overlapping part.
    pub fn region_counts(
        &self,
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) -> (usize, usize) {
        let mut a = 0;
        let mut b = 0;
        for row in rows {
            for col in cols.clone() {
                match self.get(row, col) {
                    Some(Outcome::A) => a += 1,
                    Some(Outcome::B) => b += 1,
                    None => {}
                }
            }
        }
        (a, b)
    }

    /// Positions and outcomes of every non-empty cell in row-major order
    pub fn filled_cells(&self) -> Vec<MoveRecord> {
        let mut cells = Vec::with_capacity(self.filled_count());
        for ((row, col), cell) in self.cells.indexed_iter() {
            if let Some(outcome) = cell {
                cells.push(MoveRecord {
                    row,
                    col,
                    outcome: *outcome,
                });
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, Outcome};

    #[test]
    fn test_cells_are_write_once() {
        let mut board = Board::default();
        assert_eq!(board.size(), 5);
        board.place(2, 3, Outcome::A).ok();

        assert!(board.place(2, 3, Outcome::B).is_err());
        assert_eq!(board.get(2, 3), Some(Outcome::A));

        board.clear();
        assert_eq!(board.get(2, 3), None);
        assert!(board.place(2, 3, Outcome::B).is_ok());
    }

    #[test]
    fn test_out_of_bounds_placement_is_rejected() {
        let mut board = Board::new(5);
        assert!(board.place(5, 0, Outcome::A).is_err());
        assert!(board.place(0, 17, Outcome::A).is_err());
        assert_eq!(board.filled_count(), 0);
    }
}
