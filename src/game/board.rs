use log::debug;

use super::token::{Cell, Token};
use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Vertical drop grid. Row 0 is the top, row `rows - 1` the bottom.
///
/// Within every column the empty cells sit above the occupied ones; the only
/// mutator, [`Board::drop_token`], keeps it that way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty standard 6x7 board
    pub fn new() -> Self {
        Self::with_size(ROWS, COLS)
    }

    /// Create an empty board with the given dimensions.
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(self.cells[row * self.cols + col])
    }

    /// Snapshot of one column, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<Cell>, GameError> {
        if col >= self.cols {
            return Err(GameError::OutOfRange { row: 0, col });
        }
        Ok((0..self.rows)
            .map(|row| self.cells[row * self.cols + col])
            .collect())
    }

    /// Row-major view of the grid, top row first.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols.max(1))
    }

    /// A column is playable while its top cell is empty. Out-of-range
    /// columns are never playable.
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.cells[col].is_empty()
    }

    /// Row a token dropped into `col` would land on.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if !self.is_column_playable(col) {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col].is_empty())
    }

    /// Drop a token into a column. Returns false and leaves the board
    /// untouched when the column is full or out of range.
    pub fn drop_token(&mut self, col: usize, token: Token) -> bool {
        match self.landing_row(col) {
            Some(row) => {
                self.cells[row * self.cols + col] = token.to_cell();
                debug!("{} dropped into column {} (row {})", token, col, row);
                true
            }
            None => false,
        }
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_column_playable(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
