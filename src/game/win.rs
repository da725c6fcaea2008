//! Four-in-a-row detection.
//!
//! Every cell is tried as the start of a run along each of the four
//! direction vectors. A run wins when `CONNECT` consecutive in-bounds cells
//! hold the same token. Longer runs are just wins found from an earlier start.

use super::board::Board;
use super::token::{Cell, Token};

/// Number of aligned tokens needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// (0, +1)
    Horizontal,
    /// (+1, 0)
    Vertical,
    /// (+1, +1)
    DiagonalDownRight,
    /// (+1, -1)
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Row and column step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// A run of `CONNECT` same-token cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub start: (usize, usize),
    pub direction: Direction,
    pub token: Token,
}

impl WinningLine {
    /// Coordinates of the cells making up the line, from `start` onward.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col) = self.start;
        let (dr, dc) = self.direction.delta();
        (0..CONNECT as isize).map(move |i| {
            (
                (row as isize + dr * i) as usize,
                (col as isize + dc * i) as usize,
            )
        })
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}

/// Find the first winning line on the board, scanning rows top to bottom,
/// columns left to right and directions in [`Direction::ALL`] order.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let cells: Vec<&[Cell]> = board.row_slices().collect();

    for (row, line) in cells.iter().enumerate() {
        for (col, cell) in line.iter().enumerate() {
            let Some(token) = cell.token() else {
                continue;
            };
            for direction in Direction::ALL {
                if run_from(&cells, board.rows(), board.cols(), row, col, direction, token) {
                    return Some(WinningLine {
                        start: (row, col),
                        direction,
                        token,
                    });
                }
            }
        }
    }

    None
}

pub fn has_winning_line(board: &Board) -> bool {
    find_winning_line(board).is_some()
}

/// True if the `CONNECT` cells starting at (row, col) along `direction` are
/// all inside the grid and all hold `token`.
fn run_from(
    cells: &[&[Cell]],
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
    direction: Direction,
    token: Token,
) -> bool {
    let (dr, dc) = direction.delta();
    let target = token.to_cell();

    (0..CONNECT as isize).all(|i| {
        let r = row as isize + dr * i;
        let c = col as isize + dc * i;
        r >= 0
            && c >= 0
            && (r as usize) < rows
            && (c as usize) < cols
            && cells[r as usize][c as usize] == target
    })
}
