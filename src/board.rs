//! Playfield cell grid
//!
//! Row 0 is the top of the board, column 0 the left edge. Reads and writes
//! outside the grid are tolerated: piece geometry is routinely computed
//! before anyone checks it against the walls.

use crate::piece::Piece;
use crate::tetromino::ColorTag;

/// Standard Tetris board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// A cell on the board - either empty or filled with a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(ColorTag),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled(_))
    }

    pub fn color(&self) -> Option<ColorTag> {
        match self {
            Cell::Empty => None,
            Cell::Filled(color) => Some(*color),
        }
    }
}

/// The game board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Grid stored as [row][col]
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        (0..BOARD_HEIGHT as i32).contains(&row) && (0..BOARD_WIDTH as i32).contains(&col)
    }

    /// Get the cell at a position (row, col).
    /// Out-of-bounds positions read as empty.
    pub fn get(&self, row: i32, col: i32) -> Cell {
        if !self.in_bounds(row, col) {
            return Cell::Empty;
        }
        self.cells[row as usize][col as usize]
    }

    /// Set a cell at a position. Out-of-bounds writes are dropped.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) {
        if !self.in_bounds(row, col) {
            return;
        }
        self.cells[row as usize][col as usize] = cell;
    }

    /// Write a piece's cells into the grid, filled with its color.
    /// Cells hanging off the board are skipped.
    pub fn stamp(&mut self, piece: &Piece) {
        let cell = Cell::Filled(piece.color());
        for (row, col) in piece.cells() {
            self.set(row, col, cell);
        }
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }

    /// Check if the board is completely empty
    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_empty()))
    }
}
