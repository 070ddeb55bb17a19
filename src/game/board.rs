use super::player::Ordinal;
use crate::error::SetupError;

/// Smallest board side on which a run can fit.
pub const MIN_SIDE: usize = 4;

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Ordinal),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the piece in this cell, if any
    pub fn owner(self) -> Option<Ordinal> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(ordinal) => Some(ordinal),
        }
    }
}

/// Grid of `height` rows by `width` columns, addressed `[row][col]`.
/// Row 0 is the top, row `height - 1` the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, SetupError> {
        if height < MIN_SIDE || width < MIN_SIDE {
            return Err(SetupError::BoardTooSmall { height, width });
        }
        Ok(Board {
            height,
            width,
            cells: vec![vec![Cell::Empty; width]; height],
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Whether `(row, col)` lies on the board; signed so callers can step off
    /// any edge
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Lowest empty row in `col`, or `None` when the column is full.
    ///
    /// `col` must be in `0..width`.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row][col].is_empty())
    }

    /// Check if a column is full; out-of-range columns count as full
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.width || !self.cells[0][col].is_empty()
    }

    /// Mark `(row, col)` as occupied by `player`.
    ///
    /// The target must come from [`Board::landing_row`]; nothing is re-checked.
    pub fn place(&mut self, row: usize, col: usize, player: Ordinal) {
        self.cells[row][col] = Cell::Occupied(player);
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| !cell.is_empty()))
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            cells: vec![vec![Cell::Empty; DEFAULT_WIDTH]; DEFAULT_HEIGHT],
        }
    }
}
