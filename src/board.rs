//! Canonical game state: grid ownership, move legality and terminal detection

use thiserror::Error;

/// The contents of a single grid cell
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The other player's piece; `Empty` has no opponent
    pub fn opponent(self) -> Cell {
        match self {
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
            Cell::Empty => Cell::Empty,
        }
    }
}

/// A completed gravity drop: where a piece ended up
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub piece: Cell,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum MoveError {
    #[error("column {column} out of range, columns run from 0 to {max}")]
    InvalidColumn { column: usize, max: usize },
    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// A `rows x cols` grid with gravity-drop semantics.
///
/// Cells are stored left-to-right, bottom-to-top: row 0 is the bottom-most
/// playable row and indices increase upward, so a non-empty cell never sits
/// above an empty one in the same column.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Board {
    cells: Vec<Cell>,
    rows: usize,
    cols: usize,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[col + self.cols * row]
    }

    /// True iff `col` is in range and its topmost cell is still empty
    pub fn is_legal(&self, col: usize) -> bool {
        col < self.cols && self.rows > 0 && self.get(self.rows - 1, col).is_empty()
    }

    /// The row a piece dropped into `col` would land in, scanning from the
    /// bottom row upward
    pub fn next_open_row(&self, col: usize) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                max: self.cols.saturating_sub(1),
            });
        }
        (0..self.rows)
            .find(|&row| self.get(row, col).is_empty())
            .ok_or(MoveError::ColumnFull { column: col })
    }

    /// Unconditional write; the caller is responsible for the legality check
    /// and for passing the column's next open row
    pub fn place(&mut self, row: usize, col: usize, piece: Cell) {
        self.cells[col + self.cols * row] = piece;
    }

    /// Legality-checked gravity drop for `piece` into `col`
    pub fn apply_move(&mut self, col: usize, piece: Cell) -> Result<Placement, MoveError> {
        let row = self.next_open_row(col)?;
        self.place(row, col, piece);
        Ok(Placement {
            row,
            column: col,
            piece,
        })
    }

    /// Scans the entire board for four consecutive equal non-empty cells in
    /// any of the four orientations, returning the winning piece or `Empty`.
    ///
    /// Idempotent and side-effect-free; grids smaller than 4 in either
    /// dimension simply have no windows of that orientation to scan.
    pub fn check_winner(&self) -> Cell {
        // horizontal
        for row in 0..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                let piece = self.get(row, col);
                if !piece.is_empty() && (1..4).all(|i| self.get(row, col + i) == piece) {
                    return piece;
                }
            }
        }

        // vertical
        for row in 0..self.rows.saturating_sub(3) {
            for col in 0..self.cols {
                let piece = self.get(row, col);
                if !piece.is_empty() && (1..4).all(|i| self.get(row + i, col) == piece) {
                    return piece;
                }
            }
        }

        // diagonal /
        for row in 0..self.rows.saturating_sub(3) {
            for col in 0..self.cols.saturating_sub(3) {
                let piece = self.get(row, col);
                if !piece.is_empty() && (1..4).all(|i| self.get(row + i, col + i) == piece) {
                    return piece;
                }
            }
        }

        // diagonal \
        for row in 3..self.rows {
            for col in 0..self.cols.saturating_sub(3) {
                let piece = self.get(row, col);
                if !piece.is_empty() && (1..4).all(|i| self.get(row - i, col + i) == piece) {
                    return piece;
                }
            }
        }

        Cell::Empty
    }

    /// True iff no column has an open row left
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_legal(col))
    }

    /// Columns that still accept a drop, in ascending index order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_legal(col)).collect()
    }
}
