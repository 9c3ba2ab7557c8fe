use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a scoring/winning line.
pub const WINDOW: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// 6×7 grid. Row 0 is the top, row 5 is the bottom; pieces fall to the
/// lowest empty row of their column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full (or out of range)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returning the row where it landed.
    /// A full column is a silent no-op: the board is left untouched and
    /// `None` is returned. Callers pre-validate via [`Board::reachable_columns`].
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        if col >= COLS {
            return None;
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Some(row);
            }
        }

        None
    }

    /// Remove the piece that [`Board::drop_piece`] just placed at `(row, col)`.
    /// The search applies a move, recurses, and undoes it instead of copying
    /// the grid at every node.
    pub fn undo_drop(&mut self, row: usize, col: usize) {
        debug_assert_ne!(self.cells[row][col], Cell::Empty, "undo of an empty cell");
        debug_assert!(row == 0 || self.cells[row - 1][col] == Cell::Empty);
        self.cells[row][col] = Cell::Empty;
    }

    /// Columns in `[0, dice]` whose top cell is empty, in ascending order.
    /// This is move generation: the dice cap intersected with physical
    /// availability.
    pub fn reachable_columns(&self, dice: u8) -> Vec<usize> {
        let cap = (dice as usize).min(COLS - 1);
        (0..=cap).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Scan every horizontal, vertical, and diagonal 4-cell window for four
    /// consecutive cells of `cell`.
    pub fn has_four_in_row(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row][col + i] == cell) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row + i][col] == cell) {
                    return true;
                }
            }
        }

        // Diagonal (top-left to bottom-right, \)
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row + i][col + i] == cell) {
                    return true;
                }
            }
        }

        // Diagonal (bottom-left to top-right, /)
        for row in WINDOW - 1..ROWS {
            for col in 0..=COLS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row - i][col + i] == cell) {
                    return true;
                }
            }
        }

        false
    }

    /// A board is terminal when either color has four in a row or no empty
    /// cell remains. Evaluated fresh at every search node.
    pub fn is_terminal(&self) -> bool {
        self.has_four_in_row(Cell::Red) || self.has_four_in_row(Cell::Yellow) || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let rendered: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => "_",
                    Cell::Red => "R",
                    Cell::Yellow => "Y",
                })
                .collect();
            writeln!(f, "{}", rendered.join(" | "))?;
        }
        Ok(())
    }
}
