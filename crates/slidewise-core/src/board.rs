//! The N×N tile grid.

use std::fmt;

use crate::error::BoardError;

/// Largest supported grid edge.
pub const MAX_SIZE: usize = 7;

/// Smallest supported grid edge.
pub const MIN_SIZE: usize = 2;

/// Grid edge used when none is specified.
pub const DEFAULT_SIZE: usize = 4;

/// Largest tile accepted by [`Board::validate`].
///
/// A move never changes the tile sum and a spawn adds 2. A full 7×7 grid
/// of these tiles sums to less than `2^54`, so no tile can double past
/// `u64::MAX` short of about `2^62` spawns.
pub const MAX_TILE: u64 = 1 << 48;

/// A square grid of tiles, `0` meaning empty.
///
/// Storage is a fixed `MAX_SIZE × MAX_SIZE` array so that the board is
/// `Copy`: every simulated step works on its own value and nothing is
/// shared between search nodes. Cells outside `size × size` are always zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[u64; MAX_SIZE]; MAX_SIZE],
    size: u8,
}

impl Board {
    /// Return an empty board with the given edge length.
    pub fn new(size: usize) -> Result<Board, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        Ok(Board {
            cells: [[0; MAX_SIZE]; MAX_SIZE],
            size: size as u8,
        })
    }

    /// Build a validated board from a square array of rows.
    pub fn from_rows<const N: usize>(rows: [[u64; N]; N]) -> Result<Board, BoardError> {
        let mut board = Board::new(N)?;
        for (row, values) in rows.iter().enumerate() {
            board.cells[row][..N].copy_from_slice(values);
        }
        board.validate()?;
        Ok(board)
    }

    /// Assemble a board from already-checked parts. Used by notation parsing.
    pub(crate) fn from_raw(cells: [[u64; MAX_SIZE]; MAX_SIZE], size: usize) -> Board {
        Board {
            cells,
            size: size as u8,
        }
    }

    /// Edge length of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Value at `(row, col)`, `0` if empty.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[row][col]
    }

    /// Return a copy of this board with `value` placed at `(row, col)`.
    #[inline]
    pub fn with_tile(&self, row: usize, col: usize, value: u64) -> Board {
        debug_assert!(row < self.size() && col < self.size());
        let mut board = *self;
        board.cells[row][col] = value;
        board
    }

    /// The cells of one row.
    #[inline]
    pub fn row(&self, row: usize) -> &[u64] {
        &self.cells[row][..self.size()]
    }

    /// Mutable access to one row.
    #[inline]
    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [u64] {
        let size = self.size();
        &mut self.cells[row][..size]
    }

    /// Iterate over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u64]> + '_ {
        (0..self.size()).map(move |row| self.row(row))
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let size = self.size();
        (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == 0)
            .collect()
    }

    /// Return `true` if at least one cell is empty.
    pub fn has_empty_cell(&self) -> bool {
        self.rows().any(|row| row.contains(&0))
    }

    /// Sum of every tile on the board.
    pub fn tile_sum(&self) -> u64 {
        self.rows().flatten().sum()
    }

    /// Largest tile on the board, `0` for an empty board.
    pub fn max_tile(&self) -> u64 {
        self.rows().flatten().copied().max().unwrap_or(0)
    }

    /// Rotate the grid 90° clockwise in place.
    ///
    /// Cells are cycled ring by ring, so four rotations restore the board
    /// exactly.
    pub fn rotate_clockwise(&mut self) {
        let n = self.size();
        let m = &mut self.cells;
        for i in 0..n / 2 {
            for k in i..n - 1 - i {
                let top = m[i][k];
                m[i][k] = m[n - 1 - k][i];
                m[n - 1 - k][i] = m[n - 1 - i][n - 1 - k];
                m[n - 1 - i][n - 1 - k] = m[k][n - 1 - i];
                m[k][n - 1 - i] = top;
            }
        }
    }

    /// Rotate clockwise `turns` quarter turns.
    #[inline]
    pub(crate) fn rotate_turns(&mut self, turns: usize) {
        for _ in 0..turns % 4 {
            self.rotate_clockwise();
        }
    }

    /// Check that every non-zero cell holds a power of two between 2 and
    /// [`MAX_TILE`].
    pub fn validate(&self) -> Result<(), BoardError> {
        for (row, values) in self.rows().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 && (value < 2 || !value.is_power_of_two()) {
                    return Err(BoardError::InvalidTile { row, col, value });
                }
                if value > MAX_TILE {
                    return Err(BoardError::TileTooLarge {
                        row,
                        col,
                        value,
                        max: MAX_TILE,
                    });
                }
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            cells: [[0; MAX_SIZE]; MAX_SIZE],
            size: DEFAULT_SIZE as u8,
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an aligned grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        let width = board.max_tile().max(1).to_string().len();
        for (idx, row) in board.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                if value == 0 {
                    write!(f, "{:>width$}", ".")?;
                } else {
                    write!(f, "{value:>width$}")?;
                }
            }
        }
        Ok(())
    }
}
