//! Grid notation parsing and serialization for [`Board`].
//!
//! Rows are separated by `/` and cells by `,`, top row first:
//! `2,2,0,0/0,0,0,0/0,0,0,0/0,0,0,0`. The row count fixes the grid size.

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, MAX_SIZE, MIN_SIZE};
use crate::error::{BoardError, NotationError};

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(notation: &str) -> Result<Board, NotationError> {
        let notation = notation.trim();
        if notation.is_empty() {
            return Err(NotationError::Empty);
        }

        let rows: Vec<&str> = notation.split('/').collect();
        let size = rows.len();
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            }
            .into());
        }

        let mut cells = [[0u64; MAX_SIZE]; MAX_SIZE];
        for (row, row_str) in rows.iter().enumerate() {
            let tokens: Vec<&str> = row_str.split(',').map(str::trim).collect();
            if tokens.len() != size {
                return Err(NotationError::RaggedRow {
                    row,
                    found: tokens.len(),
                    expected: size,
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                cells[row][col] = token.parse().map_err(|_| NotationError::InvalidCell {
                    row,
                    col,
                    token: token.to_string(),
                })?;
            }
        }

        let board = Board::from_raw(cells, size);
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                write!(f, "/")?;
            }
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{value}")?;
            }
        }
        Ok(())
    }
}
