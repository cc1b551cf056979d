//! Move execution via copy-make.
//!
//! Only the leftward slide is implemented directly. Every other direction
//! rotates the board so that it becomes "left", applies the same primitive,
//! then rotates back.

use crate::board::Board;
use crate::direction::Direction;

/// Result of applying one move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Board after the move (identical to the input if nothing moved).
    pub board: Board,
    /// Score after adding every merge made by the move.
    pub score: u64,
    /// Whether any tile moved or merged. An unchanged board is an illegal
    /// move and must not be followed by a spawn.
    pub changed: bool,
}

impl Board {
    /// Apply `dir` to a copy of this board, carrying `score` alongside.
    /// The score saturates at `u64::MAX`.
    pub fn apply_move(&self, score: u64, dir: Direction) -> MoveOutcome {
        let turns = dir.clockwise_turns();
        let mut board = *self;
        board.rotate_turns(turns);

        if !board.can_move_left() {
            return MoveOutcome {
                board: *self,
                score,
                changed: false,
            };
        }

        let mut score = score;
        for row in 0..board.size() {
            score = score.saturating_add(merge_row(board.row_mut(row)));
        }
        board.rotate_turns(4 - turns);

        MoveOutcome {
            board,
            score,
            changed: true,
        }
    }

    /// Return `true` if some tile can slide or merge leftward.
    ///
    /// Holds iff some row has an empty cell directly left of a tile, or two
    /// horizontally adjacent equal tiles.
    pub fn can_move_left(&self) -> bool {
        self.rows().any(|row| {
            row.windows(2)
                .any(|pair| (pair[0] == 0 && pair[1] != 0) || (pair[0] != 0 && pair[0] == pair[1]))
        })
    }

    /// Return `true` if moving in `dir` would change the board.
    pub fn is_legal(&self, dir: Direction) -> bool {
        let mut board = *self;
        board.rotate_turns(dir.clockwise_turns());
        board.can_move_left()
    }

    /// Legal directions in ordinal order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.is_legal(dir))
            .collect()
    }

    /// Return `true` unless the game is over: some direction changes the
    /// board, or some cell is empty.
    pub fn can_any_move_occur(&self) -> bool {
        self.has_empty_cell() || Direction::ALL.into_iter().any(|dir| self.is_legal(dir))
    }
}

/// Compact all tiles to the left of the row, preserving order.
fn slide_row(row: &mut [u64]) {
    let mut write = 0;
    for read in 0..row.len() {
        if row[read] != 0 {
            row[write] = row[read];
            write += 1;
        }
    }
    for cell in &mut row[write..] {
        *cell = 0;
    }
}

/// Slide, then merge adjacent equal pairs left to right, re-sliding after
/// each merge. Returns the total value of the merged tiles.
///
/// The scan index keeps advancing after a re-slide, so `[2, 2, 2, 0]`
/// becomes `[4, 2, 0, 0]`.
fn merge_row(row: &mut [u64]) -> u64 {
    slide_row(row);
    let mut gained = 0;
    for k in 0..row.len().saturating_sub(1) {
        if row[k] != 0 && row[k] == row[k + 1] {
            row[k] *= 2;
            row[k + 1] = 0;
            gained += row[k];
            slide_row(row);
        }
    }
    gained
}
