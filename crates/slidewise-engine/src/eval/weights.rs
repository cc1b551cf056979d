//! Positional weight table.
//!
//! Large weights sit in the bottom-right corner and along the right edge;
//! the left columns are negative.

use slidewise_core::Board;

/// Reference weights for a 4×4 grid, indexed `[row][col]`.
#[rustfmt::skip]
pub const WEIGHTS_4X4: [[f64; 4]; 4] = [
    [-3.0, -2.0,  3.0,   6.5],
    [-3.5, -1.8,  1.0,   7.0],
    [-3.7, -1.5,  0.7,   8.0],
    [-3.8, -0.5,  0.5, 100.0],
];

/// Map a row or column index on an `size`-edge grid onto the 4×4 table.
#[inline]
fn scaled_index(index: usize, size: usize) -> usize {
    let last = size - 1;
    (index * 3 + last / 2) / last
}

/// Weight of cell `(row, col)` on a grid with edge `size`.
///
/// A 4×4 grid reads the table directly; other sizes sample it at the
/// nearest scaled coordinate, so the corner always carries the top weight.
#[inline]
pub fn weight(size: usize, row: usize, col: usize) -> f64 {
    WEIGHTS_4X4[scaled_index(row, size)][scaled_index(col, size)]
}

/// Sum of every tile multiplied by its positional weight.
pub fn positional_score(board: &Board) -> f64 {
    let size = board.size();
    board
        .rows()
        .enumerate()
        .flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(col, &value)| weight(size, row, col) * value as f64)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use slidewise_core::{Board, MAX_SIZE, MIN_SIZE};

    use super::{WEIGHTS_4X4, positional_score, weight};

    #[test]
    fn four_by_four_reads_table_directly() {
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(weight(4, row, col), WEIGHTS_4X4[row][col]);
            }
        }
    }

    #[test]
    fn corner_carries_top_weight_for_every_size() {
        for size in MIN_SIZE..=MAX_SIZE {
            assert_eq!(weight(size, size - 1, size - 1), 100.0, "size {size}");
            assert_eq!(weight(size, 0, 0), -3.0, "size {size}");
        }
    }

    #[test]
    fn positional_score_of_single_corner_tile() {
        let board = Board::default().with_tile(3, 3, 2);
        assert_eq!(positional_score(&board), 200.0);
    }

    #[test]
    fn positional_score_sums_cells() {
        let board = Board::default().with_tile(0, 0, 4).with_tile(0, 3, 2);
        assert_eq!(positional_score(&board), -12.0 + 13.0);
    }
}
