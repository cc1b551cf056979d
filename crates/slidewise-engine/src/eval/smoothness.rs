//! Smoothness penalty: absolute differences between orthogonal neighbours.

use slidewise_core::Board;

/// Neighbour offsets: left, up, right, down.
const NEIGHBORS: [(isize, isize); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

/// Sum over every cell of `|value - neighbour|` for each in-bounds
/// neighbour. Each adjacent pair is therefore counted twice.
pub fn smoothness_penalty(board: &Board) -> f64 {
    let size = board.size() as isize;
    let mut penalty: u64 = 0;
    for row in 0..size {
        for col in 0..size {
            let value = board.get(row as usize, col as usize);
            for (dr, dc) in NEIGHBORS {
                let (nr, nc) = (row + dr, col + dc);
                if (0..size).contains(&nr) && (0..size).contains(&nc) {
                    penalty += value.abs_diff(board.get(nr as usize, nc as usize));
                }
            }
        }
    }
    penalty as f64
}
