//! Static evaluation of leaf positions.

pub mod smoothness;
pub mod weights;

use slidewise_core::Board;

use smoothness::smoothness_penalty;
use weights::positional_score;

/// Heuristic value of `board` reached with accumulated `score`.
///
/// `positional weight sum + score - smoothness penalty`. Pure and total for
/// every valid board.
pub fn evaluate(board: &Board, score: u64) -> f64 {
    positional_score(board) + score as f64 - smoothness_penalty(board)
}

#[cfg(test)]
mod tests {
    use slidewise_core::Board;

    use super::evaluate;

    #[test]
    fn empty_board_is_worth_its_score() {
        assert_eq!(evaluate(&Board::default(), 0), 0.0);
        assert_eq!(evaluate(&Board::default(), 20), 20.0);
    }

    #[test]
    fn single_tile_combines_all_terms() {
        // weight -3 * 2 = -6, penalty 8, score 9.
        let board = Board::default().with_tile(0, 0, 2);
        assert_eq!(evaluate(&board, 9), -5.0);
    }

    #[test]
    fn corner_beats_opposite_corner() {
        let good = Board::default().with_tile(3, 3, 64);
        let bad = Board::default().with_tile(0, 0, 64);
        assert!(evaluate(&good, 0) > evaluate(&bad, 0));
    }

    #[test]
    fn every_size_evaluates() {
        for size in 2..=7 {
            let board = Board::new(size).unwrap().with_tile(size - 1, 0, 2);
            assert!(evaluate(&board, 0).is_finite());
        }
    }
}
