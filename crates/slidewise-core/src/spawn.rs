//! Random tile placement.

use rand::Rng;
use tracing::trace;

use crate::board::Board;
use crate::error::BoardError;

/// Value of every spawned tile.
pub const SPAWN_TILE: u64 = 2;

impl Board {
    /// Return a copy with a [`SPAWN_TILE`] placed on a uniformly random
    /// empty cell.
    ///
    /// This is the only source of randomness in the crate; search never
    /// calls it and enumerates spawn positions instead.
    pub fn spawn_random_tile<R: Rng>(&self, rng: &mut R) -> Result<Board, BoardError> {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return Err(BoardError::BoardFull);
        }
        let (row, col) = empty[rng.random_range(0..empty.len())];
        trace!(row, col, "spawned tile");
        Ok(self.with_tile(row, col, SPAWN_TILE))
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::SPAWN_TILE;
    use crate::board::Board;
    use crate::error::BoardError;

    #[test]
    fn spawn_fills_one_empty_cell() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::from_rows([[2, 0], [0, 4]]).unwrap();
        let next = board.spawn_random_tile(&mut rng).unwrap();
        assert_eq!(next.empty_cells().len(), 1);
        assert_eq!(next.tile_sum(), board.tile_sum() + SPAWN_TILE);
        assert_eq!(next.get(0, 0), 2);
        assert_eq!(next.get(1, 1), 4);
    }

    #[test]
    fn spawn_on_full_board_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let board = Board::from_rows([[2, 4], [4, 2]]).unwrap();
        assert_eq!(board.spawn_random_tile(&mut rng), Err(BoardError::BoardFull));
    }

    #[test]
    fn spawn_reaches_every_empty_cell() {
        let mut rng = StdRng::seed_from_u64(2048);
        let board = Board::default();
        let mut seen = [[false; 4]; 4];
        for _ in 0..500 {
            let next = board.spawn_random_tile(&mut rng).unwrap();
            for (row, col) in board.empty_cells() {
                if next.get(row, col) != 0 {
                    seen[row][col] = true;
                }
            }
        }
        assert!(seen.iter().flatten().all(|&hit| hit));
    }

    #[test]
    fn same_seed_same_spawns() {
        let board = Board::default();
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            assert_eq!(
                board.spawn_random_tile(&mut a).unwrap(),
                board.spawn_random_tile(&mut b).unwrap()
            );
        }
    }
}
