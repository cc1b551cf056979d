//! Fixed-depth expectimax search and move selection.

pub mod config;
pub mod expectimax;
pub(crate) mod pool;
pub mod tree;

use slidewise_core::{Board, Direction};
use tracing::debug;

use config::SearchConfig;
use pool::evaluate_branches;
use tree::SearchTree;

/// Outcome of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play this direction.
    Move(Direction),
    /// No direction changes the board: the game is over.
    NoMoveAvailable,
}

impl Decision {
    /// The chosen direction, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Decision::Move(dir) => Some(dir),
            Decision::NoMoveAvailable => None,
        }
    }
}

/// Expected value of one legal root move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchEval {
    /// The move taken from the root.
    pub direction: Direction,
    /// Expectimax value of the position after that move.
    pub value: f64,
}

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Chosen move, or game over.
    pub decision: Decision,
    /// Expectimax value of the chosen branch, `None` when no move exists.
    pub value: Option<f64>,
    /// One entry per legal root move, in ordinal order.
    pub branches: Vec<BranchEval>,
    /// Nodes in the grown tree.
    pub nodes: u64,
    /// Layers grown below the root.
    pub depth: u8,
}

/// Expectimax searcher. Holds configuration only; every search grows a
/// fresh tree and drops it on return.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Mutable access to the configuration, for option handling.
    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Choose a move for `board` with accumulated `score`.
    ///
    /// Deterministic for a fixed board, score and depth. Ties go to the
    /// first direction in ordinal order (up, left, down, right).
    pub fn search(&self, board: &Board, score: u64) -> SearchResult {
        let tree = SearchTree::grow(board, score, self.config.depth);
        let roots = tree.root().children();
        let values = evaluate_branches(roots, self.config.threads);

        let branches: Vec<BranchEval> = roots
            .iter()
            .zip(values)
            .filter_map(|(node, value)| {
                node.direction()
                    .map(|direction| BranchEval { direction, value })
            })
            .collect();

        let best = select_best(&branches);
        let decision = match best {
            Some(branch) => Decision::Move(branch.direction),
            None => Decision::NoMoveAvailable,
        };
        let value = best.map(|b| b.value);
        let nodes = tree.node_count();

        debug!(?decision, ?value, nodes, depth = tree.depth(), "search complete");

        SearchResult {
            decision,
            value,
            branches,
            nodes,
            depth: tree.depth(),
        }
    }
}

/// Highest-valued branch; the first one wins ties.
fn select_best(branches: &[BranchEval]) -> Option<BranchEval> {
    let mut best: Option<BranchEval> = None;
    for branch in branches {
        if best.is_none_or(|b| branch.value > b.value) {
            best = Some(*branch);
        }
    }
    best
}

/// Choose a move with the default configuration.
pub fn decide_move(board: &Board, score: u64) -> Decision {
    Searcher::default().search(board, score).decision
}

#[cfg(test)]
mod tests {
    use slidewise_core::{Board, Direction};

    use super::{BranchEval, Decision, Searcher, decide_move, select_best};
    use crate::search::config::SearchConfig;
    use crate::search::tree::SearchTree;

    #[test]
    fn blocked_board_has_no_move() {
        let board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ])
        .unwrap();
        let result = Searcher::default().search(&board, 100);
        assert_eq!(result.decision, Decision::NoMoveAvailable);
        assert_eq!(result.value, None);
        assert!(result.branches.is_empty());
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn single_legal_move_is_chosen() {
        let boards = [
            Board::from_rows([[0, 2], [0, 4]]).unwrap(),
            Board::from_rows([
                [0, 2, 4, 8],
                [0, 4, 8, 2],
                [0, 2, 4, 8],
                [0, 4, 8, 2],
            ])
            .unwrap(),
        ];
        for board in boards {
            assert_eq!(board.legal_moves(), vec![Direction::Left]);
            assert_eq!(decide_move(&board, 0), Decision::Move(Direction::Left));
        }
    }

    #[test]
    fn branches_follow_ordinal_order() {
        let board = Board::default().with_tile(1, 1, 2);
        let result = Searcher::default().search(&board, 0);
        let dirs: Vec<Direction> = result.branches.iter().map(|b| b.direction).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
        let best = result
            .branches
            .iter()
            .map(|b| b.value)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.value, Some(best));
    }

    #[test]
    fn ties_resolve_to_first_direction() {
        let branch = |direction, value| BranchEval { direction, value };
        let branches = [
            branch(Direction::Left, 3.0),
            branch(Direction::Down, 7.5),
            branch(Direction::Right, 7.5),
        ];
        assert_eq!(select_best(&branches), Some(branch(Direction::Down, 7.5)));
        assert_eq!(select_best(&[]), None);
    }

    #[test]
    fn search_is_deterministic() {
        let board = Board::from_rows([
            [2, 0, 4, 0],
            [0, 2, 0, 0],
            [0, 0, 8, 0],
            [2, 0, 0, 16],
        ])
        .unwrap();
        let first = decide_move(&board, 40);
        for _ in 0..3 {
            assert_eq!(decide_move(&board, 40), first);
        }
    }

    #[test]
    fn reported_nodes_match_grown_tree() {
        let board = Board::default().with_tile(2, 1, 4).with_tile(0, 3, 2);
        let result = Searcher::default().search(&board, 16);
        assert_eq!(result.nodes, SearchTree::grow(&board, 16, 3).node_count());
    }

    #[test]
    fn depth_is_reported() {
        let board = Board::default().with_tile(0, 0, 2);
        for depth in 1..=4 {
            let searcher = Searcher::new(SearchConfig::new(depth, 1).unwrap());
            assert_eq!(searcher.search(&board, 0).depth, depth);
        }
    }
}
