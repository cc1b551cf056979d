//! Parallel evaluation of root branches.
//!
//! Root branches share no mutable state, so each worker evaluates a
//! contiguous slice of them on its own. Results come back in branch order
//! regardless of the worker count, which keeps the decision deterministic.

use std::panic;
use std::thread;

use crate::search::expectimax::expectimax;
use crate::search::tree::Node;

/// Expectimax value of every branch, in the order given.
///
/// Uses `std::thread::scope`, so workers borrow the tree directly.
pub(crate) fn evaluate_branches(branches: &[Node], threads: usize) -> Vec<f64> {
    if threads <= 1 || branches.len() <= 1 {
        // Single-thread fast path, no scope overhead
        return branches.iter().map(expectimax).collect();
    }

    let chunk_size = branches.len().div_ceil(threads);
    thread::scope(|s| {
        let handles: Vec<_> = branches
            .chunks(chunk_size)
            .map(|chunk| s.spawn(move || chunk.iter().map(expectimax).collect::<Vec<f64>>()))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| handle.join().unwrap_or_else(|payload| panic::resume_unwind(payload)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use slidewise_core::Board;

    use super::evaluate_branches;
    use crate::search::expectimax::expectimax;
    use crate::search::tree::SearchTree;

    #[test]
    fn parallel_matches_sequential() {
        let board = Board::from_rows([
            [2, 0, 0, 4],
            [0, 8, 0, 0],
            [2, 0, 16, 0],
            [0, 0, 0, 2],
        ])
        .unwrap();
        let tree = SearchTree::grow(&board, 12, 3);
        let branches = tree.root().children();
        let sequential: Vec<f64> = branches.iter().map(expectimax).collect();
        for threads in 1..=6 {
            assert_eq!(evaluate_branches(branches, threads), sequential, "threads {threads}");
        }
    }

    #[test]
    fn no_branches_yields_no_values() {
        assert!(evaluate_branches(&[], 4).is_empty());
    }
}
