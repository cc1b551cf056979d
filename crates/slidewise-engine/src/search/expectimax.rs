//! Expectimax evaluation over a grown tree.

use crate::eval::evaluate;
use crate::search::tree::{Node, NodeKind};

/// Expectimax value of `node`.
///
/// Leaves (including move-choice nodes with no legal move) take the static
/// heuristic; move-choice nodes take the maximum child value; chance nodes
/// take the unweighted mean of their children.
pub fn expectimax(node: &Node) -> f64 {
    let children = node.children();
    if children.is_empty() {
        return evaluate(node.board(), node.score());
    }

    match node.kind() {
        NodeKind::MoveChoice => children
            .iter()
            .map(expectimax)
            .fold(f64::NEG_INFINITY, f64::max),
        NodeKind::Chance => {
            children.iter().map(expectimax).sum::<f64>() / children.len() as f64
        }
    }
}
