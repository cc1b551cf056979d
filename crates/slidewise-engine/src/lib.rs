//! Expectimax search and static evaluation for slidewise.

pub mod error;
pub mod eval;
pub mod search;

pub use error::EngineError;
pub use eval::evaluate;
pub use search::config::{DEFAULT_DEPTH, MAX_DEPTH, MAX_THREADS, SearchConfig};
pub use search::expectimax::expectimax;
pub use search::tree::{Node, NodeKind, SearchTree};
pub use search::{BranchEval, Decision, SearchResult, Searcher, decide_move};
