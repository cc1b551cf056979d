//! Engine configuration errors.

/// Errors raised when configuring a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Search depth outside `1..=max`.
    #[error("invalid search depth {depth}, expected 1..={max}")]
    InvalidDepth {
        /// Requested depth.
        depth: u8,
        /// Deepest supported search.
        max: u8,
    },
    /// Thread count outside `1..=max`.
    #[error("invalid thread count {threads}, expected 1..={max}")]
    InvalidThreads {
        /// Requested thread count.
        threads: usize,
        /// Largest supported thread count.
        max: usize,
    },
}
