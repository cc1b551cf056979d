//! Search configuration.

use crate::error::EngineError;

/// Layers grown below the root by default: move, spawn, move.
pub const DEFAULT_DEPTH: u8 = 3;

/// Deepest supported search. The whole tree is held in memory; on an
/// almost empty 7×7 grid a depth-5 tree has under 200k nodes, and each
/// further spawn layer multiplies that by up to 48.
pub const MAX_DEPTH: u8 = 5;

/// Largest supported worker count.
pub const MAX_THREADS: usize = 64;

/// Knobs for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of alternating layers grown below the root.
    pub depth: u8,
    /// Worker threads used to evaluate root branches.
    pub threads: usize,
}

impl SearchConfig {
    /// Build a validated configuration.
    pub fn new(depth: u8, threads: usize) -> Result<SearchConfig, EngineError> {
        let mut config = SearchConfig::default();
        config.set_depth(depth)?;
        config.set_threads(threads)?;
        Ok(config)
    }

    /// Change the search depth.
    pub fn set_depth(&mut self, depth: u8) -> Result<(), EngineError> {
        if !(1..=MAX_DEPTH).contains(&depth) {
            return Err(EngineError::InvalidDepth {
                depth,
                max: MAX_DEPTH,
            });
        }
        self.depth = depth;
        Ok(())
    }

    /// Change the number of worker threads.
    pub fn set_threads(&mut self, threads: usize) -> Result<(), EngineError> {
        if !(1..=MAX_THREADS).contains(&threads) {
            return Err(EngineError::InvalidThreads {
                threads,
                max: MAX_THREADS,
            });
        }
        self.threads = threads;
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            threads: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_DEPTH, MAX_DEPTH, SearchConfig};
    use crate::error::EngineError;

    #[test]
    fn default_values() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, DEFAULT_DEPTH);
        assert_eq!(config.threads, 1);
    }

    #[test]
    fn rejects_zero_depth() {
        assert_eq!(
            SearchConfig::new(0, 1),
            Err(EngineError::InvalidDepth { depth: 0, max: MAX_DEPTH })
        );
    }

    #[test]
    fn rejects_excess_depth_and_threads() {
        assert_eq!(MAX_DEPTH, 5);
        assert_eq!(
            SearchConfig::new(6, 1),
            Err(EngineError::InvalidDepth { depth: 6, max: 5 })
        );
        assert!(matches!(
            SearchConfig::new(3, 0),
            Err(EngineError::InvalidThreads { threads: 0, .. })
        ));
    }

    #[test]
    fn failed_update_keeps_previous_value() {
        let mut config = SearchConfig::new(2, 4).unwrap();
        assert!(config.set_depth(0).is_err());
        assert_eq!(config.depth, 2);
        assert!(config.set_threads(1000).is_err());
        assert_eq!(config.threads, 4);
    }
}
