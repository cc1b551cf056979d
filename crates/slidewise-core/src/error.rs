//! Error types for board construction, move input, and grid notation.

/// Errors raised by board operations and board validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A direction ordinal outside `0..=3`.
    #[error("invalid direction ordinal {ordinal}, expected 0..=3")]
    InvalidDirection {
        /// The rejected ordinal.
        ordinal: u8,
    },
    /// A direction name that is not one of up, left, down, right.
    #[error("unknown direction: \"{name}\"")]
    UnknownDirection {
        /// The rejected name.
        name: String,
    },
    /// A tile was requested on a board with no empty cell.
    #[error("cannot spawn a tile on a full board")]
    BoardFull,
    /// The grid size is outside the supported range.
    #[error("grid size {size} outside supported range {min}..={max}")]
    InvalidSize {
        /// Requested size.
        size: usize,
        /// Smallest supported size.
        min: usize,
        /// Largest supported size.
        max: usize,
    },
    /// A non-zero cell does not hold a power of two of at least 2.
    #[error("tile {value} at ({row}, {col}) is not a power of two >= 2")]
    InvalidTile {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// The offending value.
        value: u64,
    },
    /// A tile is larger than the largest supported tile.
    #[error("tile {value} at ({row}, {col}) exceeds the largest supported tile {max}")]
    TileTooLarge {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// The offending value.
        value: u64,
        /// Largest accepted tile.
        max: u64,
    },
}

/// Errors that occur when parsing grid notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    /// The notation string has no rows.
    #[error("empty grid notation")]
    Empty,
    /// A row has a different number of cells than there are rows.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        found: usize,
        /// Number of cells expected (the row count).
        expected: usize,
    },
    /// A cell token is not a non-negative integer.
    #[error("invalid cell \"{token}\" at ({row}, {col})")]
    InvalidCell {
        /// Zero-based row.
        row: usize,
        /// Zero-based column.
        col: usize,
        /// The unparsable token.
        token: String,
    },
    /// The parsed grid fails board validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying validation error.
        #[from]
        source: BoardError,
    },
}
