//! Core 2048 types: the tile grid, move directions, and the slide/merge/spawn rules.

mod board;
mod direction;
mod error;
mod moves;
mod notation;
mod spawn;

pub use board::{Board, DEFAULT_SIZE, MAX_SIZE, MAX_TILE, MIN_SIZE, PrettyBoard};
pub use direction::Direction;
pub use error::{BoardError, NotationError};
pub use moves::MoveOutcome;
pub use spawn::SPAWN_TILE;
