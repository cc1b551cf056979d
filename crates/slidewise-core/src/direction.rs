//! Move directions.

use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// A sliding direction.
///
/// The discriminants are the canonical ordinals used on the wire and in
/// tie-breaking: up, left, down, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Direction {
    /// All directions in ordinal order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Return the ordinal (0..3).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert an ordinal into a direction.
    pub fn from_index(ordinal: u8) -> Result<Direction, BoardError> {
        match ordinal {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Left),
            2 => Ok(Direction::Down),
            3 => Ok(Direction::Right),
            _ => Err(BoardError::InvalidDirection { ordinal }),
        }
    }

    /// Number of clockwise quarter turns that bring this direction onto "left".
    #[inline]
    pub(crate) const fn clockwise_turns(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }

    /// Lowercase name, as used by the shell protocol.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
            Direction::Right => "right",
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = BoardError;

    fn try_from(ordinal: u8) -> Result<Direction, BoardError> {
        Direction::from_index(ordinal)
    }
}

impl FromStr for Direction {
    type Err = BoardError;

    /// Accepts a name (`"up"`, case-insensitive) or an ordinal (`"0"`).
    fn from_str(s: &str) -> Result<Direction, BoardError> {
        if let Ok(ordinal) = s.parse::<u8>() {
            return Direction::from_index(ordinal);
        }
        Direction::ALL
            .into_iter()
            .find(|dir| dir.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownDirection {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
