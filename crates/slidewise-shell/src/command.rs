//! Shell command parsing.

use slidewise_core::{Board, DEFAULT_SIZE, Direction};

use crate::error::ShellError;

/// An engine option settable with `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellOption {
    /// Search depth in layers.
    Depth(u8),
    /// Worker threads for root branch evaluation.
    Threads(usize),
}

/// A parsed shell command.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// `newgame [size]` -- fresh board with two spawned tiles.
    NewGame { size: usize },
    /// `position <notation> [score <n>]` -- load a board.
    Position { board: Board, score: u64 },
    /// `seed <n>` -- reseed tile spawning.
    Seed(u64),
    /// `move <direction>` -- play one move and spawn a tile if it changed the board.
    Move(Direction),
    /// `go` -- ask the engine for a move.
    Go,
    /// `auto [max_moves]` -- let the engine play until game over.
    Auto { max_moves: Option<u64> },
    /// `undo` -- restore the position before the last move.
    Undo,
    /// `d` -- print the board.
    Display,
    /// `setoption name <id> value <x>`.
    SetOption(ShellOption),
    /// `quit` -- exit the shell.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "newgame" => {
            let size = match tokens.get(1) {
                Some(token) => parse_int(Some(token), "newgame", "size")?,
                None => DEFAULT_SIZE,
            };
            Ok(Command::NewGame { size })
        }
        "position" => parse_position(&tokens[1..]),
        "seed" => Ok(Command::Seed(parse_int(tokens.get(1), "seed", "seed")?)),
        "move" => {
            let token = tokens.get(1).ok_or(ShellError::MissingArgument {
                command: "move",
                param: "direction",
            })?;
            Ok(Command::Move(token.parse()?))
        }
        "go" => Ok(Command::Go),
        "auto" => {
            let max_moves = match tokens.get(1) {
                Some(token) => Some(parse_int(Some(token), "auto", "max_moves")?),
                None => None,
            };
            Ok(Command::Auto { max_moves })
        }
        "undo" => Ok(Command::Undo),
        "d" => Ok(Command::Display),
        "setoption" => parse_setoption(&tokens[1..]),
        "quit" => Ok(Command::Quit),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse the `position` command arguments.
///
/// Supports `position <notation>` and `position <notation> score <n>`.
fn parse_position(tokens: &[&str]) -> Result<Command, ShellError> {
    let notation = tokens.first().ok_or(ShellError::MissingArgument {
        command: "position",
        param: "notation",
    })?;
    let board: Board = notation.parse()?;

    let score = match tokens.get(1) {
        Some(&"score") => parse_int(tokens.get(2), "position", "score")?,
        _ => 0,
    };

    Ok(Command::Position { board, score })
}

/// Parse `setoption name <id> value <x>`. Option names are case-insensitive.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ShellError> {
    if tokens.len() != 4 || tokens[0] != "name" || tokens[2] != "value" {
        return Err(ShellError::MalformedSetOption);
    }
    let value = Some(&tokens[3]);
    let option = match tokens[1].to_ascii_lowercase().as_str() {
        "depth" => ShellOption::Depth(parse_int(value, "setoption", "depth")?),
        "threads" => ShellOption::Threads(parse_int(value, "setoption", "threads")?),
        _ => {
            return Err(ShellError::UnknownOption {
                name: tokens[1].to_string(),
            })
        }
    };
    Ok(Command::SetOption(option))
}

/// Parse an integer value from a token.
fn parse_int<T: std::str::FromStr>(
    token: Option<&&str>,
    command: &'static str,
    param: &'static str,
) -> Result<T, ShellError> {
    let value = token.ok_or(ShellError::MissingArgument { command, param })?;
    value.parse().map_err(|_| ShellError::InvalidNumber {
        param,
        value: value.to_string(),
    })
}
