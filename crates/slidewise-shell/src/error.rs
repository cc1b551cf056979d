//! Shell protocol errors.

use slidewise_core::{BoardError, NotationError};
use slidewise_engine::EngineError;

/// Errors that can occur while parsing or executing shell commands.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// A command is missing a required argument.
    #[error("{command}: missing {param}")]
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// The missing argument.
        param: &'static str,
    },

    /// A numeric argument could not be parsed.
    #[error("invalid {param}: {value}")]
    InvalidNumber {
        /// The argument name.
        param: &'static str,
        /// The string that failed to parse.
        value: String,
    },

    /// `setoption` does not follow `name <id> value <x>`.
    #[error("malformed setoption command")]
    MalformedSetOption,

    /// `setoption` names an option the shell does not know.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The rejected option name.
        name: String,
    },

    /// A board rule or board input was violated.
    #[error(transparent)]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// A grid notation string failed to parse.
    #[error("invalid position: {source}")]
    Notation {
        /// The underlying notation error.
        #[from]
        source: NotationError,
    },

    /// A search option was out of range.
    #[error(transparent)]
    Engine {
        /// The underlying engine error.
        #[from]
        source: EngineError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
