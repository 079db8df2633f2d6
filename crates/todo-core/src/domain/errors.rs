//! Errors raised by the todo core.
//!
//! Everything except `Console` is a user-input condition: the session turns it
//! into a message and carries on. Only `Console` escapes `Session::run`.

use thiserror::Error;

/// Why a menu selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// Input did not parse as an integer.
    #[error("not a number")]
    NotANumber,
    /// Integer outside the menu range.
    #[error("not between 1 and 5")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("invalid menu choice: {0}")]
    InvalidChoice(ChoiceError),

    #[error("invalid task position {position} (tasks: {len})")]
    InvalidPosition { position: usize, len: usize },

    #[error("no tasks found")]
    EmptyList,

    #[error("console: {0}")]
    Console(String),
}

impl From<std::io::Error> for TodoError {
    fn from(err: std::io::Error) -> Self {
        TodoError::Console(err.to_string())
    }
}
