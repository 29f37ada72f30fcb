//! Input error types for SORTLAB.

use std::fmt;

/// Input result type
pub type InputResult<T> = Result<T, InputError>;

/// Input error type
///
/// These are the only recoverable failures in the system. The sort
/// algorithms themselves cannot fail on a valid integer sequence of
/// any length, including zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// A token could not be parsed as a signed integer
    InvalidToken {
        /// The offending token, trimmed
        token: String,
    },

    /// No integers remained after parsing
    Empty,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidToken { token } => {
                write!(f, "'{}' is not a valid integer", token)
            }
            Self::Empty => write!(f, "no integers provided"),
        }
    }
}

impl std::error::Error for InputError {}
