//! Error types for textcursor.

use std::fmt;

/// Result type alias for textcursor operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for textcursor operations.
///
/// Impossible cursor moves are not errors; they report `false`. This type
/// only covers reads that violate a precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Read past the last character.
    OutOfBounds { index: usize, size: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { index, size } => {
                write!(
                    f,
                    "cursor index {index} out of bounds for buffer of {size} chars"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
