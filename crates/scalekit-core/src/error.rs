//! Error handling for ScaleKit
//!
//! Provides the error types shared by the ScaleKit crates:
//! - Input errors (numeric text typed into a scale field)
//! - A unified `Error` for anything that crosses a crate boundary
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Scale input error type
///
/// Raised when a committed text field value cannot be read as a scale.
/// The scale control treats both variants as "not a scale command" and
/// drops the input without touching any state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The text did not contain a single digit
    #[error("Input contains no digits")]
    NoDigits,

    /// The text has digits but no leading number could be read
    #[error("Malformed scale input: {input:?}")]
    Malformed {
        /// The raw text that was committed.
        input: String,
    },
}

/// Main error type for ScaleKit
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Scale input error
    #[error(transparent)]
    Input(#[from] InputError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an input error
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Input(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
