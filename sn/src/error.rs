//! Secret number error types

use thiserror::Error;

/// Errors constructing a draw session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("Draw range maximum must be at least 1")]
    ZeroMaximum,
}

/// A guess that could not be read as a whole number
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Enter a number before guessing")]
    Empty,

    #[error("'{input}' is not a whole number")]
    NotANumber { input: String },
}
