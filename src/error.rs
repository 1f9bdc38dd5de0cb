//! Validation errors surfaced to the presentation layer.
//!
//! Every error is recoverable: the session is left as it was so the
//! user can correct the input and submit again.

use crate::core::Phase;
use thiserror::Error;

/// Errors from starting a game.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StartError {
    #[error("No difficulty selected")]
    NoDifficultySelected,

    #[error("Range '{input}' is not a whole number")]
    InvalidNumberFormat { input: String },

    #[error("Range must be between {low} and {high}")]
    RangeOutOfBounds { low: u32, high: u32 },
}

/// Errors from evaluating a guess.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("Guess '{input}' is not a whole number")]
    InvalidNumberFormat { input: String },

    /// Guesses are only evaluated while a game is in progress.
    #[error("Cannot guess while the game is in phase '{phase}'")]
    InvalidPhase { phase: Phase },
}
