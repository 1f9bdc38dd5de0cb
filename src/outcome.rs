//! Successful results of machine operations.

use crate::difficulty::DifficultyTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A game was started.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StartOutcome {
    pub tier: DifficultyTier,
    /// Inclusive upper bound of the guessing range `0..=range_top`
    pub range_top: u32,
}

/// Classification of a well-formed guess.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum GuessOutcome {
    TooLow,
    TooHigh,
    /// The secret was found; carries the number of guesses it took.
    Correct(u32),
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct(_))
    }
}

impl fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLow => f.write_str("too low"),
            Self::TooHigh => f.write_str("too high"),
            Self::Correct(guesses) => write!(f, "correct after {guesses} guesses"),
        }
    }
}
