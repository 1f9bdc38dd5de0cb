//! User-facing feedback text.
//!
//! The presentation layer decides how to draw feedback; this module
//! decides what it says and which tone it carries.

use crate::difficulty::RangeHint;
use crate::error::{GuessError, StartError};
use crate::outcome::{GuessOutcome, StartOutcome};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Emphasis of a feedback line. Renderers map tones to colors.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Tone {
    /// Muted guidance, such as the range hint
    Hint,
    /// Neutral progress, such as too-low and too-high
    Info,
    Success,
    Error,
}

/// A line of text to show the user.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Feedback {
    pub message: String,
    pub tone: Tone,
}

impl Feedback {
    pub fn new(message: impl Into<String>, tone: Tone) -> Self {
        Self {
            message: message.into(),
            tone,
        }
    }

    /// Feedback for the result of `start_game`.
    pub fn for_start(result: &Result<StartOutcome, StartError>) -> Self {
        match result {
            Ok(outcome) => outcome.into(),
            Err(err) => err.into(),
        }
    }

    /// Feedback for the result of `make_guess`.
    pub fn for_guess(result: &Result<GuessOutcome, GuessError>) -> Self {
        match result {
            Ok(outcome) => outcome.into(),
            Err(err) => err.into(),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&RangeHint> for Feedback {
    fn from(hint: &RangeHint) -> Self {
        Self::new(hint.to_string(), Tone::Hint)
    }
}

impl From<&StartOutcome> for Feedback {
    fn from(_: &StartOutcome) -> Self {
        Self::new("Game started! Enter your guess.", Tone::Success)
    }
}

impl From<&StartError> for Feedback {
    fn from(err: &StartError) -> Self {
        let message = match err {
            StartError::NoDifficultySelected => "Please select a valid difficulty.".to_string(),
            StartError::InvalidNumberFormat { .. } => "Please enter a valid number.".to_string(),
            StartError::RangeOutOfBounds { low, high } => {
                format!("Range must be between {low} and {high}.")
            }
        };
        Self::new(message, Tone::Error)
    }
}

impl From<&GuessOutcome> for Feedback {
    fn from(outcome: &GuessOutcome) -> Self {
        match outcome {
            GuessOutcome::TooLow => Self::new("Too low. Try again!", Tone::Info),
            GuessOutcome::TooHigh => Self::new("Too high. Try again!", Tone::Info),
            GuessOutcome::Correct(guesses) => Self::new(
                format!("Correct! You guessed it in {guesses} tries."),
                Tone::Success,
            ),
        }
    }
}

impl From<&GuessError> for Feedback {
    fn from(err: &GuessError) -> Self {
        match err {
            GuessError::InvalidNumberFormat { .. } => {
                Self::new("Please enter a number.", Tone::Error)
            }
            GuessError::InvalidPhase { .. } => {
                Self::new("Start a game before guessing.", Tone::Error)
            }
        }
    }
}
