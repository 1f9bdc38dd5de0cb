//! Numguess: the state machine behind a number guessing game
//!
//! The user picks a difficulty tier, enters the top of the guessing range
//! within that tier's bounds, and guesses a secret in `0..=range_top`
//! with too-low/too-high feedback until correct. This crate owns that
//! logic; drawing windows and reading keys is left to a presentation
//! layer that calls [`GameStateMachine`] and renders what it returns.
//!
//! # Core Concepts
//!
//! - **Phase**: where a session is in its lifecycle, see [`Phase`]
//! - **Tier**: a named difficulty with fixed range-top bounds
//! - **Session**: one play-through, owned by the machine
//! - **Feedback**: the text and tone to show for each result
//!
//! # Example
//!
//! ```rust
//! use numguess::{DifficultyTier, GameStateMachine, GuessOutcome, Phase, ScriptedSecret};
//!
//! let mut machine = GameStateMachine::with_source(ScriptedSecret::new([15]));
//!
//! let hint = machine.select_difficulty(DifficultyTier::Easy);
//! assert_eq!((hint.low, hint.high), (20, 30));
//!
//! machine.start_game("25").unwrap();
//! assert_eq!(machine.make_guess("10"), Ok(GuessOutcome::TooLow));
//! assert_eq!(machine.make_guess("15"), Ok(GuessOutcome::Correct(2)));
//! assert_eq!(machine.phase(), Phase::Won);
//! ```

mod macros;

pub mod builder;
pub mod core;
pub mod difficulty;
pub mod error;
pub mod feedback;
pub mod input;
pub mod machine;
pub mod outcome;
pub mod secret;
pub mod session;

// Re-export commonly used types
pub use builder::GameBuilder;
pub use crate::core::{Phase, State};
pub use difficulty::{DifficultyTier, RangeHint, UnknownTier};
pub use error::{GuessError, StartError};
pub use feedback::{Feedback, Tone};
pub use machine::GameStateMachine;
pub use outcome::{GuessOutcome, StartOutcome};
pub use secret::{RandomSecret, ScriptedSecret, SecretSource};
pub use session::GameSession;
