//! The `State` trait and the game's phases.
//!
//! A session always sits in exactly one [`Phase`]. Phases are plain values:
//! inspecting them has no side effects.

use crate::macros::state_enum;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition history
/// - `PartialEq`: guards and tests compare states
/// - `Debug`: states show up in tracing spans
/// - `Serialize` + `DeserializeOwned`: sessions are snapshotted by the
///   presentation layer
pub trait State: Clone + PartialEq + Debug + Serialize + DeserializeOwned + Send + Sync {
    /// Name of the state for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

state_enum! {
    /// Position of a session along its lifecycle.
    ///
    /// ```text
    /// AwaitingDifficulty --start_game(valid)--> InProgress
    /// InProgress --make_guess(wrong)--> InProgress
    /// InProgress --make_guess(correct)--> Won
    /// (any) --reset--> AwaitingDifficulty
    /// ```
    pub enum Phase {
        /// Fresh session; no game has been started.
        AwaitingDifficulty,
        /// A tier is known and the range-top is still missing.
        AwaitingRange,
        /// A secret is set and guesses are accepted.
        InProgress,
        /// The secret was guessed.
        Won,
    }
    final: [Won]
}

impl Phase {
    /// Whether guesses are evaluated in this phase.
    pub fn accepts_guesses(&self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::AwaitingDifficulty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_names_match_variants() {
        assert_eq!(Phase::AwaitingDifficulty.name(), "AwaitingDifficulty");
        assert_eq!(Phase::AwaitingRange.name(), "AwaitingRange");
        assert_eq!(Phase::InProgress.name(), "InProgress");
        assert_eq!(Phase::Won.name(), "Won");
    }

    #[test]
    fn only_won_is_final() {
        assert!(!Phase::AwaitingDifficulty.is_final());
        assert!(!Phase::AwaitingRange.is_final());
        assert!(!Phase::InProgress.is_final());
        assert!(Phase::Won.is_final());
    }

    #[test]
    fn only_in_progress_accepts_guesses() {
        assert!(Phase::InProgress.accepts_guesses());
        assert!(!Phase::AwaitingDifficulty.accepts_guesses());
        assert!(!Phase::AwaitingRange.accepts_guesses());
        assert!(!Phase::Won.accepts_guesses());
    }

    #[test]
    fn default_phase_awaits_difficulty() {
        assert_eq!(Phase::default(), Phase::AwaitingDifficulty);
    }

    #[test]
    fn phase_serializes_by_name() {
        let json = serde_json::to_string(&Phase::InProgress).unwrap();
        assert_eq!(json, "\"InProgress\"");
        let back: Phase = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Phase::InProgress);
    }
}
