//! Phase transition history.
//!
//! Each session keeps an immutable log of the phase changes it went
//! through, stamped with the time and the guess count at that moment.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single phase change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Guesses evaluated in the session when the transition occurred
    pub guess_count: u32,
}

impl<S: State> StateTransition<S> {
    /// Transition stamped with the current time.
    pub fn now(from: S, to: S, guess_count: u32) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
            guess_count,
        }
    }
}

/// Ordered history of state transitions.
///
/// `record` returns a new history and leaves the receiver untouched.
///
/// # Example
///
/// ```rust
/// use numguess::core::{Phase, StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(Phase::AwaitingDifficulty, Phase::InProgress, 0))
///     .record(StateTransition::now(Phase::InProgress, Phase::Won, 3));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::AwaitingDifficulty, &Phase::InProgress, &Phase::Won]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States traversed, in order.
    ///
    /// The `from` state of the first transition, then the `to` state of
    /// every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// `None` when no transitions were recorded.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
