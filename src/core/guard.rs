//! Guard predicates for gating operations by phase.
//!
//! A guard is a pure boolean function over a state. The machine consults
//! its guards before it lets an operation touch the session.

use super::state::State;
use std::fmt;
use std::marker::PhantomData;

/// Named pure predicate over a state.
///
/// # Example
///
/// ```rust
/// use numguess::core::{Guard, Phase, State};
///
/// let playing = Guard::new("playing", |p: &Phase| !p.is_final());
///
/// assert!(playing.check(&Phase::InProgress));
/// assert!(!playing.check(&Phase::Won));
/// ```
pub struct Guard<S: State> {
    name: &'static str,
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate.
    ///
    /// The name is only used in diagnostics.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            name,
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard admits this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<S: State> fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").field("name", &self.name).finish()
    }
}
