//! Core state machine primitives.
//!
//! - Phases and the `State` trait they implement
//! - Guard predicates that gate operations by phase
//! - Immutable history of phase transitions
//!
//! Everything here is pure: no randomness, no logging.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{Phase, State};
