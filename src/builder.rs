//! Builder for configuring a [`GameStateMachine`].

use crate::difficulty::DifficultyTier;
use crate::machine::GameStateMachine;
use crate::secret::{RandomSecret, SecretSource};

/// Fluent configuration for a machine.
///
/// # Example
///
/// ```
/// use numguess::{DifficultyTier, GameBuilder, Phase};
///
/// let mut machine = GameBuilder::new()
///     .seed(42)
///     .difficulty(DifficultyTier::Easy)
///     .build();
///
/// assert!(machine.start_game("25").is_ok());
/// assert_eq!(machine.phase(), Phase::InProgress);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameBuilder {
    seed: Option<u64>,
    difficulty: Option<DifficultyTier>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the secret generator so games are reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pre-select a tier for the first session.
    ///
    /// A reset clears it like any other selection.
    pub fn difficulty(mut self, tier: DifficultyTier) -> Self {
        self.difficulty = Some(tier);
        self
    }

    /// Build a machine backed by a `StdRng`, seeded or OS-seeded.
    pub fn build(self) -> GameStateMachine {
        let secrets = match self.seed {
            Some(seed) => RandomSecret::from_seed(seed),
            None => RandomSecret::from_entropy(),
        };
        self.build_with(secrets)
    }

    /// Build a machine drawing secrets from `secrets`. Any seed is ignored.
    pub fn build_with<R: SecretSource>(self, secrets: R) -> GameStateMachine<R> {
        let mut machine = GameStateMachine::with_source(secrets);
        if let Some(tier) = self.difficulty {
            machine.select_difficulty(tier);
        }
        machine
    }
}
