//! The game state machine.
//!
//! The presentation layer calls these operations in response to user
//! input and renders what comes back. Failed validation never changes
//! the session.

use crate::core::{Guard, Phase};
use crate::difficulty::{DifficultyTier, RangeHint};
use crate::error::{GuessError, StartError};
use crate::input::parse_integer;
use crate::outcome::{GuessOutcome, StartOutcome};
use crate::secret::{RandomSecret, SecretSource};
use crate::session::GameSession;
use rand::rngs::StdRng;
use std::cmp::Ordering;
use tracing::{debug, info, instrument, warn};

/// Owns the active session and drives it through its phases.
#[derive(Debug)]
pub struct GameStateMachine<R: SecretSource = RandomSecret<StdRng>> {
    session: GameSession,
    secrets: R,
    guess_guard: Guard<Phase>,
}

impl GameStateMachine {
    /// Machine drawing secrets from an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_source(RandomSecret::from_entropy())
    }
}

impl Default for GameStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecretSource> GameStateMachine<R> {
    /// Machine drawing secrets from `secrets`.
    pub fn with_source(secrets: R) -> Self {
        Self {
            session: GameSession::new(),
            secrets,
            guess_guard: Guard::new("accepts_guesses", Phase::accepts_guesses),
        }
    }

    /// Record the chosen tier and return its bounds for display.
    ///
    /// The phase is left as it is; a running game keeps its range until
    /// the next start.
    #[instrument(skip(self))]
    pub fn select_difficulty(&mut self, tier: DifficultyTier) -> RangeHint {
        self.session.select_tier(tier);
        debug!(phase = %self.session.phase(), "difficulty selected");
        tier.hint()
    }

    /// Validate the range-top and start a game with a fresh secret.
    ///
    /// Checks, in order: a tier is selected, the input is an integer, the
    /// integer lies within the tier's bounds. Accepted from any phase;
    /// starting again re-rolls the secret and zeroes the guess count.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, raw_range_input: &str) -> Result<StartOutcome, StartError> {
        let Some(tier) = self.session.selected_tier() else {
            warn!("start rejected, no difficulty selected");
            return Err(StartError::NoDifficultySelected);
        };

        let Some(requested) = parse_integer(raw_range_input) else {
            debug!("start rejected, range is not an integer");
            return Err(StartError::InvalidNumberFormat {
                input: raw_range_input.to_string(),
            });
        };

        let (low, high) = tier.bounds();
        let range_top = match u32::try_from(requested) {
            Ok(top) if tier.admits(requested) => top,
            _ => {
                debug!(requested, low, high, "start rejected, range out of bounds");
                return Err(StartError::RangeOutOfBounds { low, high });
            }
        };

        let secret = self.secrets.draw(range_top);
        self.session.begin(range_top, secret);
        info!(%tier, range_top, session = %self.session.id(), "game started");

        Ok(StartOutcome { tier, range_top })
    }

    /// Evaluate a guess against the secret.
    ///
    /// Only well-formed guesses made while a game is in progress are
    /// counted.
    #[instrument(skip(self))]
    pub fn make_guess(&mut self, raw_guess_input: &str) -> Result<GuessOutcome, GuessError> {
        let phase = self.session.phase();
        let secret = match self.session.secret_value() {
            Some(secret) if self.guess_guard.check(&phase) => secret,
            _ => {
                warn!(%phase, guard = self.guess_guard.name(), "guess rejected");
                return Err(GuessError::InvalidPhase { phase });
            }
        };

        let Some(guess) = parse_integer(raw_guess_input) else {
            debug!("guess rejected, not an integer");
            return Err(GuessError::InvalidNumberFormat {
                input: raw_guess_input.to_string(),
            });
        };

        let guess_count = self.session.count_guess();
        let outcome = match guess.cmp(&i64::from(secret)) {
            Ordering::Less => GuessOutcome::TooLow,
            Ordering::Greater => GuessOutcome::TooHigh,
            Ordering::Equal => {
                self.session.win();
                info!(guess_count, "secret found");
                GuessOutcome::Correct(guess_count)
            }
        };
        debug!(guess_count, %outcome, "guess evaluated");

        Ok(outcome)
    }

    /// Discard the session and start over with a blank one.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        let previous = self.session.id();
        self.session = GameSession::new();
        info!(%previous, session = %self.session.id(), "session reset");
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn guess_count(&self) -> u32 {
        self.session.guess_count()
    }

    pub fn selected_tier(&self) -> Option<DifficultyTier> {
        self.session.selected_tier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::ScriptedSecret;

    fn scripted(secrets: impl IntoIterator<Item = u32>) -> GameStateMachine<ScriptedSecret> {
        GameStateMachine::with_source(ScriptedSecret::new(secrets))
    }

    #[test]
    fn select_difficulty_returns_bounds_and_keeps_phase() {
        let mut machine = scripted([0]);

        for tier in DifficultyTier::ALL {
            let hint = machine.select_difficulty(tier);
            assert_eq!((hint.low, hint.high), tier.bounds());
            assert_eq!(hint.tier, tier);
            assert_eq!(machine.selected_tier(), Some(tier));
            assert_eq!(machine.phase(), Phase::AwaitingDifficulty);
        }
    }

    #[test]
    fn start_requires_difficulty() {
        let mut machine = scripted([0]);

        assert_eq!(
            machine.start_game("25"),
            Err(StartError::NoDifficultySelected)
        );
        assert_eq!(machine.phase(), Phase::AwaitingDifficulty);
    }

    #[test]
    fn difficulty_is_checked_before_number_format() {
        let mut machine = scripted([0]);

        assert_eq!(
            machine.start_game("abc"),
            Err(StartError::NoDifficultySelected)
        );
    }

    #[test]
    fn start_rejects_non_integer_range() {
        let mut machine = scripted([0]);
        machine.select_difficulty(DifficultyTier::Easy);

        assert_eq!(
            machine.start_game("twenty"),
            Err(StartError::InvalidNumberFormat {
                input: "twenty".to_string()
            })
        );
        assert_eq!(machine.session().range_top(), None);
    }

    #[test]
    fn start_rejects_out_of_bounds_range() {
        let mut machine = scripted([0]);
        machine.select_difficulty(DifficultyTier::Medium);

        for raw in ["50", "99", "201", "-150", "99999999999999999999"] {
            assert_eq!(
                machine.start_game(raw),
                Err(StartError::RangeOutOfBounds { low: 100, high: 200 }),
                "{raw} should be out of bounds"
            );
        }
        assert_eq!(machine.phase(), Phase::AwaitingDifficulty);
        assert!(machine.session().history().is_empty());
    }

    #[test]
    fn start_accepts_bounds_inclusively() {
        let mut machine = scripted([0]);
        machine.select_difficulty(DifficultyTier::Hard);

        assert!(machine.start_game("500").is_ok());
        assert!(machine.start_game(" 1000 ").is_ok());
    }

    #[test]
    fn failed_start_keeps_running_game() {
        let mut machine = scripted([12]);
        machine.select_difficulty(DifficultyTier::Easy);
        machine.start_game("25").unwrap();
        machine.make_guess("3").unwrap();

        assert!(machine.start_game("31").is_err());
        assert_eq!(machine.phase(), Phase::InProgress);
        assert_eq!(machine.guess_count(), 1);
        assert_eq!(machine.session().secret_value(), Some(12));
    }

    #[test]
    fn easy_scenario_plays_to_a_win() {
        let mut machine = scripted([15]);
        machine.select_difficulty(DifficultyTier::Easy);

        let started = machine.start_game("25").unwrap();
        assert_eq!(
            started,
            StartOutcome {
                tier: DifficultyTier::Easy,
                range_top: 25
            }
        );
        assert_eq!(machine.phase(), Phase::InProgress);

        assert_eq!(machine.make_guess("10"), Ok(GuessOutcome::TooLow));
        assert_eq!(machine.guess_count(), 1);
        assert_eq!(machine.make_guess("15"), Ok(GuessOutcome::Correct(2)));
        assert_eq!(machine.phase(), Phase::Won);
    }

    #[test]
    fn high_guesses_are_too_high() {
        let mut machine = scripted([15]);
        machine.select_difficulty(DifficultyTier::Easy);
        machine.start_game("25").unwrap();

        assert_eq!(machine.make_guess("16"), Ok(GuessOutcome::TooHigh));
        assert_eq!(machine.make_guess("99999999999999999999"), Ok(GuessOutcome::TooHigh));
        assert_eq!(machine.make_guess("-1"), Ok(GuessOutcome::TooLow));
        assert_eq!(machine.guess_count(), 3);
    }

    #[test]
    fn malformed_guesses_are_not_counted() {
        let mut machine = scripted([15]);
        machine.select_difficulty(DifficultyTier::Easy);
        machine.start_game("25").unwrap();

        assert_eq!(
            machine.make_guess("1.5"),
            Err(GuessError::InvalidNumberFormat {
                input: "1.5".to_string()
            })
        );
        assert!(machine.make_guess("").is_err());
        assert_eq!(machine.guess_count(), 0);

        machine.make_guess("1").unwrap();
        assert_eq!(machine.guess_count(), 1);
    }

    #[test]
    fn guess_before_start_is_invalid_phase() {
        let mut machine = scripted([15]);

        assert_eq!(
            machine.make_guess("15"),
            Err(GuessError::InvalidPhase {
                phase: Phase::AwaitingDifficulty
            })
        );
        machine.select_difficulty(DifficultyTier::Easy);
        assert!(machine.make_guess("15").is_err());
        assert_eq!(machine.guess_count(), 0);
    }

    #[test]
    fn guess_after_win_is_invalid_phase() {
        let mut machine = scripted([15]);
        machine.select_difficulty(DifficultyTier::Easy);
        machine.start_game("25").unwrap();
        machine.make_guess("15").unwrap();

        assert_eq!(
            machine.make_guess("15"),
            Err(GuessError::InvalidPhase { phase: Phase::Won })
        );
        assert_eq!(machine.guess_count(), 1);
    }

    #[test]
    fn restarting_rerolls_and_zeroes_count() {
        let mut machine = scripted([15, 4]);
        machine.select_difficulty(DifficultyTier::Easy);
        machine.start_game("25").unwrap();
        machine.make_guess("15").unwrap();

        machine.start_game("30").unwrap();
        assert_eq!(machine.phase(), Phase::InProgress);
        assert_eq!(machine.guess_count(), 0);
        assert_eq!(machine.session().secret_value(), Some(4));
        assert_eq!(machine.session().range_top(), Some(30));
    }

    #[test]
    fn reset_returns_blank_session() {
        let mut machine = scripted([15]);
        machine.select_difficulty(DifficultyTier::Easy);
        machine.start_game("25").unwrap();
        machine.make_guess("15").unwrap();
        let old_id = machine.session().id();

        machine.reset();

        let session = machine.session();
        assert_ne!(session.id(), old_id);
        assert_eq!(session.phase(), Phase::AwaitingDifficulty);
        assert_eq!(session.selected_tier(), None);
        assert_eq!(session.range_top(), None);
        assert_eq!(session.secret_value(), None);
        assert_eq!(session.guess_count(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn history_tracks_the_game() {
        let mut machine = scripted([15]);
        machine.select_difficulty(DifficultyTier::Easy);
        machine.start_game("25").unwrap();
        machine.make_guess("1").unwrap();
        machine.make_guess("15").unwrap();

        let history = machine.session().history();
        assert_eq!(
            history.get_path(),
            vec![&Phase::AwaitingDifficulty, &Phase::InProgress, &Phase::Won]
        );
        assert_eq!(history.last().map(|t| t.guess_count), Some(2));
    }
}
