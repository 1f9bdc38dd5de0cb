//! A single play-through.

use crate::core::{Phase, StateHistory, StateTransition};
use crate::difficulty::DifficultyTier;
use serde::Serialize;
use uuid::Uuid;

/// State of one play-through, owned by the machine.
///
/// Serializes for display snapshots; the secret is never written out.
#[derive(Clone, Debug, Serialize)]
pub struct GameSession {
    id: Uuid,
    selected_tier: Option<DifficultyTier>,
    range_top: Option<u32>,
    #[serde(skip)]
    secret_value: Option<u32>,
    guess_count: u32,
    phase: Phase,
    history: StateHistory<Phase>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Fresh session awaiting a difficulty, with a new id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            selected_tier: None,
            range_top: None,
            secret_value: None,
            guess_count: 0,
            phase: Phase::AwaitingDifficulty,
            history: StateHistory::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn selected_tier(&self) -> Option<DifficultyTier> {
        self.selected_tier
    }

    /// Upper bound of the guessing range, once a game was started.
    pub fn range_top(&self) -> Option<u32> {
        self.range_top
    }

    /// The secret, once a game was started.
    pub fn secret_value(&self) -> Option<u32> {
        self.secret_value
    }

    pub fn guess_count(&self) -> u32 {
        self.guess_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    pub(crate) fn select_tier(&mut self, tier: DifficultyTier) {
        self.selected_tier = Some(tier);
    }

    /// Fix a new secret and zero the guess count.
    ///
    /// The transition is logged with the count of the game being replaced.
    pub(crate) fn begin(&mut self, range_top: u32, secret_value: u32) {
        self.enter(Phase::InProgress);
        self.range_top = Some(range_top);
        self.secret_value = Some(secret_value);
        self.guess_count = 0;
    }

    /// Count one evaluated guess, returning the new total.
    pub(crate) fn count_guess(&mut self) -> u32 {
        self.guess_count = self.guess_count.saturating_add(1);
        self.guess_count
    }

    pub(crate) fn win(&mut self) {
        self.enter(Phase::Won);
    }

    fn enter(&mut self, to: Phase) {
        let transition = StateTransition::now(self.phase, to, self.guess_count);
        self.history = self.history.record(transition);
        self.phase = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_blank() {
        let session = GameSession::new();
        assert_eq!(session.phase(), Phase::AwaitingDifficulty);
        assert_eq!(session.selected_tier(), None);
        assert_eq!(session.range_top(), None);
        assert_eq!(session.secret_value(), None);
        assert_eq!(session.guess_count(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn sessions_get_distinct_ids() {
        assert_ne!(GameSession::new().id(), GameSession::new().id());
    }

    #[test]
    fn begin_records_transition_and_zeroes_count() {
        let mut session = GameSession::new();
        session.select_tier(DifficultyTier::Easy);
        session.begin(25, 15);
        session.count_guess();
        session.begin(30, 2);

        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.range_top(), Some(30));
        assert_eq!(session.secret_value(), Some(2));
        assert_eq!(session.guess_count(), 0);
        assert_eq!(
            session.history().get_path(),
            vec![&Phase::AwaitingDifficulty, &Phase::InProgress, &Phase::InProgress]
        );
        assert_eq!(session.history().transitions()[1].guess_count, 1);
    }

    #[test]
    fn snapshot_hides_secret() {
        let mut session = GameSession::new();
        session.select_tier(DifficultyTier::Hard);
        session.begin(777, 123);

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["phase"], "InProgress");
        assert_eq!(json["selected_tier"], "Hard");
        assert_eq!(json["range_top"], 777);
        assert!(json.get("secret_value").is_none());
    }
}
