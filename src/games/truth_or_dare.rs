//! "Wahrheit oder Pflicht" with penalties.
//!
//! - Up to 12 players, each tagged with a group when added
//! - Setup selects one or more prompt categories
//! - Each turn the player picks truth or dare; refusing earns one penalty
//!   (Strafaufgabe after a truth, Strafrage after a dare)
//! - The active game is saved after every turn so a reload resumes it

use crate::content::{builtin, Choice, Prompt, TruthOrDareDeck};
use crate::core::{
    Attribute, GameRng, GameVariant, Group, Participant, ParticipantResult, Result,
    Session, SessionConfig, SessionStatus, VariantConfig,
};
use crate::persistence::{self, SnapshotStore};

/// Store handle usable across threads (needed by the Python bindings).
pub type BoxedStore = Box<dyn SnapshotStore + Send>;

/// Names of the built-in categories, all selected by default.
pub fn default_categories() -> Vec<String> {
    builtin::TRUTH_OR_DARE_CATEGORIES
        .iter()
        .map(|(name, _)| (*name).to_string())
        .collect()
}

/// Truth-or-Dare game.
pub struct TruthOrDare {
    session: Session,
    deck: TruthOrDareDeck,
    penalty_rng: GameRng,
    current: Option<(Choice, Prompt)>,
    penalty_shown: bool,
    store: Option<BoxedStore>,
}

impl TruthOrDare {
    /// New game over `deck`.
    pub fn new(deck: TruthOrDareDeck, seed: u64) -> Self {
        let rng = GameRng::new(seed);
        let penalty_rng = rng.for_context("penalty");
        Self {
            session: Session::with_rng(VariantConfig::for_variant(GameVariant::TruthOrDare), rng),
            deck,
            penalty_rng,
            current: None,
            penalty_shown: false,
            store: None,
        }
    }

    /// New game over the built-in deck.
    pub fn with_builtin_deck(seed: u64) -> Self {
        Self::new(builtin::truth_or_dare_deck(), seed)
    }

    /// Attach a store, resuming a saved active game if there is one.
    ///
    /// A resumed game draws penalties from its own seed, not this one.
    #[must_use]
    pub fn with_store(mut self, mut store: BoxedStore) -> Self {
        let config = self.session.config().clone();
        let rng = self.session.rng().clone();
        self.session = persistence::restore_or_new(&mut store, config, rng);
        self.penalty_rng = self.session.rng().for_context("penalty");
        self.store = Some(store);
        self
    }

    /// Underlying session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn add_player(&mut self, name: &str, group: Group) -> Result<Participant> {
        self.session.add_participant(name, Some(Attribute::Group(group)))
    }

    pub fn remove_player(&mut self, index: usize) -> Result<Participant> {
        self.session.remove_participant(index)
    }

    /// Start play. `config.categories` must name at least one category.
    pub fn start(&mut self, config: SessionConfig) -> Result<()> {
        self.session.start_session(config)?;
        self.clear_turn();
        tracing::info!(
            "Truth or dare started with {} players, {} categories",
            self.session.participant_count(),
            self.session.state().categories.len()
        );
        self.save();
        Ok(())
    }

    pub fn current_player(&self) -> Result<&Participant> {
        self.session.current_participant()
    }

    /// Draw a truth or dare from the selected categories.
    pub fn choose(&mut self, choice: Choice) -> Result<String> {
        let prompt = self.session.select_prompt_for_session(self.deck.pool(choice))?;
        let text = prompt.text_or(choice.make_your_own()).to_string();
        self.current = Some((choice, prompt));
        self.penalty_shown = false;
        Ok(text)
    }

    /// Current choice and prompt, if one was drawn this turn.
    pub fn current(&self) -> Option<&(Choice, Prompt)> {
        self.current.as_ref()
    }

    /// Penalty for refusing the current prompt.
    ///
    /// `None` when nothing was chosen yet, a penalty was already shown this
    /// turn, or the deck has no penalties of that kind.
    pub fn penalty(&mut self) -> Result<Option<String>> {
        self.session.current_participant()?;
        let Some((choice, _)) = self.current else {
            return Ok(None);
        };
        if self.penalty_shown {
            return Ok(None);
        }
        let penalties = self.deck.penalties(choice);
        let Some(penalty) = self.penalty_rng.choose(&penalties) else {
            return Ok(None);
        };
        self.penalty_shown = true;
        Ok(Some((*penalty).to_string()))
    }

    /// Move to the next player.
    pub fn next_player(&mut self) -> Result<SessionStatus> {
        let status = self.session.record_turn_and_advance(None)?;
        self.clear_turn();
        if status == SessionStatus::Finished {
            tracing::info!(
                "Truth or dare finished after {} questions",
                self.session.state().turns_completed
            );
        }
        self.save();
        Ok(status)
    }

    /// End an unlimited game.
    pub fn stop(&mut self) -> Result<()> {
        self.session.finish_session()?;
        self.save();
        Ok(())
    }

    pub fn results(&self) -> Vec<ParticipantResult> {
        self.session.results()
    }

    /// Back to an empty setup, dropping any saved game.
    pub fn reset(&mut self) {
        self.session.reset_session();
        self.clear_turn();
        self.save();
    }

    /// Persist now (e.g. before the host goes away).
    pub fn save(&mut self) {
        let Some(store) = self.store.as_mut() else {
            return;
        };
        if let Err(e) = persistence::save_session(store, &self.session) {
            tracing::warn!("Failed to save truth or dare session: {}", e);
        }
    }

    fn clear_turn(&mut self) {
        self.current = None;
        self.penalty_shown = false;
    }
}

impl std::fmt::Debug for TruthOrDare {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TruthOrDare")
            .field("session", &self.session)
            .field("current", &self.current)
            .field("penalty_shown", &self.penalty_shown)
            .field("persistent", &self.store.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PromptPool;
    use crate::core::{CountingUnit, EngineError};
    use crate::persistence::MemoryStore;

    fn started(seed: u64, categories: &[&str]) -> TruthOrDare {
        let mut game = TruthOrDare::with_builtin_deck(seed);
        game.add_player("Ana", Group::Female).unwrap();
        game.add_player("Ben", Group::Male).unwrap();
        game.start(SessionConfig::fixed(1, CountingUnit::Turns).with_categories(categories.iter().copied()))
            .unwrap();
        game
    }

    #[test]
    fn test_choice_respects_categories() {
        let mut game = started(3, &["Peinlich"]);
        let deck = builtin::truth_or_dare_deck();
        let allowed = deck.truth.candidates(Some(&["Peinlich"][..]));

        let text = game.choose(Choice::Truth).unwrap();
        assert!(allowed.contains(&text.as_str()));
        assert_eq!(game.current().map(|(c, _)| *c), Some(Choice::Truth));
    }

    #[test]
    fn test_unknown_category_falls_back() {
        let mut game = started(3, &["Gibt es nicht"]);
        assert_eq!(game.choose(Choice::Dare).unwrap(), "Denke dir eine Pflicht aus!");
    }

    #[test]
    fn test_penalty_once_per_turn() {
        let mut game = started(3, &["Abenteuer"]);
        assert_eq!(game.penalty().unwrap(), None);

        game.choose(Choice::Truth).unwrap();
        let penalty = game.penalty().unwrap().unwrap();
        assert!(builtin::truth_or_dare_deck()
            .penalties(Choice::Truth)
            .contains(&penalty.as_str()));
        assert_eq!(game.penalty().unwrap(), None);

        game.next_player().unwrap();
        game.choose(Choice::Dare).unwrap();
        assert!(game.penalty().unwrap().is_some());
    }

    #[test]
    fn test_no_penalties_available() {
        let deck = TruthOrDareDeck {
            truth: PromptPool::categorized().with_category("Peinlich", ["t"]),
            dare: PromptPool::categorized(),
            penalty: PromptPool::categorized(),
        };
        let mut game = TruthOrDare::new(deck, 1);
        game.add_player("A", Group::Any).unwrap();
        game.add_player("B", Group::Neutral).unwrap();
        game.start(SessionConfig::unbounded().with_categories(["Peinlich"])).unwrap();
        game.choose(Choice::Truth).unwrap();
        assert_eq!(game.penalty().unwrap(), None);
    }

    #[test]
    fn test_penalty_requires_active() {
        let mut game = TruthOrDare::with_builtin_deck(1);
        assert!(matches!(game.penalty(), Err(EngineError::InvalidState { .. })));
    }

    #[test]
    fn test_store_resumes_and_clears() {
        let store: BoxedStore = Box::new(MemoryStore::new());
        let mut game = TruthOrDare::with_builtin_deck(4).with_store(store);
        game.add_player("Ana", Group::Female).unwrap();
        game.add_player("Ben", Group::Male).unwrap();
        game.start(SessionConfig::fixed(2, CountingUnit::Turns).with_categories(default_categories()))
            .unwrap();
        game.next_player().unwrap();

        let store = game.store.take().unwrap();
        let mut resumed = TruthOrDare::with_builtin_deck(99).with_store(store);
        assert_eq!(resumed.session().state(), game.session().state());
        assert_eq!(resumed.current_player().unwrap().name(), "Ben");

        for _ in 0..3 {
            resumed.next_player().unwrap();
        }
        assert_eq!(resumed.session().status(), SessionStatus::Finished);

        let store = resumed.store.take().unwrap();
        let fresh = TruthOrDare::with_builtin_deck(1).with_store(store);
        assert_eq!(fresh.session().status(), SessionStatus::Setup);
    }

    #[test]
    fn test_resumed_penalties_follow_saved_seed() {
        let store: BoxedStore = Box::new(MemoryStore::new());
        let mut game = TruthOrDare::with_builtin_deck(4).with_store(store);
        game.add_player("Ana", Group::Female).unwrap();
        game.add_player("Ben", Group::Male).unwrap();
        game.start(SessionConfig::unbounded().with_categories(default_categories()))
            .unwrap();

        let store = game.store.take().unwrap();
        let mut resumed = TruthOrDare::with_builtin_deck(99).with_store(store);
        assert_eq!(resumed.penalty_rng.seed(), game.penalty_rng.seed());

        game.choose(Choice::Truth).unwrap();
        resumed.choose(Choice::Truth).unwrap();
        assert_eq!(resumed.penalty().unwrap(), game.penalty().unwrap());
    }
}
