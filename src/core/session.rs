//! The turn-rotation engine.
//!
//! A [`Session`] owns the roster, the turn pointer, the turn and pass
//! counters and the round-limit policy for one play-through of a game.
//!
//! ## State machine
//!
//! ```text
//! Setup --start_session--> Active --record_turn_and_advance / finish_session--> Finished
//!   ^                                                                              |
//!   +------------------------------- reset_session --------------------------------+
//! ```
//!
//! `reset_session` is accepted from every state.
//!
//! ## Example
//!
//! ```
//! use gamecircl_engine::core::{CountingUnit, GameVariant, Session, SessionConfig, SessionStatus, VariantConfig};
//!
//! let mut session = Session::new(VariantConfig::for_variant(GameVariant::NeverHaveIEver), 42);
//! for name in ["Ana", "Ben", "Cleo"] {
//!     session.add_participant(name, None).unwrap();
//! }
//! session.start_session(SessionConfig::fixed(2, CountingUnit::Turns)).unwrap();
//!
//! let mut status = SessionStatus::Active;
//! for _ in 0..6 {
//!     status = session.record_turn_and_advance(None).unwrap();
//! }
//! assert_eq!(status, SessionStatus::Finished);
//! assert_eq!(session.state().turns_completed, 6);
//! ```

use im::{HashSet as ImHashSet, Vector};
use serde::{Deserialize, Serialize};

use super::config::{CountingUnit, RoundLimit, SessionConfig, VariantConfig};
use super::error::{EngineError, Result};
use super::participant::{Attribute, AttributeUpdate, Participant, ParticipantId};
use super::rng::GameRng;
use crate::content::{Prompt, PromptPool};

/// Minimum filtered pool size above which repeats are retried.
pub const DEDUP_MIN_POOL: usize = 10;

/// Redraws attempted before a repeat is accepted.
pub const DEDUP_MAX_ATTEMPTS: usize = 5;

/// Minimum roster size to start.
pub const MIN_PARTICIPANTS: usize = 2;

/// Lifecycle of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Roster is being assembled.
    #[default]
    Setup,
    /// Turns are being played.
    Active,
    /// Round limit reached or stopped; results are shown.
    Finished,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SessionStatus::Setup => "in setup",
            SessionStatus::Active => "active",
            SessionStatus::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// All mutable session fields.
///
/// Uses `im` persistent data structures so snapshots are O(1) clones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// Turn order.
    pub participants: Vector<Participant>,

    /// Whose turn it is.
    pub current_index: usize,

    /// Turns taken since start.
    pub turns_completed: u32,

    /// Full passes through the roster since start.
    pub passes_completed: u32,

    /// Policy chosen at start.
    pub round_limit: RoundLimit,

    /// Turn ceiling in fixed mode.
    pub max_turns: Option<u32>,

    pub status: SessionStatus,

    /// Prompts issued since start, for soft deduplication.
    pub seen_prompts: ImHashSet<String>,

    /// Category filter chosen at start (categorized variants).
    pub categories: Vec<String>,

    next_participant_id: u32,
}

/// Turn counter view for "Frage x von y" style displays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// 1-based number of the turn being played.
    pub turn_number: u32,
    /// Total turns, if bounded.
    pub total: Option<u32>,
    /// 1-based number of the pass being played.
    pub pass_number: u32,
    /// Completed share of `total`, clamped to 1.0.
    pub fraction: Option<f32>,
}

/// One row of the results screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantResult {
    /// 1-based position in the turn order.
    pub seat: usize,
    pub name: String,
    pub attribute: Option<Attribute>,
    /// Turns this participant took.
    pub turns_taken: u32,
}

/// A single play-through of a game.
#[derive(Clone, Debug)]
pub struct Session {
    config: VariantConfig,
    state: SessionState,
    rng: GameRng,
}

impl Session {
    /// Create a session in `Setup` with a deterministic RNG.
    #[must_use]
    pub fn new(config: VariantConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create a session in `Setup` with the given RNG.
    #[must_use]
    pub fn with_rng(config: VariantConfig, rng: GameRng) -> Self {
        Self {
            config,
            state: SessionState::default(),
            rng,
        }
    }

    /// Reassemble a session from persisted parts.
    pub(crate) fn from_parts(config: VariantConfig, state: SessionState, rng: GameRng) -> Self {
        Self { config, state, rng }
    }

    /// Variant configuration.
    #[must_use]
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.state.status
    }

    /// RNG used for prompt draws.
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Roster in turn order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.state.participants.iter()
    }

    /// Roster size.
    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.state.participants.len()
    }

    /// True when in `Setup` with enough participants to start.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.state.status == SessionStatus::Setup
            && self.state.participants.len() >= MIN_PARTICIPANTS
    }

    // === Setup ===

    /// Append a participant to the turn order.
    ///
    /// The name is trimmed; an empty name is rejected in any state.
    pub fn add_participant(&mut self, name: &str, attribute: Option<Attribute>) -> Result<Participant> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidName);
        }
        self.require(SessionStatus::Setup, "add a participant")?;
        if self.state.participants.len() >= self.config.max_participants {
            return Err(EngineError::RosterFull {
                max: self.config.max_participants,
            });
        }
        if self.config.requires_group && !matches!(attribute, Some(Attribute::Group(_))) {
            return Err(EngineError::MissingAttribute);
        }

        let participant = Participant::new(self.alloc_id(), name.to_string(), attribute);
        self.state.participants.push_back(participant.clone());
        Ok(participant)
    }

    /// Remove the participant at `index`, shifting later entries down.
    pub fn remove_participant(&mut self, index: usize) -> Result<Participant> {
        self.require(SessionStatus::Setup, "remove a participant")?;
        let len = self.state.participants.len();
        if index >= len {
            return Err(EngineError::IndexOutOfRange { index, len });
        }
        Ok(self.state.participants.remove(index))
    }

    /// Begin play.
    pub fn start_session(&mut self, config: SessionConfig) -> Result<()> {
        self.require(SessionStatus::Setup, "start the session")?;
        let count = self.state.participants.len();
        if count < MIN_PARTICIPANTS {
            return Err(EngineError::NotEnoughParticipants { count });
        }
        if let RoundLimit::Fixed { per_person_rounds: 0, .. } = config.round_limit {
            return Err(EngineError::InvalidConfig(
                "per_person_rounds must be at least 1".into(),
            ));
        }
        if self.config.categorized && config.categories.is_empty() {
            return Err(EngineError::NoCategoriesSelected);
        }

        let state = &mut self.state;
        state.status = SessionStatus::Active;
        state.current_index = 0;
        state.turns_completed = 0;
        state.passes_completed = 0;
        state.seen_prompts.clear();
        state.round_limit = config.round_limit;
        state.max_turns = config.round_limit.max_turns(count);
        state.categories = config.categories.into_vec();
        Ok(())
    }

    // === Play ===

    /// Participant whose turn it is.
    pub fn current_participant(&self) -> Result<&Participant> {
        self.require(SessionStatus::Active, "read the current participant")?;
        self.state
            .participants
            .get(self.state.current_index)
            .ok_or(EngineError::IndexOutOfRange {
                index: self.state.current_index,
                len: self.state.participants.len(),
            })
    }

    /// Close the current turn and move to the next participant.
    ///
    /// Returns the status after the turn, so callers can branch to results.
    pub fn record_turn_and_advance(&mut self, update: Option<AttributeUpdate>) -> Result<SessionStatus> {
        self.require(SessionStatus::Active, "advance the turn")?;
        let state = &mut self.state;
        let len = state.participants.len();

        if let Some(update) = update {
            if let Some(current) = state.participants.get_mut(state.current_index) {
                update.apply(current);
            }
        }

        state.turns_completed += 1;
        state.current_index = (state.current_index + 1) % len;
        let wrapped = state.current_index == 0;
        if wrapped {
            state.passes_completed += 1;
        }

        let done = match state.round_limit {
            RoundLimit::Fixed { unit: CountingUnit::Turns, .. } => state
                .max_turns
                .is_some_and(|max| state.turns_completed >= max),
            RoundLimit::Fixed {
                per_person_rounds,
                unit: CountingUnit::Passes,
            } => wrapped && state.passes_completed >= per_person_rounds,
            RoundLimit::Unbounded => false,
        };
        if done {
            state.status = SessionStatus::Finished;
        }
        Ok(state.status)
    }

    /// Stop an active session before its limit (or an unbounded one).
    pub fn finish_session(&mut self) -> Result<()> {
        self.require(SessionStatus::Active, "finish the session")?;
        self.state.status = SessionStatus::Finished;
        Ok(())
    }

    /// Draw a prompt, avoiding recent repeats where the pool allows it.
    ///
    /// Categorized pools are narrowed to `category_filter` (all categories
    /// when `None`); flat pools ignore it. An empty result yields
    /// [`Prompt::MakeYourOwn`]. Repeats are redrawn up to
    /// [`DEDUP_MAX_ATTEMPTS`] times, only when more than
    /// [`DEDUP_MIN_POOL`] candidates exist.
    pub fn select_prompt(&mut self, pool: &PromptPool, category_filter: Option<&[String]>) -> Result<Prompt> {
        self.require(SessionStatus::Active, "draw a prompt")?;
        let candidates = pool.candidates(category_filter);
        if candidates.is_empty() {
            return Ok(Prompt::MakeYourOwn);
        }

        let mut pick = candidates[self.rng.gen_index(candidates.len())];
        if candidates.len() > DEDUP_MIN_POOL {
            let mut attempts = 0;
            while attempts < DEDUP_MAX_ATTEMPTS && self.state.seen_prompts.contains(pick) {
                pick = candidates[self.rng.gen_index(candidates.len())];
                attempts += 1;
            }
        }

        self.state.seen_prompts.insert(pick.to_string());
        Ok(Prompt::Drawn(pick.to_string()))
    }

    /// Draw with the category filter chosen at start.
    pub fn select_prompt_for_session(&mut self, pool: &PromptPool) -> Result<Prompt> {
        let categories = self.state.categories.clone();
        let filter = (!categories.is_empty()).then_some(categories.as_slice());
        self.select_prompt(pool, filter)
    }

    // === Views ===

    /// Turn counters for display.
    #[must_use]
    pub fn progress(&self) -> Progress {
        let state = &self.state;
        let total = state.max_turns;
        Progress {
            turn_number: state.turns_completed + 1,
            total,
            pass_number: state.passes_completed + 1,
            fraction: total
                .filter(|&t| t > 0)
                .map(|t| (state.turns_completed as f32 / t as f32).min(1.0)),
        }
    }

    /// Per-participant summary for the results screen.
    #[must_use]
    pub fn results(&self) -> Vec<ParticipantResult> {
        let len = self.state.participants.len() as u32;
        let turns = self.state.turns_completed;
        self.state
            .participants
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let i = i as u32;
                let turns_taken = turns / len + u32::from(i < turns % len);
                ParticipantResult {
                    seat: i as usize + 1,
                    name: p.name().to_string(),
                    attribute: p.attribute,
                    turns_taken,
                }
            })
            .collect()
    }

    // === Reset ===

    /// Return to an empty `Setup` state from any state.
    pub fn reset_session(&mut self) {
        self.state = SessionState::default();
    }

    fn require(&self, expected: SessionStatus, operation: &'static str) -> Result<()> {
        if self.state.status == expected {
            Ok(())
        } else {
            Err(EngineError::invalid_state(operation, self.state.status))
        }
    }

    fn alloc_id(&mut self) -> ParticipantId {
        let id = ParticipantId::new(self.state.next_participant_id);
        self.state.next_participant_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameVariant;
    use crate::core::participant::Group;

    fn session_with(names: &[&str]) -> Session {
        let mut session = Session::new(VariantConfig::for_variant(GameVariant::NeverHaveIEver), 42);
        for name in names {
            session.add_participant(name, None).unwrap();
        }
        session
    }

    #[test]
    fn test_add_trims_name() {
        let mut session = session_with(&[]);
        let p = session.add_participant("  Ana \n", None).unwrap();
        assert_eq!(p.name(), "Ana");
        assert_eq!(session.participant_count(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut session = session_with(&["Ana", "Ben"]);
        let removed = session.remove_participant(1).unwrap();
        let added = session.add_participant("Cleo", None).unwrap();
        assert_ne!(removed.id(), added.id());
        assert_eq!(added.id(), ParticipantId::new(2));
    }

    #[test]
    fn test_remove_shifts_entries() {
        let mut session = session_with(&["Ana", "Ben", "Cleo"]);
        session.remove_participant(0).unwrap();
        let names: Vec<_> = session.participants().map(|p| p.name()).collect();
        assert_eq!(names, vec!["Ben", "Cleo"]);

        assert_eq!(
            session.remove_participant(2),
            Err(EngineError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_roster_locked_after_start() {
        let mut session = session_with(&["Ana", "Ben"]);
        session.start_session(SessionConfig::unbounded()).unwrap();

        assert!(matches!(
            session.add_participant("Cleo", None),
            Err(EngineError::InvalidState { status: SessionStatus::Active, .. })
        ));
        assert!(matches!(
            session.remove_participant(0),
            Err(EngineError::InvalidState { .. })
        ));
        assert!(matches!(
            session.start_session(SessionConfig::unbounded()),
            Err(EngineError::InvalidState { .. })
        ));
        assert_eq!(session.add_participant("   ", None), Err(EngineError::InvalidName));
    }

    #[test]
    fn test_start_rejects_zero_rounds() {
        let mut session = session_with(&["Ana", "Ben"]);
        assert!(matches!(
            session.start_session(SessionConfig::fixed(0, CountingUnit::Turns)),
            Err(EngineError::InvalidConfig(_))
        ));
        assert_eq!(session.status(), SessionStatus::Setup);
    }

    #[test]
    fn test_group_required_for_truth_or_dare() {
        let mut session = Session::new(VariantConfig::for_variant(GameVariant::TruthOrDare), 1);
        assert_eq!(session.add_participant("Ana", None), Err(EngineError::MissingAttribute));
        assert!(session
            .add_participant("Ana", Some(Attribute::Group(Group::Female)))
            .is_ok());
        session
            .add_participant("Ben", Some(Attribute::Group(Group::Male)))
            .unwrap();

        assert_eq!(
            session.start_session(SessionConfig::unbounded()),
            Err(EngineError::NoCategoriesSelected)
        );
        session
            .start_session(SessionConfig::unbounded().with_categories(["Peinlich"]))
            .unwrap();
        assert_eq!(session.state().categories, vec!["Peinlich".to_string()]);
    }

    #[test]
    fn test_operations_require_active() {
        let mut session = session_with(&["Ana", "Ben"]);
        assert!(session.current_participant().is_err());
        assert!(session.record_turn_and_advance(None).is_err());
        assert!(session.finish_session().is_err());
        assert!(session
            .select_prompt(&PromptPool::flat(["a"]), None)
            .is_err());
    }

    #[test]
    fn test_passes_mode_counts_full_rotations() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_session(SessionConfig::fixed(2, CountingUnit::Passes)).unwrap();

        for expected_pass in [1, 1, 1, 2, 2] {
            assert_eq!(session.progress().pass_number, expected_pass);
            assert_eq!(session.record_turn_and_advance(None).unwrap(), SessionStatus::Active);
        }
        assert_eq!(session.record_turn_and_advance(None).unwrap(), SessionStatus::Finished);
        assert_eq!(session.state().passes_completed, 2);
        assert_eq!(session.state().current_index, 0);
    }

    #[test]
    fn test_wager_update_applies_to_current() {
        let mut session = session_with(&["A", "B"]);
        session.start_session(SessionConfig::unbounded()).unwrap();

        session.record_turn_and_advance(Some(AttributeUpdate::wager(7))).unwrap();
        assert_eq!(session.state().participants[0].wager(), Some(7));
        assert_eq!(session.current_participant().unwrap().name(), "B");
    }

    #[test]
    fn test_unbounded_runs_until_finished() {
        let mut session = session_with(&["A", "B"]);
        session.start_session(SessionConfig::unbounded()).unwrap();
        for _ in 0..100 {
            assert_eq!(session.record_turn_and_advance(None).unwrap(), SessionStatus::Active);
        }
        assert_eq!(session.progress().total, None);
        assert_eq!(session.progress().fraction, None);

        session.finish_session().unwrap();
        assert_eq!(session.status(), SessionStatus::Finished);
    }

    #[test]
    fn test_progress_fraction() {
        let mut session = session_with(&["A", "B"]);
        session.start_session(SessionConfig::fixed(2, CountingUnit::Turns)).unwrap();
        session.record_turn_and_advance(None).unwrap();

        let progress = session.progress();
        assert_eq!(progress.turn_number, 2);
        assert_eq!(progress.total, Some(4));
        assert_eq!(progress.fraction, Some(0.25));
    }

    #[test]
    fn test_results_count_turns_per_seat() {
        let mut session = session_with(&["A", "B", "C"]);
        session.start_session(SessionConfig::unbounded()).unwrap();
        for _ in 0..4 {
            session.record_turn_and_advance(None).unwrap();
        }
        session.finish_session().unwrap();

        let turns: Vec<_> = session.results().iter().map(|r| r.turns_taken).collect();
        assert_eq!(turns, vec![2, 1, 1]);
        assert_eq!(session.results()[2].seat, 3);
    }

    #[test]
    fn test_seen_prompts_cleared_on_start_only() {
        let mut session = session_with(&["A", "B"]);
        session.start_session(SessionConfig::unbounded()).unwrap();
        session.select_prompt(&PromptPool::flat(["x"]), None).unwrap();
        session.record_turn_and_advance(None).unwrap();
        assert_eq!(session.state().seen_prompts.len(), 1);

        session.reset_session();
        session.add_participant("A", None).unwrap();
        session.add_participant("B", None).unwrap();
        session.start_session(SessionConfig::unbounded()).unwrap();
        assert!(session.state().seen_prompts.is_empty());
    }
}
