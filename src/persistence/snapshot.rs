//! Whole-session snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{
    GameRng, GameRngState, RoundLimit, Session, SessionState, SessionStatus, SnapshotError,
    VariantConfig, MIN_PARTICIPANTS,
};

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Everything needed to put a session back exactly where it was.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: u32,
    pub config: VariantConfig,
    pub state: SessionState,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Capture an active session.
    pub fn capture(session: &Session) -> Result<Self, SnapshotError> {
        if session.status() != SessionStatus::Active {
            return Err(SnapshotError::NotActive(session.status()));
        }
        Ok(Self {
            version: SNAPSHOT_VERSION,
            config: session.config().clone(),
            state: session.state().clone(),
            rng: session.rng().state(),
        })
    }

    /// Rebuild the session.
    #[must_use]
    pub fn restore(self) -> Session {
        Session::from_parts(self.config, self.state, GameRng::from_state(&self.rng))
    }

    /// Binary encoding.
    pub fn encode(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(SnapshotError::Encode)
    }

    /// Decode, then check the layout version and the session invariants.
    pub fn decode(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes).map_err(SnapshotError::Decode)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        snapshot.check()?;
        Ok(snapshot)
    }

    /// An active session must be playable as stored.
    fn check(&self) -> Result<(), SnapshotError> {
        let state = &self.state;
        if state.status != SessionStatus::Active {
            return Ok(());
        }
        let len = state.participants.len();
        if len < MIN_PARTICIPANTS {
            return Err(SnapshotError::Invalid("too few participants"));
        }
        if len > self.config.max_participants {
            return Err(SnapshotError::Invalid("roster above the variant ceiling"));
        }
        if state.current_index >= len {
            return Err(SnapshotError::Invalid("current index out of range"));
        }
        if let RoundLimit::Fixed { per_person_rounds: 0, .. } = state.round_limit {
            return Err(SnapshotError::Invalid("zero rounds per person"));
        }
        if state.max_turns != state.round_limit.max_turns(len) {
            return Err(SnapshotError::Invalid("turn ceiling does not match the roster"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PromptPool;
    use crate::core::{AttributeUpdate, CountingUnit, GameVariant, SessionConfig};

    fn active_session() -> Session {
        let mut session = Session::new(VariantConfig::for_variant(GameVariant::BetBuddy), 9);
        session.add_participant("Rot", None).unwrap();
        session.add_participant("Blau", None).unwrap();
        session.start_session(SessionConfig::fixed(3, CountingUnit::Passes)).unwrap();
        session.record_turn_and_advance(Some(AttributeUpdate::wager(4))).unwrap();
        session
    }

    #[test]
    fn test_capture_requires_active() {
        let session = Session::new(VariantConfig::for_variant(GameVariant::BetBuddy), 9);
        assert!(matches!(
            SessionSnapshot::capture(&session),
            Err(SnapshotError::NotActive(SessionStatus::Setup))
        ));
    }

    #[test]
    fn test_restore_continues_identically() {
        let pool = PromptPool::flat((0..20).map(|i| format!("prompt {i}")));
        let mut original = active_session();

        let bytes = SessionSnapshot::capture(&original).unwrap().encode().unwrap();
        let mut restored = SessionSnapshot::decode(&bytes).unwrap().restore();

        assert_eq!(restored.state(), original.state());
        assert_eq!(restored.config(), original.config());
        for _ in 0..5 {
            assert_eq!(
                restored.select_prompt(&pool, None).unwrap(),
                original.select_prompt(&pool, None).unwrap()
            );
            assert_eq!(
                restored.record_turn_and_advance(None).unwrap(),
                original.record_turn_and_advance(None).unwrap()
            );
        }
    }

    #[test]
    fn test_version_mismatch() {
        let mut snapshot = SessionSnapshot::capture(&active_session()).unwrap();
        snapshot.version = 99;
        let bytes = snapshot.encode().unwrap();
        assert!(matches!(
            SessionSnapshot::decode(&bytes),
            Err(SnapshotError::Version { found: 99, expected: 1 })
        ));
    }

    #[test]
    fn test_inconsistent_state_rejected() {
        let mut snapshot = SessionSnapshot::capture(&active_session()).unwrap();
        snapshot.state.current_index = 2;
        assert!(matches!(
            SessionSnapshot::decode(&snapshot.encode().unwrap()),
            Err(SnapshotError::Invalid(_))
        ));

        let mut snapshot = SessionSnapshot::capture(&active_session()).unwrap();
        snapshot.state.max_turns = Some(100);
        assert!(matches!(
            SessionSnapshot::decode(&snapshot.encode().unwrap()),
            Err(SnapshotError::Invalid(_))
        ));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        assert!(matches!(
            SessionSnapshot::decode(&[1, 2, 3]),
            Err(SnapshotError::Decode(_))
        ));
    }
}
