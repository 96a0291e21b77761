//! Session persistence.
//!
//! Only active sessions are worth keeping: a snapshot is taken
//! opportunistically (after each turn, before the page goes away) and
//! restored wholesale on the next load. Setup and finished sessions are
//! never stored.

mod snapshot;
mod store;

pub use snapshot::{SessionSnapshot, SNAPSHOT_VERSION};
pub use store::{FileStore, MemoryStore, SnapshotStore};

use crate::core::{GameRng, Session, SessionStatus, SnapshotError, VariantConfig};

/// Persist `session` under its variant's storage key.
///
/// Sessions that are not active clear the key instead, so a finished game
/// is not resumed on the next load.
pub fn save_session(store: &mut impl SnapshotStore, session: &Session) -> Result<(), SnapshotError> {
    let key = session.config().storage_key.as_str();
    if session.status() != SessionStatus::Active {
        tracing::debug!("Clearing snapshot '{}' ({} session)", key, session.status());
        return store.clear(key);
    }
    let bytes = SessionSnapshot::capture(session)?.encode()?;
    store.save(key, &bytes)?;
    tracing::debug!("Saved snapshot '{}' ({} bytes)", key, bytes.len());
    Ok(())
}

/// Load the session stored under `key`, if any.
pub fn load_session(store: &impl SnapshotStore, key: &str) -> Result<Option<Session>, SnapshotError> {
    let Some(bytes) = store.load(key)? else {
        return Ok(None);
    };
    let snapshot = SessionSnapshot::decode(&bytes)?;
    if snapshot.state.status != SessionStatus::Active {
        return Ok(None);
    }
    Ok(Some(snapshot.restore()))
}

/// Resume the stored session for `config`, or start a fresh one.
///
/// A snapshot that cannot be read is discarded.
pub fn restore_or_new(store: &mut impl SnapshotStore, config: VariantConfig, rng: GameRng) -> Session {
    let key = config.storage_key.clone();
    match load_session(store, &key) {
        Ok(Some(session)) if session.config().variant == config.variant => {
            tracing::info!(
                "Resumed {} session with {} participants",
                config.variant,
                session.participant_count()
            );
            session
        }
        Ok(Some(_)) => {
            tracing::warn!("Snapshot '{}' belongs to another game, discarding", key);
            discard(store, &key);
            Session::with_rng(config, rng)
        }
        Ok(None) => Session::with_rng(config, rng),
        Err(e) => {
            tracing::warn!("Failed to restore snapshot '{}': {}", key, e);
            discard(store, &key);
            Session::with_rng(config, rng)
        }
    }
}

fn discard(store: &mut impl SnapshotStore, key: &str) {
    if let Err(e) = store.clear(key) {
        tracing::warn!("Failed to clear snapshot '{}': {}", key, e);
    }
}
