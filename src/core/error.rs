//! Error types.
//!
//! Every engine operation is synchronous and either returns a value or one of
//! the kinds below. Nothing here is fatal: the caller corrects its input or
//! state and retries.

use thiserror::Error;

use super::session::SessionStatus;

/// Result alias for session operations.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Precondition violations raised by [`Session`](super::Session).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("participant name is empty")]
    InvalidName,

    #[error("roster is full ({max} participants)")]
    RosterFull { max: usize },

    #[error("no participant at index {index} (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("at least 2 participants are required, have {count}")]
    NotEnoughParticipants { count: usize },

    #[error("cannot {operation} while session is {status}")]
    InvalidState {
        operation: &'static str,
        status: SessionStatus,
    },

    #[error("this game requires a group for every participant")]
    MissingAttribute,

    #[error("invalid session config: {0}")]
    InvalidConfig(String),

    #[error("at least one category must be selected")]
    NoCategoriesSelected,
}

impl EngineError {
    pub(crate) fn invalid_state(operation: &'static str, status: SessionStatus) -> Self {
        Self::InvalidState { operation, status }
    }
}

/// Failures loading prompt documents.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed prompt document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures capturing, storing or restoring a session snapshot.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("only active sessions are persisted (session is {0})")]
    NotActive(SessionStatus),

    #[error("snapshot encoding failed: {0}")]
    Encode(bincode::Error),

    #[error("snapshot decoding failed: {0}")]
    Decode(bincode::Error),

    #[error("unsupported snapshot version {found} (expected {expected})")]
    Version { found: u32, expected: u32 },

    #[error("inconsistent snapshot: {0}")]
    Invalid(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
