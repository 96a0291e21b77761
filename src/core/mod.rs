//! Core engine types: participants, configuration, RNG, errors and the
//! turn-rotation session.
//!
//! This module is game-agnostic. Games configure it via `VariantConfig`
//! presets rather than modifying the core.

pub mod participant;
pub mod config;
pub mod rng;
pub mod error;
pub mod session;

pub use participant::{Attribute, AttributeUpdate, Group, Participant, ParticipantId};
pub use config::{CountingUnit, GameVariant, RoundLimit, SessionConfig, VariantConfig};
pub use rng::{GameRng, GameRngState};
pub use error::{ContentError, EngineError, Result, SnapshotError};
pub use session::{
    ParticipantResult, Progress, Session, SessionState, SessionStatus,
    DEDUP_MAX_ATTEMPTS, DEDUP_MIN_POOL, MIN_PARTICIPANTS,
};
