//! # gamecircl-engine
//!
//! Turn rotation, round accounting and prompt selection for the GameCircl
//! party games.
//!
//! ## Design Principles
//!
//! 1. **One owned session**: all game state lives in a [`Session`] held by
//!    the page or component that created it. No globals.
//!
//! 2. **Pure transitions**: the engine mutates only its own state and
//!    returns values or errors. Rendering is the caller's job.
//!
//! 3. **Configuration Over Convention**: games are presets over
//!    [`VariantConfig`] and [`SessionConfig`], not special cases in the core.
//!
//! ## Modules
//!
//! - `core`: Participants, configuration, RNG, errors, the session engine
//! - `content`: Prompt pools, prompt documents, built-in fallbacks
//! - `persistence`: Snapshots of active sessions and their stores
//! - `games`: Per-game facades (BetBuddy, question games, truth or dare)

pub mod core;
pub mod content;
pub mod persistence;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Attribute, AttributeUpdate, Group, Participant, ParticipantId,
    CountingUnit, GameVariant, RoundLimit, SessionConfig, VariantConfig,
    GameRng, GameRngState,
    ContentError, EngineError, SnapshotError,
    ParticipantResult, Progress, Session, SessionState, SessionStatus,
};

pub use crate::content::{Choice, Prompt, PromptPool, TruthOrDareDeck};

pub use crate::persistence::{FileStore, MemoryStore, SessionSnapshot, SnapshotStore};

pub use crate::games::{BetBuddy, QuestionGame, TruthOrDare};
