//! Session and game-variant configuration.
//!
//! Games configure the engine by providing:
//! - `VariantConfig`: per-game constants (roster ceiling, default round
//!   limit, whether prompts are categorized, storage key)
//! - `SessionConfig`: what the user picked on the setup screen when the
//!   session is started (round limit, selected categories)
//!
//! The engine never hardcodes a game; variants are presets over these types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Which unit drives termination in fixed mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CountingUnit {
    /// Finish after `per_person_rounds × participants` total turns.
    Turns,
    /// Finish when the turn pointer wraps after the last allowed full pass.
    Passes,
}

/// How long a session runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundLimit {
    /// Each participant gets `per_person_rounds` turns.
    Fixed {
        per_person_rounds: u32,
        unit: CountingUnit,
    },
    /// Runs until stopped from outside.
    Unbounded,
}

impl Default for RoundLimit {
    fn default() -> Self {
        RoundLimit::Fixed {
            per_person_rounds: 10,
            unit: CountingUnit::Turns,
        }
    }
}

impl RoundLimit {
    /// Total turns for a roster of `participant_count`, if bounded.
    #[must_use]
    pub fn max_turns(self, participant_count: usize) -> Option<u32> {
        match self {
            RoundLimit::Fixed { per_person_rounds, .. } => {
                Some(per_person_rounds.saturating_mul(participant_count as u32))
            }
            RoundLimit::Unbounded => None,
        }
    }
}

/// Options chosen on the setup screen, applied by `start_session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Round-limit policy.
    pub round_limit: RoundLimit,

    /// Selected prompt categories (categorized variants only).
    pub categories: SmallVec<[String; 8]>,
}

impl SessionConfig {
    /// Fixed number of rounds per participant.
    pub fn fixed(per_person_rounds: u32, unit: CountingUnit) -> Self {
        Self {
            round_limit: RoundLimit::Fixed { per_person_rounds, unit },
            categories: SmallVec::new(),
        }
    }

    /// No round limit.
    pub fn unbounded() -> Self {
        Self {
            round_limit: RoundLimit::Unbounded,
            categories: SmallVec::new(),
        }
    }

    /// Select prompt categories.
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }
}

/// The games shipped on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    /// "BetBuddy": teams wager how well they will do on a challenge.
    BetBuddy,
    /// "Ich hab noch nie".
    NeverHaveIEver,
    /// "Wahrheit oder Pflicht".
    TruthOrDare,
    /// "Wer würde eher".
    WhoWouldRather,
}

impl std::fmt::Display for GameVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GameVariant::BetBuddy => "BetBuddy",
            GameVariant::NeverHaveIEver => "Ich hab noch nie",
            GameVariant::TruthOrDare => "Wahrheit oder Pflicht",
            GameVariant::WhoWouldRather => "Wer würde eher",
        };
        f.write_str(name)
    }
}

/// Per-game constants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Which game this is.
    pub variant: GameVariant,

    /// Roster ceiling.
    pub max_participants: usize,

    /// Round limit pre-selected on the setup screen.
    pub default_round_limit: RoundLimit,

    /// Prompts are partitioned by category and a selection is required.
    pub categorized: bool,

    /// Every participant must carry a [`Group`](super::Group) tag.
    pub requires_group: bool,

    /// Key under which an active session is persisted.
    pub storage_key: String,
}

impl VariantConfig {
    /// Preset for a shipped game.
    pub fn for_variant(variant: GameVariant) -> Self {
        match variant {
            GameVariant::BetBuddy => Self {
                variant,
                max_participants: 10,
                default_round_limit: RoundLimit::Fixed {
                    per_person_rounds: 5,
                    unit: CountingUnit::Passes,
                },
                categorized: false,
                requires_group: false,
                storage_key: "gc_betbuddy_state".into(),
            },
            GameVariant::NeverHaveIEver => Self {
                variant,
                max_participants: 12,
                default_round_limit: RoundLimit::default(),
                categorized: false,
                requires_group: false,
                storage_key: "gc_ihnn_state".into(),
            },
            GameVariant::TruthOrDare => Self {
                variant,
                max_participants: 12,
                default_round_limit: RoundLimit::default(),
                categorized: true,
                requires_group: true,
                storage_key: "gc_wop_state".into(),
            },
            GameVariant::WhoWouldRather => Self {
                variant,
                max_participants: 12,
                default_round_limit: RoundLimit::default(),
                categorized: false,
                requires_group: false,
                storage_key: "gc_ww_state".into(),
            },
        }
    }

    /// Override the roster ceiling.
    #[must_use]
    pub fn with_max_participants(mut self, max: usize) -> Self {
        self.max_participants = max;
        self
    }

    /// Override the storage key.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Session config with this variant's default round limit.
    #[must_use]
    pub fn default_session(&self) -> SessionConfig {
        SessionConfig {
            round_limit: self.default_round_limit,
            categories: SmallVec::new(),
        }
    }
}
