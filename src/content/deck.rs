//! Truth-or-Dare prompt deck.
//!
//! Mirrors the `wop-questions.json` document:
//!
//! ```json
//! {
//!   "truth":   { "Peinlich": ["..."] },
//!   "dare":    { "Peinlich": ["..."] },
//!   "penalty": { "Strafaufgabe": ["..."], "Strafrage": ["..."] }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::pool::PromptPool;
use crate::core::ContentError;

/// Penalty category served after refusing a truth.
pub const PENALTY_TASK: &str = "Strafaufgabe";

/// Penalty category served after refusing a dare.
pub const PENALTY_QUESTION: &str = "Strafrage";

/// What the current player picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Truth,
    Dare,
}

impl Choice {
    /// Heading shown above the prompt.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Choice::Truth => "❓ WAHRHEIT",
            Choice::Dare => "⚡ PFLICHT",
        }
    }

    /// Text shown when the selected categories hold no prompt of this kind.
    #[must_use]
    pub const fn make_your_own(self) -> &'static str {
        match self {
            Choice::Truth => "Denke dir eine Wahrheit aus!",
            Choice::Dare => "Denke dir eine Pflicht aus!",
        }
    }

    /// Penalty category for a refused prompt of this kind.
    #[must_use]
    pub const fn penalty_category(self) -> &'static str {
        match self {
            Choice::Truth => PENALTY_TASK,
            Choice::Dare => PENALTY_QUESTION,
        }
    }
}

/// Truth, dare and penalty pools.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TruthOrDareDeck {
    #[serde(default = "PromptPool::categorized")]
    pub truth: PromptPool,
    #[serde(default = "PromptPool::categorized")]
    pub dare: PromptPool,
    #[serde(default = "PromptPool::categorized")]
    pub penalty: PromptPool,
}

impl TruthOrDareDeck {
    /// Pool for a choice.
    #[must_use]
    pub fn pool(&self, choice: Choice) -> &PromptPool {
        match choice {
            Choice::Truth => &self.truth,
            Choice::Dare => &self.dare,
        }
    }

    /// Penalty prompts for a refused choice.
    pub fn penalties(&self, choice: Choice) -> Vec<&str> {
        self.penalty.candidates(Some(&[choice.penalty_category()][..]))
    }

    /// Parse a deck document.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a deck document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
