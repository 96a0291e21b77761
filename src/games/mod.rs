//! Game facades for the presentation layer.
//!
//! Each game wraps a [`Session`](crate::core::Session) with its prompt
//! content and display helpers:
//!
//! - [`BetBuddy`]: teams bet on challenges, rounds are full passes
//! - [`QuestionGame`]: "Ich hab noch nie" and "Wer würde eher"
//! - [`TruthOrDare`]: categorized truth/dare prompts with penalties and
//!   snapshot persistence

mod bet;
mod question;
mod truth_or_dare;

pub use bet::BetBuddy;
pub use question::QuestionGame;
pub use truth_or_dare::{default_categories, BoxedStore, TruthOrDare};
