//! Content provider: prompt pools, prompt documents and built-in fallbacks.
//!
//! Prompt documents are JSON files served next to the game pages. A missing
//! or malformed document must never leave a game without prompts, so the
//! `*_or_fallback` loaders degrade to the built-in pools.

pub mod builtin;
mod deck;
mod pool;

use std::path::Path;

pub use deck::{Choice, TruthOrDareDeck, PENALTY_QUESTION, PENALTY_TASK};
pub use pool::{Prompt, PromptPool, MAKE_YOUR_OWN};

/// Load a prompt pool, falling back to `fallback` on any error.
pub fn load_pool_or_fallback(path: impl AsRef<Path>, fallback: impl FnOnce() -> PromptPool) -> PromptPool {
    let path = path.as_ref();
    match PromptPool::load(path) {
        Ok(pool) if !pool.is_empty() => pool,
        Ok(_) => {
            tracing::warn!("Prompt document {} is empty, using built-in prompts", path.display());
            fallback()
        }
        Err(e) => {
            tracing::warn!("Failed to load prompts from {}: {}", path.display(), e);
            fallback()
        }
    }
}

/// Load a Truth-or-Dare deck, falling back to the built-in deck on any error.
pub fn load_deck_or_fallback(path: impl AsRef<Path>) -> TruthOrDareDeck {
    let path = path.as_ref();
    match TruthOrDareDeck::load(path) {
        Ok(deck) => deck,
        Err(e) => {
            tracing::warn!("Failed to load deck from {}: {}", path.display(), e);
            builtin::truth_or_dare_deck()
        }
    }
}
