//! Prompt pools and drawn prompts.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ContentError;

/// Text shown when no prompt matches the current filter.
pub const MAKE_YOUR_OWN: &str = "Denke dir selbst etwas aus!";

/// A set of prompts, either flat or partitioned by category.
///
/// Deserializes from a JSON array (`Flat`) or an object mapping category
/// names to arrays (`Categorized`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PromptPool {
    Flat(Vec<String>),
    Categorized(BTreeMap<String, Vec<String>>),
}

impl Default for PromptPool {
    fn default() -> Self {
        PromptPool::Flat(Vec::new())
    }
}

impl PromptPool {
    /// Flat pool from any string list.
    pub fn flat<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PromptPool::Flat(prompts.into_iter().map(Into::into).collect())
    }

    /// Empty categorized pool; fill with [`PromptPool::with_category`].
    pub fn categorized() -> Self {
        PromptPool::Categorized(BTreeMap::new())
    }

    /// Add or replace a category. Turns a flat pool into a categorized one.
    #[must_use]
    pub fn with_category<I, S>(self, name: impl Into<String>, prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut map = match self {
            PromptPool::Categorized(map) => map,
            PromptPool::Flat(_) => BTreeMap::new(),
        };
        map.insert(name.into(), prompts.into_iter().map(Into::into).collect());
        PromptPool::Categorized(map)
    }

    /// Parse a JSON prompt document.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON prompt document.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Category names, sorted. Empty for flat pools.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        let keys = match self {
            PromptPool::Categorized(map) => Some(map.keys()),
            PromptPool::Flat(_) => None,
        };
        keys.into_iter().flatten().map(String::as_str)
    }

    /// Number of prompts across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            PromptPool::Flat(prompts) => prompts.len(),
            PromptPool::Categorized(map) => map.values().map(Vec::len).sum(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Prompts eligible under `filter`.
    ///
    /// Categorized pools concatenate the filtered categories in filter order,
    /// skipping unknown names; `None` takes every category. Flat pools ignore
    /// the filter.
    pub fn candidates<S: AsRef<str>>(&self, filter: Option<&[S]>) -> Vec<&str> {
        match (self, filter) {
            (PromptPool::Flat(prompts), _) => prompts.iter().map(String::as_str).collect(),
            (PromptPool::Categorized(map), None) => map
                .values()
                .flatten()
                .map(String::as_str)
                .collect(),
            (PromptPool::Categorized(map), Some(names)) => names
                .iter()
                .filter_map(|name| map.get(name.as_ref()))
                .flatten()
                .map(String::as_str)
                .collect(),
        }
    }
}

/// Outcome of a prompt draw.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prompt {
    /// A prompt taken from the pool.
    Drawn(String),
    /// Nothing matched; players invent their own.
    MakeYourOwn,
}

impl Prompt {
    /// Display text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Prompt::Drawn(text) => text,
            Prompt::MakeYourOwn => MAKE_YOUR_OWN,
        }
    }

    /// Display text, with a custom sentinel for the fallback case.
    #[must_use]
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            Prompt::Drawn(text) => text,
            Prompt::MakeYourOwn => fallback,
        }
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Prompt::MakeYourOwn)
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
