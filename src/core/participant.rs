//! Participant identification and per-participant data.
//!
//! ## ParticipantId
//!
//! Opaque identifier allocated by the owning session from a monotonically
//! increasing counter. Ids are never reused within a session, even after a
//! participant is removed during setup.
//!
//! ## Participant
//!
//! A named entry in the turn order (player or team, depending on the game),
//! optionally carrying an [`Attribute`].

use serde::{Deserialize, Serialize};

/// Unique participant identifier within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u32);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "p_{}", self.0)
    }
}

/// Gender/category tag chosen when adding a Truth-or-Dare player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Group {
    Male,
    Female,
    Neutral,
    Any,
}

impl Group {
    /// Badge icon shown next to the player name.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Group::Male => "♂️",
            Group::Female => "♀️",
            Group::Neutral => "⚪",
            Group::Any => "👥",
        }
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Group::Male => "male",
            Group::Female => "female",
            Group::Neutral => "neutral",
            Group::Any => "Alle",
        };
        f.write_str(label)
    }
}

/// Variant-specific participant data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    /// Group tag used to filter or label prompts.
    Group(Group),
    /// Points wagered in the last turn (bet variant).
    Wager(u32),
}

/// Change applied to the current participant when their turn is recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeUpdate {
    /// Replace the attribute.
    Set(Attribute),
    /// Remove the attribute.
    Clear,
}

impl AttributeUpdate {
    /// Record a wager.
    #[must_use]
    pub const fn wager(points: u32) -> Self {
        Self::Set(Attribute::Wager(points))
    }

    pub(crate) fn apply(self, participant: &mut Participant) {
        participant.attribute = match self {
            AttributeUpdate::Set(attribute) => Some(attribute),
            AttributeUpdate::Clear => None,
        };
    }
}

/// An entry in the turn order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    id: ParticipantId,
    name: String,
    /// Optional variant-specific data.
    pub attribute: Option<Attribute>,
}

impl Participant {
    pub(crate) fn new(id: ParticipantId, name: String, attribute: Option<Attribute>) -> Self {
        Self { id, name, attribute }
    }

    /// Get the participant ID.
    #[must_use]
    pub fn id(&self) -> ParticipantId {
        self.id
    }

    /// Get the display name (already trimmed).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper-cased first character of the name, for avatars.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Current wager, if this participant carries one.
    #[must_use]
    pub fn wager(&self) -> Option<u32> {
        match self.attribute {
            Some(Attribute::Wager(points)) => Some(points),
            _ => None,
        }
    }

    /// Group tag, if this participant carries one.
    #[must_use]
    pub fn group(&self) -> Option<Group> {
        match self.attribute {
            Some(Attribute::Group(group)) => Some(group),
            _ => None,
        }
    }
}
