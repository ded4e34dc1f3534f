//! Players on the roster.

use std::fmt;

use serde::Serialize;
use urarulla_core::characteristic::Characteristics;
use uuid::Uuid;

/// Stable identity of a player, independent of roster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A participant in the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    id: PlayerId,
    /// Display name. Not unique.
    pub name: String,
    /// Characteristic scores.
    pub characteristics: Characteristics,
    /// Score accumulated from awards.
    pub score_progress: f64,
}

impl Player {
    /// Creates a player with zeroed scores and a fresh identity.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlayerId::new(),
            name: name.into(),
            characteristics: Characteristics::default(),
            score_progress: 0.0,
        }
    }

    /// The player's identity.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }
}
