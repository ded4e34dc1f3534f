//! Player characteristics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the five personality/skill axes a player is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Characteristic {
    /// Creativity.
    Creative,
    /// Physical aptitude.
    Physical,
    /// Leadership.
    Leader,
    /// Teamwork.
    Team,
    /// Greed.
    Greed,
}

impl Characteristic {
    /// All characteristics, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Creative,
        Self::Physical,
        Self::Leader,
        Self::Team,
        Self::Greed,
    ];

    /// Lowercase identifier, matching the serialized form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creative => "creative",
            Self::Physical => "physical",
            Self::Leader => "leader",
            Self::Team => "team",
            Self::Greed => "greed",
        }
    }
}

impl fmt::Display for Characteristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Characteristic {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::Validation(format!("unknown characteristic: {s}")))
    }
}

/// Accumulated score on each characteristic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Characteristics {
    /// Creativity score.
    pub creative: i32,
    /// Physical score.
    pub physical: i32,
    /// Leadership score.
    pub leader: i32,
    /// Teamwork score.
    pub team: i32,
    /// Greed score.
    pub greed: i32,
}

impl Characteristics {
    /// Score on a single characteristic.
    #[must_use]
    pub fn get(&self, kind: Characteristic) -> i32 {
        match kind {
            Characteristic::Creative => self.creative,
            Characteristic::Physical => self.physical,
            Characteristic::Leader => self.leader,
            Characteristic::Team => self.team,
            Characteristic::Greed => self.greed,
        }
    }

    /// Adds `points` (may be negative) to one characteristic.
    pub fn award(&mut self, kind: Characteristic, points: i32) {
        let slot = match kind {
            Characteristic::Creative => &mut self.creative,
            Characteristic::Physical => &mut self.physical,
            Characteristic::Leader => &mut self.leader,
            Characteristic::Team => &mut self.team,
            Characteristic::Greed => &mut self.greed,
        };
        *slot = slot.saturating_add(points);
    }

    /// Sum of all five scores, widened so saturated slots cannot overflow.
    #[must_use]
    pub fn sum(&self) -> i64 {
        [self.creative, self.physical, self.leader, self.team, self.greed]
            .into_iter()
            .map(i64::from)
            .sum()
    }
}
