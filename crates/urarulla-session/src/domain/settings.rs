//! Session configuration.

use serde::{Deserialize, Serialize};
use urarulla_core::error::DomainError;

use super::capacity::{CapacityPolicy, MAX_PLAYER_COUNT};
use super::turn::{TurnScheduler, TurnWrap};

/// Menu index of the main game screen in the shipped menu layout.
pub const DEFAULT_MAIN_MENU_INDEX: usize = 3;

/// Settings fixed when the session is configured.
///
/// Missing fields take their defaults, so an empty YAML document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Whether more than one player may join.
    pub is_multiplayer: bool,
    /// Roster cap in multiplayer mode.
    pub max_player_count: usize,
    /// A characteristic sum strictly above this triggers progression.
    pub characteristic_threshold: i32,
    /// Turn wrap policy.
    pub turn_wrap: TurnWrap,
    /// Menu shown by `start_game`.
    pub main_menu_index: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            is_multiplayer: true,
            max_player_count: MAX_PLAYER_COUNT,
            characteristic_threshold: TurnScheduler::DEFAULT_THRESHOLD,
            turn_wrap: TurnWrap::EarlyWrap,
            main_menu_index: DEFAULT_MAIN_MENU_INDEX,
        }
    }
}

impl SessionSettings {
    /// Parses and validates settings from YAML.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the YAML is malformed or a value
    /// is out of range.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, DomainError> {
        let settings: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)
                .map_err(|e| DomainError::Validation(format!("invalid session settings: {e}")))?
        };
        settings.validate()?;
        Ok(settings)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max_player_count` is out of range.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.capacity_policy().map(|_| ())
    }

    /// The capacity policy these settings describe.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max_player_count` is out of range.
    pub fn capacity_policy(&self) -> Result<CapacityPolicy, DomainError> {
        CapacityPolicy::new(self.is_multiplayer, self.max_player_count)
    }
}
