//! Player-slot capacity policy.

use urarulla_core::error::DomainError;

/// Hard cap on roster size in any mode.
pub const MAX_PLAYER_COUNT: usize = 5;

/// Decides whether another player may join.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityPolicy {
    is_multiplayer: bool,
    max_players: usize,
}

impl CapacityPolicy {
    /// Builds a policy.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max_players` is zero or above
    /// [`MAX_PLAYER_COUNT`].
    pub fn new(is_multiplayer: bool, max_players: usize) -> Result<Self, DomainError> {
        if max_players == 0 || max_players > MAX_PLAYER_COUNT {
            return Err(DomainError::Validation(format!(
                "max player count must be between 1 and {MAX_PLAYER_COUNT}, got {max_players}"
            )));
        }
        Ok(Self {
            is_multiplayer,
            max_players,
        })
    }

    /// Single-player build: one slot.
    #[must_use]
    pub fn single_player() -> Self {
        Self {
            is_multiplayer: false,
            max_players: MAX_PLAYER_COUNT,
        }
    }

    /// Multiplayer with the default cap.
    #[must_use]
    pub fn multiplayer() -> Self {
        Self {
            is_multiplayer: true,
            max_players: MAX_PLAYER_COUNT,
        }
    }

    /// Whether more than one player is allowed.
    #[must_use]
    pub fn is_multiplayer(&self) -> bool {
        self.is_multiplayer
    }

    /// Number of players the roster admits.
    #[must_use]
    pub fn capacity(&self) -> usize {
        if self.is_multiplayer {
            self.max_players
        } else {
            1
        }
    }

    /// Whether a roster of `current_count` players may take one more.
    #[must_use]
    pub fn can_add(&self, current_count: usize) -> bool {
        current_count < self.capacity()
    }
}
