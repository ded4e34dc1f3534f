//! Read-only views of the session.

use serde::Serialize;
use urarulla_core::characteristic::Characteristics;

use crate::domain::player::PlayerId;
use crate::domain::session::SessionState;

/// Read-only view of one player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    /// Player identity.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Characteristic scores.
    pub characteristics: Characteristics,
    /// Sum of `characteristics`.
    pub characteristic_sum: i64,
    /// Accumulated score.
    pub score_progress: f64,
    /// Whether this player holds the turn.
    pub is_turn_holder: bool,
}

/// Read-only view of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    /// Players in turn order.
    pub players: Vec<PlayerView>,
    /// Index of the turn holder.
    pub current_turn_index: Option<usize>,
    /// Whether more than one player may join.
    pub is_multiplayer: bool,
    /// Roster capacity.
    pub capacity: usize,
}

/// Builds a [`SessionView`] of `state`.
#[must_use]
pub fn session_view(state: &SessionState) -> SessionView {
    let current_turn_index = state.current_turn_index();
    SessionView {
        players: state
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| PlayerView {
                id: player.id(),
                name: player.name.clone(),
                characteristics: player.characteristics,
                characteristic_sum: player.characteristics.sum(),
                score_progress: player.score_progress,
                is_turn_holder: current_turn_index == Some(index),
            })
            .collect(),
        current_turn_index,
        is_multiplayer: state.is_multiplayer(),
        capacity: state.capacity().capacity(),
    }
}
