//! The session state machine: roster, turn pointer and scores.

use urarulla_core::characteristic::{Characteristic, Characteristics};
use urarulla_core::error::DomainError;

use super::capacity::CapacityPolicy;
use super::player::{Player, PlayerId};
use super::turn::{TurnScheduler, sum_characteristics};

/// Result of a turn advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnAdvance {
    /// Roster index of the new turn holder.
    pub index: usize,
    /// Identity of the new turn holder.
    pub player_id: PlayerId,
    /// The new holder's characteristic sum.
    pub characteristic_sum: i64,
    /// Whether the progression hook fired.
    pub threshold_reached: bool,
}

/// A player taken off the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedPlayer {
    /// Index the player occupied before removal.
    pub index: usize,
    /// The removed player.
    pub player: Player,
    /// Whether the player held the turn.
    pub was_turn_holder: bool,
}

/// Roster, turn pointer and capacity policy for one session.
///
/// The turn holder is tracked by identity, and its index is derived from
/// the roster on demand, so removing other players never leaves the index
/// pointing at the wrong entry.
#[derive(Debug, Clone)]
pub struct SessionState {
    players: Vec<Player>,
    current_turn: Option<PlayerId>,
    capacity: CapacityPolicy,
    scheduler: TurnScheduler,
}

impl SessionState {
    /// Creates an empty session.
    #[must_use]
    pub fn new(capacity: CapacityPolicy, scheduler: TurnScheduler) -> Self {
        Self {
            players: Vec::new(),
            current_turn: None,
            capacity,
            scheduler,
        }
    }

    /// Players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players on the roster.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Whether the session admits more than one player.
    #[must_use]
    pub fn is_multiplayer(&self) -> bool {
        self.capacity.is_multiplayer()
    }

    /// The capacity policy.
    #[must_use]
    pub fn capacity(&self) -> CapacityPolicy {
        self.capacity
    }

    /// The turn scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    /// Whether the roster is at capacity.
    #[must_use]
    pub fn slots_filled(&self) -> bool {
        if self.capacity.can_add(self.players.len()) {
            return false;
        }
        if !self.capacity.is_multiplayer() {
            tracing::info!("single-player build: only one player can take part at a time");
        }
        true
    }

    /// Appends a new player named `name`. Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotsFull` if the capacity policy rejects
    /// another player; the roster is unchanged.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, DomainError> {
        if self.slots_filled() {
            let capacity = self.capacity.capacity();
            tracing::warn!(capacity, "player rejected: slots full");
            return Err(DomainError::SlotsFull { capacity });
        }
        let player = Player::new(name);
        let id = player.id();
        tracing::info!(player = %player.name, index = self.players.len(), "adding a new player to the game");
        self.players.push(player);
        Ok(id)
    }

    /// Removes the first player whose name equals `name`.
    ///
    /// Returns `None` and leaves the roster untouched if no player matches.
    /// If the removed player held the turn, or fewer than two players
    /// remain, nobody holds the turn afterwards; the next advance starts
    /// from the first player.
    pub fn remove_player(&mut self, name: &str) -> Option<RemovedPlayer> {
        let index = self.players.iter().position(|p| p.name == name)?;
        let player = self.players.remove(index);
        let was_turn_holder = self.current_turn == Some(player.id());
        if was_turn_holder || self.players.len() < 2 {
            self.current_turn = None;
        }
        tracing::info!(player = %player.name, index, was_turn_holder, "player removed");
        Some(RemovedPlayer {
            index,
            player,
            was_turn_holder,
        })
    }

    /// Roster index of the turn holder, or `None` with fewer than two
    /// players or no holder.
    #[must_use]
    pub fn current_turn_index(&self) -> Option<usize> {
        if self.players.len() < 2 {
            return None;
        }
        let id = self.current_turn?;
        self.players.iter().position(|p| p.id() == id)
    }

    /// The turn holder, if any. See [`Self::current_turn_index`].
    #[must_use]
    pub fn current_turn_player(&self) -> Option<&Player> {
        self.current_turn_index().map(|i| &self.players[i])
    }

    /// Passes the turn to the next player and runs the threshold check on
    /// them.
    ///
    /// Returns `None` and changes nothing with fewer than two players.
    pub fn advance_turn(&mut self) -> Option<TurnAdvance> {
        let count = self.players.len();
        if count < 2 {
            tracing::debug!(count, "turn advance skipped: fewer than two players");
            return None;
        }

        let index = self.scheduler.next_index(self.current_turn_index(), count);
        let player = &self.players[index];
        self.current_turn = Some(player.id());

        let characteristic_sum = sum_characteristics(&player.characteristics);
        let threshold_reached = self.scheduler.evaluate(player);
        tracing::debug!(player = %player.name, index, characteristic_sum, "turn advanced");

        Some(TurnAdvance {
            index,
            player_id: player.id(),
            characteristic_sum,
            threshold_reached,
        })
    }

    fn current_turn_player_mut(&mut self, action: &str) -> Result<&mut Player, DomainError> {
        let index = self.current_turn_index().ok_or_else(|| {
            DomainError::InvalidTurnState(format!("cannot {action}: no player holds the turn"))
        })?;
        Ok(&mut self.players[index])
    }

    /// Adds `amount` to the turn holder's score and returns their new total.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTurnState` if nobody holds the turn, and
    /// `DomainError::Validation` if `amount` is not finite.
    pub fn add_score(&mut self, amount: f64) -> Result<f64, DomainError> {
        if !amount.is_finite() {
            return Err(DomainError::Validation(format!(
                "score amount must be finite, got {amount}"
            )));
        }
        let player = self.current_turn_player_mut("add score")?;
        player.score_progress += amount;
        tracing::debug!(player = %player.name, amount, total = player.score_progress, "score added");
        Ok(player.score_progress)
    }

    /// Adds `points` to one characteristic of the turn holder and returns
    /// their updated scores.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTurnState` if nobody holds the turn.
    pub fn award_characteristic(
        &mut self,
        kind: Characteristic,
        points: i32,
    ) -> Result<Characteristics, DomainError> {
        let player = self.current_turn_player_mut("award characteristic")?;
        player.characteristics.award(kind, points);
        tracing::debug!(player = %player.name, %kind, points, "characteristic awarded");
        Ok(player.characteristics)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::turn::{ProgressionHook, TurnWrap};

    #[derive(Default)]
    struct RecordingHook(Mutex<Vec<String>>);

    impl ProgressionHook for RecordingHook {
        fn on_threshold_reached(&self, player: &Player, _characteristic_sum: i64) {
            self.0.lock().unwrap().push(player.name.clone());
        }
    }

    fn multiplayer() -> SessionState {
        SessionState::new(CapacityPolicy::multiplayer(), TurnScheduler::default())
    }

    fn with_players(names: &[&str]) -> SessionState {
        let mut state = multiplayer();
        for name in names {
            state.add_player(*name).unwrap();
        }
        state
    }

    fn names(state: &SessionState) -> Vec<&str> {
        state.players().iter().map(|p| p.name.as_str()).collect()
    }

    fn holder(state: &SessionState) -> Option<&str> {
        state.current_turn_player().map(|p| p.name.as_str())
    }

    // --- add_player ---

    #[test]
    fn test_single_player_rejects_second_player_without_mutation() {
        // Arrange
        let mut state = SessionState::new(CapacityPolicy::single_player(), TurnScheduler::default());
        state.add_player("Ana").unwrap();

        // Act
        let second = state.add_player("Ben");
        let third = state.add_player("Cal");

        // Assert
        assert_eq!(second, Err(DomainError::SlotsFull { capacity: 1 }));
        assert_eq!(third, Err(DomainError::SlotsFull { capacity: 1 }));
        assert_eq!(names(&state), ["Ana"]);
        assert!(!state.is_multiplayer());
    }

    #[test]
    fn test_multiplayer_never_exceeds_five_players() {
        let mut state = multiplayer();

        let results: Vec<_> = (0..7).map(|i| state.add_player(format!("P{i}"))).collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 5);
        assert_eq!(results[5], Err(DomainError::SlotsFull { capacity: 5 }));
        assert_eq!(state.player_count(), 5);
        assert!(state.slots_filled());
    }

    #[test]
    fn test_add_player_appends_in_order_and_allows_duplicates() {
        let state = with_players(&["Ana", "Ben", "Ana"]);

        assert_eq!(names(&state), ["Ana", "Ben", "Ana"]);
        assert_ne!(state.players()[0].id(), state.players()[2].id());
    }

    // --- remove_player ---

    #[test]
    fn test_remove_player_removes_first_match_only() {
        // Arrange
        let mut state = with_players(&["Ana", "Ben", "Ana", "Cal"]);
        let second_ana = state.players()[2].id();

        // Act
        let removed = state.remove_player("Ana").unwrap();

        // Assert
        assert_eq!(removed.index, 0);
        assert_eq!(names(&state), ["Ben", "Ana", "Cal"]);
        assert_eq!(state.players()[1].id(), second_ana);
    }

    #[test]
    fn test_remove_unknown_name_is_a_no_op() {
        let mut state = with_players(&["Ana", "Ben"]);

        let removed = state.remove_player("Zed");

        assert!(removed.is_none());
        assert_eq!(names(&state), ["Ana", "Ben"]);
    }

    #[test]
    fn test_removing_turn_holder_clears_the_turn() {
        // Arrange
        let mut state = with_players(&["Ana", "Ben", "Cal"]);
        state.advance_turn();
        state.advance_turn();
        assert_eq!(holder(&state), Some("Ben"));

        // Act
        let removed = state.remove_player("Ben").unwrap();

        // Assert
        assert!(removed.was_turn_holder);
        assert_eq!(state.current_turn_index(), None);
        assert!(matches!(
            state.add_score(1.0),
            Err(DomainError::InvalidTurnState(_))
        ));
        assert_eq!(state.advance_turn().map(|t| t.index), Some(0));
        assert_eq!(holder(&state), Some("Ana"));
    }

    #[test]
    fn test_removing_earlier_player_keeps_the_same_holder() {
        let mut state = with_players(&["Ana", "Ben", "Cal", "Dee"]);
        state.advance_turn();
        state.advance_turn();
        assert_eq!(holder(&state), Some("Ben"));

        state.remove_player("Ana");

        assert_eq!(holder(&state), Some("Ben"));
        assert_eq!(state.current_turn_index(), Some(0));
    }

    // --- advance_turn ---

    #[test]
    fn test_advance_turn_is_a_no_op_below_two_players() {
        let mut empty = multiplayer();
        let mut solo = with_players(&["Ana"]);

        assert!(empty.advance_turn().is_none());
        assert!(solo.advance_turn().is_none());
        assert_eq!(solo.current_turn_index(), None);
    }

    #[test]
    fn test_first_advance_gives_turn_to_first_player() {
        let mut state = with_players(&["Ana", "Ben", "Cal"]);

        let advance = state.advance_turn().unwrap();

        assert_eq!(advance.index, 0);
        assert_eq!(holder(&state), Some("Ana"));
    }

    #[test]
    fn test_advance_from_first_moves_to_second() {
        let mut state = with_players(&["Ana", "Ben", "Cal"]);
        state.advance_turn();

        let advance = state.advance_turn().unwrap();

        assert_eq!(advance.index, 1);
        assert_eq!(state.current_turn_index(), Some(1));
        assert_eq!(holder(&state), Some("Ben"));
    }

    #[test]
    fn test_advance_wraps_when_next_index_reaches_last_slot() {
        let mut state = with_players(&["Ana", "Ben", "Cal"]);
        state.advance_turn();
        state.advance_turn();

        let advance = state.advance_turn().unwrap();

        assert_eq!(advance.index, 0);
        assert_eq!(holder(&state), Some("Ana"));
    }

    #[test]
    fn test_circular_policy_reaches_last_player() {
        let scheduler = TurnScheduler::new(
            TurnScheduler::DEFAULT_THRESHOLD,
            TurnWrap::Circular,
            Arc::new(RecordingHook::default()),
        );
        let mut state = SessionState::new(CapacityPolicy::multiplayer(), scheduler);
        for name in ["Ana", "Ben", "Cal"] {
            state.add_player(name).unwrap();
        }

        let order: Vec<usize> = (0..4).filter_map(|_| state.advance_turn()).map(|t| t.index).collect();

        assert_eq!(order, [0, 1, 2, 0]);
    }

    #[test]
    fn test_advance_fires_hook_only_above_threshold() {
        // Arrange
        let hook = Arc::new(RecordingHook::default());
        let scheduler = TurnScheduler::new(20, TurnWrap::EarlyWrap, hook.clone());
        let mut state = SessionState::new(CapacityPolicy::multiplayer(), scheduler);
        state.add_player("Ana").unwrap();
        state.add_player("Ben").unwrap();
        state.add_player("Cal").unwrap();
        state.advance_turn();
        for kind in Characteristic::ALL {
            state.award_characteristic(kind, 5).unwrap();
        }
        state.advance_turn();
        for kind in Characteristic::ALL {
            state.award_characteristic(kind, 4).unwrap();
        }

        // Act: Ana (sum 25) then Ben (sum 20).
        let onto_ana = state.advance_turn().unwrap();
        let onto_ben = state.advance_turn().unwrap();

        // Assert
        assert!(onto_ana.threshold_reached);
        assert_eq!(onto_ana.characteristic_sum, 25);
        assert!(!onto_ben.threshold_reached);
        assert_eq!(onto_ben.characteristic_sum, 20);
        assert_eq!(*hook.0.lock().unwrap(), ["Ana"]);
    }

    // --- add_score ---

    #[test]
    fn test_add_score_credits_only_the_turn_holder() {
        // Arrange
        let mut state = with_players(&["Ana", "Ben", "Cal"]);
        state.advance_turn();
        state.advance_turn();

        // Act
        let total = state.add_score(2.5).unwrap();
        state.add_score(1.0).unwrap();

        // Assert
        assert!((total - 2.5).abs() < f64::EPSILON);
        let scores: Vec<f64> = state.players().iter().map(|p| p.score_progress).collect();
        assert_eq!(scores, [0.0, 3.5, 0.0]);
    }

    #[test]
    fn test_add_score_without_turn_holder_fails_cleanly() {
        let mut state = with_players(&["Ana", "Ben"]);

        let result = state.add_score(1.0);

        match result {
            Err(DomainError::InvalidTurnState(msg)) => assert!(msg.contains("add score")),
            other => panic!("expected InvalidTurnState, got {other:?}"),
        }
        assert!(state.players().iter().all(|p| p.score_progress == 0.0));
    }

    #[test]
    fn test_add_score_with_single_player_is_invalid() {
        let mut state = with_players(&["Ana"]);

        assert!(matches!(
            state.add_score(1.0),
            Err(DomainError::InvalidTurnState(_))
        ));
    }

    #[test]
    fn test_add_score_rejects_non_finite_amounts() {
        let mut state = with_players(&["Ana", "Ben"]);
        state.advance_turn();

        assert!(matches!(
            state.add_score(f64::NAN),
            Err(DomainError::Validation(_))
        ));
        assert!(state.players()[0].score_progress == 0.0);
    }

    #[test]
    fn test_roster_dropping_below_two_clears_the_turn() {
        let mut state = with_players(&["Ana", "Ben"]);
        state.advance_turn();

        state.remove_player("Ben");

        assert_eq!(state.current_turn_index(), None);
        assert!(state.current_turn_player().is_none());
    }

    #[test]
    fn test_advance_turn_with_saturated_characteristics_reports_wide_sum() {
        // Arrange
        let mut state = with_players(&["Ana", "Ben"]);
        state.advance_turn();
        state
            .award_characteristic(Characteristic::Creative, i32::MAX)
            .unwrap();
        state
            .award_characteristic(Characteristic::Physical, 1)
            .unwrap();

        // Act: two players with the early wrap keep the turn on Ana.
        let advance = state.advance_turn().unwrap();

        // Assert
        assert_eq!(holder(&state), Some("Ana"));
        assert_eq!(advance.characteristic_sum, i64::from(i32::MAX) + 1);
        assert!(advance.threshold_reached);
    }
}
