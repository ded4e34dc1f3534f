//! Test view: A `GameView` that records every call.

use std::sync::Mutex;

use urarulla_core::view::GameView;

/// One call made on a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    /// `create_player_setup_stand(index, name)`.
    CreateSetupStand(usize, String),
    /// `create_player_game_stand(index, name)`.
    CreateGameStand(usize, String),
    /// `remove_player_setup_stand(index)`.
    RemoveSetupStand(usize),
    /// `set_active_menu(index)`.
    SetActiveMenu(usize),
}

/// A view that records calls in order and tracks the active menu.
#[derive(Debug, Default)]
pub struct RecordingView {
    calls: Mutex<Vec<ViewCall>>,
    active_menu: Mutex<Option<usize>>,
}

impl RecordingView {
    /// Create a view with no active menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all calls so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl GameView for RecordingView {
    fn create_player_setup_stand(&self, index: usize, name: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(ViewCall::CreateSetupStand(index, name.to_owned()));
    }

    fn create_player_game_stand(&self, index: usize, name: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(ViewCall::CreateGameStand(index, name.to_owned()));
    }

    fn remove_player_setup_stand(&self, index: usize) {
        self.calls
            .lock()
            .unwrap()
            .push(ViewCall::RemoveSetupStand(index));
    }

    fn set_active_menu(&self, index: usize) {
        self.calls.lock().unwrap().push(ViewCall::SetActiveMenu(index));
        *self.active_menu.lock().unwrap() = Some(index);
    }

    fn active_menu(&self) -> Option<usize> {
        *self.active_menu.lock().unwrap()
    }
}
