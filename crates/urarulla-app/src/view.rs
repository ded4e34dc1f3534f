//! A `GameView` for a host without a screen: stands become log lines.

use std::sync::Mutex;

use urarulla_core::view::GameView;

/// Logs stand changes and remembers the active menu.
#[derive(Debug, Default)]
pub struct ConsoleView {
    active_menu: Mutex<Option<usize>>,
}

impl ConsoleView {
    /// Creates a view with no active menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameView for ConsoleView {
    fn create_player_setup_stand(&self, index: usize, name: &str) {
        tracing::info!(index, player = name, "setup stand created");
    }

    fn create_player_game_stand(&self, index: usize, name: &str) {
        tracing::info!(index, player = name, "game stand created");
    }

    fn remove_player_setup_stand(&self, index: usize) {
        tracing::info!(index, "setup stand removed");
    }

    fn set_active_menu(&self, index: usize) {
        tracing::info!(index, "menu switched");
        if let Ok(mut active) = self.active_menu.lock() {
            *active = Some(index);
        }
    }

    fn active_menu(&self) -> Option<usize> {
        self.active_menu.lock().ok().and_then(|active| *active)
    }
}
