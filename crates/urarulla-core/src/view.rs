//! Port to the host's UI/menu layer.

/// Visual side of the game, driven by the session.
///
/// The session calls these after a roster change or a game start has
/// already taken effect. Implementations render; they never veto.
pub trait GameView: Send + Sync {
    /// A player was appended at `index`; create its setup-screen stand.
    fn create_player_setup_stand(&self, index: usize, name: &str);

    /// A player was appended at `index`; create its in-game stand.
    fn create_player_game_stand(&self, index: usize, name: &str);

    /// The player formerly at `index` was removed; drop its setup stand.
    fn remove_player_setup_stand(&self, index: usize);

    /// Switches the active screen to the menu at `index`.
    fn set_active_menu(&self, index: usize);

    /// Index of the active menu, if one is shown.
    fn active_menu(&self) -> Option<usize>;
}
