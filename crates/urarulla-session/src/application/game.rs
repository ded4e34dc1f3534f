//! The game session: session state wired to content, events and the view.
//!
//! Every mutation goes through the `SessionState` first; collaborators are
//! only told about changes that actually happened.

use std::fmt;
use std::sync::Arc;

use urarulla_content::application::query_handlers::{
    QuestionRef, draw_question, industry_questions,
};
use urarulla_content::domain::records::{IndustryQuestion, QuestionCategory};
use urarulla_content::domain::store::ContentStore;
use urarulla_core::characteristic::{Characteristic, Characteristics};
use urarulla_core::error::DomainError;
use urarulla_core::event::{EventBus, GameEventKind, GameStarted};
use urarulla_core::rng::DeterministicRng;
use urarulla_core::view::GameView;

use crate::domain::player::PlayerId;
use crate::domain::session::{RemovedPlayer, SessionState, TurnAdvance};
use crate::domain::settings::SessionSettings;
use crate::domain::turn::{ProgressionHook, TurnScheduler};

/// A running game.
pub struct GameSession {
    state: SessionState,
    content: Arc<ContentStore>,
    bus: EventBus,
    view: Arc<dyn GameView>,
    main_menu_index: usize,
}

impl fmt::Debug for GameSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("bus", &self.bus)
            .field("main_menu_index", &self.main_menu_index)
            .finish_non_exhaustive()
    }
}

impl GameSession {
    /// Configures a session from `settings`.
    ///
    /// `bus` must be the bus `content` was loaded on. Settings cannot be
    /// changed afterwards.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the settings are out of range or
    /// `DataLoaded` has not been published on `bus`.
    pub fn configure(
        settings: &SessionSettings,
        content: Arc<ContentStore>,
        bus: EventBus,
        view: Arc<dyn GameView>,
        hook: Arc<dyn ProgressionHook>,
    ) -> Result<Self, DomainError> {
        if !bus.data_loaded_fired() {
            return Err(DomainError::Validation(
                "content must be loaded before the session is configured".to_owned(),
            ));
        }
        let capacity = settings.capacity_policy()?;
        let scheduler = TurnScheduler::new(
            settings.characteristic_threshold,
            settings.turn_wrap,
            hook,
        );
        tracing::info!(
            is_multiplayer = settings.is_multiplayer,
            capacity = capacity.capacity(),
            threshold = settings.characteristic_threshold,
            turn_wrap = ?settings.turn_wrap,
            "session configured"
        );
        Ok(Self {
            state: SessionState::new(capacity, scheduler),
            content,
            bus,
            view,
            main_menu_index: settings.main_menu_index,
        })
    }

    /// Session state, read-only.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Loaded content.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    /// The event bus, for subscribing.
    pub fn events(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Adds a player and creates their setup and in-game stands.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SlotsFull` if the roster is at capacity.
    pub fn add_player(&mut self, name: &str) -> Result<PlayerId, DomainError> {
        let id = self.state.add_player(name)?;
        let index = self.state.player_count() - 1;
        self.view.create_player_setup_stand(index, name);
        self.view.create_player_game_stand(index, name);
        Ok(id)
    }

    /// Removes the first player named `name` and drops their setup stand.
    ///
    /// Returns `None` if nobody matches.
    pub fn remove_player(&mut self, name: &str) -> Option<RemovedPlayer> {
        let removed = self.state.remove_player(name)?;
        self.view.remove_player_setup_stand(removed.index);
        Some(removed)
    }

    /// See [`SessionState::advance_turn`].
    pub fn advance_turn(&mut self) -> Option<TurnAdvance> {
        self.state.advance_turn()
    }

    /// See [`SessionState::add_score`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTurnState` if nobody holds the turn.
    pub fn add_score(&mut self, amount: f64) -> Result<f64, DomainError> {
        self.state.add_score(amount)
    }

    /// See [`SessionState::award_characteristic`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTurnState` if nobody holds the turn.
    pub fn award_characteristic(
        &mut self,
        kind: Characteristic,
        points: i32,
    ) -> Result<Characteristics, DomainError> {
        self.state.award_characteristic(kind, points)
    }

    /// Switches to the main game screen, then publishes `GameStarted`.
    pub fn start_game(&mut self) {
        self.view.set_active_menu(self.main_menu_index);
        tracing::info!(players = self.state.player_count(), "game started");
        self.bus.publish(GameEventKind::GameStarted(GameStarted {
            player_count: self.state.player_count(),
            is_multiplayer: self.state.is_multiplayer(),
        }));
    }

    /// Whether the view is showing the main game screen.
    #[must_use]
    pub fn is_main_scene_active(&self) -> bool {
        self.view.active_menu() == Some(self.main_menu_index)
    }

    /// Draws a random question from `category`.
    pub fn draw_question(
        &self,
        category: QuestionCategory,
        rng: &mut dyn DeterministicRng,
    ) -> Option<QuestionRef<'_>> {
        draw_question(&self.content, category, rng)
    }

    /// Industry questions for `industry`, matched case-insensitively.
    pub fn industry_questions<'a>(
        &'a self,
        industry: &'a str,
    ) -> impl Iterator<Item = &'a IndustryQuestion> {
        industry_questions(&self.content, industry)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use urarulla_content::application::loader::load_content;
    use urarulla_content::application::source::DirectoryContentSource;
    use urarulla_core::event::{EventChannel, GAME_STARTED_EVENT_TYPE};
    use urarulla_test_support::{FixedClock, RecordingSubscriber, RecordingView, ViewCall};

    use super::*;
    use crate::domain::turn::LogProgression;

    fn loaded_bus() -> (Arc<ContentStore>, EventBus) {
        let mut bus = EventBus::new(Arc::new(FixedClock::default()));
        let source =
            DirectoryContentSource::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../content"));
        let content = load_content(&source, &mut bus).unwrap();
        (content, bus)
    }

    fn session(settings: &SessionSettings) -> (GameSession, Arc<RecordingView>) {
        let (content, bus) = loaded_bus();
        let view = Arc::new(RecordingView::new());
        let game = GameSession::configure(
            settings,
            content,
            bus,
            view.clone(),
            Arc::new(LogProgression),
        )
        .unwrap();
        (game, view)
    }

    #[test]
    fn test_configure_requires_loaded_content() {
        // Arrange
        let (content, _) = loaded_bus();
        let fresh_bus = EventBus::new(Arc::new(FixedClock::default()));

        // Act
        let result = GameSession::configure(
            &SessionSettings::default(),
            content,
            fresh_bus,
            Arc::new(RecordingView::new()),
            Arc::new(LogProgression),
        );

        // Assert
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_add_player_creates_both_stands() {
        let (mut game, view) = session(&SessionSettings::default());

        game.add_player("Ana").unwrap();
        game.add_player("Ben").unwrap();

        assert_eq!(
            view.calls(),
            [
                ViewCall::CreateSetupStand(0, "Ana".to_owned()),
                ViewCall::CreateGameStand(0, "Ana".to_owned()),
                ViewCall::CreateSetupStand(1, "Ben".to_owned()),
                ViewCall::CreateGameStand(1, "Ben".to_owned()),
            ]
        );
    }

    #[test]
    fn test_rejected_player_does_not_touch_the_view() {
        let settings = SessionSettings {
            is_multiplayer: false,
            ..SessionSettings::default()
        };
        let (mut game, view) = session(&settings);
        game.add_player("Ana").unwrap();

        let result = game.add_player("Ben");

        assert_eq!(result, Err(DomainError::SlotsFull { capacity: 1 }));
        assert_eq!(view.calls().len(), 2);
    }

    #[test]
    fn test_remove_player_drops_setup_stand_at_former_index() {
        let (mut game, view) = session(&SessionSettings::default());
        game.add_player("Ana").unwrap();
        game.add_player("Ben").unwrap();

        let removed = game.remove_player("Ben");
        let missing = game.remove_player("Ben");

        assert_eq!(removed.map(|r| r.index), Some(1));
        assert!(missing.is_none());
        assert_eq!(view.calls().last(), Some(&ViewCall::RemoveSetupStand(1)));
    }

    #[test]
    fn test_start_game_switches_menu_before_publishing() {
        // Arrange
        let (mut game, view) = session(&SessionSettings::default());
        let recorder = Arc::new(RecordingSubscriber::new());
        game.events()
            .subscribe(EventChannel::GameStarted, recorder.clone());
        game.add_player("Ana").unwrap();
        assert!(!game.is_main_scene_active());

        // Act
        game.start_game();

        // Assert
        assert!(game.is_main_scene_active());
        assert_eq!(view.calls().last(), Some(&ViewCall::SetActiveMenu(3)));
        let events = recorder.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].metadata.event_type, GAME_STARTED_EVENT_TYPE);
        assert_eq!(
            events[0].kind,
            GameEventKind::GameStarted(GameStarted {
                player_count: 1,
                is_multiplayer: true,
            })
        );
    }

    #[test]
    fn test_start_game_publishes_once_per_call() {
        let (mut game, _view) = session(&SessionSettings::default());
        let recorder = Arc::new(RecordingSubscriber::new());
        game.events()
            .subscribe(EventChannel::GameStarted, recorder.clone());

        game.start_game();
        game.start_game();

        assert_eq!(recorder.events().len(), 2);
    }

    #[test]
    fn test_draw_question_reads_loaded_content() {
        let (game, _view) = session(&SessionSettings::default());
        let mut rng = urarulla_test_support::MockRng;

        let question = game.draw_question(QuestionCategory::Tricky, &mut rng);

        assert_eq!(
            question.map(|q| q.text().to_owned()),
            game.content()
                .questions()
                .tricky
                .first()
                .map(|q| q.question.clone())
        );
    }
}
