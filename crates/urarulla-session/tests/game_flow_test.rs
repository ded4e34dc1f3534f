//! End-to-end tests: load content, configure a session, play turns.

use std::sync::{Arc, Mutex};

use urarulla_content::application::loader::load_content;
use urarulla_content::application::source::{
    ContentResource, ContentSource, DirectoryContentSource,
};
use urarulla_core::characteristic::Characteristic;
use urarulla_core::event::{EventBus, EventChannel, GameEventKind};
use urarulla_session::application::game::GameSession;
use urarulla_session::application::query_handlers::session_view;
use urarulla_session::domain::player::Player;
use urarulla_session::domain::settings::SessionSettings;
use urarulla_session::domain::turn::{ProgressionHook, TurnWrap};
use urarulla_test_support::{FixedClock, RecordingSubscriber, RecordingView};

const CONTENT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../content");

#[derive(Default)]
struct RecordingHook(Mutex<Vec<(String, i64)>>);

impl ProgressionHook for RecordingHook {
    fn on_threshold_reached(&self, player: &Player, characteristic_sum: i64) {
        self.0
            .lock()
            .unwrap()
            .push((player.name.clone(), characteristic_sum));
    }
}

fn start(
    settings: &SessionSettings,
) -> (GameSession, Arc<RecordingSubscriber>, Arc<RecordingHook>) {
    let mut bus = EventBus::new(Arc::new(FixedClock::default()));
    let loaded = Arc::new(RecordingSubscriber::new());
    bus.subscribe(EventChannel::DataLoaded, loaded.clone());
    let content = load_content(&DirectoryContentSource::new(CONTENT_DIR), &mut bus).unwrap();
    let hook = Arc::new(RecordingHook::default());
    let game = GameSession::configure(
        settings,
        content,
        bus,
        Arc::new(RecordingView::new()),
        hook.clone(),
    )
    .unwrap();
    (game, loaded, hook)
}

#[test]
fn test_data_loaded_fires_once_before_any_roster_change() {
    // Arrange / Act
    let (mut game, loaded, _hook) = start(&SessionSettings::default());
    game.add_player("Ana").unwrap();

    // Assert
    let events = loaded.events();
    assert_eq!(events.len(), 1);
    match &events[0].kind {
        GameEventKind::DataLoaded(payload) => {
            assert_eq!(payload.counts, game.content().counts());
        }
        other => panic!("expected DataLoaded, got {other:?}"),
    }
    assert!(game.events().data_loaded_fired());
}

#[test]
fn test_loaded_content_matches_the_bundled_files() {
    let (game, _loaded, _hook) = start(&SessionSettings::default());
    let source = DirectoryContentSource::new(CONTENT_DIR);

    let raw = source.read(ContentResource::TrickyQuestions).unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let exposed = serde_json::to_value(&game.content().questions().tricky).unwrap();

    assert_eq!(reparsed["trickyQuestions"], exposed);
}

#[test]
fn test_full_round_with_progression() {
    // Arrange
    let (mut game, _loaded, hook) = start(&SessionSettings::default());
    for name in ["Ana", "Ben", "Cal"] {
        game.add_player(name).unwrap();
    }
    game.start_game();

    // Act: Ana answers enough questions to cross the threshold.
    game.advance_turn().unwrap();
    for kind in Characteristic::ALL {
        game.award_characteristic(kind, 5).unwrap();
    }
    game.add_score(10.0).unwrap();
    let onto_ben = game.advance_turn().unwrap();
    let back_to_ana = game.advance_turn().unwrap();

    // Assert
    assert_eq!(onto_ben.index, 1);
    assert!(!onto_ben.threshold_reached);
    assert_eq!(back_to_ana.index, 0);
    assert!(back_to_ana.threshold_reached);
    assert_eq!(*hook.0.lock().unwrap(), [("Ana".to_owned(), 25)]);

    let view = session_view(game.state());
    assert_eq!(view.current_turn_index, Some(0));
    assert!((view.players[0].score_progress - 10.0).abs() < f64::EPSILON);
    assert!(game.is_main_scene_active());
}

#[test]
fn test_circular_wrap_from_settings_gives_last_player_a_turn() {
    let settings = SessionSettings {
        turn_wrap: TurnWrap::Circular,
        ..SessionSettings::default()
    };
    let (mut game, _loaded, _hook) = start(&settings);
    for name in ["Ana", "Ben", "Cal"] {
        game.add_player(name).unwrap();
    }

    let order: Vec<usize> = (0..3)
        .filter_map(|_| game.advance_turn())
        .map(|t| t.index)
        .collect();

    assert_eq!(order, [0, 1, 2]);
}
