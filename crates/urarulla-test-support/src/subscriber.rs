//! Test subscriber: Records every event it receives.

use std::sync::Mutex;

use urarulla_core::event::{EventSubscriber, GameEvent};

/// An event subscriber that keeps a copy of each delivered event.
#[derive(Debug, Default)]
pub struct RecordingSubscriber {
    events: Mutex<Vec<GameEvent>>,
}

impl RecordingSubscriber {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all events received so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSubscriber for RecordingSubscriber {
    fn on_event(&self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
