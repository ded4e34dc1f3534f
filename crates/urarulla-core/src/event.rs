//! Game events and the subscription bus that delivers them.
//!
//! The bus has two channels. `DataLoaded` fires at most once per bus, after
//! the content store has parsed every resource. `GameStarted` fires once per
//! explicit start of a game.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clock::Clock;

/// Event type identifier for [`DataLoaded`].
pub const DATA_LOADED_EVENT_TYPE: &str = "content.data_loaded";

/// Event type identifier for [`GameStarted`].
pub const GAME_STARTED_EVENT_TYPE: &str = "session.game_started";

/// Metadata attached to every game event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Unique event identifier.
    pub event_id: Uuid,
    /// Type name, one of the `*_EVENT_TYPE` constants.
    pub event_type: String,
    /// Monotonically increasing position on the bus.
    pub sequence_number: i64,
    /// Timestamp of event creation.
    pub occurred_at: DateTime<Utc>,
}

/// Number of records in each loaded content resource.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCounts {
    /// Degree/career records.
    pub degrees: usize,
    /// Characteristic definitions.
    pub characteristic_infos: usize,
    /// Characteristic skills.
    pub characteristic_skills: usize,
    /// Characteristic questions.
    pub characteristic_questions: usize,
    /// Industry questions.
    pub industry_questions: usize,
    /// Tricky questions.
    pub tricky_questions: usize,
}

/// Emitted once every content resource has been parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataLoaded {
    /// Snapshot of what was loaded.
    pub counts: ContentCounts,
}

/// Emitted when the host switches to the main game screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStarted {
    /// Players on the roster at start.
    pub player_count: usize,
    /// Whether the session admits more than one player.
    pub is_multiplayer: bool,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEventKind {
    /// Content is available.
    DataLoaded(DataLoaded),
    /// The game has started.
    GameStarted(GameStarted),
}

impl GameEventKind {
    /// Returns the event type name for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::DataLoaded(_) => DATA_LOADED_EVENT_TYPE,
            Self::GameStarted(_) => GAME_STARTED_EVENT_TYPE,
        }
    }

    /// The channel this payload is delivered on.
    #[must_use]
    pub fn channel(&self) -> EventChannel {
        match self {
            Self::DataLoaded(_) => EventChannel::DataLoaded,
            Self::GameStarted(_) => EventChannel::GameStarted,
        }
    }
}

/// Event envelope handed to subscribers.
#[derive(Debug, Clone, PartialEq)]
pub struct GameEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: GameEventKind,
}

impl GameEvent {
    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    /// Serializes the event payload to JSON.
    #[must_use]
    pub fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("GameEventKind serialization is infallible")
    }
}

/// The two notification channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventChannel {
    /// See [`DataLoaded`].
    DataLoaded,
    /// See [`GameStarted`].
    GameStarted,
}

/// Receives events from an [`EventBus`].
pub trait EventSubscriber: Send + Sync {
    /// Called synchronously for each event on a subscribed channel.
    fn on_event(&self, event: &GameEvent);
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    channel: EventChannel,
    subscriber: Arc<dyn EventSubscriber>,
}

/// Synchronous multicast bus for game events.
pub struct EventBus {
    clock: Arc<dyn Clock>,
    subscriptions: Vec<Subscription>,
    next_subscription: u64,
    sequence: i64,
    data_loaded_fired: bool,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("subscriptions", &self.subscriptions.len())
            .field("sequence", &self.sequence)
            .field("data_loaded_fired", &self.data_loaded_fired)
            .finish_non_exhaustive()
    }
}

impl EventBus {
    /// Creates a bus that timestamps events with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            subscriptions: Vec::new(),
            next_subscription: 0,
            sequence: 0,
            data_loaded_fired: false,
        }
    }

    /// Registers `subscriber` for events on `channel`.
    pub fn subscribe(
        &mut self,
        channel: EventChannel,
        subscriber: Arc<dyn EventSubscriber>,
    ) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.subscriptions.push(Subscription {
            id,
            channel,
            subscriber,
        });
        id
    }

    /// Removes a subscription. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        self.subscriptions.len() != before
    }

    /// Number of live subscriptions on `channel`.
    #[must_use]
    pub fn subscriber_count(&self, channel: EventChannel) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.channel == channel)
            .count()
    }

    /// Whether `DataLoaded` has already been delivered.
    #[must_use]
    pub fn data_loaded_fired(&self) -> bool {
        self.data_loaded_fired
    }

    /// Wraps `kind` in an envelope and delivers it to the channel's
    /// subscribers in subscription order.
    ///
    /// Returns `None` without delivering when `kind` is a second
    /// `DataLoaded`.
    pub fn publish(&mut self, kind: GameEventKind) -> Option<GameEvent> {
        let channel = kind.channel();
        if channel == EventChannel::DataLoaded {
            if self.data_loaded_fired {
                tracing::warn!("DataLoaded already published; dropping duplicate");
                return None;
            }
            self.data_loaded_fired = true;
        }

        self.sequence += 1;
        let event = GameEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                sequence_number: self.sequence,
                occurred_at: self.clock.now(),
            },
            kind,
        };

        tracing::debug!(
            event_type = %event.metadata.event_type,
            sequence = event.metadata.sequence_number,
            payload = %event.to_payload(),
            "publishing game event"
        );
        for subscription in self.subscriptions.iter().filter(|s| s.channel == channel) {
            subscription.subscriber.on_event(&event);
        }
        Some(event)
    }
}
