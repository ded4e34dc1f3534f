//! Turn rotation and the characteristic threshold check.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use urarulla_core::characteristic::Characteristics;

use super::player::Player;

/// How the turn pointer moves past the end of the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnWrap {
    /// Wraps to the first player as soon as the next index reaches
    /// `count - 1`, so the last player only gets a turn when the pointer
    /// already sits on them. This is the behavior shipped builds rely on.
    #[default]
    EarlyWrap,
    /// Plain round robin, `(position + 1) % count`.
    Circular,
}

impl TurnWrap {
    /// Index of the next turn holder.
    ///
    /// `current` is the holder's position, or `None` when nobody holds the
    /// turn, in which case the first player is next. `count` must be at
    /// least 2.
    #[must_use]
    pub fn next_index(self, current: Option<usize>, count: usize) -> usize {
        debug_assert!(count >= 2, "turn rotation needs at least two players");
        let Some(position) = current else {
            return 0;
        };
        match self {
            Self::EarlyWrap => {
                let next = position + 1;
                if next >= count - 1 { 0 } else { next }
            }
            Self::Circular => (position + 1) % count,
        }
    }
}

/// Sum of the five characteristic scores.
#[must_use]
pub fn sum_characteristics(characteristics: &Characteristics) -> i64 {
    characteristics.sum()
}

/// Reacts when a new turn holder has crossed the characteristic threshold.
pub trait ProgressionHook: Send + Sync {
    /// Called with the new turn holder and their characteristic sum.
    fn on_threshold_reached(&self, player: &Player, characteristic_sum: i64);
}

/// Default hook: records the progression request in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgression;

impl ProgressionHook for LogProgression {
    fn on_threshold_reached(&self, player: &Player, characteristic_sum: i64) {
        tracing::info!(
            player = %player.name,
            characteristic_sum,
            "characteristic threshold reached; next question section requested"
        );
    }
}

/// Picks the next turn holder and evaluates the progression threshold.
#[derive(Clone)]
pub struct TurnScheduler {
    threshold: i32,
    wrap: TurnWrap,
    hook: Arc<dyn ProgressionHook>,
}

impl fmt::Debug for TurnScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TurnScheduler")
            .field("threshold", &self.threshold)
            .field("wrap", &self.wrap)
            .finish_non_exhaustive()
    }
}

impl TurnScheduler {
    /// Default threshold a characteristic sum must exceed.
    pub const DEFAULT_THRESHOLD: i32 = 20;

    /// Creates a scheduler.
    #[must_use]
    pub fn new(threshold: i32, wrap: TurnWrap, hook: Arc<dyn ProgressionHook>) -> Self {
        Self {
            threshold,
            wrap,
            hook,
        }
    }

    /// The configured threshold.
    #[must_use]
    pub fn threshold(&self) -> i32 {
        self.threshold
    }

    /// The configured wrap policy.
    #[must_use]
    pub fn wrap(&self) -> TurnWrap {
        self.wrap
    }

    /// Index of the next turn holder. See [`TurnWrap::next_index`].
    #[must_use]
    pub fn next_index(&self, current: Option<usize>, count: usize) -> usize {
        self.wrap.next_index(current, count)
    }

    /// Whether `characteristics` sum strictly above the threshold.
    #[must_use]
    pub fn threshold_reached(&self, characteristics: &Characteristics) -> bool {
        sum_characteristics(characteristics) > i64::from(self.threshold)
    }

    /// Runs the threshold check for the new turn holder, firing the hook on
    /// success. Returns whether the hook fired.
    pub fn evaluate(&self, player: &Player) -> bool {
        if !self.threshold_reached(&player.characteristics) {
            return false;
        }
        self.hook
            .on_threshold_reached(player, sum_characteristics(&player.characteristics));
        true
    }
}

impl Default for TurnScheduler {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_THRESHOLD,
            TurnWrap::default(),
            Arc::new(LogProgression),
        )
    }
}
