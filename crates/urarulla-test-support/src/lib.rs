//! Shared test fakes and utilities for the Urarulla party game.

mod clock;
mod rng;
mod subscriber;
mod view;

pub use clock::FixedClock;
pub use rng::{MockRng, SequenceRng};
pub use subscriber::RecordingSubscriber;
pub use view::{RecordingView, ViewCall};
