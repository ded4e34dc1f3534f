//! Domain error types.

use thiserror::Error;

/// Errors raised by session operations.
///
/// Content loading has its own error type in `urarulla-content`; these are
/// the local, recoverable failures reported back to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The roster cannot take another player under the capacity policy.
    #[error("player slots are full (capacity {capacity})")]
    SlotsFull {
        /// Number of players the session admits.
        capacity: usize,
    },

    /// An operation needed a valid current turn holder and there was none.
    #[error("invalid turn state: {0}")]
    InvalidTurnState(String),

    /// A configuration or input value failed validation.
    #[error("validation error: {0}")]
    Validation(String),
}
