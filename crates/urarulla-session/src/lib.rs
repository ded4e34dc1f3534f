//! Urarulla: Session state.
//!
//! Responsible for the player roster, whose turn it is, per-player scores,
//! the single/multiplayer capacity policy, and starting the game.

pub mod application;
pub mod domain;
