//! Urarulla: Content store.
//!
//! Loads the read-only reference content (questions, degrees,
//! characteristic definitions and skills) once at startup and exposes it to
//! the rest of the game.

pub mod application;
pub mod domain;
pub mod error;
