//! Urarulla Core: Shared domain abstractions.
//!
//! This crate defines the types that the content and session crates both
//! depend on: the error taxonomy, player characteristics, the game event
//! bus, the clock/RNG seams and the UI port. It contains no I/O.

pub mod characteristic;
pub mod clock;
pub mod error;
pub mod event;
pub mod rng;
pub mod view;
