//! Domain layer for the session.

pub mod capacity;
pub mod player;
pub mod session;
pub mod settings;
pub mod turn;
