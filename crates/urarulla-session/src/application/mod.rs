//! Application layer for the session.

pub mod game;
pub mod query_handlers;
