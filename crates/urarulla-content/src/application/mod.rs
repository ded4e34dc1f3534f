//! Application layer for the content store.

pub mod loader;
pub mod query_handlers;
pub mod source;
