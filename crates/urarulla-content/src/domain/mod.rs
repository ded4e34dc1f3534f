//! Domain layer for the content store.

pub mod records;
pub mod store;
