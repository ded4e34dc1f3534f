//! Urarulla headless host.
//!
//! Drives a game session from line-oriented commands, standing in for the
//! UI's input loop.

pub mod config;
pub mod console;
pub mod error;
pub mod view;
