//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Each key press
//! is one discrete command; auto-repeat is left to the terminal.

pub mod map;

pub use falling_2048_types as types;

pub use map::{handle_key_event, should_quit};
