//! Terminal input module.
//!
//! Intentionally independent of the rendering layer. It maps `crossterm`
//! key events into [`charades_types::UiAction`] values, aware of which
//! screen is active.

pub mod map;

pub use charades_types as types;

pub use map::{handle_key_event, should_quit};
