//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond
//! `crossterm` key events. It maps keys into [`crate::types::GameAction`] and
//! tracks the board cursor that turns "select" into a concrete tile.

pub mod cursor;
pub mod map;

pub use tui_pairs_types as types;

pub use cursor::GridCursor;
pub use map::{handle_key_event, should_quit};
