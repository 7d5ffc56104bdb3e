//! Terminal input module (driver-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_snake_types::GameAction`] and hosts the
//! direction-reversal guard the driver applies before editing the state's
//! heading. The core deliberately exposes no API to validate a direction
//! change; this crate is where that contract lives.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, resolve_turn, should_quit};
