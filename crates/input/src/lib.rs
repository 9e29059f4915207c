//! Terminal input module (core-facing).
//!
//! Maps `crossterm` key events into the engine's action types. Play and menu
//! keys are mapped by separate functions because the same physical keys mean
//! different things in each phase; the caller picks the mapping for the
//! current phase.

pub mod map;

pub use blockfall_types as types;

pub use map::{menu_nav, play_action, should_quit};
