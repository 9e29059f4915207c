//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: views draw into a plain
//! framebuffer of styled character cells, and the renderer flushes whole
//! frames to the terminal. No TUI framework, no layout engine.
//!
//! Goals:
//! - Keep `core` deterministic and testable (views are pure, no I/O)
//! - Precise control over aspect ratio (2 chars wide per board cell)

pub mod fb;
pub mod game_view;
pub mod menu;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use menu::MenuList;
pub use renderer::{encode_full_into, TerminalRenderer};
