//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains all game rules and state management. It has no
//! dependencies on terminal I/O or rendering, so the whole simulation can be
//! driven tick-by-tick from tests.
//!
//! # Module structure
//!
//! - [`board`]: 10x30 playfield grid with one-line-per-call clearing
//! - [`piece`]: piece shapes, movement, center rotation with rollback
//! - [`game`]: the Menu/Play/Fail state machine and tick replay
//! - [`rng`]: seedable LCG for uniform piece selection
//! - [`timer`]: monotonic elapsed-tick source
//!
//! # Timing
//!
//! The simulation advances at a fixed 64 ticks/second. Callers read an
//! elapsed-tick counter from a [`timer::TickTimer`] (or any other source) and
//! hand it to [`game::Game::run_ticks`], which replays every whole tick since
//! the previous call. The outer loop's cadence never affects game outcomes.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod timer;

pub use board::Board;
pub use game::Game;
pub use piece::Piece;
pub use rng::SimpleRng;
pub use timer::TickTimer;
