//! Core hangman rules engine (no_std compatible)
//!
//! This module contains the pure game logic: the per-game [`GameState`] and
//! the [`GameEngine`] that evaluates guesses and grants hints. It needs only
//! `alloc`, `rand` and the `log` facade, so it builds without `std`.

pub mod common;
pub mod config;
pub mod engine;
pub mod state;

// Re-export commonly used types
pub use common::{ConfigError, GuessOutcome};
pub use config::*;
pub use engine::GameEngine;
pub use state::{GameState, GameStatus, MASK_CHAR};
