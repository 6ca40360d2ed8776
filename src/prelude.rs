//! Commonly used types and utilities for ease of import.

pub use crate::{
    run_game, Action, AiPlayer, EngineConfig, GameEngine, GameState, GameStatus, GuessOutcome,
    Level, Player,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_game_view, CliPlayer};
