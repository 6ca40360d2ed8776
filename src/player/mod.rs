//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: Letter-frequency guesser, optionally narrowed by a word list
//! - CliPlayer: Interactive command-line player
//!
//! [`run_game`] drives any player against an engine until the game ends.

use alloc::string::String;

use rand::Rng;

use crate::core::{GameEngine, GameState, GameStatus, GuessOutcome};

/// Move chosen by a player on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Guess a letter. Passed to the engine unvalidated.
    Guess(String),
    /// Spend a life to reveal a letter.
    Hint,
    /// Abandon the game.
    Quit,
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Choosing the next action from the visible state
/// - Handling feedback from guesses and hints
pub trait Player {
    /// Choose the next action given the current game state.
    fn next_action(&mut self, state: &GameState) -> Action;

    /// Inform the player of the outcome of its last guess.
    fn handle_outcome(&mut self, _guess: &str, _outcome: GuessOutcome, _state: &GameState) {}

    /// Inform the player of the result of a hint request.
    fn handle_hint(&mut self, _revealed: Option<char>, _state: &GameState) {}
}

/// Play `state` to completion with `player`. Returns the final status, which
/// is still [`GameStatus::InProgress`] if the player quit.
pub fn run_game<R: Rng, P: Player + ?Sized>(
    engine: &mut GameEngine<R>,
    state: &mut GameState,
    player: &mut P,
) -> GameStatus {
    while !state.is_over() {
        match player.next_action(state) {
            Action::Guess(letter) => {
                let outcome = engine.guess(state, &letter);
                player.handle_outcome(&letter, outcome, state);
            }
            Action::Hint => {
                let revealed = engine.hint(state);
                player.handle_hint(revealed, state);
            }
            Action::Quit => break,
        }
    }
    state.status()
}

// Re-export implementations
pub mod ai;
pub use ai::AiPlayer;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::{print_game_view, CliPlayer};
