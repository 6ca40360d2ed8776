use alloc::string::String;

use log::{debug, info};
use rand::Rng;

use super::{
    common::GuessOutcome,
    config::{EngineConfig, Level, WordPool},
    state::{is_maskable, GameState},
};

/// Alphabetic and not a letter number (`Ⅷ` is alphabetic in Unicode).
fn is_letter(ch: char) -> bool {
    ch.is_alphabetic() && !ch.is_numeric()
}

/// Rules engine. Holds configuration, word pools and the RNG but no game;
/// every game lives in a caller-owned [`GameState`].
pub struct GameEngine<R> {
    config: EngineConfig,
    basic: WordPool,
    intermediate: WordPool,
    rng: R,
}

impl<R: Rng> GameEngine<R> {
    /// Engine using the built-in word pools.
    pub fn new(config: EngineConfig, rng: R) -> Self {
        Self::with_pools(
            config,
            WordPool::builtin(Level::Basic),
            WordPool::builtin(Level::Intermediate),
            rng,
        )
    }

    /// Engine drawing answers from caller-supplied pools.
    pub fn with_pools(config: EngineConfig, basic: WordPool, intermediate: WordPool, rng: R) -> Self {
        Self {
            config,
            basic,
            intermediate,
            rng,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Pool matching the configured level.
    pub fn pool(&self) -> &WordPool {
        match self.config.level() {
            Level::Basic => &self.basic,
            Level::Intermediate => &self.intermediate,
        }
    }

    fn choose_answer(&mut self) -> String {
        let words = match self.config.level() {
            Level::Basic => self.basic.words(),
            Level::Intermediate => self.intermediate.words(),
        };
        let idx = self.rng.random_range(0..words.len());
        String::from(words[idx])
    }

    /// Begin a new game. A preset answer bypasses the random draw.
    pub fn start(&mut self, preset_answer: Option<&str>) -> GameState {
        let answer = match preset_answer {
            Some(answer) => String::from(answer),
            None => self.choose_answer(),
        };
        debug!(
            "starting {} game with {} lives ({} chars)",
            self.config.level(),
            self.config.lives(),
            answer.chars().count()
        );
        GameState::new(&answer, self.config.lives())
    }

    /// Evaluate a guess and report exactly what happened.
    pub fn guess(&mut self, state: &mut GameState, letter: &str) -> GuessOutcome {
        if state.is_over() {
            return GuessOutcome::GameOver;
        }
        let upper = letter.to_uppercase();
        let mut chars = upper.chars();
        let up = match (chars.next(), chars.next()) {
            (Some(ch), None) if is_letter(ch) => ch,
            _ => return GuessOutcome::Invalid,
        };
        if state.guessed_letters().contains(&up) {
            return GuessOutcome::AlreadyGuessed;
        }
        if state.wrong_letters().contains(&up) {
            return GuessOutcome::AlreadyMissed;
        }

        if state.answer_contains(up) {
            state.reveal(up);
            state.reveal_all_if_won();
            if state.is_won() {
                state.award_point();
                info!("answer {} solved with {} lives left", state.answer(), state.lives());
                return GuessOutcome::Solved;
            }
            debug!("guess {} correct: {}", up, state.masked_answer());
            GuessOutcome::Correct
        } else {
            state.record_miss(up);
            if state.is_lost() {
                info!("out of lives, answer was {}", state.answer());
                return GuessOutcome::Lost;
            }
            debug!("guess {} wrong, {} lives left", up, state.lives());
            GuessOutcome::Wrong
        }
    }

    /// Boolean form of [`guess`](Self::guess): `true` for a letter that is
    /// (or already was) revealed, `false` for everything else.
    pub fn guess_letter(&mut self, state: &mut GameState, letter: &str) -> bool {
        self.guess(state, letter).accepted()
    }

    /// Reveal one hidden letter at the cost of a life. Returns the revealed
    /// character, or `None` when no hint can be granted.
    pub fn hint(&mut self, state: &mut GameState) -> Option<char> {
        if state.is_over() || !state.can_use_hint() {
            return None;
        }
        let hidden = state.hidden_occurrences();
        if hidden.is_empty() {
            return None;
        }
        let reveal = hidden[self.rng.random_range(0..hidden.len())];
        debug_assert!(is_maskable(reveal));
        state.reveal(reveal.to_ascii_uppercase());
        state.spend_hint();
        state.reveal_all_if_won();
        debug!(
            "hint revealed {} ({} of hints used, {} lives left)",
            reveal,
            state.hints_used(),
            state.lives()
        );
        if state.is_won() {
            info!("answer {} completed by a hint", state.answer());
        }
        Some(reveal)
    }
}
