// Letter-frequency guessing. Letters are chosen from the masked view alone.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::core::{GameState, MASK_CHAR};

use super::{Action, Player};

/// English letters from most to least common.
pub const LETTER_FREQUENCY: &str = "ETAOINSHRDLCUMWFGYPBVKJXQZ";

/// Lives at or below which the AI starts spending hints.
const HINT_THRESHOLD: u8 = 3;

/// Simple AI player that guesses common letters first. With a candidate word
/// list it only guesses letters that appear in answers still consistent with
/// the board.
pub struct AiPlayer {
    candidates: Vec<String>,
    use_hints: bool,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self {
            candidates: Vec::new(),
            use_hints: true,
        }
    }

    /// Narrow guesses using `words` as the set of possible answers.
    pub fn with_candidates(words: &[&str]) -> Self {
        Self {
            candidates: words.iter().map(|w| w.to_uppercase()).collect(),
            use_hints: true,
        }
    }

    /// Never ask for hints.
    pub fn without_hints(mut self) -> Self {
        self.use_hints = false;
        self
    }

    /// Letter the AI would guess next, or `None` once every letter was tried.
    pub fn best_letter(&self, state: &GameState) -> Option<char> {
        let untried: Vec<char> = LETTER_FREQUENCY
            .chars()
            .filter(|ch| !state.guessed_letters().contains(ch) && !state.wrong_letters().contains(ch))
            .collect();

        let masked: Vec<char> = state.masked_answer().chars().collect();
        let live: Vec<&String> = self
            .candidates
            .iter()
            .filter(|word| consistent(word, &masked, state))
            .collect();

        // `max_by_key` keeps the last maximum, so iterate rarest first to
        // break ties in favour of the more common letter.
        let best = untried
            .iter()
            .rev()
            .map(|&ch| (ch, live.iter().filter(|w| w.contains(ch)).count()))
            .filter(|&(_, count)| count > 0)
            .max_by_key(|&(_, count)| count)
            .map(|(ch, _)| ch);

        best.or_else(|| untried.first().copied())
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

/// `word` could still be the answer given the masked board and wrong letters.
fn consistent(word: &str, masked: &[char], state: &GameState) -> bool {
    if word.chars().count() != masked.len() {
        return false;
    }
    word.chars().zip(masked.iter()).all(|(w, &m)| {
        if m == MASK_CHAR {
            w.is_ascii_alphabetic()
                && !state.guessed_letters().contains(&w)
                && !state.wrong_letters().contains(&w)
        } else {
            w == m
        }
    })
}

impl Player for AiPlayer {
    fn next_action(&mut self, state: &GameState) -> Action {
        // a hint that reveals the last hidden letter wins without scoring
        let hidden = state.hidden_letters().len();
        if self.use_hints && state.can_use_hint() && state.lives() <= HINT_THRESHOLD && hidden > 1 {
            return Action::Hint;
        }
        match self.best_letter(state) {
            Some(ch) => Action::Guess(ch.to_string()),
            None => Action::Quit,
        }
    }
}
