//! Per-game state: the answer, lives, letters tried and the win/loss latch.

use alloc::collections::BTreeSet;
use alloc::string::String;
use alloc::vec::Vec;

use super::config::MAX_HINTS;

/// Placeholder shown for a letter that has not been revealed yet.
pub const MASK_CHAR: char = '_';

/// Only ASCII letters are hidden; spaces and punctuation are always shown.
pub(crate) fn is_maskable(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// One game in progress. Mutated only through [`GameEngine`](super::GameEngine).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    answer: String,
    lives: u8,
    guessed_letters: BTreeSet<char>,
    wrong_letters: Vec<char>,
    won: bool,
    lost: bool,
    hints_used: u8,
    points: u32,
}

impl GameState {
    /// Fresh game for `answer`, which is normalized to uppercase.
    pub fn new(answer: &str, lives: u8) -> Self {
        Self {
            answer: answer.to_uppercase(),
            lives,
            guessed_letters: BTreeSet::new(),
            wrong_letters: Vec::new(),
            won: false,
            lost: false,
            hints_used: 0,
            points: 0,
        }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed_letters
    }

    /// Wrong guesses in the order they were made.
    pub fn wrong_letters(&self) -> &[char] {
        &self.wrong_letters
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// `true` once the game is won or lost.
    pub fn is_over(&self) -> bool {
        self.won || self.lost
    }

    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn status(&self) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.lost {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The answer with every unrevealed letter replaced by [`MASK_CHAR`].
    /// Has the same number of characters as the answer.
    pub fn masked_answer(&self) -> String {
        self.answer
            .chars()
            .map(|ch| {
                if is_maskable(ch) && !self.guessed_letters.contains(&ch.to_ascii_uppercase()) {
                    MASK_CHAR
                } else {
                    ch
                }
            })
            .collect()
    }

    /// A hint costs a life, so one is only offered while at least two remain.
    pub fn can_use_hint(&self) -> bool {
        self.hints_used < MAX_HINTS && self.lives > 1
    }

    /// Distinct letters still hidden, in the order they first appear.
    pub fn hidden_letters(&self) -> Vec<char> {
        let mut seen = BTreeSet::new();
        self.hidden_occurrences()
            .into_iter()
            .filter(|ch| seen.insert(ch.to_ascii_uppercase()))
            .collect()
    }

    /// Every hidden character of the answer, duplicates included.
    pub(crate) fn hidden_occurrences(&self) -> Vec<char> {
        self.answer
            .chars()
            .filter(|&ch| is_maskable(ch) && !self.guessed_letters.contains(&ch.to_ascii_uppercase()))
            .collect()
    }

    /// Latch `won` once no maskable character remains hidden. Idempotent.
    pub(crate) fn reveal_all_if_won(&mut self) {
        if self.won {
            return;
        }
        let all_revealed = self
            .answer
            .chars()
            .filter(|&ch| is_maskable(ch))
            .all(|ch| self.guessed_letters.contains(&ch.to_ascii_uppercase()));
        if all_revealed {
            self.won = true;
        }
    }

    pub(crate) fn answer_contains(&self, letter: char) -> bool {
        self.answer.chars().any(|ch| ch == letter)
    }

    pub(crate) fn reveal(&mut self, letter: char) {
        self.guessed_letters.insert(letter);
    }

    /// Record a wrong letter and take a life, latching `lost` at zero.
    pub(crate) fn record_miss(&mut self, letter: char) {
        self.lives = self.lives.saturating_sub(1);
        self.wrong_letters.push(letter);
        if self.lives == 0 {
            self.lost = true;
        }
    }

    pub(crate) fn spend_hint(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.hints_used += 1;
    }

    pub(crate) fn award_point(&mut self) {
        self.points += 1;
    }
}
