//! Engine configuration and the built-in word pools.

use alloc::vec::Vec;
use core::fmt;

use super::common::ConfigError;

/// Lives a new game starts with unless configured otherwise.
pub const MAX_LIVES: u8 = 7;
/// Number of hints a single game may grant.
pub const MAX_HINTS: u8 = 3;

/// Single-word answers used by [`Level::Basic`].
pub const BASIC_WORDS: &[&str] = &[
    "apple", "banana", "orange", "grape", "melon", "mango", "peach",
    "cherry", "lemon", "strawberry", "carrot", "tomato", "potato",
    "onion", "garlic", "pepper", "broccoli", "cabbage", "spinach",
    "bread", "milk", "cheese", "butter", "egg", "rice", "pasta",
    "soup", "coffee", "tea", "water", "juice", "cookie", "cake",
    "chocolate", "icecream", "sandwich", "pizza", "burger", "noodle",
    "train", "bus", "car", "bicycle", "motorbike", "airport", "station",
    "school", "office", "market", "hospital", "bank", "park", "library",
    "house", "apartment", "kitchen", "bedroom", "bathroom", "garden",
    "computer", "phone", "camera", "television", "radio", "clock",
    "watch", "umbrella", "pencil", "pen", "notebook", "book", "bag",
];

/// Multi-word answers used by [`Level::Intermediate`].
pub const INTERMEDIATE_PHRASES: &[&str] = &[
    "unit testing",
    "test driven development",
    "clean code",
    "object oriented programming",
    "software engineering",
    "data structures and algorithms",
    "exception handling",
    "continuous integration",
    "code review",
    "version control",
    "typing annotations",
    "random access memory",
    "graph traversal",
];

/// Difficulty tier, selecting which word pool answers are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    /// Single words.
    #[default]
    Basic,
    /// Multi-word phrases.
    Intermediate,
}

impl Level {
    /// `"basic"` (any case) maps to [`Level::Basic`]; every other name
    /// selects the phrase pool.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("basic") {
            Level::Basic
        } else {
            Level::Intermediate
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Level::Basic => "basic",
            Level::Intermediate => "intermediate",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable list of candidate answers. The engine reads it, never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<&'static str>,
}

impl WordPool {
    /// Build a pool from a static word list. Empty lists are rejected.
    pub fn new(words: &[&'static str]) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        Ok(Self {
            words: words.to_vec(),
        })
    }

    /// Built-in pool for `level`.
    pub fn builtin(level: Level) -> Self {
        let words = match level {
            Level::Basic => BASIC_WORDS,
            Level::Intermediate => INTERMEDIATE_PHRASES,
        };
        Self {
            words: words.to_vec(),
        }
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Settings fixed when an engine is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    level: Level,
    lives: u8,
}

impl EngineConfig {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            lives: MAX_LIVES,
        }
    }

    /// Override the starting lives. Zero is rejected.
    pub fn with_lives(mut self, lives: u8) -> Result<Self, ConfigError> {
        if lives == 0 {
            return Err(ConfigError::ZeroLives);
        }
        self.lives = lives;
        Ok(self)
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Level::Basic)
    }
}
