//! Common types for Hangman: guess outcomes and configuration errors.

/// Result of a single guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessOutcome {
    /// Letter is in the answer; the answer is still partly hidden.
    Correct,
    /// Letter is in the answer and completed it.
    Solved,
    /// Letter is not in the answer; one life was lost.
    Wrong,
    /// Letter is not in the answer and the last life is gone.
    Lost,
    /// Letter had already been guessed correctly. Nothing changed.
    AlreadyGuessed,
    /// Letter had already been guessed wrongly. Nothing changed.
    AlreadyMissed,
    /// Input was not exactly one alphabetic character. Nothing changed.
    Invalid,
    /// The game had already ended. Nothing changed.
    GameOver,
}

impl GuessOutcome {
    /// Collapse to the boolean accept/reject contract of `guess_letter`.
    pub fn accepted(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Correct | GuessOutcome::Solved | GuessOutcome::AlreadyGuessed
        )
    }

    /// `true` when the guess mutated the game.
    pub fn changed_state(&self) -> bool {
        matches!(
            self,
            GuessOutcome::Correct | GuessOutcome::Solved | GuessOutcome::Wrong | GuessOutcome::Lost
        )
    }
}

impl core::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GuessOutcome::Correct => write!(f, "Letter is in the answer"),
            GuessOutcome::Solved => write!(f, "Letter completed the answer"),
            GuessOutcome::Wrong => write!(f, "Letter is not in the answer"),
            GuessOutcome::Lost => write!(f, "Letter is not in the answer and no lives remain"),
            GuessOutcome::AlreadyGuessed => write!(f, "Letter was already revealed"),
            GuessOutcome::AlreadyMissed => write!(f, "Letter was already tried"),
            GuessOutcome::Invalid => write!(f, "Guess must be a single letter"),
            GuessOutcome::GameOver => write!(f, "Game is already over"),
        }
    }
}

/// Errors returned when building an engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Starting lives must be positive.
    ZeroLives,
    /// A word pool needs at least one answer.
    EmptyPool,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroLives => write!(f, "Starting lives must be at least 1"),
            ConfigError::EmptyPool => write!(f, "Word pool is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
