//! Rejected submissions
//!
//! Every variant is recoverable: the round is left exactly as it was.

use crate::core::LengthMismatch;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Guess length differs from the target length
    InvalidLength { expected: usize, actual: usize },
    /// Well-formed but not in the level's word list
    NotInWordList(String),
    /// Already submitted in a game that tracks found words
    DuplicateGuess(String),
    /// Shorter than the minimum word length
    TooShort { min: usize, actual: usize },
    /// Uses letters the pool does not have (or not that many of them)
    LettersUnavailable(String),
    /// The round is over or the next level is already on its way
    RoundOver,
}

impl GuessError {
    /// Short headline for toast-style display
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::InvalidLength { .. } => "Wrong length",
            Self::NotInWordList(_) => "Not a valid word",
            Self::DuplicateGuess(_) => "Already found",
            Self::TooShort { .. } => "Too short",
            Self::LettersUnavailable(_) => "Invalid",
            Self::RoundOver => "Round over",
        }
    }
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Guess must be {expected} letters, got {actual}")
            }
            Self::NotInWordList(word) => {
                write!(f, "{word} is not in the word list. Try a real word or check your spelling!")
            }
            Self::DuplicateGuess(word) => write!(f, "{word} was already found. Try something new!"),
            Self::TooShort { min, .. } => write!(f, "Use at least {min} letters."),
            Self::LettersUnavailable(word) => write!(f, "{word} uses extra letters!"),
            Self::RoundOver => write!(f, "This round is finished"),
        }
    }
}

impl std::error::Error for GuessError {}

impl From<LengthMismatch> for GuessError {
    fn from(err: LengthMismatch) -> Self {
        Self::InvalidLength {
            expected: err.expected,
            actual: err.actual,
        }
    }
}
