//! Render data handed to a presentation layer

use super::RoundState;
use crate::core::{KeyboardStatus, LetterStatus};
use crate::wordlists::Tier;

/// One grid square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<char>,
    pub status: LetterStatus,
}

/// Everything needed to draw a round
#[derive(Debug, Clone)]
pub struct RoundView {
    pub level: u32,
    pub max_level: u32,
    pub tier: Tier,
    pub word_len: usize,
    /// `max_attempts` rows of `word_len` cells: scored guesses, then the input
    /// row while playing, then blanks
    pub grid: Vec<Vec<Cell>>,
    pub keyboard: KeyboardStatus,
    pub score: u64,
    pub streak: u32,
    pub state: RoundState,
    /// Target word, present once the round is over
    pub revealed: Option<String>,
    pub attempts_used: usize,
    pub max_attempts: usize,
}
