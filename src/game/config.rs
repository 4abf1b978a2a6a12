//! Tunable game constants

use crate::wordlists::MAX_LEVEL;
use std::time::Duration;

/// Guesses allowed per round
pub const MAX_ATTEMPTS: usize = 6;
/// Pause after a win before the next level starts
pub const WIN_DELAY: Duration = Duration::from_millis(1500);
/// Pause after a loss before the next level starts
pub const LOSS_DELAY: Duration = Duration::from_millis(1800);

/// Rules shared by every round of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_attempts: usize,
    pub max_level: u32,
    pub win_delay: Duration,
    pub loss_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            max_level: MAX_LEVEL,
            win_delay: WIN_DELAY,
            loss_delay: LOSS_DELAY,
        }
    }
}

impl GameConfig {
    /// Same rules without the pause between levels
    #[must_use]
    pub const fn without_delays(self) -> Self {
        Self {
            win_delay: Duration::ZERO,
            loss_delay: Duration::ZERO,
            ..self
        }
    }
}
