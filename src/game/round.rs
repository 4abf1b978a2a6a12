//! Round state machine for the level challenge
//!
//! A `Round` is an immutable snapshot: `submit_guess` validates and scores a
//! guess and returns the next snapshot, leaving the receiver untouched.
//!
//! ```text
//! Playing --guess == target--------------> Won
//! Playing --attempts exhausted, no match--> Lost
//! ```

use super::view::{Cell, RoundView};
use super::{GameConfig, GuessError, Session};
use crate::core::{KeyboardStatus, LetterStatus, Word, evaluate, fold_statuses, is_solved};
use crate::wordlists::{SelectError, Tier, WordBank};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    Playing,
    Won,
    Lost,
}

impl RoundState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub guess: Word,
    pub statuses: Vec<LetterStatus>,
}

#[derive(Debug, Clone)]
pub struct Round<'a> {
    bank: &'a WordBank,
    config: GameConfig,
    session: Session,
    target: Word,
    history: Vec<Attempt>,
    state: RoundState,
    points: u64,
}

impl<'a> Round<'a> {
    /// Start the round for the session's current level
    ///
    /// # Errors
    /// Returns `SelectError` if the level has no word.
    pub fn new(
        bank: &'a WordBank,
        config: GameConfig,
        session: Session,
    ) -> Result<Self, SelectError> {
        let target = bank.select_word(session.level())?.clone();
        log::debug!(
            "level {}: new {} round, {} letters",
            session.level(),
            Tier::for_level(session.level()),
            target.len()
        );
        Ok(Self {
            bank,
            config,
            session,
            target,
            history: Vec::with_capacity(config.max_attempts),
            state: RoundState::Playing,
            points: 0,
        })
    }

    /// Validate, score and record a guess
    ///
    /// # Errors
    /// - `RoundOver` once the round is won or lost
    /// - `InvalidLength` if the guess length differs from the target's
    /// - `NotInWordList` if the guess is neither the target nor in the level's list
    ///
    /// # Examples
    /// ```
    /// use word_challenge::game::{GameConfig, Round, RoundState, Session};
    /// use word_challenge::wordlists::WordBank;
    ///
    /// let bank = WordBank::embedded();
    /// let round = Round::new(&bank, GameConfig::default(), Session::default()).unwrap();
    /// assert_eq!(round.target().text(), "CALM");
    ///
    /// let next = round.submit_guess("calm").unwrap();
    /// assert_eq!(next.state(), RoundState::Won);
    /// assert_eq!(next.session().score(), 6);
    /// // The earlier snapshot is unchanged
    /// assert_eq!(round.state(), RoundState::Playing);
    /// ```
    pub fn submit_guess(&self, guess: &str) -> Result<Self, GuessError> {
        if self.state.is_terminal() || self.history.len() >= self.config.max_attempts {
            return Err(GuessError::RoundOver);
        }

        let trimmed = guess.trim();
        let actual = trimmed.chars().count();
        if actual != self.target.len() {
            return Err(GuessError::InvalidLength {
                expected: self.target.len(),
                actual,
            });
        }

        let word = Word::new(trimmed)
            .map_err(|_| GuessError::NotInWordList(trimmed.to_uppercase()))?;
        let level = self.session.level();
        if word != self.target && !self.bank.is_valid_for_level(level, &word) {
            return Err(GuessError::NotInWordList(word.text().to_string()));
        }

        let statuses = evaluate(&word, &self.target)?;
        let attempts_before = self.history.len();
        let solved = is_solved(&statuses);
        log::debug!(
            "level {level}: attempt {} {word} scored {:?}",
            attempts_before + 1,
            statuses
        );

        let mut next = self.clone();
        next.history.push(Attempt {
            guess: word,
            statuses,
        });

        if solved {
            let remaining = self.config.max_attempts.saturating_sub(attempts_before) as u64;
            let points = remaining * u64::from(level);
            next.state = RoundState::Won;
            next.points = points;
            next.session = self.session.after_win(points);
            log::info!(
                "level {level} won in {} attempts (+{points})",
                next.history.len()
            );
        } else if next.history.len() >= self.config.max_attempts {
            next.state = RoundState::Lost;
            next.session = self.session.after_loss();
            log::info!("level {level} lost, target was {}", self.target);
        }

        Ok(next)
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Target to show the player: only once the round is over
    #[must_use]
    pub const fn revealed_target(&self) -> Option<&Word> {
        if self.state.is_terminal() {
            Some(&self.target)
        } else {
            None
        }
    }

    #[must_use]
    pub fn history(&self) -> &[Attempt] {
        &self.history
    }

    /// Session including this round's result
    #[must_use]
    pub const fn session(&self) -> Session {
        self.session
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.session.level()
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// Points awarded by this round (zero unless won)
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    #[must_use]
    pub fn keyboard(&self) -> KeyboardStatus {
        fold_statuses(
            self.history
                .iter()
                .map(|a| (a.guess.chars(), a.statuses.as_slice())),
        )
    }

    /// Pause before the next level, once the round is over
    #[must_use]
    pub const fn advance_delay(&self) -> Option<Duration> {
        match self.state {
            RoundState::Playing => None,
            RoundState::Won => Some(self.config.win_delay),
            RoundState::Lost => Some(self.config.loss_delay),
        }
    }

    /// Session for the next level; `None` while playing or after the last level
    #[must_use]
    pub const fn next_session(&self) -> Option<Session> {
        if self.state.is_terminal() {
            self.session.next_level(self.config.max_level)
        } else {
            None
        }
    }

    /// Render data for the presentation layer
    ///
    /// `input` is the partially typed guess shown on the active row.
    #[must_use]
    pub fn view(&self, input: &str) -> RoundView {
        let width = self.target.len();
        let mut grid: Vec<Vec<Cell>> = self
            .history
            .iter()
            .map(|attempt| {
                attempt
                    .guess
                    .chars()
                    .iter()
                    .zip(&attempt.statuses)
                    .map(|(&letter, &status)| Cell {
                        letter: Some(char::from(letter)),
                        status,
                    })
                    .collect()
            })
            .collect();

        if self.state == RoundState::Playing {
            let mut row: Vec<Cell> = input
                .chars()
                .take(width)
                .map(|c| Cell {
                    letter: Some(c.to_ascii_uppercase()),
                    status: LetterStatus::Empty,
                })
                .collect();
            row.resize(width, Cell::default());
            grid.push(row);
        }
        grid.resize(self.config.max_attempts.max(grid.len()), vec![Cell::default(); width]);

        RoundView {
            level: self.level(),
            max_level: self.config.max_level,
            tier: Tier::for_level(self.level()),
            word_len: width,
            grid,
            keyboard: self.keyboard(),
            score: self.session.score(),
            streak: self.session.streak(),
            state: self.state,
            revealed: self.revealed_target().map(|w| w.text().to_string()),
            attempts_used: self.attempts_used(),
            max_attempts: self.config.max_attempts,
        }
    }
}
