//! Owner of a running challenge
//!
//! `Game` holds the current round snapshot, the pending level advance and the
//! notification sink. Front ends feed it guesses and clock ticks.

use super::{
    AdvanceTimer, GameConfig, GuessError, Notifier, Round, RoundState, RoundView, Session,
    Severity,
};
use crate::wordlists::{SelectError, WordBank};
use std::time::Instant;

pub struct Game<'a, N: Notifier> {
    bank: &'a WordBank,
    round: Round<'a>,
    pending: Option<AdvanceTimer>,
    notifier: N,
    finished: bool,
}

impl<'a, N: Notifier> Game<'a, N> {
    /// Start a game at the session's level
    ///
    /// # Errors
    /// Returns `SelectError` if the starting level has no word.
    pub fn new(
        bank: &'a WordBank,
        config: GameConfig,
        session: Session,
        notifier: N,
    ) -> Result<Self, SelectError> {
        Ok(Self {
            bank,
            round: Round::new(bank, config, session)?,
            pending: None,
            notifier,
            finished: false,
        })
    }

    #[must_use]
    pub const fn round(&self) -> &Round<'a> {
        &self.round
    }

    #[must_use]
    pub const fn session(&self) -> Session {
        self.round.session()
    }

    /// The last level has been played out
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn pending_advance(&self) -> Option<&AdvanceTimer> {
        self.pending.as_ref().filter(|t| t.is_armed())
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub fn view(&self, input: &str) -> RoundView {
        self.round.view(input)
    }

    /// Submit a full-length guess
    ///
    /// Word-list and duplicate rejections are reported to the notifier; a
    /// finished round schedules the next level.
    ///
    /// # Errors
    /// Returns the `GuessError` from the round, or `RoundOver` while an advance
    /// is pending.
    pub fn submit(&mut self, guess: &str, now: Instant) -> Result<RoundState, GuessError> {
        if self.pending_advance().is_some() || self.finished {
            return Err(GuessError::RoundOver);
        }

        let next = match self.round.submit_guess(guess) {
            Ok(next) => next,
            Err(err) => {
                if matches!(
                    err,
                    GuessError::NotInWordList(_) | GuessError::DuplicateGuess(_)
                ) {
                    self.notifier
                        .notify(Severity::Error, &format!("{}: {err}", err.title()));
                }
                return Err(err);
            }
        };
        self.round = next;

        match self.round.state() {
            RoundState::Playing => {}
            RoundState::Won => {
                let attempts = self.round.attempts_used();
                let message = format!(
                    "Solved in {attempts} {}! +{} points",
                    if attempts == 1 { "guess" } else { "guesses" },
                    self.round.points()
                );
                self.notifier.notify(Severity::Success, &message);
                self.schedule_advance(now);
            }
            RoundState::Lost => {
                let message = format!("Out of attempts! Word was {}.", self.round.target());
                self.notifier.notify(Severity::Error, &message);
                self.schedule_advance(now);
            }
        }

        Ok(self.round.state())
    }

    fn schedule_advance(&mut self, now: Instant) {
        match (self.round.next_session(), self.round.advance_delay()) {
            (Some(next), Some(delay)) => {
                self.notifier.notify(Severity::Info, "Next level...");
                self.pending = Some(AdvanceTimer::schedule(now, delay, next));
            }
            _ => {
                self.finished = true;
                let message = format!(
                    "All {} levels played! Final score: {}",
                    self.round.config().max_level,
                    self.session().score()
                );
                self.notifier.notify(Severity::Success, &message);
                log::info!("challenge finished with score {}", self.session().score());
            }
        }
    }

    /// Start the next level if its timer is due
    ///
    /// Returns whether a new round started.
    ///
    /// # Errors
    /// Returns `SelectError` if the next level has no word.
    pub fn tick(&mut self, now: Instant) -> Result<bool, SelectError> {
        let Some(next) = self.pending.as_mut().and_then(|t| t.poll(now)) else {
            return Ok(false);
        };
        self.pending = None;
        self.round = Round::new(self.bank, *self.round.config(), next)?;
        log::info!("advanced to level {}", next.level());
        Ok(true)
    }

    /// Drop any scheduled advance so it can never fire
    pub fn cancel_pending(&mut self) {
        if let Some(timer) = self.pending.as_mut() {
            timer.cancel();
        }
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Notification;
    use std::time::Duration;

    fn game(bank: &WordBank, level: u32) -> Game<'_, Vec<Notification>> {
        Game::new(
            bank,
            GameConfig::default(),
            Session::starting_at(level).unwrap(),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn win_schedules_advance_after_delay() {
        let bank = WordBank::embedded();
        let mut game = game(&bank, 1);
        let start = Instant::now();

        assert_eq!(game.submit("CALM", start), Ok(RoundState::Won));
        assert!(game.pending_advance().is_some());

        // Input is blocked while the advance is pending
        assert_eq!(game.submit("LOVE", start), Err(GuessError::RoundOver));

        assert!(!game.tick(start + Duration::from_millis(1000)).unwrap());
        assert_eq!(game.round().level(), 1);

        assert!(game.tick(start + Duration::from_millis(1500)).unwrap());
        assert_eq!(game.round().level(), 2);
        assert_eq!(game.round().target().text(), "LOVE");
        assert_eq!(game.round().state(), RoundState::Playing);
        assert_eq!(game.session().score(), 6);
        assert_eq!(game.session().streak(), 1);
        assert!(game.pending_advance().is_none());
    }

    #[test]
    fn loss_uses_longer_delay_and_notifies() {
        let bank = WordBank::embedded();
        let mut game = game(&bank, 3);
        let start = Instant::now();

        for guess in ["CALM", "LOVE", "EASE", "CARE", "REST"] {
            assert_eq!(game.submit(guess, start), Ok(RoundState::Playing));
        }
        assert_eq!(game.submit("OPEN", start), Ok(RoundState::Lost));
        assert_eq!(game.session().streak(), 0);

        assert!(!game.tick(start + Duration::from_millis(1500)).unwrap());
        assert!(game.tick(start + Duration::from_millis(1800)).unwrap());
        assert_eq!(game.round().level(), 4);

        let texts: Vec<&str> = game.notifier().iter().map(|n| n.text.as_str()).collect();
        assert!(texts.contains(&"Out of attempts! Word was HOPE."));
    }

    #[test]
    fn rejected_word_notifies_without_state_change() {
        let bank = WordBank::embedded();
        let mut game = game(&bank, 1);

        assert_eq!(
            game.submit("ZZZZ", Instant::now()),
            Err(GuessError::NotInWordList("ZZZZ".to_string()))
        );
        assert_eq!(game.round().attempts_used(), 0);
        assert_eq!(game.notifier().len(), 1);
        assert_eq!(game.notifier()[0].severity, Severity::Error);
        assert!(game.notifier()[0].text.starts_with("Not a valid word"));
    }

    #[test]
    fn wrong_length_is_silent() {
        let bank = WordBank::embedded();
        let mut game = game(&bank, 1);
        assert!(matches!(
            game.submit("CAL", Instant::now()),
            Err(GuessError::InvalidLength { .. })
        ));
        assert!(game.notifier().is_empty());
    }

    #[test]
    fn cancelled_advance_never_fires() {
        let bank = WordBank::embedded();
        let mut game = game(&bank, 1);
        let start = Instant::now();

        game.submit("CALM", start).unwrap();
        game.cancel_pending();

        assert!(!game.tick(start + Duration::from_secs(60)).unwrap());
        assert_eq!(game.round().level(), 1);
        assert_eq!(game.round().state(), RoundState::Won);
    }

    #[test]
    fn last_level_finishes_the_game() {
        let bank = WordBank::embedded();
        let mut game = game(&bank, 100);
        let start = Instant::now();
        let target = game.round().target().text().to_string();

        assert_eq!(game.submit(&target, start), Ok(RoundState::Won));
        assert!(game.is_finished());
        assert!(game.pending_advance().is_none());
        assert!(!game.tick(start + Duration::from_secs(5)).unwrap());
        assert_eq!(game.submit(&target, start), Err(GuessError::RoundOver));
    }
}
