//! Simulated play - run a bot through a range of levels
//!
//! The bot guesses the first word of the level's list that agrees with every
//! piece of feedback so far. Levels are independent, so they are played in
//! parallel and folded into a session afterwards in level order.

use crate::core::{Word, evaluate};
use crate::game::{GameConfig, Round, RoundState, Session};
use crate::wordlists::{SelectError, WordBank};
use anyhow::{Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How the bot did on one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelOutcome {
    pub level: u32,
    pub target: String,
    pub won: bool,
    pub attempts: usize,
    pub points: u64,
}

/// Aggregate of a simulated run
#[derive(Debug)]
pub struct SimulationResult {
    pub outcomes: Vec<LevelOutcome>,
    pub won: usize,
    pub lost: usize,
    /// Attempts needed per win
    pub distribution: BTreeMap<usize, usize>,
    /// Session after folding every outcome in level order
    pub session: Session,
    pub duration: Duration,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            0.0
        } else {
            self.won as f64 / self.outcomes.len() as f64
        }
    }
}

/// Play levels `from..=to` with the bot
///
/// # Errors
///
/// Returns an error if the range is empty, starts at level 0, or the
/// progress bar template is invalid.
pub fn run_simulation(
    bank: &WordBank,
    config: GameConfig,
    from: u32,
    to: u32,
) -> Result<SimulationResult> {
    let to = to.min(config.max_level);
    if from > to {
        bail!("Empty level range {from}..={to}");
    }
    let start_session = Session::starting_at(from)?;

    println!("🎯 Simulating levels {from}..={to}...");
    let pb = ProgressBar::new(u64::from(to.saturating_sub(from) + 1));
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")?
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut outcomes: Vec<LevelOutcome> = (from..=to)
        .into_par_iter()
        .map(|level| {
            let outcome = play_level(bank, config, level);
            pb.inc(1);
            outcome
        })
        .collect::<Result<_, SelectError>>()?;
    pb.finish_with_message("Complete!");
    outcomes.sort_by_key(|o| o.level);

    let mut session = start_session;
    let mut distribution = BTreeMap::new();
    for outcome in &outcomes {
        session = if outcome.won {
            *distribution.entry(outcome.attempts).or_insert(0) += 1;
            session.after_win(outcome.points)
        } else {
            session.after_loss()
        };
        if let Some(next) = session.next_level(config.max_level) {
            session = next;
        }
    }

    let won = outcomes.iter().filter(|o| o.won).count();
    log::info!("simulated {} levels, {won} won", outcomes.len());
    Ok(SimulationResult {
        lost: outcomes.len() - won,
        won,
        outcomes,
        distribution,
        session,
        duration: start.elapsed(),
    })
}

/// Play one level from a fresh session
///
/// # Errors
/// Returns `SelectError` if the level has no word.
pub fn play_level(
    bank: &WordBank,
    config: GameConfig,
    level: u32,
) -> Result<LevelOutcome, SelectError> {
    let mut round = Round::new(bank, config, Session::starting_at(level)?)?;
    let target_len = round.target().len();
    let words = bank.words_for_level(level)?;

    while round.state() == RoundState::Playing {
        let Some(guess) = next_guess(words, target_len, &round) else {
            break;
        };
        match round.submit_guess(guess.text()) {
            Ok(next) => round = next,
            Err(err) => {
                log::warn!("level {level}: bot guess {guess} rejected: {err}");
                break;
            }
        }
    }

    Ok(LevelOutcome {
        level,
        target: round.target().text().to_string(),
        won: round.state() == RoundState::Won,
        attempts: round.attempts_used(),
        points: round.points(),
    })
}

/// First word consistent with the round's feedback
fn next_guess<'w>(words: &'w [Word], target_len: usize, round: &Round<'_>) -> Option<&'w Word> {
    words.iter().filter(|w| w.len() == target_len).find(|candidate| {
        round.history().iter().all(|attempt| {
            attempt.guess != **candidate
                && evaluate(&attempt.guess, candidate).is_ok_and(|s| s == attempt.statuses)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_word_of_list_is_solved_at_once() {
        let bank = WordBank::embedded();
        let outcome = play_level(&bank, GameConfig::default(), 1).unwrap();
        assert!(outcome.won);
        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.points, 6);
        assert_eq!(outcome.target, "CALM");
    }

    #[test]
    fn bot_only_plays_consistent_guesses() {
        let bank = WordBank::embedded();
        let outcome = play_level(&bank, GameConfig::default(), 3).unwrap();
        assert_eq!(outcome.target, "HOPE");
        assert!(outcome.attempts <= 6);
        if outcome.won {
            assert_eq!(outcome.points, (6 - outcome.attempts as u64 + 1) * 3);
        }
    }

    #[test]
    fn outcomes_fold_in_level_order() {
        let bank = WordBank::embedded();
        let result = run_simulation(&bank, GameConfig::default(), 1, 10).unwrap();

        assert_eq!(result.outcomes.len(), 10);
        let levels: Vec<u32> = result.outcomes.iter().map(|o| o.level).collect();
        assert_eq!(levels, (1..=10).collect::<Vec<_>>());
        assert_eq!(result.won + result.lost, 10);
        assert_eq!(result.distribution.values().sum::<usize>(), result.won);

        let points: u64 = result.outcomes.iter().map(|o| o.points).sum();
        assert_eq!(result.session.score(), points);
        assert_eq!(result.session.level(), 11);
    }

    #[test]
    fn range_is_clamped_to_max_level() {
        let bank = WordBank::embedded();
        let result = run_simulation(&bank, GameConfig::default(), 99, 150).unwrap();
        assert_eq!(result.outcomes.len(), 2);
        assert_eq!(result.session.level(), 100);
    }

    #[test]
    fn bad_ranges_are_rejected() {
        let bank = WordBank::embedded();
        assert!(run_simulation(&bank, GameConfig::default(), 5, 4).is_err());
        assert!(run_simulation(&bank, GameConfig::default(), 0, 4).is_err());
    }

    #[test]
    fn win_rate_of_empty_result_is_zero() {
        let result = SimulationResult {
            outcomes: Vec::new(),
            won: 0,
            lost: 0,
            distribution: BTreeMap::new(),
            session: Session::default(),
            duration: Duration::ZERO,
        };
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
