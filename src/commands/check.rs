//! Check command
//!
//! Scores one guess against an arbitrary target.

use crate::core::{LetterStatus, Word, evaluate, is_solved};
use anyhow::{Context, Result};

/// Result of scoring a guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub statuses: Vec<LetterStatus>,
    pub solved: bool,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn check_guess(guess: &str, target: &str) -> Result<CheckResult> {
    let guess = Word::new(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let target = Word::new(target).with_context(|| format!("invalid target {target:?}"))?;
    let statuses = evaluate(&guess, &target)?;
    let solved = is_solved(&statuses);

    Ok(CheckResult {
        guess,
        target,
        statuses,
        solved,
    })
}
