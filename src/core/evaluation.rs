//! Guess evaluation
//!
//! Scores a guess against the target letter by letter, with the usual Wordle
//! handling of duplicate letters.

use super::{LetterStatus, Word};
use std::fmt;

/// Guess and target differ in length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Guess must be {} letters, got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for LengthMismatch {}

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: every exact position match is `Correct` and consumes that
///    target position
/// 2. Second pass: every other position takes the leftmost unconsumed
///    occurrence of its letter in the target (`Present`), or is `Absent`
///
/// Because greens claim their positions first, the number of `Correct` plus
/// `Present` marks for a letter never exceeds its count in the target.
///
/// # Errors
/// Returns `LengthMismatch` if the words have different lengths.
///
/// # Examples
/// ```
/// use word_challenge::core::{LetterStatus, Word, evaluate};
///
/// let target = Word::new("crisp").unwrap();
/// let guess = Word::new("crimp").unwrap();
/// let statuses = evaluate(&guess, &target).unwrap();
///
/// use LetterStatus::{Absent, Correct};
/// assert_eq!(statuses, [Correct, Correct, Correct, Absent, Correct]);
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<Vec<LetterStatus>, LengthMismatch> {
    if guess.len() != target.len() {
        return Err(LengthMismatch {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let guess = guess.chars();
    let target = target.chars();
    let mut result = vec![LetterStatus::Empty; target.len()];
    let mut used = vec![false; target.len()];

    // First pass: greens
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            result[i] = LetterStatus::Correct;
            used[i] = true;
        }
    }

    // Second pass: yellows from whatever the greens left over
    for (i, &g) in guess.iter().enumerate() {
        if result[i] == LetterStatus::Correct {
            continue;
        }
        let claim = target
            .iter()
            .zip(&used)
            .position(|(&t, &taken)| t == g && !taken);
        result[i] = match claim {
            Some(j) => {
                used[j] = true;
                LetterStatus::Present
            }
            None => LetterStatus::Absent,
        };
    }

    Ok(result)
}

/// True when every position is `Correct`
#[must_use]
pub fn is_solved(statuses: &[LetterStatus]) -> bool {
    !statuses.is_empty() && statuses.iter().all(|&s| s == LetterStatus::Correct)
}
