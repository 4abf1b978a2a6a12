//! Per-letter feedback and the keyboard fold
//!
//! `LetterStatus` is the feedback for one position of a guess. `KeyboardStatus`
//! folds an attempt history into the best-known status for every letter, so the
//! on-screen keyboard can be coloured.

use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterStatus {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the target at another, unclaimed position
    Present,
    /// No unclaimed occurrence in the target
    Absent,
    /// Nothing known yet (unsubmitted cell or untouched key)
    #[default]
    Empty,
}

impl LetterStatus {
    /// Precedence used when folding: correct > present > absent > empty
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Empty => 0,
        }
    }

    /// Emoji square as used in share lines
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Empty => '⬜',
        }
    }

    /// Single-letter code: G(reen), Y(ellow), -(gray), space for empty
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
            Self::Empty => ' ',
        }
    }
}

impl fmt::Display for LetterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Empty => "empty",
        };
        f.write_str(name)
    }
}

/// Render a status row as emoji squares
#[must_use]
pub fn statuses_to_emoji(statuses: &[LetterStatus]) -> String {
    statuses.iter().map(|s| s.emoji()).collect()
}

/// Best-known status per letter across an attempt history
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardStatus {
    letters: FxHashMap<u8, LetterStatus>,
}

impl KeyboardStatus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one scored guess into the map
    ///
    /// A letter is only ever upgraded: once `Correct` it stays `Correct`.
    pub fn record(&mut self, guess: &[u8], statuses: &[LetterStatus]) {
        for (&letter, &status) in guess.iter().zip(statuses) {
            let entry = self.letters.entry(letter).or_default();
            if status.rank() > entry.rank() {
                *entry = status;
            }
        }
    }

    /// Status for a letter, `Empty` if it has never been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> LetterStatus {
        self.letters
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or_default()
    }

    /// Number of letters with a known status
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Fold an attempt history into a keyboard status map
///
/// # Examples
/// ```
/// use word_challenge::core::{LetterStatus, fold_statuses};
///
/// use LetterStatus::{Absent, Correct, Present};
/// let history = [
///     ("CARE", vec![Correct, Present, Absent, Absent]),
///     ("CALM", vec![Correct, Correct, Correct, Correct]),
/// ];
/// let keys = fold_statuses(history.iter().map(|(g, s)| (g.as_bytes(), s.as_slice())));
/// assert_eq!(keys.get(b'A'), Correct);
/// assert_eq!(keys.get(b'R'), Absent);
/// assert_eq!(keys.get(b'Z'), LetterStatus::Empty);
/// ```
pub fn fold_statuses<'a, I>(history: I) -> KeyboardStatus
where
    I: IntoIterator<Item = (&'a [u8], &'a [LetterStatus])>,
{
    let mut keyboard = KeyboardStatus::new();
    for (guess, statuses) in history {
        keyboard.record(guess, statuses);
    }
    keyboard
}
