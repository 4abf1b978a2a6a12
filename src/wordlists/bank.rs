//! Tiered word bank and level → word selection

use super::embedded::{EASY, EXTRA_WORDS, HARD, MEDIUM};
use super::loader::{load_from_file, words_from_slice};
use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fmt;
use std::io;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Highest level of the challenge
pub const MAX_LEVEL: u32 = 100;

/// Last level served by the easy tier
const EASY_MAX_LEVEL: u32 = 25;
/// Last level served by the medium tier
const MEDIUM_MAX_LEVEL: u32 = 70;

/// Difficulty bucket selected by level range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Levels 1-25, 4-letter words
    Easy,
    /// Levels 26-70, 5-letter words
    Medium,
    /// Levels 71 and up, mixed lengths
    Hard,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Tier serving `level`; anything past the medium range is hard
    #[must_use]
    pub const fn for_level(level: u32) -> Self {
        if level <= EASY_MAX_LEVEL {
            Self::Easy
        } else if level <= MEDIUM_MAX_LEVEL {
            Self::Medium
        } else {
            Self::Hard
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Levels this tier serves within `1..=MAX_LEVEL`
    #[must_use]
    pub const fn levels(self) -> RangeInclusive<u32> {
        match self {
            Self::Easy => 1..=EASY_MAX_LEVEL,
            Self::Medium => (EASY_MAX_LEVEL + 1)..=MEDIUM_MAX_LEVEL,
            Self::Hard => (MEDIUM_MAX_LEVEL + 1)..=MAX_LEVEL,
        }
    }

    /// File name used when loading a bank from a directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Easy => "easy.txt",
            Self::Medium => "medium.txt",
            Self::Hard => "hard.txt",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Level could not be mapped to a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectError {
    /// Levels start at 1
    InvalidLevel(u32),
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel(level) => write!(f, "Level must be at least 1, got {level}"),
        }
    }
}

impl std::error::Error for SelectError {}

/// Word bank could not be built
#[derive(Debug)]
pub enum BankError {
    Io { path: PathBuf, source: io::Error },
    EmptyTier(Tier),
}

impl fmt::Display for BankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read word list {}: {source}", path.display())
            }
            Self::EmptyTier(tier) => write!(f, "The {tier} tier has no valid words"),
        }
    }
}

impl std::error::Error for BankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::EmptyTier(_) => None,
        }
    }
}

/// Tiered word bank plus the reference dictionary used by the word finder
///
/// Every tier is guaranteed non-empty, so selection is total for any level >= 1.
#[derive(Debug, Clone)]
pub struct WordBank {
    easy: Vec<Word>,
    medium: Vec<Word>,
    hard: Vec<Word>,
    extra: Vec<Word>,
}

impl WordBank {
    /// Build a bank from explicit tiers
    ///
    /// # Errors
    /// Returns `BankError::EmptyTier` if any tier is empty.
    pub fn new(
        easy: Vec<Word>,
        medium: Vec<Word>,
        hard: Vec<Word>,
        extra: Vec<Word>,
    ) -> Result<Self, BankError> {
        for (tier, words) in Tier::ALL.into_iter().zip([&easy, &medium, &hard]) {
            if words.is_empty() {
                return Err(BankError::EmptyTier(tier));
            }
        }
        Ok(Self {
            easy,
            medium,
            hard,
            extra,
        })
    }

    /// The bank compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            easy: words_from_slice(EASY),
            medium: words_from_slice(MEDIUM),
            hard: words_from_slice(HARD),
            extra: words_from_slice(EXTRA_WORDS),
        }
    }

    /// Load `easy.txt`, `medium.txt`, `hard.txt` and an optional
    /// `dictionary.txt` from a directory
    ///
    /// # Errors
    /// Returns `BankError` if a tier file cannot be read or has no valid words.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, BankError> {
        let dir = dir.as_ref();
        let load = |name: &str| {
            let path = dir.join(name);
            load_from_file(&path).map_err(|source| BankError::Io { path, source })
        };

        let easy = load(Tier::Easy.file_name())?;
        let medium = load(Tier::Medium.file_name())?;
        let hard = load(Tier::Hard.file_name())?;
        let extra = if dir.join("dictionary.txt").exists() {
            load("dictionary.txt")?
        } else {
            Vec::new()
        };

        log::debug!(
            "loaded word bank from {}: {} easy, {} medium, {} hard, {} extra",
            dir.display(),
            easy.len(),
            medium.len(),
            hard.len(),
            extra.len()
        );
        Self::new(easy, medium, hard, extra)
    }

    /// Words of one tier, in selection order
    #[must_use]
    pub fn tier(&self, tier: Tier) -> &[Word] {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }

    /// The word list guesses are validated against at `level`
    ///
    /// # Errors
    /// Returns `SelectError::InvalidLevel` for level 0.
    pub fn words_for_level(&self, level: u32) -> Result<&[Word], SelectError> {
        if level == 0 {
            return Err(SelectError::InvalidLevel(level));
        }
        Ok(self.tier(Tier::for_level(level)))
    }

    /// Target word for `level`
    ///
    /// Picks `tier[(level - 1) % tier.len()]`, so every level has a word and the
    /// same level always yields the same word.
    ///
    /// # Errors
    /// Returns `SelectError::InvalidLevel` for level 0.
    ///
    /// # Examples
    /// ```
    /// use word_challenge::wordlists::WordBank;
    ///
    /// let bank = WordBank::embedded();
    /// assert_eq!(bank.select_word(1).unwrap().text(), "CALM");
    /// assert_eq!(bank.select_word(26).unwrap().text(), "RELAX");
    /// assert!(bank.select_word(0).is_err());
    /// ```
    pub fn select_word(&self, level: u32) -> Result<&Word, SelectError> {
        let words = self.words_for_level(level)?;
        let index = (level - 1) as usize % words.len();
        Ok(&words[index])
    }

    /// Source word for the word finder at `level`
    ///
    /// Like `select_word`, but repeated entries of the tier are skipped before
    /// indexing, so the hard tier cycles over its distinct words.
    ///
    /// # Errors
    /// Returns `SelectError::InvalidLevel` for level 0.
    pub fn select_distinct_word(&self, level: u32) -> Result<&Word, SelectError> {
        let mut seen = FxHashSet::default();
        let words: Vec<&Word> = self
            .words_for_level(level)?
            .iter()
            .filter(|w| seen.insert(w.text()))
            .collect();
        let index = (level - 1) as usize % words.len();
        Ok(words[index])
    }

    /// Whether `word` is in the level's list
    #[must_use]
    pub fn is_valid_for_level(&self, level: u32, word: &Word) -> bool {
        self.words_for_level(level)
            .is_ok_and(|words| words.contains(word))
    }

    /// Every distinct word the word finder accepts: all tiers plus the extra list
    #[must_use]
    pub fn dictionary(&self) -> Vec<&Word> {
        let mut seen = FxHashSet::default();
        self.easy
            .iter()
            .chain(&self.medium)
            .chain(&self.hard)
            .chain(&self.extra)
            .filter(|w| seen.insert(w.text()))
            .collect()
    }

    /// Sorted distinct letters used by the level's list
    ///
    /// # Errors
    /// Returns `SelectError::InvalidLevel` for level 0.
    pub fn keyboard_letters(&self, level: u32) -> Result<Vec<u8>, SelectError> {
        let mut letters: Vec<u8> = self
            .words_for_level(level)?
            .iter()
            .flat_map(|w| w.chars().iter().copied())
            .collect::<FxHashSet<u8>>()
            .into_iter()
            .collect();
        letters.sort_unstable();
        Ok(letters)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::for_level(1), Tier::Easy);
        assert_eq!(Tier::for_level(25), Tier::Easy);
        assert_eq!(Tier::for_level(26), Tier::Medium);
        assert_eq!(Tier::for_level(70), Tier::Medium);
        assert_eq!(Tier::for_level(71), Tier::Hard);
        assert_eq!(Tier::for_level(100), Tier::Hard);
        assert_eq!(Tier::for_level(250), Tier::Hard);
    }

    #[test]
    fn tier_ranges_cover_all_levels() {
        let covered: u32 = Tier::ALL
            .iter()
            .map(|t| t.levels().end() - t.levels().start() + 1)
            .sum();
        assert_eq!(covered, MAX_LEVEL);
        for tier in Tier::ALL {
            for level in tier.levels() {
                assert_eq!(Tier::for_level(level), tier);
            }
        }
    }

    #[test]
    fn select_known_levels() {
        let bank = WordBank::embedded();
        assert_eq!(bank.select_word(1).unwrap().text(), "CALM");
        assert_eq!(bank.select_word(3).unwrap().text(), "HOPE");
        assert_eq!(bank.select_word(25).unwrap().text(), "TIME");
        // Level index is global, so level 26 lands on index 25 of the medium tier
        assert_eq!(bank.select_word(26).unwrap().text(), "RELAX");
        assert_eq!(bank.select_word(61).unwrap().text(), "GLOW");
        assert_eq!(bank.select_word(71).unwrap().text(), "GLYPH");
    }

    #[test]
    fn distinct_selection_skips_repeated_hard_words() {
        let bank = WordBank::embedded();
        assert_eq!(bank.select_distinct_word(71).unwrap().text(), "MINDF");
        assert_eq!(bank.select_distinct_word(81).unwrap().text(), "CLOVE");
        assert_eq!(bank.select_distinct_word(100).unwrap().text(), "BLEND");
        // Tiers without repeats pick the same word either way
        for level in 1..=70 {
            assert_eq!(bank.select_distinct_word(level), bank.select_word(level));
        }
        assert!(bank.select_distinct_word(0).is_err());
    }

    #[test]
    fn select_is_total_and_deterministic() {
        let bank = WordBank::embedded();
        for level in 1..=MAX_LEVEL {
            let first = bank.select_word(level).unwrap();
            let second = bank.select_word(level).unwrap();
            assert_eq!(first, second);
            assert!(bank.tier(Tier::for_level(level)).contains(first));
        }
    }

    #[test]
    fn select_wraps_around() {
        let easy = words_from_slice(&["CALM", "LOVE"]);
        let bank = WordBank::new(easy.clone(), easy.clone(), easy, Vec::new()).unwrap();
        assert_eq!(bank.select_word(1).unwrap().text(), "CALM");
        assert_eq!(bank.select_word(2).unwrap().text(), "LOVE");
        assert_eq!(bank.select_word(3).unwrap().text(), "CALM");
    }

    #[test]
    fn level_zero_is_rejected() {
        let bank = WordBank::embedded();
        assert_eq!(bank.select_word(0), Err(SelectError::InvalidLevel(0)));
        assert!(bank.keyboard_letters(0).is_err());
        assert!(!bank.is_valid_for_level(0, &Word::new("CALM").unwrap()));
    }

    #[test]
    fn empty_tier_is_rejected() {
        let words = words_from_slice(&["CALM"]);
        let err = WordBank::new(words.clone(), Vec::new(), words, Vec::new()).unwrap_err();
        assert!(matches!(err, BankError::EmptyTier(Tier::Medium)));
    }

    #[test]
    fn validity_is_per_level() {
        let bank = WordBank::embedded();
        let hope = Word::new("HOPE").unwrap();
        assert!(bank.is_valid_for_level(1, &hope));
        assert!(!bank.is_valid_for_level(30, &hope));
    }

    #[test]
    fn dictionary_is_deduplicated() {
        let bank = WordBank::embedded();
        let dictionary = bank.dictionary();
        let quiz = dictionary.iter().filter(|w| w.text() == "QUIZ").count();
        assert_eq!(quiz, 1);
        assert!(dictionary.iter().any(|w| w.text() == "CAN"));
        assert!(dictionary.iter().any(|w| w.text() == "CALM"));
    }

    #[test]
    fn keyboard_letters_are_sorted_and_distinct() {
        let bank = WordBank::embedded();
        let letters = bank.keyboard_letters(1).unwrap();
        assert!(letters.windows(2).all(|w| w[0] < w[1]));
        assert!(letters.contains(&b'C'));
        assert!(!letters.contains(&b'Q'));
    }

    #[test]
    fn from_dir_missing_tier_reports_path() {
        let dir = std::env::temp_dir().join("word_challenge_empty_bank_dir");
        std::fs::create_dir_all(&dir).unwrap();
        let _ = std::fs::remove_file(dir.join("easy.txt"));

        let err = WordBank::from_dir(&dir).unwrap_err();
        assert!(err.to_string().contains("easy.txt"));
    }

    #[test]
    fn from_dir_loads_tiers() {
        let dir = std::env::temp_dir().join("word_challenge_custom_bank_dir");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("easy.txt"), "hope\ncalm\n").unwrap();
        std::fs::write(dir.join("medium.txt"), "peace\n").unwrap();
        std::fs::write(dir.join("hard.txt"), "fjord\n").unwrap();
        let _ = std::fs::remove_file(dir.join("dictionary.txt"));

        let bank = WordBank::from_dir(&dir).unwrap();
        assert_eq!(bank.select_word(1).unwrap().text(), "HOPE");
        assert_eq!(bank.select_word(40).unwrap().text(), "PEACE");
        assert_eq!(bank.select_word(99).unwrap().text(), "FJORD");
    }
}
