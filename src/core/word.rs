//! Word representation
//!
//! A Word stores an uppercase ASCII word along with letter position indices.
//! Unlike classic Wordle, words are not fixed at five letters: the level tiers
//! mix 4, 5 and 6 letter targets.

use rustc_hash::FxHashMap;
use std::fmt;

/// An uppercase word with letter position tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is trimmed and the text is normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The trimmed text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_challenge::core::Word;
    ///
    /// let word = Word::new("crisp").unwrap();
    /// assert_eq!(word.text(), "CRISP");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("two words").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().trim().to_uppercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|c| c.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Get the count of each letter in the word
    #[must_use]
    pub fn char_counts(&self) -> FxHashMap<u8, u8> {
        self.char_positions
            .iter()
            .map(|(&ch, positions)| (ch, positions.len() as u8))
            .collect()
    }

    /// Whether this word can be spelled from `pool` without using any letter
    /// more often than it occurs there
    #[must_use]
    pub fn is_buildable_from(&self, pool: &Self) -> bool {
        let available = pool.char_counts();
        self.char_positions.iter().all(|(ch, positions)| {
            available
                .get(ch)
                .is_some_and(|&count| usize::from(count) >= positions.len())
        })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRISP").unwrap();
        assert_eq!(word.text(), "CRISP");
        assert_eq!(word.chars(), b"CRISP");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("calm").unwrap();
        assert_eq!(word.text(), "CALM");

        let word2 = Word::new("  SpHiNx ").unwrap();
        assert_eq!(word2.text(), "SPHINX");
        assert_eq!(word2.len(), 6);
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cal3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca lm"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("calm!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("sleep").unwrap();
        assert_eq!(word.positions_of(b'E'), &[2, 3]);
        assert_eq!(word.positions_of(b'S'), &[0]);
        assert_eq!(word.positions_of(b'Z'), &[]);
    }

    #[test]
    fn word_char_counts() {
        let word = Word::new("shush").unwrap();
        let counts = word.char_counts();
        assert_eq!(counts.get(&b'S'), Some(&2));
        assert_eq!(counts.get(&b'H'), Some(&2));
        assert_eq!(counts.get(&b'U'), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn word_buildable_from_pool() {
        let pool = Word::new("cane").unwrap();
        assert!(Word::new("can").unwrap().is_buildable_from(&pool));
        assert!(Word::new("cane").unwrap().is_buildable_from(&pool));
        assert!(!Word::new("cat").unwrap().is_buildable_from(&pool));

        // Letter counts matter, not just membership
        let pool = Word::new("plan").unwrap();
        assert!(!Word::new("nan").unwrap().is_buildable_from(&pool));
    }

    #[test]
    fn word_display() {
        let word = Word::new("bloom").unwrap();
        assert_eq!(format!("{word}"), "BLOOM");
    }

    #[test]
    fn word_equality() {
        assert_eq!(Word::new("calm").unwrap(), Word::new("CALM").unwrap());
        assert_ne!(Word::new("calm").unwrap(), Word::new("care").unwrap());
    }
}
