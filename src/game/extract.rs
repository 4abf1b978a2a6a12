//! Letter-extraction word finder
//!
//! The level's target word is broken into a shuffled letter pool. The player
//! finds dictionary words of at least three letters that can be spelled from
//! the pool, each letter used no more often than it appears in it.

use super::{GuessError, Notifier, Severity};
use crate::core::Word;
use crate::wordlists::{SelectError, WordBank};
use rand::Rng;
use rand::seq::SliceRandom;

/// Shortest word the finder accepts
pub const MIN_WORD_LEN: usize = 3;

#[derive(Debug, Clone)]
pub struct ExtractRound<'a> {
    bank: &'a WordBank,
    max_level: u32,
    level: u32,
    source: Word,
    letters: Vec<u8>,
    possible: Vec<Word>,
    found: Vec<Word>,
    score: u64,
}

impl<'a> ExtractRound<'a> {
    /// Start the finder at `level` with a freshly shuffled pool
    ///
    /// # Errors
    /// Returns `SelectError` for level 0.
    pub fn new<R: Rng + ?Sized>(
        bank: &'a WordBank,
        level: u32,
        max_level: u32,
        rng: &mut R,
    ) -> Result<Self, SelectError> {
        Self::with_score(bank, level, max_level, 0, rng)
    }

    fn with_score<R: Rng + ?Sized>(
        bank: &'a WordBank,
        level: u32,
        max_level: u32,
        score: u64,
        rng: &mut R,
    ) -> Result<Self, SelectError> {
        let source = bank.select_distinct_word(level)?.clone();
        let possible: Vec<Word> = bank
            .dictionary()
            .into_iter()
            .filter(|w| w.len() >= MIN_WORD_LEN && w.is_buildable_from(&source))
            .cloned()
            .collect();

        let mut letters = source.chars().to_vec();
        letters.shuffle(rng);

        log::debug!(
            "word finder level {level}: {} letters, {} words possible",
            letters.len(),
            possible.len()
        );
        Ok(Self {
            bank,
            max_level,
            level,
            source,
            letters,
            possible,
            found: Vec::new(),
            score,
        })
    }

    /// Validate and record a found word, returning the updated round
    ///
    /// # Errors
    /// - `TooShort` below three letters
    /// - `LettersUnavailable` if the pool cannot spell it
    /// - `NotInWordList` if it is not a known word
    /// - `DuplicateGuess` if it was already found
    pub fn submit(&self, guess: &str) -> Result<Self, GuessError> {
        let trimmed = guess.trim();
        let actual = trimmed.chars().count();
        if actual < MIN_WORD_LEN {
            return Err(GuessError::TooShort {
                min: MIN_WORD_LEN,
                actual,
            });
        }

        let word = Word::new(trimmed)
            .map_err(|_| GuessError::LettersUnavailable(trimmed.to_uppercase()))?;
        if !word.is_buildable_from(&self.source) {
            return Err(GuessError::LettersUnavailable(word.text().to_string()));
        }
        if !self.possible.contains(&word) {
            return Err(GuessError::NotInWordList(word.text().to_string()));
        }
        if self.found.contains(&word) {
            return Err(GuessError::DuplicateGuess(word.text().to_string()));
        }

        let mut next = self.clone();
        next.score += word.len() as u64;
        log::debug!("word finder level {}: found {word}", self.level);
        next.found.push(word);
        Ok(next)
    }

    /// Like `submit`, reporting the outcome to `notifier`
    ///
    /// # Errors
    /// Same as `submit`.
    pub fn submit_and_notify<N: Notifier>(
        &self,
        guess: &str,
        notifier: &mut N,
    ) -> Result<Self, GuessError> {
        match self.submit(guess) {
            Ok(next) => {
                if let Some(word) = next.found.last() {
                    notifier.notify(Severity::Success, &format!("Good job! \"{word}\" counted!"));
                }
                Ok(next)
            }
            Err(err) => {
                notifier.notify(Severity::Error, &rejection_message(&err));
                Err(err)
            }
        }
    }

    /// Move on to the next level, keeping the score; `None` after the last level
    #[must_use]
    pub fn next_level<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Self> {
        if self.level >= self.max_level {
            return None;
        }
        Self::with_score(self.bank, self.level + 1, self.max_level, self.score, rng).ok()
    }

    /// Same round with the pool shuffled again
    #[must_use]
    pub fn reshuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let mut next = self.clone();
        next.letters.shuffle(rng);
        next
    }

    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Pool letters in display order
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters
    }

    /// Distinct pool letters, keeping the shuffled order
    #[must_use]
    pub fn unique_letters(&self) -> Vec<u8> {
        let mut seen = Vec::with_capacity(self.letters.len());
        for &letter in &self.letters {
            if !seen.contains(&letter) {
                seen.push(letter);
            }
        }
        seen
    }

    /// How many more times `letter` can be typed given what is already in `input`
    #[must_use]
    pub fn letters_left(&self, letter: u8, input: &str) -> usize {
        let letter = letter.to_ascii_uppercase();
        let available = self.source.positions_of(letter).len();
        let used = input
            .bytes()
            .filter(|b| b.to_ascii_uppercase() == letter)
            .count();
        available.saturating_sub(used)
    }

    #[must_use]
    pub fn found(&self) -> &[Word] {
        &self.found
    }

    #[must_use]
    pub fn possible_words(&self) -> &[Word] {
        &self.possible
    }

    /// Longest word that can be typed, the source word's length
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.source.len()
    }
}

/// Toast text for a rejected find
fn rejection_message(err: &GuessError) -> String {
    match err {
        GuessError::NotInWordList(word) => {
            format!("Not a known word: {word} is not in the dictionary. Try another guess!")
        }
        GuessError::LettersUnavailable(_) => "Invalid: You used extra letters!".to_string(),
        _ => format!("{}: {err}", err.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Notification;
    use crate::wordlists::MAX_LEVEL;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    /// Small bank whose level-1 source word is CANE
    fn bank() -> WordBank {
        WordBank::new(
            words_from_slice(&["CANE", "MIND"]),
            words_from_slice(&["PEACE"]),
            words_from_slice(&["FJORD"]),
            words_from_slice(&["CAN", "CAT", "ACE", "NAN", "EN", "MAN"]),
        )
        .unwrap()
    }

    #[test]
    fn pool_is_a_permutation_of_the_source() {
        let bank = bank();
        let round = ExtractRound::new(&bank, 1, MAX_LEVEL, &mut rng()).unwrap();
        let mut letters = round.letters().to_vec();
        letters.sort_unstable();
        assert_eq!(letters, b"ACEN");
        assert_eq!(round.max_word_len(), 4);
    }

    #[test]
    fn possible_words_respect_pool_and_min_length() {
        let bank = bank();
        let round = ExtractRound::new(&bank, 1, MAX_LEVEL, &mut rng()).unwrap();
        let mut possible: Vec<&str> = round.possible_words().iter().map(Word::text).collect();
        possible.sort_unstable();
        assert_eq!(possible, ["ACE", "CAN", "CANE"]);
    }

    #[test]
    fn valid_word_scores_its_length() {
        let bank = bank();
        let round = ExtractRound::new(&bank, 1, MAX_LEVEL, &mut rng()).unwrap();
        let round = round.submit("can").unwrap().submit("CANE").unwrap();
        assert_eq!(round.score(), 7);
        assert_eq!(round.found().len(), 2);
    }

    #[test]
    fn rejections() {
        let bank = bank();
        let round = ExtractRound::new(&bank, 1, MAX_LEVEL, &mut rng()).unwrap();

        assert_eq!(
            round.submit("EN").unwrap_err(),
            GuessError::TooShort { min: 3, actual: 2 }
        );
        assert_eq!(
            round.submit("CAT").unwrap_err(),
            GuessError::LettersUnavailable("CAT".to_string())
        );
        assert_eq!(
            round.submit("NAN").unwrap_err(),
            GuessError::LettersUnavailable("NAN".to_string())
        );
        assert_eq!(
            round.submit("NEC").unwrap_err(),
            GuessError::NotInWordList("NEC".to_string())
        );

        let round = round.submit("ACE").unwrap();
        assert_eq!(
            round.submit("ace").unwrap_err(),
            GuessError::DuplicateGuess("ACE".to_string())
        );
        assert_eq!(round.score(), 3);
    }

    #[test]
    fn notifications_follow_outcomes() {
        let bank = bank();
        let round = ExtractRound::new(&bank, 1, MAX_LEVEL, &mut rng()).unwrap();
        let mut sink: Vec<Notification> = Vec::new();

        let round = round.submit_and_notify("CAN", &mut sink).unwrap();
        assert!(round.submit_and_notify("CAN", &mut sink).is_err());

        assert_eq!(sink[0].severity, Severity::Success);
        assert_eq!(sink[0].text, "Good job! \"CAN\" counted!");
        assert_eq!(sink[1].severity, Severity::Error);
        assert!(sink[1].text.starts_with("Already found"));
    }

    #[test]
    fn rejection_toasts_use_finder_wording() {
        let bank = bank();
        let round = ExtractRound::new(&bank, 1, MAX_LEVEL, &mut rng()).unwrap();
        let mut sink: Vec<Notification> = Vec::new();

        assert!(round.submit_and_notify("NEC", &mut sink).is_err());
        assert!(round.submit_and_notify("CAT", &mut sink).is_err());

        assert_eq!(
            sink[0].text,
            "Not a known word: NEC is not in the dictionary. Try another guess!"
        );
        assert_eq!(sink[1].text, "Invalid: You used extra letters!");
    }

    #[test]
    fn hard_levels_draw_from_distinct_words() {
        let bank = WordBank::embedded();
        for (level, source) in [(71, "MINDF"), (81, "CLOVE"), (100, "BLEND")] {
            let round = ExtractRound::new(&bank, level, MAX_LEVEL, &mut rng()).unwrap();
            let mut pool = round.letters().to_vec();
            let mut expected = source.as_bytes().to_vec();
            pool.sort_unstable();
            expected.sort_unstable();
            assert_eq!(pool, expected, "level {level}");
        }
    }

    #[test]
    fn next_level_keeps_score_and_resets_found() {
        let bank = bank();
        let round = ExtractRound::new(&bank, 1, 2, &mut rng())
            .unwrap()
            .submit("CAN")
            .unwrap();

        let next = round.next_level(&mut rng()).unwrap();
        assert_eq!(next.level(), 2);
        assert_eq!(next.score(), 3);
        assert!(next.found().is_empty());
        assert!(next.next_level(&mut rng()).is_none());
    }

    #[test]
    fn letters_left_counts_typed_input() {
        let bank = WordBank::embedded();
        // Level 4 is EASE: two E's
        let round = ExtractRound::new(&bank, 4, MAX_LEVEL, &mut rng()).unwrap();
        assert_eq!(round.letters_left(b'E', ""), 2);
        assert_eq!(round.letters_left(b'E', "e"), 1);
        assert_eq!(round.letters_left(b'E', "EE"), 0);
        assert_eq!(round.letters_left(b'Z', ""), 0);
        assert_eq!(round.unique_letters().len(), 3);
    }

    #[test]
    fn reshuffle_keeps_letters() {
        let bank = WordBank::embedded();
        let round = ExtractRound::new(&bank, 30, MAX_LEVEL, &mut rng()).unwrap();
        let shuffled = round.reshuffled(&mut rng());
        let mut a = round.letters().to_vec();
        let mut b = shuffled.letters().to_vec();
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
    }
}
