//! Level command
//!
//! Shows which tier and target word a level maps to.

use crate::core::Word;
use crate::wordlists::{Key, SelectError, Tier, WordBank, keyboard_rows};

#[derive(Debug, Clone)]
pub struct LevelInfo {
    pub level: u32,
    pub max_level: u32,
    pub tier: Tier,
    pub word: Word,
    pub list_len: usize,
    pub keyboard: Vec<Vec<Key>>,
}

/// Describe `level`
///
/// # Errors
///
/// Returns `SelectError` for level 0.
pub fn describe_level(
    bank: &WordBank,
    level: u32,
    max_level: u32,
) -> Result<LevelInfo, SelectError> {
    let word = bank.select_word(level)?.clone();
    Ok(LevelInfo {
        level,
        max_level,
        tier: Tier::for_level(level),
        word,
        list_len: bank.words_for_level(level)?.len(),
        keyboard: keyboard_rows(bank, level)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::MAX_LEVEL;

    #[test]
    fn describes_first_level() {
        let bank = WordBank::embedded();
        let info = describe_level(&bank, 1, MAX_LEVEL).unwrap();
        assert_eq!(info.word.text(), "CALM");
        assert_eq!(info.tier, Tier::Easy);
        assert_eq!(info.list_len, 25);
        assert!(!info.keyboard.is_empty());
    }

    #[test]
    fn describes_hard_level() {
        let bank = WordBank::embedded();
        let info = describe_level(&bank, 73, MAX_LEVEL).unwrap();
        assert_eq!(info.tier, Tier::Hard);
        assert_eq!(info.word.text(), "SPHINX");
    }

    #[test]
    fn level_zero_fails() {
        let bank = WordBank::embedded();
        assert!(describe_level(&bank, 0, MAX_LEVEL).is_err());
    }
}
