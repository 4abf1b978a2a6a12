//! On-screen keyboard layout for a level
//!
//! Only the letters that occur in the level's word list get a key, laid out
//! alphabetically over three rows, with Enter and Delete flanking the last row.

use super::{SelectError, WordBank};

const FIRST_ROW_LEN: usize = 10;
const SECOND_ROW_LEN: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(u8),
    Enter,
    Delete,
}

impl Key {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(c) => char::from(c).to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Delete => "DEL".to_string(),
        }
    }
}

/// Keyboard rows for `level`
///
/// # Errors
/// Returns `SelectError::InvalidLevel` for level 0.
pub fn keyboard_rows(bank: &WordBank, level: u32) -> Result<Vec<Vec<Key>>, SelectError> {
    let letters = bank.keyboard_letters(level)?;
    let split_first = letters.len().min(FIRST_ROW_LEN);
    let split_second = letters.len().min(FIRST_ROW_LEN + SECOND_ROW_LEN);

    let to_keys = |slice: &[u8]| slice.iter().copied().map(Key::Letter).collect::<Vec<_>>();

    let mut last = vec![Key::Enter];
    last.extend(to_keys(&letters[split_second..]));
    last.push(Key::Delete);

    Ok([
        to_keys(&letters[..split_first]),
        to_keys(&letters[split_first..split_second]),
        last,
    ]
    .into_iter()
    .filter(|row| !row.is_empty())
    .collect())
}
