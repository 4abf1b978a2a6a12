//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not valid words are skipped. Order is
/// preserved, since level selection indexes into it.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_challenge::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/easy.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_str(&content))
}

/// Parse newline-delimited words from a string
#[must_use]
pub fn words_from_str(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                match Word::new(trimmed) {
                    Ok(word) => Some(word),
                    Err(e) => {
                        log::warn!("skipping word list entry {trimmed:?}: {e}");
                        None
                    }
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use word_challenge::wordlists::loader::words_from_slice;
/// use word_challenge::wordlists::EASY;
///
/// let words = words_from_slice(EASY);
/// assert_eq!(words.len(), EASY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["calm", "peace", "sphinx"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CALM");
        assert_eq!(words[1].text(), "PEACE");
        assert_eq!(words[2].text(), "SPHINX");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["calm", "two words", "", "h0pe", "rest"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CALM");
        assert_eq!(words[1].text(), "REST");
    }

    #[test]
    fn words_from_str_keeps_order_and_skips_blanks() {
        let words = words_from_str("hope\n\n  calm  \nw1sh\nkind\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["HOPE", "CALM", "KIND"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("word_challenge_missing_list.txt");
        let _ = std::fs::remove_file(&path);
        assert!(load_from_file(&path).is_err());
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join("word_challenge_loader_test.txt");
        std::fs::write(&path, "calm\nlove\nhope\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[2].text(), "HOPE");

        let _ = std::fs::remove_file(&path);
    }
}
