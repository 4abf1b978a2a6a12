//! Formatting utilities for terminal output

use crate::core::LetterStatus;
use colored::{ColoredString, Colorize};

/// Status row as single-letter codes, e.g. `GG-YG`
#[must_use]
pub fn status_codes(statuses: &[LetterStatus]) -> String {
    statuses.iter().map(|s| s.code()).collect()
}

/// One letter tile coloured by its status
#[must_use]
pub fn colored_tile(letter: char, status: LetterStatus) -> ColoredString {
    let tile = format!(" {letter} ");
    match status {
        LetterStatus::Correct => tile.black().on_green().bold(),
        LetterStatus::Present => tile.black().on_yellow().bold(),
        LetterStatus::Absent => tile.white().on_bright_black(),
        LetterStatus::Empty => tile.normal(),
    }
}

/// A guess rendered as coloured tiles
#[must_use]
pub fn colored_row(guess: &str, statuses: &[LetterStatus]) -> String {
    guess
        .chars()
        .zip(statuses)
        .map(|(c, &s)| colored_tile(c, s).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus::{Absent, Correct, Present};

    #[test]
    fn codes_for_crimp() {
        assert_eq!(
            status_codes(&[Correct, Correct, Correct, Absent, Correct]),
            "GGG-G"
        );
        assert_eq!(status_codes(&[Present]), "Y");
    }

    #[test]
    fn colored_row_keeps_letters() {
        colored::control::set_override(false);
        assert_eq!(colored_row("CALM", &[Correct; 4]), " C  A  L  M ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
