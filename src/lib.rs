//! Word Challenge
//!
//! A progressive word-guessing game: each of 100 levels hides a word drawn from
//! an easy, medium or hard list, and a guess is scored letter by letter as
//! correct, present or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use word_challenge::core::{LetterStatus, Word, evaluate};
//!
//! let guess = Word::new("crimp").unwrap();
//! let target = Word::new("crisp").unwrap();
//!
//! let statuses = evaluate(&guess, &target).unwrap();
//! assert_eq!(statuses[3], LetterStatus::Absent);
//! ```

// Core domain types
pub mod core;

// Rounds, sessions and scoring
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
