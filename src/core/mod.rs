//! Core domain types for the word games
//!
//! This module contains the fundamental domain types and the guess evaluator.
//! Everything here is pure and free of I/O.

mod evaluation;
mod status;
mod word;

pub use evaluation::{LengthMismatch, evaluate, is_solved};
pub use status::{KeyboardStatus, LetterStatus, fold_statuses, statuses_to_emoji};
pub use word::{Word, WordError};
