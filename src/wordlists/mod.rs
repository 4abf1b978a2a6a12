//! Word banks for the level challenge
//!
//! Provides the embedded tier lists, the `WordBank` that maps levels to target
//! words, and the per-level keyboard layout.

mod bank;
mod embedded;
pub mod keyboard;
pub mod loader;

pub use bank::{BankError, MAX_LEVEL, SelectError, Tier, WordBank};
pub use embedded::{
    EASY, EASY_COUNT, EXTRA_WORDS, EXTRA_WORDS_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT,
};
pub use keyboard::{Key, keyboard_rows};
