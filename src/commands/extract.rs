//! Word finder in line mode
//!
//! Spell words from the shuffled letters of each level's target word.

use crate::game::ExtractRound;
use crate::game::Notifier;
use crate::wordlists::WordBank;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};

/// Where a word-finder run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractSummary {
    pub level: u32,
    pub score: u64,
    /// Words found on the final level
    pub found: usize,
}

/// Run the word finder on a line-oriented reader
///
/// Each line is a word attempt. `next` (or `skip`) moves to the next level,
/// `shuffle` reorders the pool and `quit` ends the run.
///
/// # Errors
///
/// Returns an error if the starting level is invalid or reading input fails.
pub fn run_extract<R: BufRead, N: Notifier, G: Rng + ?Sized>(
    bank: &WordBank,
    level: u32,
    max_level: u32,
    mut reader: R,
    mut notifier: N,
    rng: &mut G,
) -> Result<ExtractSummary> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Word Finder - Extract                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Make words of 3+ letters from the pool. Each letter counts once.");
    println!("Commands: 'next' for the next level, 'shuffle', 'quit' to exit\n");

    let mut round = ExtractRound::new(bank, level, max_level, rng)?;
    let mut show_pool = true;

    loop {
        if show_pool {
            print_pool(&round);
        }

        print!("Word: ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "" => show_pool = false,
            "shuffle" => {
                round = round.reshuffled(rng);
                show_pool = true;
            }
            "next" | "skip" => match round.next_level(rng) {
                Some(next) => {
                    round = next;
                    show_pool = true;
                }
                None => {
                    println!("\n{}", "That was the last level!".green().bold());
                    break;
                }
            },
            _ if input.chars().count() > round.max_word_len() => {
                println!("❌ At most {} letters", round.max_word_len());
                show_pool = false;
            }
            _ => {
                if let Ok(next) = round.submit_and_notify(input, &mut notifier) {
                    round = next;
                }
                show_pool = false;
            }
        }
    }

    println!(
        "\n👋 Final score: {}\n",
        round.score().to_string().bright_yellow().bold()
    );
    Ok(ExtractSummary {
        level: round.level(),
        score: round.score(),
        found: round.found().len(),
    })
}

fn print_pool(round: &ExtractRound<'_>) {
    let pool: Vec<String> = round
        .letters()
        .iter()
        .map(|&c| format!(" {} ", char::from(c)))
        .collect();
    println!(
        "\nLevel {}   Score: {}   Found: {}/{}",
        round.level().to_string().bright_cyan().bold(),
        round.score().to_string().bright_yellow(),
        round.found().len(),
        round.possible_words().len()
    );
    println!("  {}", pool.join("").on_blue().white().bold());

    let counts: Vec<String> = round
        .unique_letters()
        .into_iter()
        .map(|c| format!("{}×{}", char::from(c), round.letters_left(c, "")))
        .collect();
    println!("  Letters: {}", counts.join(" ").dimmed());

    if !round.found().is_empty() {
        let found: Vec<&str> = round.found().iter().map(|w| w.text()).collect();
        println!("  Found: {}", found.join(", ").green());
    }
}
