//! Simple interactive CLI mode
//!
//! Line-based level challenge without the TUI

use crate::game::{Game, GameConfig, GuessError, Notifier, RoundState, Session};
use crate::output::print_round_view;
use crate::wordlists::{WordBank, keyboard_rows};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::thread;
use std::time::Instant;

/// How a simple-mode run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimpleSummary {
    pub session: Session,
    pub finished: bool,
}

/// Run the level challenge on a line-oriented reader
///
/// Each line is one guess; `quit` ends the run. Between levels the configured
/// delay is honoured by sleeping until the advance is due.
///
/// # Errors
///
/// Returns an error if reading input fails.
pub fn run_simple<R: BufRead, N: Notifier>(
    bank: &WordBank,
    config: GameConfig,
    session: Session,
    mut reader: R,
    notifier: N,
) -> Result<SimpleSummary> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Challenge - Simple Mode                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Guess the hidden word. Green = right spot, yellow = wrong spot.");
    println!("Commands: 'quit' to exit\n");

    let mut game = Game::new(bank, config, session, notifier)?;
    let mut show_board = true;

    while !game.is_finished() {
        if show_board {
            let keyboard = keyboard_rows(bank, game.round().level())?;
            print_round_view(&game.view(""), &keyboard);
        }

        let Some(input) = read_line(&mut reader, game.round().target().len())? else {
            break;
        };
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "" => {
                show_board = false;
                continue;
            }
            _ => {}
        }

        match game.submit(&input, Instant::now()) {
            Ok(RoundState::Playing) => show_board = true,
            Ok(RoundState::Won | RoundState::Lost) => {
                let keyboard = keyboard_rows(bank, game.round().level())?;
                print_round_view(&game.view(""), &keyboard);
                if let Some(timer) = game.pending_advance() {
                    thread::sleep(timer.remaining(Instant::now()));
                }
                game.tick(Instant::now())?;
                show_board = true;
            }
            Err(GuessError::InvalidLength { expected, .. }) => {
                println!("❌ Enter a {expected}-letter word");
                show_board = false;
            }
            Err(GuessError::RoundOver) => show_board = true,
            // Already reported through the notifier
            Err(_) => show_board = false,
        }
    }

    game.cancel_pending();
    println!("\n👋 Final score: {}\n", game.session().score());
    Ok(SimpleSummary {
        session: game.session(),
        finished: game.is_finished(),
    })
}

/// Prompt for a guess; `None` at end of input
fn read_line<R: BufRead>(reader: &mut R, word_len: usize) -> Result<Option<String>> {
    print!("Guess ({word_len} letters): ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
