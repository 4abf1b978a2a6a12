//! Display functions for command results

use super::formatters::{colored_row, colored_tile, create_progress_bar, status_codes};
use crate::commands::{CheckResult, LevelInfo, SimulationResult};
use crate::core::statuses_to_emoji;
use crate::game::{Notifier, RoundState, RoundView, Severity};
use crate::wordlists::Key;
use colored::Colorize;

/// Print the evaluation of a single guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().bright_yellow().bold(),
        result.target.text().bright_white().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(result.guess.text(), &result.statuses));
    println!("  {}", statuses_to_emoji(&result.statuses));
    println!("  {}", status_codes(&result.statuses));

    let names: Vec<String> = result.statuses.iter().map(ToString::to_string).collect();
    println!("  [{}]", names.join(", "));

    if result.solved {
        println!("\n{}", "✅ Exact match".green().bold());
    }
}

/// Print the target and keyboard for a level
pub fn print_level_info(info: &LevelInfo) {
    println!(
        "\nLevel {}/{} ({} tier, {} words in list)",
        info.level.to_string().bright_cyan().bold(),
        info.max_level,
        info.tier,
        info.list_len
    );
    println!(
        "Target: {} ({} letters)",
        info.word.text().bright_yellow().bold(),
        info.word.len()
    );

    println!("\nKeyboard:");
    for row in &info.keyboard {
        let keys: Vec<String> = row.iter().map(|k| k.label()).collect();
        println!("  {}", keys.join(" "));
    }
}

/// Print a round as coloured tiles with the keyboard below
pub fn print_round_view(view: &RoundView, keyboard: &[Vec<Key>]) {
    println!(
        "\nLevel {}/{} ({})   Score: {}   Streak: {}   Attempts: {}/{}",
        view.level.to_string().bright_cyan().bold(),
        view.max_level,
        view.tier,
        view.score.to_string().bright_yellow(),
        view.streak.to_string().bright_green(),
        view.attempts_used,
        view.max_attempts
    );

    for row in view.grid.iter().take(view.attempts_used) {
        let tiles: String = row
            .iter()
            .map(|cell| colored_tile(cell.letter.unwrap_or(' '), cell.status).to_string())
            .collect();
        println!("  {tiles}");
    }

    for row in keyboard {
        let keys: Vec<String> = row
            .iter()
            .filter_map(|key| match key {
                Key::Letter(c) => Some(
                    colored_tile(char::from(*c), view.keyboard.get(*c))
                        .to_string(),
                ),
                Key::Enter | Key::Delete => None,
            })
            .collect();
        if !keys.is_empty() {
            println!("  {}", keys.join(""));
        }
    }

    match view.state {
        RoundState::Playing => {}
        RoundState::Won => println!("\n{}", "🎉 Solved!".green().bold()),
        RoundState::Lost => println!(
            "\n{} Word was {}.",
            "❌ Out of attempts!".red().bold(),
            view.revealed.as_deref().unwrap_or_default().bright_white().bold()
        ),
    }
}

/// Print the result of a simulated run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    let played = result.outcomes.len();
    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Levels played:    {played}");
    println!(
        "   Won / lost:       {} / {}",
        result.won.to_string().green(),
        result.lost.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    println!("   Final score:      {}", result.session.score());
    println!("   Best streak:      {}", result.session.best_streak());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Attempts per win:".bright_cyan().bold());
    for (attempts, &count) in &result.distribution {
        let pct = if result.won == 0 {
            0.0
        } else {
            count as f64 / result.won as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    let losses: Vec<String> = result
        .outcomes
        .iter()
        .filter(|o| !o.won)
        .map(|o| format!("{}:{}", o.level, o.target))
        .collect();
    if !losses.is_empty() {
        println!("\n❌ {} {}", "Lost levels:".red().bold(), losses.join(", "));
    }
}

/// Prints notifications as coloured one-line toasts
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => println!("{}", message.cyan()),
            Severity::Success => println!("{}", message.green().bold()),
            Severity::Error => println!("{}", message.red()),
        }
    }
}
