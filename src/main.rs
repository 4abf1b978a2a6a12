//! Word Challenge - CLI
//!
//! Level-based word guessing with TUI and line modes, a letter-extraction word
//! finder, and a simulation bot.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use word_challenge::{
    commands::{
        check_guess, describe_level, run_extract, run_simple, run_simulation,
    },
    game::{GameConfig, Session},
    output::{ConsoleNotifier, print_check_result, print_level_info, print_simulation_result},
    wordlists::{MAX_LEVEL, WordBank},
};

#[derive(Parser)]
#[command(
    name = "word_challenge",
    about = "Progressive word-guessing challenge across 100 levels",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory with easy.txt, medium.txt, hard.txt (and optional dictionary.txt)
    #[arg(short, long, global = true)]
    bank: Option<PathBuf>,

    /// Level to start at
    #[arg(short, long, global = true, default_value = "1")]
    level: u32,

    /// Log debug output (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Find words in the letters of each level's word
    Extract,

    /// Score a guess against a target word
    Check {
        /// The guessed word
        guess: String,

        /// The word to compare against
        target: String,
    },

    /// Show the target word and keyboard for a level
    Word {
        /// Level number
        level: u32,
    },

    /// Let a bot play a range of levels
    Simulate {
        /// First level
        #[arg(short, long, default_value = "1")]
        from: u32,

        /// Last level
        #[arg(short, long, default_value_t = MAX_LEVEL)]
        to: u32,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn load_bank(dir: Option<&PathBuf>) -> Result<WordBank> {
    match dir {
        Some(dir) => WordBank::from_dir(dir)
            .with_context(|| format!("Failed to load word lists from {}", dir.display())),
        None => Ok(WordBank::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let bank = load_bank(cli.bank.as_ref())?;
    let config = GameConfig::default();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&bank, config, cli.level),
        Commands::Simple => {
            let session = Session::starting_at(cli.level)?;
            run_simple(&bank, config, session, io::stdin().lock(), ConsoleNotifier)?;
            Ok(())
        }
        Commands::Extract => {
            let summary = run_extract(
                &bank,
                cli.level,
                config.max_level,
                io::stdin().lock(),
                ConsoleNotifier,
                &mut rand::rng(),
            )?;
            log::info!(
                "word finder stopped at level {} with {} points",
                summary.level,
                summary.score
            );
            Ok(())
        }
        Commands::Check { guess, target } => {
            let result = check_guess(&guess, &target)?;
            print_check_result(&result);
            Ok(())
        }
        Commands::Word { level } => {
            let info = describe_level(&bank, level, config.max_level)?;
            print_level_info(&info);
            Ok(())
        }
        Commands::Simulate { from, to } => {
            let result = run_simulation(&bank, config, from, to)?;
            print_simulation_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(bank: &WordBank, config: GameConfig, level: u32) -> Result<()> {
    use word_challenge::interactive::{App, run_tui};

    let app = App::new(bank, config, Session::starting_at(level)?)?;
    run_tui(app)
}
