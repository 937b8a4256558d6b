//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or plain text mode, or score a single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_simple, score_words},
    config::{GameConfig, LogConfig, WordListSource},
    interactive::{App, run_tui},
    logging::{self, LogTarget},
    output::{print_scored_guess, print_statistics},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for picking secret words (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Log filter used when `RUST_LOG` is unset (e.g. `info`, `wordle_game=debug`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log file for TUI mode (default: `<temp dir>/wordle_game/wordle_game.log`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one word per line, no TUI)
    Simple,

    /// Score a guess against a secret word
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            wordlist: WordListSource::parse(&self.wordlist),
            seed: self.seed,
            log: LogConfig {
                level: self.log_level.clone(),
                file: self.log_file.clone(),
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let target = match command {
        Commands::Play => LogTarget::File,
        Commands::Simple | Commands::Score { .. } => LogTarget::Stderr,
    };
    let _guard = logging::init(&config.log, target)?;

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
    }
}

fn run_play_command(config: &GameConfig) -> Result<()> {
    let words = config
        .wordlist
        .load()
        .context("failed to load word list")?;

    let app = App::new(&words, config.rng());
    let stats = run_tui(app)?;

    print_statistics(&mut io::stdout(), &stats)?;
    Ok(())
}

fn run_simple_command(config: &GameConfig) -> Result<()> {
    let words = config
        .wordlist
        .load()
        .context("failed to load word list")?;

    let mut rng = config.rng();
    run_simple(&words, &mut rng)?;
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let scored = score_words(secret, guess)?;
    print_scored_guess(&mut io::stdout(), &scored)?;
    Ok(())
}
