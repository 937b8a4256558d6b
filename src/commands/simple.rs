//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a whole word per line.

use crate::core::{MAX_GUESSES, WORD_LENGTH, Word, WordError};
use crate::game::{Board, Dictionary, GameSession, GameStatus, GuessError, Key, Statistics};
use crate::output::{print_board, print_keyboard, print_statistics};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<D: Dictionary, R: Rng>(dictionary: &D, rng: &mut R) -> Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_simple(dictionary, rng, stdin.lock(), stdout.lock())
}

/// Play games reading guesses from `input` until the player quits or input ends
///
/// Returns the statistics of the games that finished.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play_simple<D, R, I, W>(
    dictionary: &D,
    rng: &mut R,
    mut input: I,
    mut out: W,
) -> Result<Statistics>
where
    D: Dictionary,
    R: Rng,
    I: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║          Wordle - Text Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "Guess the {WORD_LENGTH}-letter word in {MAX_GUESSES} tries.")?;
    writeln!(out, "Type 'quit' to exit.")?;

    let mut stats = Statistics::default();

    'games: loop {
        let mut session = GameSession::new(dictionary, rng);

        while !session.status().is_over() {
            print_board(&mut out, &Board::from_session(&session))?;
            print_keyboard(&mut out, session.keyboard())?;

            let attempt = session.guesses().len() + 1;
            let label = format!("Guess {attempt}/{MAX_GUESSES}");
            let Some(line) = prompt(&mut input, &mut out, &label)? else {
                break 'games;
            };

            if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
                break 'games;
            }

            let word = match Word::new(&line) {
                Ok(word) => word,
                Err(WordError::InvalidLength(_)) => {
                    writeln!(
                        out,
                        "{}",
                        format!("❌ Guesses must be {WORD_LENGTH} letters").red()
                    )?;
                    continue;
                }
                Err(err) => {
                    writeln!(out, "{}", format!("❌ {err}").red())?;
                    continue;
                }
            };

            for &letter in word.letters() {
                Key::Letter(letter).press(&mut session);
            }

            match Key::Enter.press(&mut session) {
                Some(Ok(_)) | None => {}
                Some(Err(GuessError::NotInDictionary { word })) => {
                    writeln!(out, "{}", format!("Not in list: {word}").yellow())?;
                    session.clear_guess();
                }
                Some(Err(err)) => {
                    writeln!(out, "{}", format!("❌ {err}").red())?;
                    session.clear_guess();
                }
            }
        }

        print_board(&mut out, &Board::from_session(&session))?;
        match session.status() {
            GameStatus::Won => writeln!(out, "{}", "🎉 Nicely done!".green().bold())?,
            GameStatus::Lost => writeln!(
                out,
                "{}",
                format!("Sorry, the word was {}.", session.secret()).red().bold()
            )?,
            GameStatus::InProgress => {}
        }
        for guess in session.guesses() {
            writeln!(out, "  {}", guess.to_emoji())?;
        }

        stats.record(&session);
        print_statistics(&mut out, &stats)?;

        let again = prompt(&mut input, &mut out, "Play again? (yes/no)")?;
        if !matches!(again.as_deref().map(str::to_lowercase).as_deref(), Some("yes" | "y")) {
            break;
        }
        debug!("starting another game");
    }

    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(stats)
}

/// Prompt and read one trimmed line; `None` at end of input
fn prompt<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush().context("failed to flush prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read input")?;

    Ok((read > 0).then(|| line.trim().to_string()))
}
