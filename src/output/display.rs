//! Display functions for the text front ends

use super::formatters::{board_row, create_progress_bar, keyboard_rows, paint};
use crate::core::{KeyboardRecord, ScoredGuess};
use crate::game::{Board, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Print the 6x5 board
///
/// # Errors
/// Propagates write failures.
pub fn print_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    for row in board.rows() {
        writeln!(out, "  {}", board_row(row))?;
    }
    writeln!(out)
}

/// Print the on-screen keyboard
///
/// # Errors
/// Propagates write failures.
pub fn print_keyboard<W: Write>(out: &mut W, record: &KeyboardRecord) -> io::Result<()> {
    for (indent, row) in ["", " ", " "].iter().zip(keyboard_rows(record)) {
        writeln!(out, "  {indent}{row}")?;
    }
    writeln!(out)
}

/// Print a single scored guess with its emoji line
///
/// # Errors
/// Propagates write failures.
pub fn print_scored_guess<W: Write>(out: &mut W, guess: &ScoredGuess) -> io::Result<()> {
    let letters: String = guess
        .iter()
        .map(|cell| {
            paint(&format!(" {} ", cell.letter), Some(cell.classification)).to_string()
        })
        .collect();

    writeln!(out, "{letters}")?;
    writeln!(out, "{}", guess.to_emoji())
}

/// Print session totals and the guess distribution
///
/// # Errors
/// Propagates write failures.
#[allow(clippy::cast_precision_loss)] // game counts stay far below 2^52
pub fn print_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Played: {}   Won: {}   Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "  {}: {} {count}", i + 1, bar.green())?;
    }

    writeln!(out, "{}", "─".repeat(40).cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MAX_GUESSES, Word};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn board_prints_six_rows() {
        let text = render(|out| print_board(out, &Board::new(&[], &[])));
        assert_eq!(text.lines().filter(|l| l.contains('_')).count(), MAX_GUESSES);
    }

    #[test]
    fn scored_guess_includes_emoji() {
        let secret = Word::new("FLOOR").unwrap();
        let guess = ScoredGuess::score(&secret, &Word::new("ROBOT").unwrap());
        let text = render(|out| print_scored_guess(out, &guess));

        assert!(text.contains(" R  O  B  O  T "));
        assert!(text.contains("🟨🟨⬜🟩⬜"));
    }

    #[test]
    fn statistics_show_distribution() {
        let stats = Statistics {
            games_played: 2,
            games_won: 1,
            guess_distribution: [0, 0, 1, 0, 0, 0],
        };
        let text = render(|out| print_statistics(out, &stats));

        assert!(text.contains("Played: 2"));
        assert!(text.contains("Win rate: 50%"));
        assert!(text.contains("  3: ████████████████████ 1"));
    }
}
