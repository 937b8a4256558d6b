//! Formatting utilities for terminal output

use crate::core::{Classification, KeyboardRecord, Letter};
use crate::game::board::Row;
use crate::game::{KEYBOARD_LAYOUT, Key};
use colored::{ColoredString, Colorize};

/// Paint a board square or key with its classification's background
#[must_use]
pub fn paint(text: &str, classification: Option<Classification>) -> ColoredString {
    match classification {
        Some(Classification::InWordRightPlace) => text.black().on_green().bold(),
        Some(Classification::InWordWrongPlace) => text.black().on_yellow().bold(),
        Some(Classification::NotInWord) => text.white().on_bright_black(),
        Some(Classification::InProgress) => text.bright_white().bold(),
        None => text.normal(),
    }
}

/// One board row as ` C  R  A  N  E `, blanks shown as `_`
#[must_use]
pub fn board_row(row: &Row) -> String {
    row.iter()
        .map(|cell| {
            let letter = cell.letter.map_or('_', Letter::to_char);
            paint(&format!(" {letter} "), Some(cell.classification)).to_string()
        })
        .collect()
}

/// On-screen keyboard rows, keys colored by the best classification seen so far
#[must_use]
pub fn keyboard_rows(record: &KeyboardRecord) -> Vec<String> {
    KEYBOARD_LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|&key| {
                    let hint = match key {
                        Key::Letter(letter) => record.get(letter),
                        Key::Enter | Key::Delete => None,
                    };
                    paint(&format!(" {key} "), hint).to_string()
                })
                .collect::<String>()
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)] // clamped to [0, width]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
