//! Display grid for a session
//!
//! Front ends render a fixed 6x5 grid: scored guesses on top, the guess being typed
//! below them, and blank rows for the remaining attempts.

use super::{Dictionary, GameSession};
use crate::core::{Classification, Letter, MAX_GUESSES, ScoredGuess, WORD_LENGTH};

/// A single board square
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub letter: Option<Letter>,
    pub classification: Classification,
}

/// One row of squares
pub type Row = [Cell; WORD_LENGTH];

/// The full grid, `MAX_GUESSES` rows of `WORD_LENGTH` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Row; MAX_GUESSES],
}

impl Board {
    /// Lay out scored guesses followed by the pending guess
    ///
    /// The pending row is only shown while there is space for it; its cells are
    /// `InProgress` and padded with blanks.
    #[must_use]
    pub fn new(guesses: &[ScoredGuess], current: &[Letter]) -> Self {
        let mut rows = [[Cell::default(); WORD_LENGTH]; MAX_GUESSES];

        for (row, guess) in rows.iter_mut().zip(guesses) {
            for (cell, scored) in row.iter_mut().zip(guess) {
                *cell = Cell {
                    letter: Some(scored.letter),
                    classification: scored.classification,
                };
            }
        }

        if let Some(row) = rows.get_mut(guesses.len()) {
            for (cell, &letter) in row.iter_mut().zip(current) {
                cell.letter = Some(letter);
            }
        }

        Self { rows }
    }

    /// Snapshot the board of a session
    #[must_use]
    pub fn from_session<D: Dictionary>(session: &GameSession<'_, D>) -> Self {
        Self::new(session.guesses(), session.current_guess())
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; MAX_GUESSES] {
        &self.rows
    }
}
