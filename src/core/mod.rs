//! Core domain types for the game
//!
//! Letters, words, classifications and the scorer. Everything here is pure: no I/O,
//! no randomness, no interior state.

mod classification;
mod keyboard;
mod letter;
mod score;
mod word;

pub use classification::Classification;
pub use keyboard::KeyboardRecord;
pub use letter::Letter;
pub use score::{ScoredGuess, ScoredLetter, score};
pub use word::{Word, WordError};

/// Letters per word (board columns)
pub const WORD_LENGTH: usize = 5;

/// Guesses allowed per game (board rows)
pub const MAX_GUESSES: usize = 6;
