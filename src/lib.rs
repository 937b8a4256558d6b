//! Wordle Game
//!
//! A Wordle-style word guessing game: duplicate-letter-correct scoring, a session state
//! machine with keyboard hints, and terminal front ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{GameSession, GameStatus};
//! use wordle_game::wordlists::WordList;
//!
//! let words = WordList::from_strs(&["crane", "slate"]).unwrap();
//! let mut session = GameSession::with_secret(&words, Word::new("crane").unwrap());
//!
//! for ch in "crane".chars() {
//!     session.append_letter(ch);
//! }
//! let scored = session.submit_guess().unwrap();
//!
//! assert!(scored.is_correct());
//! assert_eq!(session.status(), GameStatus::Won);
//! ```

// Core domain types and scoring
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Runtime configuration
pub mod config;

// Tracing setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
