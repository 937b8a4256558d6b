//! Terminal output formatting
//!
//! Colored board, keyboard and statistics for the text front ends.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_scored_guess, print_statistics};
