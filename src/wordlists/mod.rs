//! Word lists for the game
//!
//! Provides the embedded word list compiled into the binary, file loading, and the
//! [`WordList`] dictionary sessions validate guesses against.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use list::WordList;

use std::path::PathBuf;
use thiserror::Error;

/// Errors loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("word list contains no valid five-letter words")]
    Empty,
}
