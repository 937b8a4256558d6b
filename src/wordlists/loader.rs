//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{WordList, WordListError};
use crate::core::Word;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Load a word list from a file, one word per line
///
/// Blank lines and `#` comments are skipped; invalid entries are skipped with a
/// warning.
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be read and
/// `WordListError::Empty` if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let list = WordList::new(parse_lines(&content))?;
    info!(path = %path.display(), count = list.len(), "loaded word list");
    Ok(list)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .enumerate()
        .filter_map(|(number, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }

            match Word::new(trimmed) {
                Ok(word) => Some(word),
                Err(err) => {
                    warn!(line = number + 1, entry = trimmed, %err, "skipping invalid word");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
