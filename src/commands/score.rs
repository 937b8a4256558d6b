//! One-shot scoring command
//!
//! Scores a single guess against a given secret, outside of any session.

use crate::core::{ScoredGuess, Word};
use anyhow::{Context, Result};

/// Score `guess` against `secret`
///
/// Neither word has to be in a word list; both only need to be valid 5-letter words.
///
/// # Errors
///
/// Returns an error if either word is malformed.
pub fn score_words(secret: &str, guess: &str) -> Result<ScoredGuess> {
    let secret = Word::new(secret).with_context(|| format!("invalid secret word `{secret}`"))?;
    let guess = Word::new(guess).with_context(|| format!("invalid guess `{guess}`"))?;

    Ok(ScoredGuess::score(&secret, &guess))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_words() {
        let scored = score_words("speed", "erase").unwrap();
        assert_eq!(scored.to_emoji(), "🟨⬜⬜🟨🟨");
    }

    #[test]
    fn rejects_malformed_secret() {
        let err = score_words("spee", "erase").unwrap_err();
        assert!(err.to_string().contains("invalid secret word `spee`"));
    }

    #[test]
    fn rejects_malformed_guess() {
        let err = score_words("speed", "er4se").unwrap_err();
        assert!(err.to_string().contains("invalid guess"));
    }
}
