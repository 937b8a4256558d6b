//! The word-list collaborator a session validates against

use crate::core::Word;
use rand::Rng;

/// Read-only set of valid words
///
/// Loaded once before any session starts and only borrowed afterwards.
pub trait Dictionary {
    /// Check whether `word` is an allowed guess
    fn contains(&self, word: &Word) -> bool;

    /// Pick a secret word uniformly at random
    ///
    /// Implementations must hold at least one word.
    fn random_word<R: Rng>(&self, rng: &mut R) -> &Word;
}
