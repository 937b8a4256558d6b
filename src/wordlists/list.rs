//! In-memory dictionary

use super::WordListError;
use crate::core::Word;
use crate::game::Dictionary;
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

/// A non-empty, de-duplicated list of valid words
///
/// Membership checks go through a hash set; random picks index the ordered list so
/// every word is equally likely.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<Word>,
}

impl WordList {
    /// Build a list from already-validated words
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no words are given.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, WordListError> {
        let mut index = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| index.insert(word.clone()))
            .collect();

        if words.is_empty() {
            return Err(WordListError::Empty);
        }

        debug!(count = words.len(), "word list ready");
        Ok(Self { words, index })
    }

    /// Build a list from raw strings, skipping any that are not valid words
    ///
    /// # Errors
    /// Returns `WordListError::Empty` if no valid words remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::wordlists::WordList;
    ///
    /// let list = WordList::from_strs(&["crane", "slate", "toolong"]).unwrap();
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn from_strs(words: &[&str]) -> Result<Self, WordListError> {
        Self::new(super::loader::words_from_slice(words))
    }

    /// The list compiled into the binary
    ///
    /// # Errors
    /// Only fails if the embedded list is empty, which the build guards against.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::from_strs(super::WORDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; an empty list cannot be constructed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in load order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl Dictionary for WordList {
    fn contains(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    fn random_word<R: Rng>(&self, rng: &mut R) -> &Word {
        &self.words[rng.random_range(0..self.words.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(WordList::new(Vec::new()), Err(WordListError::Empty)));
        assert!(matches!(
            WordList::from_strs(&["toolong", "abc"]),
            Err(WordListError::Empty)
        ));
    }

    #[test]
    fn duplicates_are_dropped() {
        let list = WordList::from_strs(&["crane", "CRANE", "slate"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[0].text(), "CRANE");
        assert_eq!(list.words()[1].text(), "SLATE");
    }

    #[test]
    fn contains_is_case_insensitive_via_word() {
        let list = WordList::from_strs(&["crane"]).unwrap();
        assert!(list.contains(&Word::new("CRANE").unwrap()));
        assert!(list.contains(&Word::new("crane").unwrap()));
        assert!(!list.contains(&Word::new("slate").unwrap()));
    }

    #[test]
    fn random_word_comes_from_the_list() {
        let list = WordList::from_strs(&["crane", "slate", "trace"]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            assert!(list.contains(list.random_word(&mut rng)));
        }
    }

    #[test]
    fn random_word_reaches_every_entry() {
        let list = WordList::from_strs(&["crane", "slate", "trace"]).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = FxHashSet::default();

        for _ in 0..200 {
            seen.insert(list.random_word(&mut rng).clone());
        }
        assert_eq!(seen.len(), list.len());
    }

    #[test]
    fn embedded_list_loads() {
        let list = WordList::embedded().unwrap();
        assert_eq!(list.len(), super::super::WORDS_COUNT);
        assert!(!list.is_empty());
    }
}
