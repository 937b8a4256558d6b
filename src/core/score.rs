//! Guess scoring
//!
//! Classifies every letter of a guess against the secret word, following Wordle's
//! duplicate-letter rules.

use super::{Classification, Letter, WORD_LENGTH, Word};
use std::fmt;

/// One scored board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredLetter {
    pub letter: Letter,
    pub classification: Classification,
}

/// A fully scored guess, one entry per board column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoredGuess([ScoredLetter; WORD_LENGTH]);

impl ScoredGuess {
    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. Every position starts as `NotInWord`
    /// 2. First pass: exact matches become `InWordRightPlace`; both slots are consumed
    /// 3. Second pass: each remaining guess letter, left to right, claims the leftmost
    ///    unconsumed matching secret slot and becomes `InWordWrongPlace`
    ///
    /// A letter is therefore yellow at most as many times as it has unmatched
    /// occurrences in the secret, and greens always win over yellows.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Classification, ScoredGuess, Word};
    ///
    /// let secret = Word::new("floor").unwrap();
    /// let guess = Word::new("robot").unwrap();
    /// let scored = ScoredGuess::score(&secret, &guess);
    ///
    /// // R(yellow) O(yellow) B(gray) O(green) T(gray)
    /// assert_eq!(scored[3].classification, Classification::InWordRightPlace);
    /// assert_eq!(scored[1].classification, Classification::InWordWrongPlace);
    /// ```
    #[must_use]
    pub fn score(secret: &Word, guess: &Word) -> Self {
        let secret_letters = secret.letters();
        let mut cells = (*guess.letters()).map(|letter| ScoredLetter {
            letter,
            classification: Classification::NotInWord,
        });
        let mut guess_consumed = [false; WORD_LENGTH];
        let mut secret_consumed = [false; WORD_LENGTH];

        // First pass: greens
        for (i, cell) in cells.iter_mut().enumerate() {
            if cell.letter == secret_letters[i] {
                cell.classification = Classification::InWordRightPlace;
                guess_consumed[i] = true;
                secret_consumed[i] = true;
            }
        }

        // Second pass: yellows, leftmost unconsumed secret slot first
        for (i, cell) in cells.iter_mut().enumerate() {
            if guess_consumed[i] {
                continue;
            }

            let matched = (0..WORD_LENGTH)
                .find(|&j| !secret_consumed[j] && secret_letters[j] == cell.letter);

            if let Some(j) = matched {
                cell.classification = Classification::InWordWrongPlace;
                guess_consumed[i] = true;
                secret_consumed[j] = true;
            }
        }

        Self(cells)
    }

    /// Check if every letter is in the right place
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.0.iter().all(|cell| cell.classification.is_correct())
    }

    /// Iterate over the scored letters in board order
    pub fn iter(&self) -> impl Iterator<Item = &ScoredLetter> {
        self.0.iter()
    }

    /// Just the classifications, in board order
    #[must_use]
    pub fn classifications(&self) -> [Classification; WORD_LENGTH] {
        self.0.map(|cell| cell.classification)
    }

    /// The guessed word
    #[must_use]
    pub fn word(&self) -> Word {
        Word::from_letters(self.0.map(|cell| cell.letter))
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|cell| cell.classification.to_emoji())
            .collect()
    }
}

impl std::ops::Index<usize> for ScoredGuess {
    type Output = ScoredLetter;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ScoredGuess {
    type Item = &'a ScoredLetter;
    type IntoIter = std::slice::Iter<'a, ScoredLetter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.to_emoji())
    }
}

/// Score `guess` against `secret`
///
/// Free-function form of [`ScoredGuess::score`].
#[must_use]
pub fn score(secret: &Word, guess: &Word) -> ScoredGuess {
    ScoredGuess::score(secret, guess)
}
