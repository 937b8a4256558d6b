//! Cumulative per-letter keyboard hints

use super::{Classification, Letter, ScoredGuess};

/// Best-known classification for each letter of the alphabet
///
/// An entry only ever moves up the classification ranking: once a letter is known to
/// be green it stays green, no matter what later guesses say about it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardRecord([Option<Classification>; Letter::COUNT]);

impl KeyboardRecord {
    /// A record with every letter unset
    #[must_use]
    pub const fn new() -> Self {
        Self([None; Letter::COUNT])
    }

    /// The recorded classification for `letter`, if it has been guessed
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: Letter) -> Option<Classification> {
        self.0[letter.index()]
    }

    /// Record an observation, keeping the higher rank
    ///
    /// Returns `true` if the stored entry changed.
    pub fn record(&mut self, letter: Letter, classification: Classification) -> bool {
        let entry = &mut self.0[letter.index()];
        // `None` sorts below every `Some`, so an unset entry always takes the new value
        if Some(classification) > *entry {
            *entry = Some(classification);
            true
        } else {
            false
        }
    }

    /// Merge every letter of a scored guess into the record
    pub fn merge(&mut self, guess: &ScoredGuess) {
        for cell in guess {
            self.record(cell.letter, cell.classification);
        }
    }

    /// Iterate over all 26 letters with their entries, alphabetically
    pub fn iter(&self) -> impl Iterator<Item = (Letter, Option<Classification>)> + '_ {
        Letter::ALL
            .into_iter()
            .map(move |letter| (letter, self.get(letter)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn scored(secret: &str, guess: &str) -> ScoredGuess {
        ScoredGuess::score(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn new_record_is_all_unset() {
        let record = KeyboardRecord::new();
        assert!(record.iter().all(|(_, entry)| entry.is_none()));
        assert_eq!(record.iter().count(), 26);
        assert_eq!(record, KeyboardRecord::default());
    }

    #[test]
    fn record_never_downgrades() {
        let mut record = KeyboardRecord::new();

        assert!(record.record(Letter::E, Classification::InWordRightPlace));
        assert!(!record.record(Letter::E, Classification::InWordWrongPlace));
        assert!(!record.record(Letter::E, Classification::NotInWord));
        assert!(!record.record(Letter::E, Classification::InWordRightPlace));

        assert_eq!(
            record.get(Letter::E),
            Some(Classification::InWordRightPlace)
        );
    }

    #[test]
    fn record_upgrades() {
        let mut record = KeyboardRecord::new();

        assert!(record.record(Letter::R, Classification::NotInWord));
        assert!(record.record(Letter::R, Classification::InWordWrongPlace));
        assert_eq!(
            record.get(Letter::R),
            Some(Classification::InWordWrongPlace)
        );
    }

    #[test]
    fn merge_uses_best_classification_within_a_guess() {
        // CRANE vs EERIE: first two Es are gray, last E is green
        let mut record = KeyboardRecord::new();
        record.merge(&scored("CRANE", "EERIE"));

        assert_eq!(
            record.get(Letter::E),
            Some(Classification::InWordRightPlace)
        );
        assert_eq!(
            record.get(Letter::R),
            Some(Classification::InWordWrongPlace)
        );
        assert_eq!(record.get(Letter::I), Some(Classification::NotInWord));
        assert_eq!(record.get(Letter::Z), None);
    }

    #[test]
    fn merge_is_monotonic_across_guesses() {
        let mut record = KeyboardRecord::new();
        let guesses = ["SLATE", "CRANE", "TRACE", "CRANE"];

        for guess in guesses {
            let before = record;
            record.merge(&scored("CRANE", guess));

            for ((_, old), (_, new)) in before.iter().zip(record.iter()) {
                assert!(new >= old, "keyboard entry went from {old:?} to {new:?}");
            }
        }

        for letter in [Letter::C, Letter::R, Letter::A, Letter::N, Letter::E] {
            assert_eq!(record.get(letter), Some(Classification::InWordRightPlace));
        }
        assert_eq!(record.get(Letter::S), Some(Classification::NotInWord));
    }
}
