//! Game session state machine
//!
//! A session owns the secret word, the scored guesses, the in-progress guess buffer
//! and the keyboard record. It moves from `InProgress` to `Won` or `Lost` and never
//! back; playing again means constructing a new session.

use super::Dictionary;
use crate::core::{KeyboardRecord, Letter, MAX_GUESSES, ScoredGuess, WORD_LENGTH, Word};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Where a session stands
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// True once the game has been won or lost
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submitted guess was not accepted
///
/// None of these mutate the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("guess must have {} letters, got {len}", WORD_LENGTH)]
    IncompleteGuess { len: usize },
    #[error("{word} is not in the word list")]
    NotInDictionary { word: Word },
    #[error("the game is already over")]
    GameOver,
}

/// One player's game against one secret word
#[derive(Debug, Clone)]
pub struct GameSession<'d, D> {
    dictionary: &'d D,
    secret: Word,
    guesses: Vec<ScoredGuess>,
    buffer: Vec<Letter>,
    keyboard: KeyboardRecord,
    status: GameStatus,
}

impl<'d, D: Dictionary> GameSession<'d, D> {
    /// Start a new game with a random secret drawn from `dictionary`
    pub fn new<R: Rng>(dictionary: &'d D, rng: &mut R) -> Self {
        let secret = dictionary.random_word(rng).clone();
        Self::with_secret(dictionary, secret)
    }

    /// Start a new game against a known secret
    #[must_use]
    pub fn with_secret(dictionary: &'d D, secret: Word) -> Self {
        debug!("new session started");
        trace!(%secret, "secret chosen");

        Self {
            dictionary,
            secret,
            guesses: Vec::with_capacity(MAX_GUESSES),
            buffer: Vec::with_capacity(WORD_LENGTH),
            keyboard: KeyboardRecord::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Add a typed letter to the current guess
    ///
    /// Ignored when the buffer is full, the game is over, or `ch` is not a letter.
    pub fn append_letter(&mut self, ch: char) {
        if self.status.is_over() || self.buffer.len() >= WORD_LENGTH {
            return;
        }

        if let Some(letter) = Letter::from_char(ch) {
            self.buffer.push(letter);
        }
    }

    /// Remove the last typed letter, if any
    pub fn delete_letter(&mut self) {
        if self.status.is_over() {
            return;
        }

        self.buffer.pop();
    }

    /// Empty the current guess
    pub fn clear_guess(&mut self) {
        if self.status.is_over() {
            return;
        }

        self.buffer.clear();
    }

    /// Submit the current guess for scoring
    ///
    /// On success the guess is recorded, the keyboard is updated, the buffer is
    /// cleared and the status recomputed.
    ///
    /// # Errors
    /// - `GameOver` if the session is already won or lost
    /// - `IncompleteGuess` if fewer than 5 letters have been typed
    /// - `NotInDictionary` if the word is not allowed; the buffer is left as typed
    pub fn submit_guess(&mut self) -> Result<ScoredGuess, GuessError> {
        if self.status.is_over() {
            return Err(GuessError::GameOver);
        }

        let letters: [Letter; WORD_LENGTH] =
            self.buffer
                .as_slice()
                .try_into()
                .map_err(|_| GuessError::IncompleteGuess {
                    len: self.buffer.len(),
                })?;
        let guess = Word::from_letters(letters);

        if !self.dictionary.contains(&guess) {
            debug!(%guess, "guess rejected: not in word list");
            return Err(GuessError::NotInDictionary { word: guess });
        }

        let scored = ScoredGuess::score(&self.secret, &guess);
        self.guesses.push(scored);
        self.keyboard.merge(&scored);
        self.buffer.clear();
        self.update_status();

        debug!(
            guess = %scored,
            attempt = self.guesses.len(),
            status = ?self.status,
            "guess accepted"
        );

        Ok(scored)
    }

    fn update_status(&mut self) {
        let won = self.guesses.last().is_some_and(ScoredGuess::is_correct);

        self.status = if won {
            GameStatus::Won
        } else if self.guesses.len() >= MAX_GUESSES {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if self.status.is_over() {
            info!(
                status = ?self.status,
                guesses = self.guesses.len(),
                secret = %self.secret,
                "game finished"
            );
        }
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    /// Letters typed so far for the next guess
    #[must_use]
    pub fn current_guess(&self) -> &[Letter] {
        &self.buffer
    }

    /// The current guess as an uppercase string
    #[must_use]
    pub fn current_guess_text(&self) -> String {
        self.buffer.iter().copied().map(Letter::to_char).collect()
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardRecord {
        &self.keyboard
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES - self.guesses.len()
    }

    /// The secret word
    ///
    /// Front ends should only reveal this once the game is over.
    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The word list this session validates guesses against
    #[must_use]
    pub const fn dictionary(&self) -> &'d D {
        self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Classification;
    use crate::wordlists::WordList;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> WordList {
        WordList::from_strs(&[
            "CRANE", "SLATE", "SPEED", "ERASE", "TRACE", "FLOOR", "ROBOT", "LIMBO", "HOUSE",
            "PIOUS", "MOIST", "BUDDY",
        ])
        .unwrap()
    }

    fn type_word<D: Dictionary>(session: &mut GameSession<'_, D>, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch);
        }
    }

    fn guess<D: Dictionary>(
        session: &mut GameSession<'_, D>,
        word: &str,
    ) -> Result<ScoredGuess, GuessError> {
        type_word(session, word);
        session.submit_guess()
    }

    #[test]
    fn new_session_starts_blank() {
        let dict = dictionary();
        let mut rng = StdRng::seed_from_u64(7);
        let session = GameSession::new(&dict, &mut rng);

        assert!(dict.contains(session.secret()));
        assert!(std::ptr::eq(session.dictionary(), &dict));
        assert!(session.guesses().is_empty());
        assert!(session.current_guess().is_empty());
        assert_eq!(session.keyboard(), &KeyboardRecord::new());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES);
    }

    #[test]
    fn seeded_sessions_pick_the_same_secret() {
        let dict = dictionary();
        let a = GameSession::new(&dict, &mut StdRng::seed_from_u64(42));
        let b = GameSession::new(&dict, &mut StdRng::seed_from_u64(42));
        assert_eq!(a.secret(), b.secret());
    }

    #[test]
    fn append_uppercases_and_caps_at_five() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        type_word(&mut session, "slatex");
        assert_eq!(session.current_guess_text(), "SLATE");
    }

    #[test]
    fn append_ignores_non_letters() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        type_word(&mut session, "s1l-a");
        assert_eq!(session.current_guess_text(), "SLA");
    }

    #[test]
    fn delete_removes_last_letter() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        type_word(&mut session, "ab");
        session.delete_letter();
        assert_eq!(session.current_guess_text(), "A");
        session.delete_letter();
        session.delete_letter();
        assert_eq!(session.current_guess_text(), "");
    }

    #[test]
    fn incomplete_guess_is_rejected_without_mutation() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());
        guess(&mut session, "SLATE").unwrap();
        let keyboard = *session.keyboard();

        let err = guess(&mut session, "TRA").unwrap_err();

        assert_eq!(err, GuessError::IncompleteGuess { len: 3 });
        assert_eq!(session.guesses().len(), 1);
        assert_eq!(session.keyboard(), &keyboard);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.current_guess_text(), "TRA");
    }

    #[test]
    fn empty_guess_is_incomplete() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());
        assert_eq!(
            session.submit_guess(),
            Err(GuessError::IncompleteGuess { len: 0 })
        );
    }

    #[test]
    fn unknown_word_keeps_buffer() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        let err = guess(&mut session, "QQQQQ").unwrap_err();

        assert_eq!(
            err,
            GuessError::NotInDictionary {
                word: Word::new("QQQQQ").unwrap()
            }
        );
        assert_eq!(session.current_guess_text(), "QQQQQ");
        assert!(session.guesses().is_empty());
        assert_eq!(session.keyboard(), &KeyboardRecord::new());

        session.clear_guess();
        assert!(session.current_guess().is_empty());
    }

    #[test]
    fn accepted_guess_updates_state() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        let scored = guess(&mut session, "trace").unwrap();

        assert_eq!(session.guesses(), &[scored]);
        assert!(session.current_guess().is_empty());
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.remaining_guesses(), MAX_GUESSES - 1);
        assert_eq!(
            session.keyboard().get(Letter::T),
            Some(Classification::NotInWord)
        );
        assert_eq!(
            session.keyboard().get(Letter::R),
            Some(Classification::InWordRightPlace)
        );
        assert_eq!(
            session.keyboard().get(Letter::C),
            Some(Classification::InWordWrongPlace)
        );
    }

    #[test]
    fn correct_guess_wins_and_is_terminal() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        guess(&mut session, "SLATE").unwrap();
        let scored = guess(&mut session, "CRANE").unwrap();

        assert!(scored.is_correct());
        assert_eq!(session.status(), GameStatus::Won);

        session.append_letter('A');
        assert!(session.current_guess().is_empty());
        session.delete_letter();
        assert_eq!(session.submit_guess(), Err(GuessError::GameOver));
        assert_eq!(session.guesses().len(), 2);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        for (i, word) in ["SLATE", "SPEED", "ERASE", "TRACE", "FLOOR"]
            .iter()
            .enumerate()
        {
            guess(&mut session, word).unwrap();
            assert_eq!(session.status(), GameStatus::InProgress, "after guess {i}");
        }

        guess(&mut session, "ROBOT").unwrap();
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.remaining_guesses(), 0);

        type_word(&mut session, "LIMBO");
        assert_eq!(session.submit_guess(), Err(GuessError::GameOver));
        assert_eq!(session.guesses().len(), MAX_GUESSES);
    }

    #[test]
    fn winning_on_the_last_guess_is_a_win() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("CRANE").unwrap());

        for word in ["SLATE", "SPEED", "ERASE", "TRACE", "FLOOR"] {
            guess(&mut session, word).unwrap();
        }
        guess(&mut session, "CRANE").unwrap();

        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn keyboard_is_monotonic_over_a_game() {
        let dict = dictionary();
        let mut session = GameSession::with_secret(&dict, Word::new("MOIST").unwrap());

        for word in ["PIOUS", "HOUSE", "ROBOT", "LIMBO"] {
            let before = *session.keyboard();
            guess(&mut session, word).unwrap();

            for ((letter, old), (_, new)) in before.iter().zip(session.keyboard().iter()) {
                assert!(new >= old, "{letter} downgraded from {old:?} to {new:?}");
            }
        }
        assert_eq!(
            session.keyboard().get(Letter::O),
            Some(Classification::InWordRightPlace)
        );
    }
}
