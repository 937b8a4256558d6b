//! Keys a front end can press, and the on-screen keyboard layout

use super::{Dictionary, GameSession, GuessError};
use crate::core::{Letter, ScoredGuess};
use std::fmt;

/// A key on the game keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Letter(Letter),
    Enter,
    Delete,
}

impl Key {
    /// Map a typed character to a key
    ///
    /// Letters map to themselves, `\n`/`\r` to Enter, backspace/DEL to Delete.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\n' | '\r' => Some(Self::Enter),
            '\u{8}' | '\u{7f}' => Some(Self::Delete),
            _ => match Letter::from_char(ch) {
                Some(letter) => Some(Self::Letter(letter)),
                None => None,
            },
        }
    }

    /// Apply this key press to a session
    ///
    /// Returns the submission result for Enter, `None` for the other keys.
    pub fn press<D: Dictionary>(
        self,
        session: &mut GameSession<'_, D>,
    ) -> Option<Result<ScoredGuess, GuessError>> {
        match self {
            Self::Letter(letter) => {
                session.append_letter(letter.to_char());
                None
            }
            Self::Delete => {
                session.delete_letter();
                None
            }
            Self::Enter => Some(session.submit_guess()),
        }
    }

    /// Label shown on the on-screen key
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Letter(letter) => LETTER_LABELS[letter.index()],
            Self::Enter => "ENT",
            Self::Delete => "DEL",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const LETTER_LABELS: [&str; Letter::COUNT] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// QWERTY rows of the on-screen keyboard, with Enter and Delete flanking the bottom row
pub const KEYBOARD_LAYOUT: [&[Key]; 3] = [
    &[
        Key::Letter(Letter::Q),
        Key::Letter(Letter::W),
        Key::Letter(Letter::E),
        Key::Letter(Letter::R),
        Key::Letter(Letter::T),
        Key::Letter(Letter::Y),
        Key::Letter(Letter::U),
        Key::Letter(Letter::I),
        Key::Letter(Letter::O),
        Key::Letter(Letter::P),
    ],
    &[
        Key::Letter(Letter::A),
        Key::Letter(Letter::S),
        Key::Letter(Letter::D),
        Key::Letter(Letter::F),
        Key::Letter(Letter::G),
        Key::Letter(Letter::H),
        Key::Letter(Letter::J),
        Key::Letter(Letter::K),
        Key::Letter(Letter::L),
    ],
    &[
        Key::Enter,
        Key::Letter(Letter::Z),
        Key::Letter(Letter::X),
        Key::Letter(Letter::C),
        Key::Letter(Letter::V),
        Key::Letter(Letter::B),
        Key::Letter(Letter::N),
        Key::Letter(Letter::M),
        Key::Delete,
    ],
];
