//! The closed 26-letter alphabet
//!
//! Every letter a player can type or a word can contain is one of these variants,
//! so per-letter tables can be fixed-size arrays indexed by [`Letter::index`].

use std::fmt;

/// An uppercase ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Number of letters in the alphabet
    pub const COUNT: usize = 26;

    /// All letters in alphabetical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::I,
        Self::J,
        Self::K,
        Self::L,
        Self::M,
        Self::N,
        Self::O,
        Self::P,
        Self::Q,
        Self::R,
        Self::S,
        Self::T,
        Self::U,
        Self::V,
        Self::W,
        Self::X,
        Self::Y,
        Self::Z,
    ];

    /// Parse a letter, accepting either case
    ///
    /// Returns `None` for anything outside `a-z` / `A-Z`.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q'), Some(Letter::Q));
    /// assert_eq!(Letter::from_char('Q'), Some(Letter::Q));
    /// assert_eq!(Letter::from_char('1'), None);
    /// ```
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_alphabetic() {
            let offset = ch.to_ascii_uppercase() as u8 - b'A';
            Some(Self::ALL[offset as usize])
        } else {
            None
        }
    }

    /// Position in the alphabet (A = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The uppercase character for this letter
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
