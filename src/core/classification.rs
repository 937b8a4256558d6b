//! Per-letter feedback categories
//!
//! Variants are declared in increasing rank order, so the derived `Ord` is the ranking
//! used when merging keyboard hints.

/// Feedback for a single letter
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// Typed but not yet scored
    #[default]
    InProgress,
    /// Letter is absent from the secret word (gray)
    NotInWord,
    /// Letter is in the secret word at another position (yellow)
    InWordWrongPlace,
    /// Letter is at this exact position in the secret word (green)
    InWordRightPlace,
}

impl Classification {
    /// Numeric rank (0-3)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// True for the green classification
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::InWordRightPlace)
    }

    /// Emoji square for sharing results
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::InProgress => '⬛',
            Self::NotInWord => '⬜',
            Self::InWordWrongPlace => '🟨',
            Self::InWordRightPlace => '🟩',
        }
    }
}
