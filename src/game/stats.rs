//! Running win/loss statistics across sessions

use super::{Dictionary, GameSession, GameStatus};
use crate::core::MAX_GUESSES;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// Wins by guess count; index 0 is a first-guess win
    pub guess_distribution: [usize; MAX_GUESSES],
}

impl Statistics {
    /// Fold a finished session into the totals
    ///
    /// Sessions still in progress are ignored.
    pub fn record<D: Dictionary>(&mut self, session: &GameSession<'_, D>) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Lost => self.games_played += 1,
            GameStatus::Won => {
                self.games_played += 1;
                self.games_won += 1;
                if let Some(slot) = self
                    .guess_distribution
                    .get_mut(session.guesses().len().saturating_sub(1))
                {
                    *slot += 1;
                }
            }
        }
    }

    /// Percentage of games won (0-100)
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // game counts stay far below 2^52
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
