//! Game session layer
//!
//! The stateful half of the game: sessions, the dictionary they validate against,
//! and the views front ends read to render them.

pub mod board;
mod dictionary;
pub mod input;
mod session;
mod stats;

pub use board::Board;
pub use dictionary::Dictionary;
pub use input::{KEYBOARD_LAYOUT, Key};
pub use session::{GameSession, GameStatus, GuessError};
pub use stats::Statistics;
