//! Game rules: legal moves and game-over detection.

pub mod movegen;
pub mod terminal;
