use crate::board::{Side, LAST_ROW_START};
use crate::position::Position;

use super::movegen::fox_moves;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Terminal {
    /// The fox reached the far row.
    FoxWins,
    /// The fox is to move and has nowhere to go.
    HoundsWin,
}

/// Classify a position as game over, or `None` if play continues.
///
/// A fox on the last row wins regardless of whose turn it is.
pub fn classify(pos: &Position) -> Option<Terminal> {
    if pos.fox().raw() > LAST_ROW_START {
        return Some(Terminal::FoxWins);
    }
    if pos.side_to_move() == Side::Fox && fox_moves(pos).is_empty() {
        return Some(Terminal::HoundsWin);
    }
    None
}
