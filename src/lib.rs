//! An exhaustive solver for Fox and Hounds on the dark squares of an 8x8 board.
//!
//! Every placement of four hounds and a fox is given a dense index, terminal
//! positions are seeded, and win/loss distances are propagated backward by
//! repeated sweeps over the flat value table.

pub mod combinatorics;
pub mod board;
pub mod position;
pub mod codec;
pub mod rules;
pub mod solve;
pub mod report;
pub mod check;
