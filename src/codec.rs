//! Dense indexing of positions.
//!
//! An index is `combo * FOX_PLACEMENTS + fox_rank`, where `combo` ranks the
//! set of hound slots in the combinatorial number system and `fox_rank`
//! counts the free slots below the fox.

use crate::board::{Square, PLAYABLE_SLOTS};
use crate::combinatorics::{choose, rank, unrank};
use crate::position::{Position, HOUNDS};

pub type PositionIndex = u32;

/// Slots left for the fox once the hounds are placed.
pub const FOX_PLACEMENTS: u32 = PLAYABLE_SLOTS as u32 - HOUNDS as u32;

/// `choose(32, 4) * 28`
pub const POSITION_COUNT: u32 = choose(PLAYABLE_SLOTS as u32, HOUNDS as u32) * FOX_PLACEMENTS;

const _: () = assert!(POSITION_COUNT == 1_006_880);

/// Decode an index in `0..POSITION_COUNT`.
pub fn decode(index: PositionIndex) -> Position {
    debug_assert!(index < POSITION_COUNT, "position index out of range: {index}");
    let combo = index / FOX_PLACEMENTS;
    let mut fox_rank = index % FOX_PLACEMENTS;

    let slots = unrank::<HOUNDS>(combo);
    let hounds = slots.map(Square::from_slot);

    let mut fox = Square::from_slot(0);
    for slot in 0..PLAYABLE_SLOTS {
        if slots.contains(&slot) {
            continue;
        }
        if fox_rank == 0 {
            fox = Square::from_slot(slot);
            break;
        }
        fox_rank -= 1;
    }
    Position::new(hounds, fox)
}

/// Inverse of [`decode`].
pub fn encode(pos: &Position) -> PositionIndex {
    let slots = pos.hounds().map(Square::slot);
    let fox_slot = pos.fox().slot();
    let below = slots.iter().filter(|&&s| s < fox_slot).count() as u32;
    let fox_rank = fox_slot as u32 - below;
    rank(&slots) * FOX_PLACEMENTS + fox_rank
}
