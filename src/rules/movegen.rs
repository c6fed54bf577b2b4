use crate::board::{Side, Step};
use crate::position::{Position, HOUNDS};

/// Upper bound on legal moves: four hounds with two steps each.
pub const MAX_SUCCESSORS: usize = HOUNDS * Step::HOUND.len();

/// Fixed-capacity list of successor positions.
#[derive(Clone, Debug)]
pub struct Successors {
    moves: [Position; MAX_SUCCESSORS],
    len: u8,
}

impl Successors {
    fn new(filler: Position) -> Self {
        Self {
            moves: [filler; MAX_SUCCESSORS],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, pos: Position) {
        self.moves[self.len as usize] = pos;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Position] {
        &self.moves[..self.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> + '_ {
        self.as_slice().iter()
    }
}

/// All legal moves for the side to move.
pub fn successors(pos: &Position) -> Successors {
    match pos.side_to_move() {
        Side::Fox => fox_moves(pos),
        Side::Hounds => hound_moves(pos),
    }
}

/// Fox steps diagonally in any direction onto a square no hound holds.
pub fn fox_moves(pos: &Position) -> Successors {
    let mut out = Successors::new(*pos);
    for step in Step::FOX {
        let Some(dst) = pos.fox().step(step) else {
            continue;
        };
        if pos.is_hound(dst) {
            continue;
        }
        out.push(pos.with_fox(dst));
    }
    out
}

/// Hounds only step down, onto empty squares.
pub fn hound_moves(pos: &Position) -> Successors {
    let mut out = Successors::new(*pos);
    for (idx, &from) in pos.hounds().iter().enumerate() {
        for step in Step::HOUND {
            let Some(dst) = from.step(step) else {
                continue;
            };
            if pos.is_occupied(dst) {
                continue;
            }
            out.push(pos.with_hound(idx, dst));
        }
    }
    out
}
