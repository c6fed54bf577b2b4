use crate::board::{Side, Square};

/// Number of hounds on the board.
pub const HOUNDS: usize = 4;

/// A piece placement: four interchangeable hounds and the fox.
///
/// Hounds are kept sorted ascending so that equal placements compare equal.
/// The side to move is not stored; see [`Position::side_to_move`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    hounds: [Square; HOUNDS],
    fox: Square,
}

impl Position {
    /// Build a position. All five squares must be distinct.
    pub fn new(mut hounds: [Square; HOUNDS], fox: Square) -> Self {
        hounds.sort_unstable();
        debug_assert!(hounds.windows(2).all(|w| w[0] != w[1]), "hounds overlap: {hounds:?}");
        debug_assert!(!hounds.contains(&fox), "fox {fox} shares a hound square");
        Self { hounds, fox }
    }

    /// Build from raw board numbers; `None` if any square is unplayable or two coincide.
    pub fn from_raw(hounds: [u8; HOUNDS], fox: u8) -> Option<Self> {
        let mut squares = [Square::from_slot(0); HOUNDS];
        for (dst, &raw) in squares.iter_mut().zip(&hounds) {
            *dst = Square::new(raw)?;
        }
        let fox = Square::new(fox)?;
        squares.sort_unstable();
        if squares.windows(2).any(|w| w[0] == w[1]) || squares.contains(&fox) {
            return None;
        }
        Some(Self { hounds: squares, fox })
    }

    #[inline]
    pub fn hounds(&self) -> &[Square; HOUNDS] {
        &self.hounds
    }

    #[inline]
    pub fn fox(&self) -> Square {
        self.fox
    }

    /// The fox moves iff the sum of all five squares is odd.
    ///
    /// Every legal move shifts one square by 7 or 9, so the parity flips each ply.
    #[inline]
    pub fn side_to_move(&self) -> Side {
        let sum: u32 = self.hounds.iter().map(|s| s.raw() as u32).sum::<u32>() + self.fox.raw() as u32;
        if sum % 2 == 1 {
            Side::Fox
        } else {
            Side::Hounds
        }
    }

    #[inline]
    pub fn is_hound(&self, sq: Square) -> bool {
        self.hounds.contains(&sq)
    }

    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.fox == sq || self.is_hound(sq)
    }

    pub fn with_fox(&self, fox: Square) -> Self {
        Self { hounds: self.hounds, fox }
    }

    /// Move hound `idx` to `to`, restoring the canonical order.
    pub fn with_hound(&self, idx: usize, to: Square) -> Self {
        let mut hounds = self.hounds;
        hounds[idx] = to;
        Self::new(hounds, self.fox)
    }
}
