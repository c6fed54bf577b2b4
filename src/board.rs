use std::fmt;

/// Number of playable (dark) squares.
pub const PLAYABLE_SLOTS: u8 = 32;

/// First square of the last row. A fox strictly beyond it has reached the far edge.
pub const LAST_ROW_START: u8 = 56;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    Fox,
    Hounds,
}

impl Side {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::Fox => Side::Hounds,
            Side::Hounds => Side::Fox,
        }
    }
}

/// A diagonal step on the 64-square board.
///
/// "Up" increases the square number. The fox may step in all four directions,
/// hounds only down.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Step {
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

impl Step {
    pub const FOX: [Step; 4] = [Step::UpRight, Step::UpLeft, Step::DownRight, Step::DownLeft];
    pub const HOUND: [Step; 2] = [Step::DownRight, Step::DownLeft];

    #[inline]
    pub const fn delta(self) -> i8 {
        match self {
            Step::UpRight => 9,
            Step::UpLeft => 7,
            Step::DownRight => -7,
            Step::DownLeft => -9,
        }
    }
}

/// A playable board square, `0..64` in row-major order.
///
/// Only dark squares exist as values of this type: slot `s` sits at
/// `2 * s + (s / 4) % 2`, so even rows use even columns and odd rows odd columns.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Square(u8);

impl Square {
    /// Square for a playable slot `0..32`.
    #[inline]
    pub const fn from_slot(slot: u8) -> Square {
        debug_assert!(slot < PLAYABLE_SLOTS);
        Square(slot * 2 + (slot / 4) % 2)
    }

    /// Square for a raw board number, if it is on the board and playable.
    pub const fn new(raw: u8) -> Option<Square> {
        if raw >= 64 || (raw / 8) % 2 != raw % 2 {
            None
        } else {
            Some(Square(raw))
        }
    }

    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// The playable slot; the embedding is monotonic so halving inverts it.
    #[inline]
    pub const fn slot(self) -> u8 {
        self.0 / 2
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// The square one diagonal step away, or `None` if the step leaves the board.
    pub fn step(self, step: Step) -> Option<Square> {
        let vertical_ok = match step {
            Step::UpRight | Step::UpLeft => self.0 < LAST_ROW_START,
            Step::DownRight | Step::DownLeft => self.0 > 7,
        };
        let horizontal_ok = match step {
            Step::UpRight | Step::DownRight => self.col() < 7,
            Step::UpLeft | Step::DownLeft => self.col() > 0,
        };
        if vertical_ok && horizontal_ok {
            Some(Square((self.0 as i8 + step.delta()) as u8))
        } else {
            None
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..PLAYABLE_SLOTS).map(Square::from_slot)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
