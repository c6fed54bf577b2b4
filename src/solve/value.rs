use rayon::prelude::*;

use crate::codec::{encode, PositionIndex, POSITION_COUNT};
use crate::position::Position;
use crate::rules::terminal::Terminal;

use super::SolveError;

/// Signed outcome: positive means the hounds win, negative the fox, 0 unknown.
///
/// Magnitude [`INFINITY`] marks a terminal win; each ply further away from it
/// loses one point of magnitude.
pub type Eval = i8;

pub const INFINITY: Eval = 50;

/// Number of distinct values in `-INFINITY..=INFINITY`.
pub const EVAL_SPAN: usize = 2 * INFINITY as usize + 1;

#[inline]
pub fn terminal_eval(t: Terminal) -> Eval {
    match t {
        Terminal::HoundsWin => INFINITY,
        Terminal::FoxWins => -INFINITY,
    }
}

/// One value per [`PositionIndex`].
#[derive(Clone, Debug)]
pub struct ValueTable {
    values: Vec<Eval>,
}

impl ValueTable {
    /// Allocate a zeroed table covering every index, surfacing allocation failure.
    pub fn try_new(stage: &'static str, structure: &'static str) -> Result<Self, SolveError> {
        let len = POSITION_COUNT as usize;
        let mut values: Vec<Eval> = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| SolveError::AllocationFailed {
                stage,
                structure,
                requested: len,
            })?;
        values.resize(len, 0);
        Ok(Self { values })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: PositionIndex) -> Eval {
        self.values[index as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, index: PositionIndex, value: Eval) {
        self.values[index as usize] = value;
    }

    pub fn value_of(&self, pos: &Position) -> Eval {
        self.get(encode(pos))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Eval] {
        &self.values
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Eval] {
        &mut self.values
    }

    pub(crate) fn swap(&mut self, other: &mut ValueTable) {
        std::mem::swap(&mut self.values, &mut other.values);
    }

    pub fn count_unresolved(&self) -> u32 {
        self.values.par_iter().filter(|&&v| v == 0).count() as u32
    }

    /// Indices currently holding `value`, ascending.
    pub fn indices_with(&self, value: Eval) -> impl Iterator<Item = PositionIndex> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(move |&(_, &v)| v == value)
            .map(|(i, _)| i as PositionIndex)
    }
}
