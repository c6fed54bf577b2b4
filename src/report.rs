//! Text output: board diagrams and the histogram of solved values.

use std::fmt;

use crate::codec::{decode, encode, PositionIndex, POSITION_COUNT};
use crate::position::Position;
use crate::solve::value::{Eval, ValueTable, EVAL_SPAN, INFINITY};
use crate::solve::SolveError;

const SEPARATOR: &str = "+---+---+---+---+---+---+---+---+";

/// An 8x8 drawing of a position, top row first.
#[derive(Copy, Clone, Debug)]
pub struct Diagram {
    pos: Position,
}

impl Diagram {
    pub fn new(pos: Position) -> Self {
        Self { pos }
    }

    /// Decode `index`, checking that it re-encodes to itself.
    pub fn from_index(index: PositionIndex) -> Result<Self, SolveError> {
        let pos = decode(index);
        let back = encode(&pos);
        if back != index {
            return Err(SolveError::InvariantViolated {
                check: "codec round-trip",
                expected: index as i64,
                observed: back as i64,
            });
        }
        Ok(Self::new(pos))
    }

    fn cell(&self, raw: u8) -> char {
        if self.pos.fox().raw() == raw {
            'f'
        } else if self.pos.hounds().iter().any(|h| h.raw() == raw) {
            'h'
        } else {
            ' '
        }
    }
}

impl fmt::Display for Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SEPARATOR}")?;
        for row in (0..8u8).rev() {
            for col in 0..8u8 {
                write!(f, "| {} ", self.cell(row * 8 + col))?;
            }
            writeln!(f, "|")?;
            writeln!(f, "{SEPARATOR}")?;
        }
        Ok(())
    }
}

/// Count of indices per value in `-INFINITY..=INFINITY`.
#[derive(Clone, Debug)]
pub struct Histogram {
    counts: [u32; EVAL_SPAN],
}

impl Histogram {
    pub fn from_table(table: &ValueTable) -> Self {
        let mut counts = [0u32; EVAL_SPAN];
        for &v in table.as_slice() {
            counts[(v as i16 + INFINITY as i16) as usize] += 1;
        }
        Self { counts }
    }

    pub fn count(&self, value: Eval) -> u32 {
        if !(-INFINITY..=INFINITY).contains(&value) {
            return 0;
        }
        self.counts[(value as i16 + INFINITY as i16) as usize]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// `(value, count)` pairs from `-INFINITY` upward.
    pub fn iter(&self) -> impl Iterator<Item = (Eval, u32)> + '_ {
        (-INFINITY..=INFINITY).zip(self.counts.iter().copied())
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (value, count) in self.iter() {
            writeln!(f, "eval {value:2} has {count:7} positions out of {POSITION_COUNT}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_index_renders_hounds_on_the_bottom_row() {
        let text = Diagram::from_index(0).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 17);
        assert!(lines.iter().step_by(2).all(|l| *l == SEPARATOR));
        // Bottom row is square 0..8, second row from the bottom 8..16.
        assert_eq!(lines[15], "| h |   | h |   | h |   | h |   |");
        assert_eq!(lines[13], "|   | f |   |   |   |   |   |   |");
        assert_eq!(lines[1], "|   |   |   |   |   |   |   |   |");
    }

    #[test]
    fn histogram_buckets_every_value() {
        let mut table = ValueTable::try_new("test", "value_table").unwrap();
        table.set(0, -INFINITY);
        table.set(1, INFINITY);
        table.set(2, -7);
        table.set(3, -7);
        let hist = Histogram::from_table(&table);
        assert_eq!(hist.count(-INFINITY), 1);
        assert_eq!(hist.count(INFINITY), 1);
        assert_eq!(hist.count(-7), 2);
        assert_eq!(hist.count(0), POSITION_COUNT - 4);
        assert_eq!(table.count_unresolved(), POSITION_COUNT - 4);
        assert_eq!(hist.total(), POSITION_COUNT as u64);
    }

    #[test]
    #[should_panic]
    fn histogram_rejects_values_past_the_bound() {
        let mut table = ValueTable::try_new("test", "value_table").unwrap();
        table.set(5, INFINITY + 1);
        Histogram::from_table(&table);
    }
}
