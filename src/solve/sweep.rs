//! Value iteration.
//!
//! Every index starts at 0. Terminal positions are fixed at `±INFINITY` during
//! initialization; every later sweep recomputes each index still at 0 from
//! its successors' current values. A nonzero value is final and never
//! revisited, so the number of unresolved indices can only shrink.

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::board::Side;
use crate::codec::{decode, encode, PositionIndex, POSITION_COUNT};
use crate::position::Position;
use crate::rules::movegen::successors;
use crate::rules::terminal::classify;

use super::value::{terminal_eval, Eval, ValueTable, INFINITY};
use super::SolveError;

pub const DEFAULT_MAX_SWEEPS: u32 = 1000;

/// How a sweep reads the values it is rewriting.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum UpdateDiscipline {
    /// Single-threaded, ascending index order; later indices see values
    /// written earlier in the same sweep.
    #[default]
    InPlace,
    /// Every index is evaluated against the previous sweep's table, in
    /// parallel. Order independent, may need more sweeps.
    DoubleBuffered,
}

#[derive(Clone, Debug)]
pub struct SolveConfig {
    pub max_sweeps: u32,
    pub discipline: UpdateDiscipline,
    /// Stop once a whole sweep resolves nothing. The table cannot change after that.
    pub stop_when_stalled: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_sweeps: DEFAULT_MAX_SWEEPS,
            discipline: UpdateDiscipline::InPlace,
            stop_when_stalled: true,
        }
    }
}

impl SolveConfig {
    pub fn with_max_sweeps(mut self, max_sweeps: u32) -> Self {
        self.max_sweeps = max_sweeps;
        self
    }

    pub fn with_discipline(mut self, discipline: UpdateDiscipline) -> Self {
        self.discipline = discipline;
        self
    }

    pub fn with_stop_when_stalled(mut self, stop: bool) -> Self {
        self.stop_when_stalled = stop;
        self
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SweepStats {
    /// 1-based sweep number.
    pub sweep: u32,
    /// Indices that became nonzero during this sweep.
    pub resolved: u32,
    /// Indices still at 0 after this sweep.
    pub remaining: u32,
}

#[derive(Clone, Debug)]
pub struct Solution {
    pub table: ValueTable,
    /// Unresolved count right after initialization.
    pub initial_remaining: u32,
    pub sweeps: Vec<SweepStats>,
}

impl Solution {
    pub fn remaining(&self) -> u32 {
        self.sweeps
            .last()
            .map_or(self.initial_remaining, |s| s.remaining)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    /// Indices left at 0: drawn, or not resolvable within the budget.
    pub fn unresolved(&self) -> impl Iterator<Item = PositionIndex> + '_ {
        self.table.indices_with(0)
    }
}

/// Value assigned before any sweep: `±INFINITY` for game-over positions, else 0.
pub fn initial_eval(pos: &Position) -> Eval {
    classify(pos).map_or(0, terminal_eval)
}

/// Back up one position from its successors' values.
///
/// The mover's candidate starts at its worst outcome. The fox takes any
/// successor value strictly below the candidate, the hounds any strictly
/// above, and the adopted value moves one step toward 0 (`v - sign(v)`).
pub fn backed_up_eval(pos: &Position, lookup: impl Fn(PositionIndex) -> Eval) -> Eval {
    let side = pos.side_to_move();
    let mut best = match side {
        Side::Fox => INFINITY,
        Side::Hounds => -INFINITY,
    };
    for succ in successors(pos).iter() {
        let v = lookup(encode(succ));
        let better = match side {
            Side::Fox => v < best,
            Side::Hounds => v > best,
        };
        if better {
            best = v - v.signum();
        }
    }
    best
}

/// Solve every position under `config`.
///
/// Fails only if the value table (or the second buffer) cannot be allocated.
pub fn solve(config: &SolveConfig) -> Result<Solution, SolveError> {
    let mut table = ValueTable::try_new("solve_init", "value_table")?;
    let initial_remaining = initialize(&mut table);
    info!(
        "initialized {POSITION_COUNT} positions: {} terminal, {initial_remaining} undetermined",
        POSITION_COUNT - initial_remaining
    );

    let mut scratch = match config.discipline {
        UpdateDiscipline::InPlace => None,
        UpdateDiscipline::DoubleBuffered => {
            Some(ValueTable::try_new("solve_init", "sweep_buffer")?)
        }
    };

    let mut sweeps: Vec<SweepStats> = Vec::new();
    let mut remaining = initial_remaining;
    let mut sweep: u32 = 0;

    while remaining > 0 && sweep < config.max_sweeps {
        sweep += 1;
        info!("sweep {sweep}, {remaining}/{POSITION_COUNT} remaining");

        let next_remaining = match scratch.as_mut() {
            None => sweep_in_place(&mut table),
            Some(buffer) => sweep_double_buffered(&mut table, buffer),
        };
        let stats = SweepStats {
            sweep,
            resolved: remaining - next_remaining,
            remaining: next_remaining,
        };
        sweeps.push(stats);
        remaining = next_remaining;

        if stats.resolved == 0 && config.stop_when_stalled {
            debug!("sweep {sweep} resolved nothing, table is at its fixed point");
            break;
        }
    }

    if remaining > 0 {
        warn!("{remaining} positions unresolved after {sweep} sweeps");
    } else {
        info!("all positions resolved after {sweep} sweeps");
    }

    Ok(Solution {
        table,
        initial_remaining,
        sweeps,
    })
}

/// Seed terminal values. Returns the number of indices left at 0.
fn initialize(table: &mut ValueTable) -> u32 {
    let mut remaining = 0;
    for index in 0..POSITION_COUNT {
        let v = initial_eval(&decode(index));
        table.set(index, v);
        if v == 0 {
            remaining += 1;
        }
    }
    remaining
}

fn sweep_in_place(table: &mut ValueTable) -> u32 {
    let mut remaining = 0;
    for index in 0..POSITION_COUNT {
        if table.get(index) != 0 {
            continue;
        }
        let v = backed_up_eval(&decode(index), |i| table.get(i));
        table.set(index, v);
        if v == 0 {
            remaining += 1;
        }
    }
    remaining
}

fn sweep_double_buffered(table: &mut ValueTable, next: &mut ValueTable) -> u32 {
    let prev = table.as_slice();
    next.as_mut_slice()
        .par_iter_mut()
        .enumerate()
        .for_each(|(i, slot)| {
            *slot = match prev[i] {
                0 => backed_up_eval(&decode(i as PositionIndex), |j| prev[j as usize]),
                v => v,
            };
        });
    table.swap(next);
    table.count_unresolved()
}
