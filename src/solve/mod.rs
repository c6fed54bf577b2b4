//! Retrograde value iteration over the complete position space.
//!
//! - [`value`]: outcome values and the flat table indexed by [`crate::codec::PositionIndex`].
//! - [`sweep`]: initialization from terminal positions and repeated backing-up sweeps.

use std::fmt;

pub mod sweep;
pub mod value;

#[derive(Debug)]
/// Structured errors returned by the solver and its self-checks.
pub enum SolveError {
    /// A `try_reserve` allocation failed for a large structure.
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
        requested: usize,
    },
    /// A programmer-error guard tripped.
    InvariantViolated {
        check: &'static str,
        expected: i64,
        observed: i64,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::AllocationFailed {
                stage,
                structure,
                requested,
            } => write!(
                f,
                "allocation failed at {stage} for {structure} ({requested} entries)"
            ),
            SolveError::InvariantViolated {
                check,
                expected,
                observed,
            } => write!(
                f,
                "invariant violated: {check} (expected={expected}, observed={observed})"
            ),
        }
    }
}

impl std::error::Error for SolveError {}
