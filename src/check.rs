//! Startup self-test.

use crate::codec::{decode, encode, FOX_PLACEMENTS, POSITION_COUNT};
use crate::combinatorics::choose;
use crate::solve::SolveError;

fn expect(check: &'static str, expected: i64, observed: i64) -> Result<(), SolveError> {
    if expected == observed {
        Ok(())
    } else {
        Err(SolveError::InvariantViolated {
            check,
            expected,
            observed,
        })
    }
}

/// Cheap checks run before solving; any failure is a programming error.
pub fn self_test() -> Result<(), SolveError> {
    expect("choose(20, 5)", 15504, choose(20, 5) as i64)?;
    expect("choose(32, 4) * 28", POSITION_COUNT as i64, (choose(32, 4) * 28) as i64)?;
    for index in [0, 1, FOX_PLACEMENTS - 1, FOX_PLACEMENTS, POSITION_COUNT - 1] {
        expect("codec round-trip", index as i64, encode(&decode(index)) as i64)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_test_passes() {
        assert!(self_test().is_ok());
    }

    #[test]
    fn mismatch_is_reported() {
        let err = expect("demo", 1, 2).unwrap_err();
        assert_eq!(err.to_string(), "invariant violated: demo (expected=1, observed=2)");
    }
}
