use fox_hounds::codec::{decode, encode, POSITION_COUNT};
use fox_hounds::position::Position;
use fox_hounds::report::Histogram;
use fox_hounds::solve::sweep::{
    backed_up_eval, initial_eval, solve, Solution, SolveConfig, UpdateDiscipline,
};
use fox_hounds::solve::value::INFINITY;

fn assert_bounded_and_counted(solution: &Solution) {
    let table = &solution.table;
    assert_eq!(table.len(), POSITION_COUNT as usize);
    assert!(table.as_slice().iter().all(|v| (-INFINITY..=INFINITY).contains(v)));

    let hist = Histogram::from_table(table);
    assert_eq!(hist.total(), POSITION_COUNT as u64);
    assert_eq!(hist.count(0), solution.remaining());
    assert_eq!(solution.unresolved().count() as u32, solution.remaining());
}

fn assert_monotonic(solution: &Solution) {
    let mut prev = solution.initial_remaining;
    for (i, s) in solution.sweeps.iter().enumerate() {
        assert_eq!(s.sweep as usize, i + 1);
        assert!(s.remaining <= prev, "sweep {} grew the unresolved set", s.sweep);
        assert_eq!(prev - s.remaining, s.resolved);
        prev = s.remaining;
    }
}

fn assert_terminals_untouched(solution: &Solution) {
    for index in 0..POSITION_COUNT {
        let init = initial_eval(&decode(index));
        if init != 0 {
            assert_eq!(solution.table.get(index), init, "terminal {index} was rewritten");
        }
    }
}

#[test]
fn in_place_solve_reaches_a_fixed_point() {
    let config = SolveConfig::default();
    let solution = solve(&config).unwrap();

    assert_bounded_and_counted(&solution);
    assert_monotonic(&solution);
    assert_terminals_untouched(&solution);
    assert!(solution.sweeps.len() as u32 <= config.max_sweeps);
    assert!(solution.initial_remaining < POSITION_COUNT);

    let escaped = Position::from_raw([0, 2, 4, 6], 63).unwrap();
    assert_eq!(solution.table.value_of(&escaped), -INFINITY);

    // Stopping early means one more sweep would change nothing.
    if !solution.is_complete() && (solution.sweeps.len() as u32) < config.max_sweeps {
        let table = &solution.table;
        for index in solution.unresolved() {
            let v = backed_up_eval(&decode(index), |i| table.get(i));
            assert_eq!(v, 0, "unresolved {index} could still move");
        }
    }

    // Resolved non-terminal values agree in sign with some successor.
    for index in (0..POSITION_COUNT).step_by(101) {
        let pos = decode(index);
        let v = solution.table.get(index);
        if v == 0 || initial_eval(&pos) != 0 {
            continue;
        }
        let succ = fox_hounds::rules::movegen::successors(&pos);
        if succ.is_empty() {
            continue;
        }
        let any_same_sign = succ
            .iter()
            .any(|n| solution.table.get(encode(n)).signum() == v.signum());
        assert!(any_same_sign, "index {index} value {v} has no supporting successor");
    }
}

#[test]
fn double_buffered_sweeps_keep_the_invariants() {
    let config = SolveConfig::default()
        .with_discipline(UpdateDiscipline::DoubleBuffered)
        .with_max_sweeps(3);
    let solution = solve(&config).unwrap();

    assert!(solution.sweeps.len() <= 3);
    assert_bounded_and_counted(&solution);
    assert_monotonic(&solution);
    assert_terminals_untouched(&solution);
}

#[test]
fn zero_budget_leaves_only_terminals() {
    let solution = solve(&SolveConfig::default().with_max_sweeps(0)).unwrap();
    assert!(solution.sweeps.is_empty());
    assert_eq!(solution.remaining(), solution.initial_remaining);
    assert_bounded_and_counted(&solution);
    assert!(solution
        .table
        .as_slice()
        .iter()
        .all(|&v| v == 0 || v.abs() == INFINITY));
}
