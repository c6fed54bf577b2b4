use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{error, info};

use fox_hounds::check::self_test;
use fox_hounds::report::{Diagram, Histogram};
use fox_hounds::solve::sweep::{solve, SolveConfig, UpdateDiscipline, DEFAULT_MAX_SWEEPS};
use fox_hounds::solve::value::Eval;
use fox_hounds::solve::SolveError;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Discipline {
    InPlace,
    DoubleBuffered,
}

impl From<Discipline> for UpdateDiscipline {
    fn from(d: Discipline) -> Self {
        match d {
            Discipline::InPlace => UpdateDiscipline::InPlace,
            Discipline::DoubleBuffered => UpdateDiscipline::DoubleBuffered,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve every Fox and Hounds position", long_about = None)]
struct Args {
    /// Sweep budget after initialization.
    #[arg(long, default_value_t = DEFAULT_MAX_SWEEPS)]
    max_sweeps: u32,

    #[arg(long, value_enum, default_value_t = Discipline::InPlace)]
    discipline: Discipline,

    /// Keep sweeping up to the budget even after a sweep resolves nothing.
    #[arg(long)]
    no_stall_stop: bool,

    /// Draw every board whose solved value equals this.
    #[arg(long, allow_negative_numbers = true)]
    show_eval: Option<Eval>,

    /// Draw every board left unresolved.
    #[arg(long)]
    show_unresolved: bool,

    /// Maximum number of boards drawn per listing.
    #[arg(long, default_value_t = 20)]
    board_limit: usize,
}

fn print_boards(indices: impl Iterator<Item = u32>, limit: usize) -> Result<(), SolveError> {
    for index in indices.take(limit) {
        println!("{}\n", Diagram::from_index(index)?);
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), SolveError> {
    self_test()?;

    let config = SolveConfig::default()
        .with_max_sweeps(args.max_sweeps)
        .with_discipline(args.discipline.into())
        .with_stop_when_stalled(!args.no_stall_stop);
    info!("solving with {config:?}");

    let solution = solve(&config)?;

    if args.show_unresolved {
        print_boards(solution.unresolved(), args.board_limit)?;
    }
    if let Some(value) = args.show_eval {
        print_boards(solution.table.indices_with(value), args.board_limit)?;
    }

    print!("{}", Histogram::from_table(&solution.table));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
