//! Midpi CLI
//!
//! Prints the midpoint-rule approximation of π and the seconds it took.

use clap::{Arg, ArgAction, Command};
use midpi_core::{NUM_STEPS, StepCount};
use midpi_integrator::{Integrator, Run, run_timed};
use std::io::{self, Write};
use std::process;
use tracing::Level;

fn main() {
    let matches = Command::new("midpi")
        .version("0.1.0")
        .about("Approximate pi with the midpoint rule and time the computation")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log progress to stderr (repeat for more detail)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match execute(NUM_STEPS, &mut out) {
        Ok(_) => process::exit(0),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn log_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn init_logging(verbosity: u8) {
    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(log_level(verbosity))
        .with_target(false)
        .init();
}

fn execute<W: Write>(steps: i64, out: &mut W) -> Result<Run, anyhow::Error> {
    let steps = StepCount::try_from(steps)?;
    let integrator = Integrator::new(steps);
    let run = run_timed(&integrator, out)?;
    Ok(run)
}
