mod celestial;
mod cli;
mod constants;
mod error;
mod menu;
mod physics;

use std::error::Error;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use celestial::{normalize_name, planet_names};
use cli::{Args, Command};
use menu::{bmi_line, escape_line, facts_lines, weight_line, Console};
use physics::{calculate_bmi, escape_velocity_ms, planet_facts, weight_on_planet};

/// Run a single subcommand and print its result lines.
fn run_command<W: Write>(command: &Command, out: &mut W) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Bmi { weight, height } => {
            let bmi = calculate_bmi(*weight, *height)?;
            writeln!(out, "{}", bmi_line(bmi))?;
        }
        Command::Weight { weight, planet } => {
            let w = weight_on_planet(*weight, planet)?;
            writeln!(out, "{}", weight_line(&normalize_name(planet), w))?;
        }
        Command::Escape { planet } => {
            let v = escape_velocity_ms(planet)?;
            writeln!(out, "{}", escape_line(&normalize_name(planet), v))?;
        }
        Command::Facts { planet } => {
            let (day, year) = planet_facts(planet)?;
            for line in facts_lines(&normalize_name(planet), day, year) {
                writeln!(out, "{}", line)?;
            }
        }
        Command::Planets => {
            for name in planet_names() {
                writeln!(out, "{}", name)?;
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match &args.command {
        Some(command) => run_command(command, &mut io::stdout().lock()),
        None => {
            let stdin = io::stdin();
            Console::new(stdin.lock(), io::stdout().lock())
                .run()
                .map_err(Into::into)
        }
    };

    report(result, &mut io::stderr().lock())
}

/// Print a failure exactly once on `err` and pick the exit status.
fn report<E: Write>(result: Result<(), Box<dyn Error>>, err: &mut E) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("command failed: {}", e);
            // stderr itself failing leaves nothing to report to
            let _ = writeln!(err, "{}", e);
            ExitCode::FAILURE
        }
    }
}
