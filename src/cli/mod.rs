//! The `golden-assert` command-line interface.
//!
//! Reads actual output from a file or stdin and runs it through a
//! [`GoldenComparator`] built from the command-line flags.

use crate::cli::args::{Command, GoldenArgs, Target};
use crate::comparator::GoldenComparator;
use crate::config::GoldenConfig;
use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};
use std::fs;
use std::io::Read;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> miette::Result<ExitCode> {
    let args = GoldenArgs::parse();
    init_logging(args.verbose);
    execute(args)
}

/// Runs parsed arguments. Comparison failures map to exit code 1; I/O on the
/// input side surfaces as an error.
pub fn execute(args: GoldenArgs) -> miette::Result<ExitCode> {
    let (target, update) = match args.command {
        Command::Check { target, update } => (target, update),
        Command::Update { target } => (target, true),
    };

    let actual = read_input(&target)?;
    let comparator = GoldenComparator::new(
        GoldenConfig::new()
            .with_update(update)
            .with_testdata_dir(&target.testdata_dir),
    );
    let path = comparator.resolve_path(&target.golden);
    tracing::debug!(path = %path.display(), update, bytes = actual.len(), "comparing");

    match comparator.compare(&actual, &target.golden) {
        Ok(()) => {
            output::print_pass(&path, update);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            output::print_failure(&err, output::stderr_color_choice(args.color));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(target: &Target) -> miette::Result<Vec<u8>> {
    match &target.input {
        Some(path) => fs::read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("unable to read input {}", path.display())),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .into_diagnostic()
                .wrap_err("unable to read input from stdin")?;
            Ok(buf)
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}
