//! User-facing output for the CLI.
//!
//! Results go to stdout; failures go to stderr, colorized when stderr is a
//! terminal (or when forced with `--color always`).

use crate::cli::args::ColorMode;
use crate::error::{render_error_chain, GoldenError};
use difference::{Changeset, Difference};
use miette::Diagnostic;
use std::io::Write;
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Maps the `--color` flag to a termcolor choice for stderr.
pub fn stderr_color_choice(mode: ColorMode) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if atty::is(atty::Stream::Stderr) => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Prints a one-line success summary to stdout.
pub fn print_pass(path: &Path, updated: bool) {
    let verb = if updated { "updated" } else { "ok" };
    println!("{}: {}", verb, path.display());
}

/// Prints a comparison failure, with a line diff for mismatches.
pub fn print_failure(err: &GoldenError, choice: ColorChoice) {
    let mut stderr = StandardStream::stderr(choice);
    let _ = write_failure(&mut stderr, err);
    let _ = stderr.reset();
}

/// Writes the failure report to any color-capable sink.
pub fn write_failure<W: WriteColor>(out: &mut W, err: &GoldenError) -> std::io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(out, "FAIL")?;
    out.reset()?;
    writeln!(out, ": {}", render_error_chain(err))?;

    if let GoldenError::Mismatch {
        expected, actual, ..
    } = err
    {
        let expected = String::from_utf8_lossy(expected);
        let actual = String::from_utf8_lossy(actual);
        let changeset = Changeset::new(&expected, &actual, "\n");
        writeln!(out, "--- golden\n+++ actual")?;
        write_diff(out, &changeset.diffs)?;
    }

    if let Some(help) = err.help() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "help")?;
        out.reset()?;
        writeln!(out, ": {}", help)?;
    }
    Ok(())
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_diff<W: WriteColor>(out: &mut W, diffs: &[Difference]) -> std::io::Result<()> {
    for diff in diffs {
        match diff {
            Difference::Same(ref x) => {
                out.reset()?;
                write_lines(out, ' ', x)?;
            }
            Difference::Add(ref x) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write_lines(out, '+', x)?;
            }
            Difference::Rem(ref x) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write_lines(out, '-', x)?;
            }
        }
    }
    out.reset()
}

// A single diff chunk can span several lines.
fn write_lines<W: Write>(out: &mut W, marker: char, chunk: &str) -> std::io::Result<()> {
    for line in chunk.split('\n') {
        writeln!(out, "{}{}", marker, line)?;
    }
    Ok(())
}
