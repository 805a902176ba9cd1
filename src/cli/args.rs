//! Command-line arguments for `golden-assert`.
//!
//! Uses `clap` derive. The update switch also reads `UPDATE_GOLDEN`, so the
//! same environment that drives test suites drives the binary.

use crate::config::{parse_flag, DEFAULT_TESTDATA_DIR, UPDATE_ENV_VAR};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "golden-assert",
    version,
    about = "Compare output against a golden file, or regenerate it."
)]
pub struct GoldenArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Log each comparison step to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// When to colorize diagnostics.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare input against a golden file.
    Check {
        #[command(flatten)]
        target: Target,

        /// Rewrite the golden file with the input before comparing.
        #[arg(long, env = UPDATE_ENV_VAR, value_parser = parse_flag)]
        update: bool,
    },
    /// Rewrite a golden file from input, then verify it.
    Update {
        #[command(flatten)]
        target: Target,
    },
}

/// Which golden file to use and where the actual output comes from.
#[derive(Debug, Args)]
pub struct Target {
    /// Golden filename; relative names resolve under the testdata directory.
    #[arg(required = true)]
    pub golden: PathBuf,

    /// File holding the actual output. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory that relative golden filenames resolve under.
    #[arg(long, default_value = DEFAULT_TESTDATA_DIR)]
    pub testdata_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}
