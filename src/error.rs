//! Error types for golden-file comparison and configuration.
//!
//! Every failure an assertion can hit is a variant of [`GoldenError`], so
//! callers of [`GoldenComparator::compare`](crate::GoldenComparator::compare)
//! can match on the kind instead of parsing messages. The `assert_*` entry
//! points flatten these into a single message with [`render_error_chain`].

use miette::Diagnostic;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// COMPARISON ERRORS
// ============================================================================

/// A failed golden-file assertion.
#[derive(Error, Diagnostic, Debug)]
pub enum GoldenError {
    /// The golden file could not be opened or read.
    #[error("unable to read testdata {}", .path.display())]
    #[diagnostic(
        code(golden::read),
        help("record the golden file by re-running with UPDATE_GOLDEN=1")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The golden file could not be written during an update.
    #[error("unable to write golden file {}", .path.display())]
    #[diagnostic(
        code(golden::write),
        help("golden files are not created inside missing directories; check that the parent exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The golden file was written but reading it back failed.
    #[error("unable to read back golden file {} after updating it", .path.display())]
    #[diagnostic(code(golden::read_back))]
    ReadBack {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The golden file was read but its bytes differ from the actual output.
    #[error(
        "does not match golden file {}\n\nWANT:\n{}\n\nGOT:\n{}\n",
        .path.display(),
        quoted(.expected),
        quoted(.actual)
    )]
    #[diagnostic(
        code(golden::mismatch),
        help("if the new output is correct, re-run with UPDATE_GOLDEN=1 to accept it")
    )]
    Mismatch {
        path: PathBuf,
        expected: Vec<u8>,
        actual: Vec<u8>,
    },
}

impl GoldenError {
    /// The resolved golden file path this error refers to.
    pub fn path(&self) -> &Path {
        match self {
            GoldenError::Read { path, .. }
            | GoldenError::Write { path, .. }
            | GoldenError::ReadBack { path, .. }
            | GoldenError::Mismatch { path, .. } => path,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, GoldenError::Mismatch { .. })
    }
}

// ============================================================================
// CONFIGURATION ERRORS
// ============================================================================

/// Problems with the process-wide update switch.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected one of 1, true, yes, on, 0, false, no, off")]
    #[diagnostic(code(golden::config::invalid_flag))]
    InvalidFlag { var: &'static str, value: String },

    #[error("update mode was already initialized to {current}")]
    #[diagnostic(
        code(golden::config::already_initialized),
        help("set update mode once, before any comparison runs")
    )]
    AlreadyInitialized { current: bool },
}

// ============================================================================
// FORMATTING HELPERS
// ============================================================================

/// Displays a byte sequence as a double-quoted, escaped literal.
///
/// Valid UTF-8 keeps printable characters and escapes control characters
/// (`"hello\n"`). Anything else falls back to ASCII escaping with `\xNN`.
#[derive(Debug, Clone, Copy)]
pub struct Quoted<'a>(pub &'a [u8]);

pub fn quoted(bytes: &[u8]) -> Quoted<'_> {
    Quoted(bytes)
}

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.0) {
            Ok(text) => write!(f, "{:?}", text),
            Err(_) => write!(f, "\"{}\"", self.0.escape_ascii()),
        }
    }
}

/// Flattens an error and its `source()` chain into one line-joined message.
pub fn render_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut cause = error.source();
    while let Some(inner) = cause {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        cause = inner.source();
    }
    message
}
