//! Golden-file comparison.
//!
//! Every comparison follows the same protocol: run the update step (a no-op
//! unless update mode is on), read the golden file back from disk, then compare
//! it byte-for-byte with the actual output. Line endings are normalized only in
//! what gets written, never in the actual bytes being compared.

use crate::config::GoldenConfig;
use crate::error::{render_error_chain, GoldenError};
use crate::reporter::Reporter;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

// ============================================================================
// COMPARATOR
// ============================================================================

/// Compares actual output against golden files.
#[derive(Debug, Clone, Default)]
pub struct GoldenComparator {
    config: GoldenConfig,
}

impl GoldenComparator {
    pub fn new(config: GoldenConfig) -> Self {
        Self { config }
    }

    /// Comparator driven by the process-wide update flag.
    pub fn global() -> Self {
        Self::new(GoldenConfig::global())
    }

    pub fn config(&self) -> &GoldenConfig {
        &self.config
    }

    /// Asserts that `actual` matches the golden file `filename`.
    ///
    /// Failures go to `reporter`; nothing is returned.
    #[track_caller]
    pub fn assert_bytes<R>(&self, reporter: &mut R, actual: &[u8], filename: impl AsRef<Path>)
    where
        R: Reporter + ?Sized,
    {
        reporter.helper();
        if let Err(err) = self.compare(actual, filename) {
            reporter.fatal(&render_error_chain(&err));
        }
    }

    /// String form of [`assert_bytes`](Self::assert_bytes).
    #[track_caller]
    pub fn assert_string<R>(&self, reporter: &mut R, actual: &str, filename: impl AsRef<Path>)
    where
        R: Reporter + ?Sized,
    {
        self.assert_bytes(reporter, actual.as_bytes(), filename);
    }

    /// Resolves a golden filename. Absolute paths are used as given.
    pub fn resolve_path(&self, filename: impl AsRef<Path>) -> PathBuf {
        let filename = filename.as_ref();
        if filename.is_absolute() {
            filename.to_path_buf()
        } else {
            self.config.testdata_dir.join(filename)
        }
    }

    /// Runs the update-then-read protocol and reports the outcome as a value.
    pub fn compare(&self, actual: &[u8], filename: impl AsRef<Path>) -> Result<(), GoldenError> {
        let path = self.resolve_path(filename);
        let updated = self.update(&path, actual)?;

        let expected = fs::read(&path).map_err(|source| {
            if updated {
                GoldenError::ReadBack {
                    path: path.clone(),
                    source,
                }
            } else {
                GoldenError::Read {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        tracing::debug!(path = %path.display(), bytes = expected.len(), "read golden file");

        if expected != actual {
            return Err(GoldenError::Mismatch {
                path,
                expected,
                actual: actual.to_vec(),
            });
        }
        Ok(())
    }

    /// Writes the normalized actual bytes when update mode is on.
    ///
    /// Returns whether a write happened.
    fn update(&self, path: &Path, actual: &[u8]) -> Result<bool, GoldenError> {
        if !self.config.update {
            return Ok(false);
        }
        let normalized = normalize(actual);
        write_golden(path, &normalized).map_err(|source| GoldenError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = normalized.len(), "updated golden file");
        Ok(true)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Replaces every CR LF pair with a single LF. Other bytes are untouched.
pub fn normalize(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.iter().copied().peekable();
    while let Some(byte) = bytes.next() {
        if byte == b'\r' && bytes.peek() == Some(&b'\n') {
            continue;
        }
        out.push(byte);
    }
    out
}

/// Creates or truncates `path`, readable by everyone and writable by owner and group (0666 before umask).
fn write_golden(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.flush()
}
