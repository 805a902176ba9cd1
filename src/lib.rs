//! Golden-file assertions for test suites.
//!
//! A golden file is a recorded reference output. An assertion compares the
//! bytes a test produced against that file and fails on any difference. When
//! update mode is on (`UPDATE_GOLDEN=1`), the golden file is first rewritten
//! with the actual output, CR LF line endings collapsed to LF.
//!
//! Relative filenames resolve under `testdata/`; absolute paths are used as
//! given.
//!
//! ```rust,no_run
//! use golden_assert::{assert_golden_str, assert_golden_string, RecordingReporter};
//!
//! // Panics at this line on mismatch.
//! assert_golden_str("hello\n", "greeting.golden");
//!
//! // Or collect the failure instead.
//! let mut reporter = RecordingReporter::new();
//! assert_golden_string(&mut reporter, "hello\n", "greeting.golden");
//! assert!(!reporter.failed());
//! ```

pub use crate::comparator::{normalize, GoldenComparator};
pub use crate::config::{
    set_update_mode, update_mode, GoldenConfig, DEFAULT_TESTDATA_DIR, UPDATE_ENV_VAR,
};
pub use crate::error::{render_error_chain, ConfigError, GoldenError};
pub use crate::reporter::{PanicReporter, RecordingReporter, Reporter};

use std::path::Path;

pub mod cli;
pub mod comparator;
pub mod config;
pub mod error;
pub mod reporter;

/// Asserts `actual` against `filename` using the process-wide update flag.
#[track_caller]
pub fn assert_golden_bytes<R>(reporter: &mut R, actual: &[u8], filename: impl AsRef<Path>)
where
    R: Reporter + ?Sized,
{
    GoldenComparator::global().assert_bytes(reporter, actual, filename);
}

/// String form of [`assert_golden_bytes`].
#[track_caller]
pub fn assert_golden_string<R>(reporter: &mut R, actual: &str, filename: impl AsRef<Path>)
where
    R: Reporter + ?Sized,
{
    GoldenComparator::global().assert_string(reporter, actual, filename);
}

/// Panics with the failure message if `actual` does not match the golden file.
#[track_caller]
pub fn assert_golden(actual: impl AsRef<[u8]>, filename: impl AsRef<Path>) {
    assert_golden_bytes(&mut PanicReporter, actual.as_ref(), filename);
}

/// Panicking string form of [`assert_golden_string`].
#[track_caller]
pub fn assert_golden_str(actual: &str, filename: impl AsRef<Path>) {
    assert_golden_string(&mut PanicReporter, actual, filename);
}
