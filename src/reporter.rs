//! The failure-reporting capability consumed by the comparator.
//!
//! The comparator never returns errors from its `assert_*` methods; it hands a
//! formatted message to a [`Reporter`] instead. Two adapters are provided:
//! [`PanicReporter`] for ordinary `#[test]` functions and [`RecordingReporter`]
//! for code that wants to inspect failures without unwinding.

/// Receives assertion failures.
pub trait Reporter {
    /// Marks the calling assertion as a helper frame.
    ///
    /// Failure attribution should point at the test that called the
    /// assertion, not at code inside this crate.
    fn helper(&mut self);

    /// Reports a fatal assertion failure with a fully formatted message.
    fn fatal(&mut self, message: &str);
}

// ============================================================================
// ADAPTERS
// ============================================================================

/// Panics on failure, which fails the surrounding `#[test]`.
///
/// Combined with `#[track_caller]` on the assertion entry points, the panic
/// location is the test's own call site.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn helper(&mut self) {}

    #[track_caller]
    fn fatal(&mut self, message: &str) {
        panic!("{}", message);
    }
}

/// Collects failures instead of aborting.
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    helper_calls: usize,
    failures: Vec<String>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.failures.last().map(String::as_str)
    }

    /// How many times an assertion marked itself as a helper.
    pub fn helper_calls(&self) -> usize {
        self.helper_calls
    }
}

impl Reporter for RecordingReporter {
    fn helper(&mut self) {
        self.helper_calls += 1;
    }

    fn fatal(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}
