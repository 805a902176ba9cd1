//! Comparator configuration and the process-wide update switch.
//!
//! A [`GoldenConfig`] is an explicit value: tests of the comparator itself
//! build one directly. The crate-root assertion functions instead read a
//! process-wide flag that is set at most once, either explicitly through
//! [`set_update_mode`] or lazily from the `UPDATE_GOLDEN` environment variable.

use crate::error::ConfigError;
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};

/// Directory that relative golden filenames are resolved under.
pub const DEFAULT_TESTDATA_DIR: &str = "testdata";

/// Environment variable that switches update mode on.
pub const UPDATE_ENV_VAR: &str = "UPDATE_GOLDEN";

static UPDATE_MODE: OnceCell<bool> = OnceCell::new();

// ============================================================================
// CONFIG VALUE
// ============================================================================

/// Settings carried by a [`GoldenComparator`](crate::GoldenComparator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenConfig {
    /// Rewrite golden files with the actual output before comparing.
    pub update: bool,
    /// Base directory for relative golden filenames.
    pub testdata_dir: PathBuf,
}

impl Default for GoldenConfig {
    fn default() -> Self {
        Self {
            update: false,
            testdata_dir: PathBuf::from(DEFAULT_TESTDATA_DIR),
        }
    }
}

impl GoldenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_update(mut self, update: bool) -> Self {
        self.update = update;
        self
    }

    pub fn with_testdata_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.testdata_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Builds a config from the environment, rejecting unrecognized flag values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let update = match env::var(UPDATE_ENV_VAR) {
            Ok(value) => parse_flag(&value)?,
            Err(_) => false,
        };
        Ok(Self::default().with_update(update))
    }

    /// Config using the process-wide update flag and the default testdata dir.
    pub fn global() -> Self {
        Self::default().with_update(update_mode())
    }
}

// ============================================================================
// PROCESS-WIDE FLAG
// ============================================================================

/// Sets the process-wide update flag. Only the first call wins.
pub fn set_update_mode(enabled: bool) -> Result<(), ConfigError> {
    UPDATE_MODE
        .set(enabled)
        .map_err(|_| ConfigError::AlreadyInitialized {
            current: update_mode(),
        })?;
    tracing::debug!(enabled, "update mode initialized");
    Ok(())
}

/// Returns the process-wide update flag, reading the environment on first use.
pub fn update_mode() -> bool {
    *UPDATE_MODE.get_or_init(|| match GoldenConfig::from_env() {
        Ok(config) => config.update,
        Err(err) => {
            tracing::warn!(%err, "ignoring update flag from environment");
            false
        }
    })
}

/// Parses a boolean switch value. Empty means disabled.
pub fn parse_flag(value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            var: UPDATE_ENV_VAR,
            value: value.to_string(),
        }),
    }
}
