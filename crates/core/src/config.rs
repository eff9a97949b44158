//! `ListBench` configuration system
//!
//! Benchmark configuration with validation and environment support. The
//! reference harness reads its item count from a process-wide global; here it
//! is an explicit, validated configuration value passed to each run.

use crate::error::{BenchError, BenchResult};
use garde::Validate;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding the item count
pub const ITEMS_COUNT_ENV: &str = "LISTBENCH_ITEMS_COUNT";

/// Environment variable overriding the reported language label
pub const LABEL_ENV: &str = "LISTBENCH_LABEL";

/// Default number of elements inserted during the build phase
pub const DEFAULT_ITEMS_COUNT: usize = 100_000;

/// Default language label reported through the output sink
pub const DEFAULT_LABEL: &str = "Rust";

/// Benchmark configuration
///
/// `items_count` must be at least 2: the integer benchmark appends the value
/// `2` exactly `items_count - 2` times before the trailing sentinels `5` and
/// `6`, so smaller counts have no meaningful build phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct BenchConfig {
    /// Number of elements each build phase inserts
    #[garde(range(min = 2, max = 1_000_000_000))]
    pub items_count: usize,

    /// Language/title string passed to `start_line` once per benchmark
    #[garde(length(min = 1, max = 64))]
    pub label: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            items_count: DEFAULT_ITEMS_COUNT,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

impl BenchConfig {
    /// Create configuration with the given item count and the default label
    #[must_use]
    pub fn new(items_count: usize) -> Self {
        Self {
            items_count,
            ..Self::default()
        }
    }

    /// Create configuration with an explicit label
    #[must_use]
    pub fn with_label(items_count: usize, label: impl Into<String>) -> Self {
        Self {
            items_count,
            label: label.into(),
        }
    }

    /// Small configuration for tests
    ///
    /// # Errors
    ///
    /// Returns error if the test configuration fails validation.
    pub fn test() -> BenchResult<Self> {
        let config = Self::new(64);
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from environment variables
    ///
    /// Reads [`ITEMS_COUNT_ENV`] and [`LABEL_ENV`], falling back to the
    /// defaults for variables that are unset.
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but malformed, or if the resulting
    /// configuration fails validation.
    pub fn from_env() -> BenchResult<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var(ITEMS_COUNT_ENV) {
            config.items_count = raw.trim().parse::<usize>().map_err(|e| {
                BenchError::validation(
                    "items_count",
                    format!("{ITEMS_COUNT_ENV} is not a valid count: {e}"),
                )
            })?;
        }

        if let Ok(label) = env::var(LABEL_ENV) {
            config.label = label;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns error if any field is out of range.
    pub fn validate(&self) -> BenchResult<()> {
        garde::Validate::validate(self, &())
            .map_err(|e| BenchError::validation("config", format!("Validation failed: {e}")))
    }
}
