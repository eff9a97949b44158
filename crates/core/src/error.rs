//! `ListBench` error system
//!
//! Benchmark runs themselves are infallible by contract; errors exist for the
//! configuration and driver boundaries, plus the non-fatal count-mismatch
//! diagnostic that is logged and never raised.

use std::fmt;
use thiserror::Error;

use crate::bench::Phase;

/// Result type for all harness operations
pub type BenchResult<T> = Result<T, BenchError>;

/// Main error type for the benchmark harness
#[derive(Error, Debug)]
pub enum BenchError {
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation errors
    #[error("Validation failed for field '{field}': {reason}")]
    Validation {
        /// Field that failed validation
        field: String,
        /// Reason for validation failure
        reason: String,
    },

    /// I/O errors from sink implementations backed by writers
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors for common errors
impl BenchError {
    /// Create configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create validation error
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Diagnostic emitted when a counting phase disagrees with the statically
/// expected result.
///
/// This is deliberately not a [`BenchError`] variant: the contract is to log
/// the mismatch and keep running so the driver still receives every timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountMismatch {
    /// Counting phase that produced the wrong result
    pub phase: Phase,
    /// Statically expected count
    pub expected: usize,
    /// Count the phase actually produced
    pub actual: usize,
}

impl fmt::Display for CountMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error while counting in {} phase: expected {}, got {}",
            self.phase, self.expected, self.actual
        )
    }
}
