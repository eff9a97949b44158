//! `ListBench` Core - Linked-List Micro-Benchmark Harness
//!
//! This crate is the Rust participant in a cross-language benchmark comparing
//! linked-list container operations. An external driver supplies an output
//! sink and an item count; the harness runs a fixed sequence of timed phases
//! (build, deep copy, and the same filtered count produced three different
//! ways) and reports each phase's CPU time through the sink the moment the
//! phase completes.
//!
//! # Architecture
//!
//! - [`config`] - Validated benchmark configuration (item count, label)
//! - [`bench`] - The integer and string benchmark variants and their phases
//! - [`sequence`] - The three counting strategies the variants compare
//! - [`output`] - The output-sink seam between harness and driver
//! - [`timing`] - Per-phase CPU-time measurement
//! - [`ffi`] - Plain-function entry points for non-Rust drivers
//!
//! # Example
//!
//! ```rust
//! use listbench_core::{BenchConfig, Harness, RecordingSink};
//!
//! fn main() -> listbench_core::BenchResult<()> {
//!     let harness = Harness::new(BenchConfig::new(5))?;
//!
//!     let mut sink = RecordingSink::new();
//!     harness.run_integers(&mut sink);
//!
//!     // One label, then one timing per phase.
//!     assert_eq!(sink.labels(), vec!["Rust"]);
//!     assert_eq!(sink.timings().len(), 5);
//!     Ok(())
//! }
//! ```
//!
//! # Failure semantics
//!
//! Benchmark phases are infallible by contract; the only runtime diagnostic
//! is a count mismatch, which is logged through `tracing` and never stops the
//! run. Errors surface only at the configuration and FFI boundaries.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    missing_docs
)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::complexity,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::float_cmp
)]
#![allow(clippy::multiple_crate_versions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Public modules
pub mod bench;
pub mod config;
pub mod error;
pub mod ffi;
pub mod output;
pub mod prelude;
pub mod sequence;
pub mod timing;

// Re-exports for convenience
pub use bench::{run_integers, run_strings, Phase};
pub use config::BenchConfig;
pub use error::{BenchError, BenchResult, CountMismatch};
pub use output::{OutputSink, RecordingSink, SinkEvent, StreamSink};
pub use timing::PhaseTimer;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Benchmark harness over a validated configuration
///
/// The primary Rust-side interface: owns a [`BenchConfig`] that has passed
/// validation, and runs the benchmark variants against caller-supplied
/// sinks. Each run constructs and discards its own containers; the harness
/// itself holds no mutable state and may be reused across runs.
#[derive(Debug, Clone)]
pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    /// Create a harness from a configuration
    ///
    /// # Errors
    ///
    /// Returns error if the configuration fails validation.
    pub fn new(config: BenchConfig) -> BenchResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a harness configured from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if an environment variable is malformed or the resulting
    /// configuration fails validation.
    pub fn from_env() -> BenchResult<Self> {
        Ok(Self {
            config: BenchConfig::from_env()?,
        })
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Run the integer benchmark against the given sink
    pub fn run_integers<S: OutputSink>(&self, sink: &mut S) {
        tracing::info!(items_count = self.config.items_count, "integer benchmark start");
        bench::run_integers(&self.config, sink);
        tracing::info!("integer benchmark complete");
    }

    /// Run the string benchmark against the given sink
    pub fn run_strings<S: OutputSink>(&self, sink: &mut S) {
        tracing::info!(items_count = self.config.items_count, "string benchmark start");
        bench::run_strings(&self.config, sink);
        tracing::info!("string benchmark complete");
    }

    /// Run both benchmark variants in order against the given sink
    pub fn run_all<S: OutputSink>(&self, sink: &mut S) {
        self.run_integers(sink);
        self.run_strings(sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        #[allow(clippy::const_is_empty)]
        {
            assert!(!VERSION.is_empty());
        }
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_harness_rejects_invalid_config() {
        assert!(Harness::new(BenchConfig::new(1)).is_err());
    }

    #[test]
    fn test_harness_run_all_reports_both_variants() -> BenchResult<()> {
        let harness = Harness::new(BenchConfig::test()?)?;
        let mut sink = RecordingSink::new();
        harness.run_all(&mut sink);

        // Two invocations: one label and five timings each.
        assert_eq!(sink.labels(), vec!["Rust", "Rust"]);
        assert_eq!(sink.timings().len(), 10);
        Ok(())
    }
}
