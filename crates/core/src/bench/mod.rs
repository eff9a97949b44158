//! Benchmark variants and phase sequencing
//!
//! Each variant runs the same fixed five-phase sequence against its own
//! container: build, deep copy, then the same filtered count produced three
//! ways. Every phase is timed individually and reported through the output
//! sink the moment it completes.

mod integers;
mod strings;

pub use integers::run_integers;
pub use strings::run_strings;

use std::fmt;

use crate::error::CountMismatch;
use crate::output::OutputSink;
use crate::timing::time_phase;

/// One timed sub-operation within a benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Build the list by repeated tail appends
    Build,
    /// Deep copy of the full list
    Copy,
    /// Filtered count via an explicit cursor
    CountCursor,
    /// Filtered count via a range-style loop
    CountRange,
    /// Filtered count via the predicate-counting algorithm
    CountPredicate,
}

impl Phase {
    /// Stable lowercase name used in logs
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Copy => "copy",
            Self::CountCursor => "count_cursor",
            Self::CountRange => "count_range",
            Self::CountPredicate => "count_predicate",
        }
    }

    /// The three counting phases, in execution order
    pub const COUNTING: [Self; 3] = [Self::CountCursor, Self::CountRange, Self::CountPredicate];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time `f`, report the elapsed phase time through the sink, return the value
pub(crate) fn timed<S: OutputSink, T>(sink: &mut S, phase: Phase, f: impl FnOnce() -> T) -> T {
    let (value, elapsed) = time_phase(f);
    tracing::debug!(phase = %phase, elapsed_seconds = elapsed, "phase complete");
    sink.print_time(elapsed);
    value
}

/// Log a count mismatch and keep going
///
/// The driver expects all five timings even when a correctness check fails,
/// so a mismatch never interrupts the run.
pub(crate) fn check_count(label: &str, phase: Phase, expected: usize, actual: usize) {
    if actual != expected {
        let mismatch = CountMismatch {
            phase,
            expected,
            actual,
        };
        tracing::warn!(label, %mismatch, "{label} error while counting");
    }
}
