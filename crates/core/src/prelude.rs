//! `ListBench` prelude
//!
//! Common imports for harness users and drivers.

// Re-export core types
pub use crate::bench::{run_integers, run_strings, Phase};
pub use crate::config::BenchConfig;
pub use crate::error::{BenchError, BenchResult, CountMismatch};
pub use crate::output::{OutputSink, RecordingSink, SinkEvent, StreamSink};
pub use crate::timing::{time_phase, PhaseTimer};
pub use crate::Harness;

// Re-export commonly used external types
pub use serde::{Deserialize, Serialize};
pub use tracing::{debug, error, info, warn};
