//! Output sink abstraction
//!
//! The harness never owns or interprets its output destination; the driver
//! supplies one. A sink receives exactly one `start_line` per benchmark
//! invocation followed by one `print_time` per timed phase.

use std::io::{self, Write};

/// Destination for benchmark labels and per-phase timings
pub trait OutputSink {
    /// Label the upcoming series of timings with a language/title string
    fn start_line(&mut self, title: &str);

    /// Report one phase's elapsed CPU time in fractional seconds
    fn print_time(&mut self, elapsed_seconds: f64);
}

/// One observable sink interaction, in invocation order
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    /// `start_line` was called with this title
    StartLine(String),
    /// `print_time` was called with this elapsed time
    PrintTime(f64),
}

/// Sink that records every interaction
///
/// Used by the test suite and by embedding drivers that aggregate timings
/// instead of streaming them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
}

impl RecordingSink {
    /// Create an empty recording sink
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order
    #[must_use]
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Recorded phase timings, in order, without the leading label
    #[must_use]
    pub fn timings(&self) -> Vec<f64> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::PrintTime(elapsed) => Some(*elapsed),
                SinkEvent::StartLine(_) => None,
            })
            .collect()
    }

    /// Recorded labels, in order
    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::StartLine(title) => Some(title.as_str()),
                SinkEvent::PrintTime(_) => None,
            })
            .collect()
    }
}

impl OutputSink for RecordingSink {
    fn start_line(&mut self, title: &str) {
        self.events.push(SinkEvent::StartLine(title.to_string()));
    }

    fn print_time(&mut self, elapsed_seconds: f64) {
        self.events.push(SinkEvent::PrintTime(elapsed_seconds));
    }
}

/// Sink that streams one line per interaction to a writer
///
/// Write failures cannot interrupt a benchmark run, so they are logged and
/// swallowed; the remaining phases still execute and report.
#[derive(Debug)]
pub struct StreamSink<W: Write> {
    writer: W,
}

impl StreamSink<io::Stdout> {
    /// Stream to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> StreamSink<W> {
    /// Stream to an arbitrary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputSink for StreamSink<W> {
    fn start_line(&mut self, title: &str) {
        if let Err(e) = writeln!(self.writer, "{title}:") {
            tracing::warn!(error = %e, "output sink write failed");
        }
    }

    fn print_time(&mut self, elapsed_seconds: f64) {
        if let Err(e) = writeln!(self.writer, "  {elapsed_seconds:.6}s") {
            tracing::warn!(error = %e, "output sink write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_recording_sink_preserves_order() {
        let mut sink = RecordingSink::new();
        sink.start_line("Rust");
        sink.print_time(0.25);
        sink.print_time(0.5);

        assert_eq!(sink.labels(), vec!["Rust"]);
        assert_eq!(sink.timings(), vec![0.25, 0.5]);
        assert_eq!(
            sink.events()[0],
            SinkEvent::StartLine("Rust".to_string())
        );
    }

    #[test]
    fn test_stream_sink_writes_lines() {
        let mut sink = StreamSink::new(Vec::new());
        sink.start_line("Rust");
        sink.print_time(0.125);

        let written = String::from_utf8(sink.into_inner()).unwrap_or_default();
        assert!(written.starts_with("Rust:\n"));
        assert!(written.contains("0.125000s"));
    }
}
