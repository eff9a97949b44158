//! End-to-end harness tests
//!
//! Drives the public API the way an aggregating driver would and checks the
//! sink protocol: one label per invocation, one timing per phase, phases in
//! their fixed order.

use listbench_core::{BenchConfig, BenchError, Harness, RecordingSink, SinkEvent, StreamSink};

fn assert_single_invocation(sink: &RecordingSink, label: &str) {
    let events = sink.events();
    assert_eq!(events.len(), 6, "one label plus five phase timings");
    assert_eq!(events[0], SinkEvent::StartLine(label.to_string()));
    for event in &events[1..] {
        assert!(matches!(event, SinkEvent::PrintTime(t) if t.is_finite() && *t >= 0.0));
    }
}

#[test]
fn test_integer_benchmark_sink_protocol() {
    let harness = Harness::new(BenchConfig::new(5)).expect("valid config");
    let mut sink = RecordingSink::new();
    harness.run_integers(&mut sink);
    assert_single_invocation(&sink, "Rust");
}

#[test]
fn test_string_benchmark_sink_protocol() {
    let harness = Harness::new(BenchConfig::new(3)).expect("valid config");
    let mut sink = RecordingSink::new();
    harness.run_strings(&mut sink);
    assert_single_invocation(&sink, "Rust");
}

#[test]
fn test_boundary_item_count_still_reports_all_phases() {
    // Two items: the integer build phase emits only the sentinels.
    let harness = Harness::new(BenchConfig::new(2)).expect("valid config");
    let mut sink = RecordingSink::new();
    harness.run_integers(&mut sink);
    assert_single_invocation(&sink, "Rust");
}

#[test]
fn test_custom_label_is_forwarded() {
    let config = BenchConfig::with_label(16, "Rust/nightly");
    let harness = Harness::new(config).expect("valid config");
    let mut sink = RecordingSink::new();
    harness.run_strings(&mut sink);
    assert_eq!(sink.labels(), vec!["Rust/nightly"]);
}

#[test]
fn test_run_all_interleaves_nothing() {
    let harness = Harness::new(BenchConfig::new(4)).expect("valid config");
    let mut sink = RecordingSink::new();
    harness.run_all(&mut sink);

    let events = sink.events();
    assert_eq!(events.len(), 12);
    // Second invocation starts with its own label right after the first's
    // fifth timing.
    assert_eq!(events[6], SinkEvent::StartLine("Rust".to_string()));
}

#[test]
fn test_harness_is_reusable() {
    let harness = Harness::new(BenchConfig::new(8)).expect("valid config");
    let mut first = RecordingSink::new();
    let mut second = RecordingSink::new();
    harness.run_integers(&mut first);
    harness.run_integers(&mut second);
    assert_eq!(first.events().len(), second.events().len());
}

#[test]
fn test_invalid_item_count_is_a_validation_error() {
    let result = Harness::new(BenchConfig::new(0));
    assert!(matches!(result, Err(BenchError::Validation { .. })));
}

#[test]
fn test_stream_sink_end_to_end() {
    let harness = Harness::new(BenchConfig::new(4)).expect("valid config");
    let mut sink = StreamSink::new(Vec::new());
    harness.run_integers(&mut sink);

    let written = String::from_utf8(sink.into_inner()).expect("utf8 output");
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("Rust:"));
    assert_eq!(lines.clone().count(), 5);
    assert!(lines.all(|line| line.trim_start().ends_with('s')));
}
