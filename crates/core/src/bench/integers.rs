//! Integer list benchmark
//!
//! Fills a list with the value `2`, appends the sentinels `5` and `6`, and
//! measures build, deep copy, and three filtered-count strategies. Only the
//! sentinels exceed the predicate threshold, so every counting phase is
//! expected to produce exactly [`EXPECTED_COUNT`].

use std::collections::LinkedList;

use crate::bench::{check_count, timed, Phase};
use crate::config::BenchConfig;
use crate::output::OutputSink;
use crate::sequence::{count_cursor, count_matching, count_range};

/// Value repeated through the body of the list
const FILL_VALUE: i64 = 2;

/// Fixed trailing elements, the only ones matching the predicate
const SENTINELS: [i64; 2] = [5, 6];

/// Expected result of every counting phase
pub const EXPECTED_COUNT: usize = SENTINELS.len();

fn is_greater_than_3(value: &i64) -> bool {
    *value > 3
}

/// Build the benchmark list: `items_count - 2` fill values, then the sentinels
pub(crate) fn build_list(items_count: usize) -> LinkedList<i64> {
    let mut list = LinkedList::new();
    for _ in 0..items_count.saturating_sub(SENTINELS.len()) {
        list.push_back(FILL_VALUE);
    }
    for sentinel in SENTINELS {
        list.push_back(sentinel);
    }
    list
}

/// Run the integer benchmark against the given sink
///
/// Emits one `start_line` with the configured label, then five `print_time`
/// calls, one per phase. Assumes a validated configuration (`items_count` of
/// at least 2).
pub fn run_integers<S: OutputSink>(config: &BenchConfig, sink: &mut S) {
    sink.start_line(&config.label);

    let list = timed(sink, Phase::Build, || build_list(config.items_count));

    let copy = timed(sink, Phase::Copy, || list.clone());
    drop(copy);

    let count = timed(sink, Phase::CountCursor, || {
        count_cursor(&list, is_greater_than_3)
    });
    check_count(&config.label, Phase::CountCursor, EXPECTED_COUNT, count);

    let count = timed(sink, Phase::CountRange, || {
        count_range(&list, is_greater_than_3)
    });
    check_count(&config.label, Phase::CountRange, EXPECTED_COUNT, count);

    let count = timed(sink, Phase::CountPredicate, || {
        count_matching(&list, is_greater_than_3)
    });
    check_count(&config.label, Phase::CountPredicate, EXPECTED_COUNT, count);
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::output::{RecordingSink, SinkEvent};

    #[test]
    fn test_build_list_layout() {
        let list = build_list(5);
        let elements: Vec<i64> = list.iter().copied().collect();
        assert_eq!(elements, vec![2, 2, 2, 5, 6]);
    }

    #[test]
    fn test_build_list_boundary_is_sentinels_only() {
        let list = build_list(2);
        let elements: Vec<i64> = list.iter().copied().collect();
        assert_eq!(elements, vec![5, 6]);
    }

    #[test]
    fn test_run_emits_label_then_five_timings() {
        let config = BenchConfig::new(16);
        let mut sink = RecordingSink::new();
        run_integers(&config, &mut sink);

        let events = sink.events();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0], SinkEvent::StartLine("Rust".to_string()));
        assert_eq!(sink.timings().len(), 5);
        assert!(sink.timings().iter().all(|t| t.is_finite() && *t >= 0.0));
    }

    #[test]
    fn test_all_counting_strategies_find_the_sentinels() {
        for n in [2_usize, 3, 5, 100] {
            let list = build_list(n);
            assert_eq!(list.len(), n);
            assert_eq!(count_cursor(&list, is_greater_than_3), EXPECTED_COUNT);
            assert_eq!(count_range(&list, is_greater_than_3), EXPECTED_COUNT);
            assert_eq!(count_matching(&list, is_greater_than_3), EXPECTED_COUNT);
        }
    }
}
