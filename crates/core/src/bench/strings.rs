//! String list benchmark
//!
//! Same five-phase shape as the integer variant, over a list holding
//! `items_count` copies of a fixed short string. Every element matches the
//! predicate, so each counting phase is expected to find `items_count`
//! elements.

use std::collections::LinkedList;

use crate::bench::{check_count, timed, Phase};
use crate::config::BenchConfig;
use crate::output::OutputSink;
use crate::sequence::{count_cursor, count_matching, count_range};

/// String repeated through the whole list
pub(crate) const FILL_STRING: &str = "str1";

// &String rather than &str so the fn item satisfies FnMut(&String).
#[allow(clippy::ptr_arg)]
fn starts_with_s(value: &String) -> bool {
    value.starts_with('s')
}

/// Build the benchmark list: `items_count` copies of [`FILL_STRING`]
pub(crate) fn build_list(items_count: usize) -> LinkedList<String> {
    let mut list = LinkedList::new();
    for _ in 0..items_count {
        list.push_back(FILL_STRING.to_string());
    }
    list
}

/// Run the string benchmark against the given sink
///
/// Emits one `start_line` with the configured label, then five `print_time`
/// calls, one per phase. Every counting phase expects `items_count` matches.
pub fn run_strings<S: OutputSink>(config: &BenchConfig, sink: &mut S) {
    sink.start_line(&config.label);

    let expected = config.items_count;

    let list = timed(sink, Phase::Build, || build_list(config.items_count));

    let copy = timed(sink, Phase::Copy, || list.clone());
    drop(copy);

    let count = timed(sink, Phase::CountCursor, || {
        count_cursor(&list, starts_with_s)
    });
    check_count(&config.label, Phase::CountCursor, expected, count);

    let count = timed(sink, Phase::CountRange, || count_range(&list, starts_with_s));
    check_count(&config.label, Phase::CountRange, expected, count);

    let count = timed(sink, Phase::CountPredicate, || {
        count_matching(&list, starts_with_s)
    });
    check_count(&config.label, Phase::CountPredicate, expected, count);
}
