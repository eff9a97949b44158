//! Counting strategies over a forward-traversable sequence
//!
//! The benchmark compares three ways of producing the same filtered count
//! over a [`LinkedList`]: an explicit cursor advanced by hand, a range-style
//! loop, and the iterator counting algorithm. The strategies must agree on
//! every input; the benchmark measures them, it does not choose between them.

use std::collections::LinkedList;

/// Count matching elements by advancing an explicit cursor
#[allow(clippy::while_let_on_iterator)] // the explicit cursor is the point
pub fn count_cursor<T>(list: &LinkedList<T>, mut matches: impl FnMut(&T) -> bool) -> usize {
    let mut count = 0;
    let mut cursor = list.iter();
    while let Some(element) = cursor.next() {
        if matches(element) {
            count += 1;
        }
    }
    count
}

/// Count matching elements with a range-style loop
pub fn count_range<T>(list: &LinkedList<T>, mut matches: impl FnMut(&T) -> bool) -> usize {
    let mut count = 0;
    for element in list {
        if matches(element) {
            count += 1;
        }
    }
    count
}

/// Count matching elements with the iterator counting algorithm
pub fn count_matching<T>(list: &LinkedList<T>, mut matches: impl FnMut(&T) -> bool) -> usize {
    list.iter().filter(|element| matches(element)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LinkedList<i64> {
        [2, 2, 2, 5, 6].into_iter().collect()
    }

    #[test]
    fn test_cursor_counts_matching_elements() {
        assert_eq!(count_cursor(&sample(), |&e| e > 3), 2);
    }

    #[test]
    fn test_range_counts_matching_elements() {
        assert_eq!(count_range(&sample(), |&e| e > 3), 2);
    }

    #[test]
    fn test_algorithm_counts_matching_elements() {
        assert_eq!(count_matching(&sample(), |&e| e > 3), 2);
    }

    #[test]
    fn test_strategies_agree_on_empty_list() {
        let empty: LinkedList<i64> = LinkedList::new();
        assert_eq!(count_cursor(&empty, |&e| e > 3), 0);
        assert_eq!(count_range(&empty, |&e| e > 3), 0);
        assert_eq!(count_matching(&empty, |&e| e > 3), 0);
    }

    #[test]
    fn test_strategies_over_strings() {
        let list: LinkedList<String> =
            ["str1", "other", "str2"].iter().map(|s| (*s).to_string()).collect();
        let starts_with_s = |s: &String| s.starts_with('s');
        assert_eq!(count_cursor(&list, starts_with_s), 3);
        assert_eq!(count_range(&list, starts_with_s), 3);
        assert_eq!(count_matching(&list, starts_with_s), 3);
    }
}
