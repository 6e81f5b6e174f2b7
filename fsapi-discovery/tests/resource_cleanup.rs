//! Tests for socket cleanup and early iterator termination

use fsapi_discovery::get_iter_with_timeout;
use std::time::Duration;

#[test]
fn test_early_iterator_termination() {
    let mut iter = get_iter_with_timeout(Duration::from_millis(100));
    let _first = iter.next();
}

#[test]
fn test_iterator_drop_without_iteration() {
    let _iter = get_iter_with_timeout(Duration::from_millis(100));
}

#[test]
fn test_multiple_iterators_sequential() {
    // The socket must be released so the next iterator can bind again.
    for _ in 0..3 {
        let mut iter = get_iter_with_timeout(Duration::from_millis(100));
        let _first = iter.next();
    }
}

#[test]
fn test_iterator_partial_consumption() {
    let iter = get_iter_with_timeout(Duration::from_millis(100));
    let _items: Vec<_> = iter.take(2).collect();
}
