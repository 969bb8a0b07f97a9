//! Generic algorithms over the shared cursors.

mod common;

use common::{cells, const_at, mut_at, output_at, zeroed, TextCursor};
use tola_iter::algorithm;
use tola_iter::prelude::*;

#[test]
fn test_advance_weak_input_walks() {
    let mut it = BasicIterator::<TextCursor>::new(b"walking".as_slice());
    algorithm::advance(&mut it, 4);
    assert_eq!(it.get(), b'i');
    assert_eq!(it.cursor().at, 4);
}

#[test]
fn test_advance_random_access_jumps_both_ways() {
    let buf = cells(b"0123456789");
    let mut it = mut_at(&buf, 5);
    algorithm::advance(&mut it, 3);
    assert_eq!(it.get(), b'8');
    algorithm::advance(&mut it, -8);
    assert_eq!(it.get(), b'0');
}

#[test]
fn test_distance_counts_output_steps() {
    let buf = zeroed(8);
    let first = output_at(&buf, 1);
    let last = output_at(&buf, 6);
    assert_eq!(algorithm::distance(first, &last), 5);
}

#[test]
fn test_distance_random_access_is_signed() {
    let buf = cells(b"abcdef");
    assert_eq!(algorithm::distance(const_at(&buf, 0), &const_at(&buf, 5)), 5);
    assert_eq!(algorithm::distance(const_at(&buf, 5), &const_at(&buf, 0)), -5);
}

#[test]
fn test_next_and_prev_leave_input_untouched() {
    let buf = cells(b"abcdef");
    let it = const_at(&buf, 2);

    assert_eq!(algorithm::next(it, 2).get(), b'e');
    assert_eq!(algorithm::prev(it, 2).get(), b'a');
    assert_eq!(it.get(), b'c');
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "backwards")]
fn test_advance_forward_only_rejects_negative() {
    let mut it = BasicIterator::<TextCursor>::new(b"abc".as_slice());
    algorithm::advance(&mut it, -1);
}
