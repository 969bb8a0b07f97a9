//! Weak-output iterators: write and step forward.

mod common;

use common::{c_str, zeroed, CellWriter};
use tola_iter::category::WeakOutputTag;
use tola_iter::prelude::*;
use tola_iter::{satisfies, CapabilitySet, IteratorCategory};

#[test]
fn test_writes_hello() {
    let buf = zeroed(10);
    let mut it: BasicIterator<CellWriter> = BasicIterator::new(CellWriter { buf: &buf, at: 0 });

    for byte in *b"hello\0" {
        it.set(byte);
        it.inc();
    }

    assert_eq!(c_str(&buf), b"hello");
}

#[test]
fn test_category_is_weak_output() {
    let _: IteratorCategory<BasicIterator<CellWriter<'static>>> = WeakOutputTag;
    let caps = CapabilitySet::of::<CellWriter<'static>>();
    assert!(caps.write && caps.next);
    assert!(!caps.read && !caps.equal);
    assert_eq!(caps.tier(), Some(Tier::WeakOutput));
}

#[test]
fn test_conformance() {
    assert!(satisfies!(CellWriter<'static>, WeakOutputCursor<u8>));
    assert!(!satisfies!(CellWriter<'static>, OutputCursor<u8>));
    assert!(!satisfies!(CellWriter<'static>, Readable));
    assert!(!satisfies!(BasicIterator<CellWriter<'static>>, PartialEq));
}

#[test]
fn test_post_inc_writes_through_prior_position() {
    let buf = zeroed(2);
    let mut it: BasicIterator<CellWriter> = BasicIterator::new(CellWriter { buf: &buf, at: 0 });

    it.post_inc().set(b'a');
    it.set(b'b');

    assert_eq!(buf[0].get(), b'a');
    assert_eq!(buf[1].get(), b'b');
}
