//! Output iterators: weak output plus position equality.

mod common;

use common::{c_str, output_at, zeroed, CellOutput};
use tola_iter::category::{OutputCategory, OutputTag};
use tola_iter::prelude::*;
use tola_iter::{satisfies, CapabilitySet, IteratorCategory};

#[test]
fn test_writes_hello_and_compares_positions() {
    let buf = zeroed(10);
    let mut it = output_at(&buf, 0);

    for byte in *b"hello" {
        it.set(byte);
        it.inc();
    }
    it.set(b'\0');

    assert_eq!(c_str(&buf), b"hello");
    assert!(it == output_at(&buf, 5));
    it.inc();
    assert!(it != output_at(&buf, 5));
    assert!(it == output_at(&buf, 6));
}

#[test]
fn test_equality_distinguishes_buffers() {
    let a = zeroed(4);
    let b = zeroed(4);
    assert!(output_at(&a, 2) != output_at(&b, 2));
}

#[test]
fn test_category_is_output() {
    fn requires_output<I: IteratorTraits>()
    where
        I::Category: OutputCategory,
    {
    }

    requires_output::<BasicIterator<CellOutput<'static>>>();
    let _: IteratorCategory<BasicIterator<CellOutput<'static>>> = OutputTag;
    assert_eq!(CapabilitySet::of::<CellOutput<'static>>().tier(), Some(Tier::Output));
}

#[test]
fn test_conformance() {
    assert!(satisfies!(CellOutput<'static>, OutputCursor<u8>));
    assert!(satisfies!(CellOutput<'static>, WeakOutputCursor<u8>));
    assert!(!satisfies!(CellOutput<'static>, InputCursor));
    assert!(satisfies!(BasicIterator<CellOutput<'static>>, Eq));
}
