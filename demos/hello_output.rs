//! Write "hello" through a weak-output iterator, then read it back through
//! a random-access one.
//!
//! Run with `cargo run --example hello_output`.

use std::cell::Cell;

use tola_iter::prelude::*;
use tola_iter::CapabilitySet;

#[derive(Debug, Clone, Copy, Default)]
struct Writer<'a> {
    buf: &'a [Cell<u8>],
    at: usize,
}

#[cursor]
impl<'a> Writer<'a> {
    fn set(&self, byte: u8) {
        self.buf[self.at].set(byte);
    }

    fn next(&mut self) {
        self.at += 1;
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Reader<'a> {
    buf: &'a [Cell<u8>],
    at: usize,
}

#[cursor]
impl<'a> Reader<'a> {
    fn current(&self) -> u8 {
        self.buf[self.at].get()
    }

    fn next(&mut self) {
        self.at += 1;
    }

    fn prev(&mut self) {
        self.at -= 1;
    }

    fn advance(&mut self, n: isize) {
        self.at = self.at.wrapping_add_signed(n);
    }

    fn distance_to(&self, other: &Self) -> isize {
        other.at as isize - self.at as isize
    }

    fn equal(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

fn main() {
    let buf: Vec<Cell<u8>> = vec![Cell::new(0); 8];

    let mut out = BasicIterator::from_cursor(Writer { buf: &buf, at: 0 });
    for byte in *b"hello" {
        out.set(byte);
        out.inc();
    }

    let first = BasicIterator::from_cursor(Reader { buf: &buf, at: 0 });
    let last = first + 5;
    let mut it = first;
    let mut text = String::new();
    while it != last {
        text.push(it.get() as char);
        it.inc();
    }

    println!("{text}");
    println!(
        "writer: {} {}",
        <BasicIterator<Writer> as IteratorTraits>::TIER,
        CapabilitySet::of::<Writer>()
    );
    println!(
        "reader: {} {}, last - first = {}",
        <BasicIterator<Reader> as IteratorTraits>::TIER,
        CapabilitySet::of::<Reader>(),
        last - first
    );
}
