//! Shared cursors for integration tests.
//!
//! Buffers are `[Cell<u8>]` so that writable cursors stay `Copy` and can
//! write through a shared slice.

#![allow(dead_code)]

use std::cell::Cell;
use std::sync::Once;

use tola_iter::prelude::*;
use tracing_subscriber::filter::LevelFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize test logging. The first call wins; later calls are no-ops.
pub fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(LevelFilter::TRACE)
            .with_test_writer()
            .with_ansi(false)
            .try_init();
    });
}

pub fn cells(text: &[u8]) -> Vec<Cell<u8>> {
    text.iter().copied().map(Cell::new).collect()
}

pub fn zeroed(len: usize) -> Vec<Cell<u8>> {
    vec![Cell::new(0); len]
}

/// Bytes up to the first NUL.
pub fn c_str(buf: &[Cell<u8>]) -> Vec<u8> {
    buf.iter().map(Cell::get).take_while(|&b| b != 0).collect()
}

// =============================================================================
// Weak input: read + next
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct TextCursor<'a> {
    pub text: &'a [u8],
    pub at: usize,
}

/// Adds a raw-text constructor.
#[derive(Debug, Clone, Copy, Default, Mixin)]
pub struct TextMixin<'a>(BasicMixin<TextCursor<'a>>);

impl<'a> From<&'a [u8]> for TextMixin<'a> {
    fn from(text: &'a [u8]) -> Self {
        TextCursor { text, at: 0 }.into()
    }
}

#[cursor(mixin = TextMixin<'a>)]
impl<'a> TextCursor<'a> {
    pub fn current(&self) -> u8 {
        self.text[self.at]
    }

    pub fn next(&mut self) {
        self.at += 1;
    }
}

// =============================================================================
// Weak output: set + next
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct CellWriter<'a> {
    pub buf: &'a [Cell<u8>],
    pub at: usize,
}

#[cursor]
impl<'a> CellWriter<'a> {
    pub fn set(&self, value: u8) {
        self.buf[self.at].set(value);
    }

    pub fn next(&mut self) {
        self.at += 1;
    }
}

// =============================================================================
// Output: set + next + equal
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct CellOutput<'a> {
    pub buf: &'a [Cell<u8>],
    pub at: usize,
}

#[cursor]
impl<'a> CellOutput<'a> {
    pub fn set(&self, value: u8) {
        self.buf[self.at].set(value);
    }

    pub fn next(&mut self) {
        self.at += 1;
    }

    pub fn equal(&self, other: &Self) -> bool {
        std::ptr::eq(self.buf, other.buf) && self.at == other.at
    }
}

pub fn output_at(buf: &[Cell<u8>], at: usize) -> BasicIterator<CellOutput<'_>> {
    BasicIterator::new(CellOutput { buf, at })
}

// =============================================================================
// Random access: a mutable / read-only pair over one buffer
// =============================================================================

/// Anything that names a slot index; lets the two random-access cursors
/// compare and measure against each other.
pub trait Position {
    fn position(&self) -> isize;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MutPos<'a> {
    pub buf: &'a [Cell<u8>],
    pub at: isize,
}

#[cursor]
impl<'a> MutPos<'a> {
    pub fn current(&self) -> u8 {
        self.buf[self.at as usize].get()
    }

    pub fn set(&self, value: u8) {
        self.buf[self.at as usize].set(value);
    }

    pub fn next(&mut self) {
        self.at += 1;
    }

    pub fn prev(&mut self) {
        self.at -= 1;
    }

    pub fn advance(&mut self, n: isize) {
        self.at += n;
    }

    pub fn distance_to<O: Position>(&self, other: &O) -> isize {
        other.position() - self.at
    }

    pub fn equal<O: Position>(&self, other: &O) -> bool {
        other.position() == self.at
    }
}

impl Position for MutPos<'_> {
    fn position(&self) -> isize {
        self.at
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConstPos<'a> {
    pub buf: &'a [Cell<u8>],
    pub at: isize,
}

#[cursor]
impl<'a> ConstPos<'a> {
    pub fn current(&self) -> u8 {
        self.buf[self.at as usize].get()
    }

    pub fn next(&mut self) {
        self.at += 1;
    }

    pub fn prev(&mut self) {
        self.at -= 1;
    }

    pub fn advance(&mut self, n: isize) {
        self.at += n;
    }

    pub fn distance_to<O: Position>(&self, other: &O) -> isize {
        other.position() - self.at
    }

    pub fn equal<O: Position>(&self, other: &O) -> bool {
        other.position() == self.at
    }
}

impl Position for ConstPos<'_> {
    fn position(&self) -> isize {
        self.at
    }
}

impl<'a> From<MutPos<'a>> for ConstPos<'a> {
    fn from(pos: MutPos<'a>) -> Self {
        ConstPos { buf: pos.buf, at: pos.at }
    }
}

pub fn mut_at(buf: &[Cell<u8>], at: isize) -> BasicIterator<MutPos<'_>> {
    BasicIterator::new(MutPos { buf, at })
}

pub fn const_at(buf: &[Cell<u8>], at: isize) -> BasicIterator<ConstPos<'_>> {
    BasicIterator::new(ConstPos { buf, at })
}
