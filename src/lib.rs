#![cfg_attr(not(feature = "std"), no_std)]

//! # tola-iter
//!
//! Synthesize full iterator types from minimal cursors.
//!
//! A cursor author writes a small value type with a few of seven optional
//! operations (`current`, `set`, `next`, `prev`, `advance`, `distance_to`,
//! `equal`). `#[cursor]` detects which are present, the strongest tier the
//! set supports is computed at the type level, and [`BasicIterator<C>`]
//! exposes exactly the operators that tier permits. Everything else is a
//! compile error.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Bool (Present / Absent), Distance                              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Cursor Protocol                                         |
//! |  - Cursor, Readable, Writable, Next, Prev, Advance, DistanceTo,   |
//! |    Equal; concept traits (WeakInputCursor .. RandomAccessCursor)  |
//! |  - #[cursor] capability detection, #[derive(Mixin)]               |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Categories                                              |
//! |  - Tier, category tags, CursorCategory<C> derivation              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Generated Iterator                                      |
//! |  - BasicIterator<C>, IteratorTraits, algorithm::{advance, ..}     |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Tiers
//!
//! | Tier          | Requires                                     | Adds                      |
//! |---------------|----------------------------------------------|---------------------------|
//! | WeakOutput    | `set` + `next`                               | write, `inc`              |
//! | WeakInput     | `current` + `next`                           | read, `inc`               |
//! | Output        | WeakOutput + `equal`                         | `==`                      |
//! | Input         | WeakInput + `equal`, `single_pass`           | `==`                      |
//! | Forward       | WeakInput + `equal`, `Clone`                 | multi-pass                |
//! | Bidirectional | Forward + `prev`                             | `dec`                     |
//! | RandomAccess  | Bidirectional + `advance` + `distance_to`    | `+=`, `-`, `<`            |
//!
//! ## Quick Start
//!
//! ```
//! use tola_iter::prelude::*;
//!
//! #[derive(Debug, Clone, Copy, Default)]
//! struct Slots<'a> {
//!     data: &'a [u32],
//!     at: usize,
//! }
//!
//! #[cursor]
//! impl<'a> Slots<'a> {
//!     fn current(&self) -> u32 { self.data[self.at] }
//!     fn next(&mut self) { self.at += 1; }
//!     fn prev(&mut self) { self.at -= 1; }
//!     fn advance(&mut self, n: isize) { self.at = (self.at as isize + n) as usize; }
//!     fn distance_to(&self, other: &Self) -> isize { other.at as isize - self.at as isize }
//!     fn equal(&self, other: &Self) -> bool { self.at == other.at }
//! }
//!
//! let data = [10, 20, 30, 40];
//! let first = BasicIterator::from_cursor(Slots { data: &data, at: 0 });
//! let last = first + 4;
//!
//! assert_eq!(<BasicIterator<Slots> as IteratorTraits>::TIER, Tier::RandomAccess);
//! assert_eq!((first + 2).get(), 30);
//! assert_eq!(last - first, 4);
//! assert!(first < last);
//! ```

// Allow `::tola_iter` to work inside the crate itself
extern crate self as tola_iter;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Cursor Protocol
// =============================================================================
pub mod protocol;
pub mod mixin;
pub mod detect;

// =============================================================================
// Layer 2: Categories
// =============================================================================
pub mod category;

// =============================================================================
// Layer 3: Generated Iterator
// =============================================================================
pub mod iterator;
pub mod algorithm;

mod trace;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Absent, Bool, Distance, Present};
pub use protocol::{
    Advance, BidirectionalCursor, Cursor, DistanceTo, Equal, ForwardCursor, InputCursor, Next,
    OutputCursor, Prev, RandomAccessCursor, Readable, WeakInputCursor, WeakOutputCursor, Writable,
};
pub use mixin::{BasicMixin, Mixin};
pub use category::{
    BidirectionalTag, Category, CursorCategory, ForwardTag, InputTag, OutputTag, RandomAccessTag,
    Tier, WeakInputTag, WeakOutputTag,
};
pub use detect::CapabilitySet;
pub use iterator::{BasicIterator, IteratorCategory, IteratorDifference, IteratorTraits, IteratorValue};

// Re-export proc-macros
pub use macros::{cursor, Mixin};

/// Common items for cursor authors and iterator users.
pub mod prelude {
    pub use crate::protocol::{
        Advance, BidirectionalCursor, Cursor, DistanceTo, Equal, ForwardCursor, InputCursor,
        Next, OutputCursor, Prev, RandomAccessCursor, Readable, WeakInputCursor,
        WeakOutputCursor, Writable,
    };
    pub use crate::category::{Category, CursorCategory, Tier};
    pub use crate::iterator::{BasicIterator, IteratorTraits};
    pub use crate::mixin::{BasicMixin, Mixin};
    pub use macros::{cursor, Mixin};
}
