//! # Layer 1: Cursor Protocol
//!
//! A cursor is any value type that locates a position in a sequence. It
//! opts into capabilities by providing operations; each operation is an
//! independent trait so that every capability is its own bound.
//!
//! | Operation     | Trait            | Capability           |
//! |---------------|------------------|----------------------|
//! | `current`     | [`Readable`]     | read                 |
//! | `set`         | [`Writable<T>`]  | write                |
//! | `next`        | [`Next`]         | single-step forward  |
//! | `prev`        | [`Prev`]         | single-step backward |
//! | `advance`     | [`Advance`]      | random offset        |
//! | `distance_to` | [`DistanceTo<O>`]| distance             |
//! | `equal`       | [`Equal<O>`]     | equality             |
//!
//! [`Cursor`] records which of them are present as type-level booleans.
//! The `#[cursor]` attribute writes all of these impls from an inherent
//! impl block; hand-written impls must keep the flags truthful.
//!
//! ## Rejected cursors
//!
//! No read and no write: no tier.
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! struct Blank(usize);
//!
//! #[cursor]
//! impl Blank {
//!     fn next(&mut self) { self.0 += 1; }
//! }
//! ```
//!
//! No `next`: every tier steps forward.
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! struct Stuck(u8);
//!
//! #[cursor]
//! impl Stuck {
//!     fn current(&self) -> u8 { self.0 }
//! }
//! ```
//!
//! Readable and comparable but not `Clone`, without `single_pass`:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! struct Once(Vec<u8>);
//!
//! #[cursor]
//! impl Once {
//!     fn current(&self) -> u8 { self.0[0] }
//!     fn next(&mut self) { self.0.remove(0); }
//!     fn equal(&self, other: &Self) -> bool { self.0.len() == other.0.len() }
//! }
//!
//! let _ = BasicIterator::from_cursor(Once(vec![1]));
//! ```
//!
//! `current` cannot lend from the cursor:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! struct Lend(Vec<u8>, usize);
//!
//! #[cursor]
//! impl Lend {
//!     fn current(&self) -> &u8 { &self.0[self.1] }
//!     fn next(&mut self) { self.1 += 1; }
//! }
//! ```
//!
//! `current` and `set` disagree on the element type:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! #[derive(Clone, Default)]
//! struct Split(Vec<u8>, usize);
//!
//! #[cursor]
//! impl Split {
//!     fn current(&self) -> u8 { self.0[self.1] }
//!     fn set(&mut self, value: String) { self.0[self.1] = value.len() as u8; }
//!     fn next(&mut self) { self.1 += 1; }
//! }
//! ```
//!
//! A generic `set` must still accept the element type:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! #[derive(Clone, Default)]
//! struct Narrow(Vec<u8>, usize);
//!
//! #[cursor]
//! impl Narrow {
//!     fn current(&self) -> u8 { self.0[self.1] }
//!     fn set<S: AsRef<str>>(&mut self, value: S) { self.0[self.1] = value.as_ref().len() as u8; }
//!     fn next(&mut self) { self.1 += 1; }
//! }
//! ```
//!
//! `equal` and `distance_to` measure against the cursor's own type; a
//! comparison with some other type says nothing about its tier:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! struct Anchor(isize);
//!
//! #[derive(Clone, Copy, Default)]
//! struct Pinned(isize);
//!
//! #[cursor]
//! impl Pinned {
//!     fn current(&self) -> isize { self.0 }
//!     fn next(&mut self) { self.0 += 1; }
//!     fn equal(&self, other: &Anchor) -> bool { self.0 == other.0 }
//! }
//! ```

pub mod concepts;

use crate::mixin::Mixin;
use crate::primitives::{Bool, Distance};

pub use concepts::{
    BidirectionalCursor, ForwardCursor, InputCursor, OutputCursor, RandomAccessCursor,
    WeakInputCursor, WeakOutputCursor,
};

// =============================================================================
// Cursor
// =============================================================================

/// A position descriptor together with its capability set.
pub trait Cursor: Sized {
    /// Element type: what `current` yields, or what `set` accepts.
    type Value;

    /// Distance type: what `distance_to` returns (default `isize`).
    type Difference: Distance;

    /// Construction adapter stored by the generated iterator.
    type Mixin: Mixin<Self>;

    type HasRead: Bool;
    type HasWrite: Bool;
    type HasNext: Bool;
    type HasPrev: Bool;
    type HasAdvance: Bool;
    type HasDistance: Bool;
    type HasEqual: Bool;

    /// Copies of the cursor cannot be traversed independently.
    type SinglePass: Bool;
}

// =============================================================================
// Capability Traits
// =============================================================================

/// Read the element at the current position.
pub trait Readable: Cursor {
    fn current(&self) -> Self::Value;
}

/// Write an element at the current position.
pub trait Writable<T>: Cursor {
    fn set(&mut self, value: T);
}

/// Step one position forward.
pub trait Next: Cursor {
    fn next(&mut self);
}

/// Step one position backward. Inverse of [`Next::next`].
pub trait Prev: Cursor {
    fn prev(&mut self);
}

/// Move by `n` positions (negative moves backward).
pub trait Advance: Cursor {
    fn advance(&mut self, n: Self::Difference);
}

/// Signed number of `next` steps from `self` to `other`.
///
/// Must agree with [`Next`]: if `other` is reached from `self` by `N` steps,
/// the distance is `N`. This is not checked.
pub trait DistanceTo<Other = Self>: Cursor {
    fn distance_to(&self, other: &Other) -> Self::Difference;
}

/// Whether two cursors denote the same logical position.
pub trait Equal<Other = Self>: Cursor {
    fn equal(&self, other: &Other) -> bool;
}
