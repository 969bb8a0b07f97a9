//! Operator surface, one bounded impl per capability.
//!
//! | Operator                 | Gate                                  |
//! |--------------------------|---------------------------------------|
//! | `get`                    | `C: Readable`                         |
//! | `set`                    | `C: Writable<T>`                      |
//! | `inc` / `post_inc`       | `C: Next`                             |
//! | `dec` / `post_dec`       | `C: BidirectionalCursor`              |
//! | `+=` / `-=` / `+`        | `C: RandomAccessCursor`               |
//! | `==` / `!=`              | `C: Equal<D>`                         |
//! | `<` / `<=` / `>` / `>=`  | `C: RandomAccessCursor + DistanceTo<D>` |
//! | `a - b`                  | `C: RandomAccessCursor`, `D: DistanceTo<C>` |
//!
//! Weak iterators do not compare:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! #[derive(Clone, Copy, Default)]
//! struct Digits(u32);
//!
//! #[cursor]
//! impl Digits {
//!     fn current(&self) -> u32 { self.0 % 10 }
//!     fn next(&mut self) { self.0 /= 10; }
//! }
//!
//! let a = BasicIterator::from_cursor(Digits(12));
//! let b = BasicIterator::from_cursor(Digits(12));
//! let _ = a == b;
//! ```
//!
//! Forward iterators do not step back:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! #[derive(Clone, Copy, Default)]
//! struct Up(u32);
//!
//! #[cursor]
//! impl Up {
//!     fn current(&self) -> u32 { self.0 }
//!     fn next(&mut self) { self.0 += 1; }
//!     fn equal(&self, other: &Self) -> bool { self.0 == other.0 }
//! }
//!
//! let mut it = BasicIterator::from_cursor(Up(3));
//! it.dec();
//! ```
//!
//! `post_inc` / `post_dec` copy the iterator, so they need a cloneable
//! mixin even when the cursor itself is `Clone`:
//!
//! ```compile_fail
//! use tola_iter::prelude::*;
//!
//! #[derive(Clone, Copy, Default)]
//! struct Back(i32);
//!
//! #[derive(Default, Mixin)]
//! struct BackHolder(Back);
//!
//! #[cursor(mixin = BackHolder)]
//! impl Back {
//!     fn current(&self) -> i32 { self.0 }
//!     fn next(&mut self) { self.0 += 1; }
//!     fn prev(&mut self) { self.0 -= 1; }
//!     fn equal(&self, other: &Self) -> bool { self.0 == other.0 }
//! }
//!
//! let mut it = BasicIterator::from_cursor(Back(3));
//! let _ = it.post_dec();
//! ```

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::primitives::Distance;
use crate::protocol::{
    Advance, BidirectionalCursor, Cursor, DistanceTo, Equal, Next, Prev, RandomAccessCursor,
    Readable, Writable,
};
use crate::trace::trace_op;

use super::BasicIterator;

// =============================================================================
// Read / Write
// =============================================================================

impl<C: Readable> BasicIterator<C> {
    /// Element at the current position. Repeated reads without stepping
    /// yield the same logical value.
    #[inline]
    pub fn get(&self) -> C::Value {
        trace_op!("current", C);
        <C as Readable>::current(self.cursor())
    }
}

impl<C: Cursor> BasicIterator<C> {
    /// Assign through the iterator.
    #[inline]
    pub fn set<T>(&mut self, value: T)
    where
        C: Writable<T>,
    {
        trace_op!("set", C);
        <C as Writable<T>>::set(self.cursor_mut(), value);
    }
}

// =============================================================================
// Increment / Decrement
// =============================================================================

impl<C: Next> BasicIterator<C> {
    /// Pre-increment: step forward, return the advanced iterator.
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        trace_op!("next", C);
        <C as Next>::next(self.cursor_mut());
        self
    }

    /// Post-increment: step forward, return the prior position.
    #[inline]
    pub fn post_inc(&mut self) -> Self
    where
        Self: Clone,
    {
        let prior = self.clone();
        self.inc();
        prior
    }
}

impl<C: BidirectionalCursor> BasicIterator<C> {
    /// Pre-decrement: exact inverse of [`inc`](Self::inc).
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        trace_op!("prev", C);
        <C as Prev>::prev(self.cursor_mut());
        self
    }

    /// Post-decrement. Needs a cloneable mixin, like [`post_inc`](Self::post_inc).
    #[inline]
    pub fn post_dec(&mut self) -> Self
    where
        Self: Clone,
    {
        let prior = self.clone();
        self.dec();
        prior
    }
}

// =============================================================================
// Random Offset
// =============================================================================

impl<C: RandomAccessCursor> AddAssign<C::Difference> for BasicIterator<C> {
    #[inline]
    fn add_assign(&mut self, n: C::Difference) {
        trace_op!("advance", C, n = n);
        <C as Advance>::advance(self.cursor_mut(), n);
    }
}

impl<C: RandomAccessCursor> SubAssign<C::Difference> for BasicIterator<C> {
    #[inline]
    fn sub_assign(&mut self, n: C::Difference) {
        trace_op!("advance", C, n = -n);
        <C as Advance>::advance(self.cursor_mut(), -n);
    }
}

impl<C: RandomAccessCursor> Add<C::Difference> for BasicIterator<C> {
    type Output = Self;

    #[inline]
    fn add(mut self, n: C::Difference) -> Self {
        self += n;
        self
    }
}

// =============================================================================
// Distance
// =============================================================================

impl<C: RandomAccessCursor> BasicIterator<C> {
    /// Signed number of steps from `self` to `other`; `other - self`.
    #[inline]
    pub fn distance_to<D>(&self, other: &BasicIterator<D>) -> C::Difference
    where
        C: DistanceTo<D>,
        D: Cursor,
    {
        trace_op!("distance_to", C);
        <C as DistanceTo<D>>::distance_to(self.cursor(), other.cursor())
    }
}

/// `a - b` is the distance from `b` to `a`.
///
/// Only the forwarded `distance_to` is traced. Debug builds also measure
/// `a` against itself to check the zero-distance law; that call is not
/// traced.
impl<C, D> Sub<BasicIterator<D>> for BasicIterator<C>
where
    C: RandomAccessCursor,
    D: DistanceTo<C, Difference = C::Difference>,
{
    type Output = C::Difference;

    #[inline]
    fn sub(self, rhs: BasicIterator<D>) -> C::Difference {
        &self - &rhs
    }
}

impl<'a, 'b, C, D> Sub<&'b BasicIterator<D>> for &'a BasicIterator<C>
where
    C: RandomAccessCursor,
    D: DistanceTo<C, Difference = C::Difference>,
{
    type Output = C::Difference;

    #[inline]
    fn sub(self, rhs: &'b BasicIterator<D>) -> C::Difference {
        trace_op!("distance_to", D);
        let distance = <D as DistanceTo<C>>::distance_to(rhs.cursor(), self.cursor());
        debug_assert_eq!(
            <C as DistanceTo<C>>::distance_to(self.cursor(), self.cursor()),
            C::Difference::ZERO,
            "cursor distance from a position to itself must be zero"
        );
        distance
    }
}

// =============================================================================
// Equality
// =============================================================================

impl<C, D> PartialEq<BasicIterator<D>> for BasicIterator<C>
where
    C: Equal<D>,
    D: Cursor,
{
    #[inline]
    fn eq(&self, other: &BasicIterator<D>) -> bool {
        trace_op!("equal", C);
        <C as Equal<D>>::equal(self.cursor(), other.cursor())
    }
}

impl<C: Equal> Eq for BasicIterator<C> {}

// =============================================================================
// Ordering
// =============================================================================

/// `a < b` iff `b` lies ahead of `a`, i.e. `a.distance_to(b) > 0`.
impl<C, D> PartialOrd<BasicIterator<D>> for BasicIterator<C>
where
    C: RandomAccessCursor + Equal<D> + DistanceTo<D>,
    D: Cursor,
{
    #[inline]
    fn partial_cmp(&self, other: &BasicIterator<D>) -> Option<Ordering> {
        let ahead = <C as DistanceTo<D>>::distance_to(self.cursor(), other.cursor());
        Some(C::Difference::ZERO.cmp(&ahead))
    }
}

impl<C: RandomAccessCursor> Ord for BasicIterator<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        let ahead = <C as DistanceTo<C>>::distance_to(self.cursor(), other.cursor());
        C::Difference::ZERO.cmp(&ahead)
    }
}
