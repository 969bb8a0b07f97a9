//! Tier predicates over the capability traits.
//!
//! Each tier is a trait alias with a blanket impl, so "does `C` satisfy
//! `ForwardCursor`" is an ordinary trait bound. These are the gates of the
//! generated iterator's operator surface.
//!
//! ```text
//! WeakInputCursor ── InputCursor ── ForwardCursor ── BidirectionalCursor ── RandomAccessCursor
//!  read + next        + equal        + Clone,         + prev                 + advance
//!                                      !single_pass                          + distance_to
//!
//! WeakOutputCursor<T> ── OutputCursor<T>
//!  set + next             + equal
//! ```

use crate::primitives::Absent;

use super::{Advance, Cursor, DistanceTo, Equal, Next, Prev, Readable, Writable};

/// Readable, single-pass, no equality.
pub trait WeakInputCursor: Readable + Next {}
impl<C: Readable + Next> WeakInputCursor for C {}

/// Readable with equality.
pub trait InputCursor: WeakInputCursor + Equal {}
impl<C: WeakInputCursor + Equal> InputCursor for C {}

/// Multi-pass: copies traverse independently.
pub trait ForwardCursor: InputCursor + Clone + Cursor<SinglePass = Absent> {}
impl<C: InputCursor + Clone + Cursor<SinglePass = Absent>> ForwardCursor for C {}

pub trait BidirectionalCursor: ForwardCursor + Prev {}
impl<C: ForwardCursor + Prev> BidirectionalCursor for C {}

/// O(1) offset and distance (when the cursor provides them in O(1)).
pub trait RandomAccessCursor: BidirectionalCursor + Advance + DistanceTo {}
impl<C: BidirectionalCursor + Advance + DistanceTo> RandomAccessCursor for C {}

/// Writable, no equality.
pub trait WeakOutputCursor<T>: Writable<T> + Next {}
impl<T, C: Writable<T> + Next> WeakOutputCursor<T> for C {}

/// Writable with equality.
pub trait OutputCursor<T>: WeakOutputCursor<T> + Equal {}
impl<T, C: WeakOutputCursor<T> + Equal> OutputCursor<T> for C {}
