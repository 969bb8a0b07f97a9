//! Trait derivation: capability set -> category tag.
//!
//! A pure type-level function evaluated with `Bool::If`:
//!
//! ```text
//! read & next ?
//! ├─ equal ?
//! │  ├─ single_pass ? ── Input
//! │  └─ prev ?
//! │     ├─ advance & distance ? ── RandomAccess : Bidirectional
//! │     └─ Forward
//! └─ WeakInput
//! write & next ?
//! ├─ equal ? ── Output : WeakOutput
//! └─ NoCategory
//! ```

use crate::primitives::Bool;
use crate::protocol::Cursor;

use super::{
    BidirectionalTag, ForwardTag, InputTag, OutputTag, RandomAccessTag, WeakInputTag,
    WeakOutputTag,
};

/// Result for a cursor with neither read nor write; deliberately not a
/// [`Category`](super::Category), so no iterator can be built over it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCategory;

type Both<A, B> = <A as Bool>::And<B>;

type MultiPass<C> = <<C as Cursor>::HasPrev as Bool>::If<
    <Both<<C as Cursor>::HasAdvance, <C as Cursor>::HasDistance> as Bool>::If<
        RandomAccessTag,
        BidirectionalTag,
    >,
    ForwardTag,
>;

type ReadChain<C> = <<C as Cursor>::HasEqual as Bool>::If<
    <<C as Cursor>::SinglePass as Bool>::If<InputTag, MultiPass<C>>,
    WeakInputTag,
>;

type WriteChain<C> = <Both<<C as Cursor>::HasWrite, <C as Cursor>::HasNext> as Bool>::If<
    <<C as Cursor>::HasEqual as Bool>::If<OutputTag, WeakOutputTag>,
    NoCategory,
>;

/// Computes the category tag of a cursor.
pub trait DeriveCategory {
    type Out;
}

impl<C: Cursor> DeriveCategory for C {
    type Out = <Both<C::HasRead, C::HasNext> as Bool>::If<ReadChain<C>, WriteChain<C>>;
}

/// Category tag of cursor `C`.
pub type CursorCategory<C> = <C as DeriveCategory>::Out;
