//! Iterator traits: the (category, value, difference) triple generic
//! algorithms query on an iterator type.

use crate::category::{Category, CursorCategory, Tier};
use crate::primitives::Distance;
use crate::protocol::Cursor;

use super::BasicIterator;

/// Static description of an iterator type.
pub trait IteratorTraits {
    type Category: Category;
    type Value;
    type Difference: Distance;

    const TIER: Tier = <Self::Category as Category>::TIER;
}

impl<C: Cursor> IteratorTraits for BasicIterator<C>
where
    CursorCategory<C>: Category,
{
    type Category = CursorCategory<C>;
    type Value = C::Value;
    type Difference = C::Difference;
}

pub type IteratorCategory<I> = <I as IteratorTraits>::Category;
pub type IteratorValue<I> = <I as IteratorTraits>::Value;
pub type IteratorDifference<I> = <I as IteratorTraits>::Difference;
