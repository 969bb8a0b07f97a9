//! Generic algorithms dispatching on the iterator category.
//!
//! Each algorithm is a strategy trait implemented on the category tags;
//! the free functions pick the implementation through
//! [`CursorCategory<C>`](crate::category::CursorCategory), so a random-access
//! iterator jumps in O(1) and everything weaker walks.
//!
//! | Algorithm  | Forward tiers      | Bidirectional      | RandomAccess |
//! |------------|--------------------|--------------------|--------------|
//! | `advance`  | `n` x `inc`        | `n` x `inc`/`dec`  | `+= n`       |
//! | `distance` | count `inc` to end | count `inc` to end | `last - first` |

use crate::category::{
    BidirectionalTag, Category, CursorCategory, ForwardTag, InputTag, OutputTag, RandomAccessTag,
    WeakInputTag, WeakOutputTag,
};
use crate::iterator::BasicIterator;
use crate::primitives::Distance;
use crate::protocol::{BidirectionalCursor, Cursor, Equal, Next, RandomAccessCursor};

// =============================================================================
// Strategies
// =============================================================================

/// How a category moves an iterator by `n` positions.
pub trait Stepping<C: Cursor>: Category {
    fn advance(it: &mut BasicIterator<C>, n: C::Difference);
}

/// How a category counts the positions between two iterators.
pub trait Measuring<C: Cursor>: Category {
    fn distance(first: BasicIterator<C>, last: &BasicIterator<C>) -> C::Difference;
}

macro_rules! forward_stepping {
    ($($tag:ty),* $(,)?) => {
        $(
            impl<C: Next> Stepping<C> for $tag {
                fn advance(it: &mut BasicIterator<C>, mut n: C::Difference) {
                    debug_assert!(!n.is_negative(), "cannot advance a {} iterator backwards", Self::NAME);
                    while n > C::Difference::ZERO {
                        it.inc();
                        n -= C::Difference::ONE;
                    }
                }
            }
        )*
    };
}

forward_stepping!(WeakOutputTag, WeakInputTag, OutputTag, InputTag, ForwardTag);

impl<C: BidirectionalCursor> Stepping<C> for BidirectionalTag {
    fn advance(it: &mut BasicIterator<C>, mut n: C::Difference) {
        while n > C::Difference::ZERO {
            it.inc();
            n -= C::Difference::ONE;
        }
        while n < C::Difference::ZERO {
            it.dec();
            n += C::Difference::ONE;
        }
    }
}

impl<C: RandomAccessCursor> Stepping<C> for RandomAccessTag {
    #[inline]
    fn advance(it: &mut BasicIterator<C>, n: C::Difference) {
        *it += n;
    }
}

macro_rules! counting_measure {
    ($($tag:ty),* $(,)?) => {
        $(
            impl<C: Next + Equal> Measuring<C> for $tag {
                fn distance(mut first: BasicIterator<C>, last: &BasicIterator<C>) -> C::Difference {
                    let mut n = C::Difference::ZERO;
                    while first != *last {
                        first.inc();
                        n += C::Difference::ONE;
                    }
                    n
                }
            }
        )*
    };
}

counting_measure!(OutputTag, InputTag, ForwardTag, BidirectionalTag);

impl<C: RandomAccessCursor> Measuring<C> for RandomAccessTag {
    #[inline]
    fn distance(first: BasicIterator<C>, last: &BasicIterator<C>) -> C::Difference {
        last - &first
    }
}

// =============================================================================
// Algorithms
// =============================================================================

/// Move `it` by `n` positions. Negative `n` needs a bidirectional iterator.
#[inline]
pub fn advance<C: Cursor>(it: &mut BasicIterator<C>, n: C::Difference)
where
    CursorCategory<C>: Stepping<C>,
{
    <CursorCategory<C> as Stepping<C>>::advance(it, n);
}

/// Number of `inc` steps from `first` to `last`.
///
/// `last` must be reachable from `first`; for non-random-access iterators
/// an unreachable `last` never terminates.
#[inline]
pub fn distance<C: Cursor>(first: BasicIterator<C>, last: &BasicIterator<C>) -> C::Difference
where
    CursorCategory<C>: Measuring<C>,
{
    <CursorCategory<C> as Measuring<C>>::distance(first, last)
}

/// `it` advanced by `n`.
#[inline]
pub fn next<C: Cursor>(mut it: BasicIterator<C>, n: C::Difference) -> BasicIterator<C>
where
    CursorCategory<C>: Stepping<C>,
{
    advance(&mut it, n);
    it
}

/// `it` moved back by `n`.
#[inline]
pub fn prev<C: BidirectionalCursor>(mut it: BasicIterator<C>, n: C::Difference) -> BasicIterator<C>
where
    CursorCategory<C>: Stepping<C>,
{
    advance(&mut it, -n);
    it
}
