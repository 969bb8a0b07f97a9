//! # Layer 3: Generated Iterator
//!
//! [`BasicIterator<C>`] owns exactly one `C::Mixin` (and through it one
//! cursor) by value. Every operator forwards to the cursor and is gated by
//! a trait bound, so using an operator the cursor's tier lacks is a type
//! error rather than a runtime failure.
//!
//! ```text
//! BasicIterator<C>
//!   └─ C::Mixin        (construction adapter: BasicMixin<C> or author type)
//!        └─ C          (cursor: current / set / next / prev / advance / ...)
//! ```

mod ops;
pub mod traits;

use core::fmt;

use crate::category::{Category, CursorCategory};
use crate::mixin::Mixin;
use crate::protocol::Cursor;

pub use traits::{IteratorCategory, IteratorDifference, IteratorTraits, IteratorValue};

/// Iterator synthesized from a cursor.
///
/// Construction requires `CursorCategory<C>: Category`: a cursor with no
/// valid tier cannot be wrapped.
///
/// ```compile_fail
/// use tola_iter::{Absent, BasicIterator, BasicMixin, Cursor};
///
/// // A hand-written cursor that claims neither read nor write.
/// struct Inert;
/// impl Cursor for Inert {
///     type Value = ();
///     type Difference = isize;
///     type Mixin = BasicMixin<Self>;
///     type HasRead = Absent;
///     type HasWrite = Absent;
///     type HasNext = Absent;
///     type HasPrev = Absent;
///     type HasAdvance = Absent;
///     type HasDistance = Absent;
///     type HasEqual = Absent;
///     type SinglePass = Absent;
/// }
///
/// let _ = BasicIterator::from_cursor(Inert);
/// ```
pub struct BasicIterator<C: Cursor> {
    mixin: C::Mixin,
}

// =============================================================================
// Construction
// =============================================================================

impl<C: Cursor> BasicIterator<C>
where
    CursorCategory<C>: Category,
{
    /// Build from anything the mixin can be built from.
    ///
    /// With the default mixin that is just the cursor; author mixins may
    /// add raw positions or other handles.
    #[inline]
    pub fn new<A>(arg: A) -> Self
    where
        C::Mixin: From<A>,
    {
        Self::from_mixin(<C::Mixin as From<A>>::from(arg))
    }

    #[inline]
    pub fn from_cursor(cursor: C) -> Self {
        Self::from_mixin(<C::Mixin as From<C>>::from(cursor))
    }

    #[inline]
    pub fn from_mixin(mixin: C::Mixin) -> Self {
        BasicIterator { mixin }
    }
}

impl<C: Cursor> From<C> for BasicIterator<C>
where
    CursorCategory<C>: Category,
{
    #[inline]
    fn from(cursor: C) -> Self {
        Self::from_cursor(cursor)
    }
}

impl<C: Cursor> Default for BasicIterator<C>
where
    C::Mixin: Default,
    CursorCategory<C>: Category,
{
    #[inline]
    fn default() -> Self {
        Self::from_mixin(<C::Mixin as Default>::default())
    }
}

// =============================================================================
// Access & Conversion
// =============================================================================

impl<C: Cursor> BasicIterator<C> {
    #[inline(always)]
    pub fn cursor(&self) -> &C {
        <C::Mixin as Mixin<C>>::get(&self.mixin)
    }

    #[inline(always)]
    pub fn cursor_mut(&mut self) -> &mut C {
        <C::Mixin as Mixin<C>>::get_mut(&mut self.mixin)
    }

    #[inline(always)]
    pub fn into_cursor(self) -> C {
        <C::Mixin as Mixin<C>>::into_cursor(self.mixin)
    }

    #[inline(always)]
    pub fn mixin(&self) -> &C::Mixin {
        &self.mixin
    }

    #[inline(always)]
    pub fn into_mixin(self) -> C::Mixin {
        self.mixin
    }

    /// Convert to an iterator over a cursor this one converts into,
    /// e.g. a mutable-position cursor into its read-only counterpart.
    ///
    /// ```compile_fail
    /// # use tola_iter::prelude::*;
    /// # #[derive(Clone, Copy, Default)]
    /// # struct A(usize);
    /// # #[cursor]
    /// # impl A { fn current(&self) -> usize { self.0 } fn next(&mut self) { self.0 += 1; } }
    /// # #[derive(Clone, Copy, Default)]
    /// # struct B(usize);
    /// # #[cursor]
    /// # impl B { fn current(&self) -> usize { self.0 } fn next(&mut self) { self.0 += 1; } }
    /// // No `From<A> for B`: the conversion does not exist.
    /// let b: BasicIterator<B> = BasicIterator::from_cursor(A(0)).convert();
    /// ```
    #[inline]
    pub fn convert<D>(self) -> BasicIterator<D>
    where
        D: Cursor + From<C>,
        CursorCategory<D>: Category,
    {
        BasicIterator::from_cursor(D::from(self.into_cursor()))
    }
}

// =============================================================================
// Value Semantics
// =============================================================================

impl<C: Cursor> Clone for BasicIterator<C>
where
    C::Mixin: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        BasicIterator { mixin: self.mixin.clone() }
    }
}

impl<C: Cursor> Copy for BasicIterator<C> where C::Mixin: Copy {}

impl<C: Cursor + fmt::Debug> fmt::Debug for BasicIterator<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicIterator")
            .field("cursor", self.cursor())
            .finish()
    }
}
