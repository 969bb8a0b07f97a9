//! Construction adapters.
//!
//! The generated iterator never stores a cursor directly; it stores the
//! cursor's `Mixin`. A mixin is anything that can be built `From` the
//! cursor and hands the cursor back. Cursor authors add constructors by
//! adding `From` impls to their own mixin, and `BasicIterator::new`
//! accepts whatever the mixin accepts:
//!
//! ```ignore
//! #[derive(Clone, Copy, Default, Mixin)]
//! struct TextMixin<'a>(BasicMixin<TextCursor<'a>>);
//!
//! impl<'a> From<&'a [u8]> for TextMixin<'a> {
//!     fn from(text: &'a [u8]) -> Self {
//!         TextCursor { text, at: 0 }.into()
//!     }
//! }
//!
//! let a = BasicIterator::<TextCursor>::new(b"hello".as_slice()); // raw position
//! let b = BasicIterator::new(TextCursor { text: b"hello", at: 0 }); // two-step
//! ```

/// Holder of a cursor inside the generated iterator.
pub trait Mixin<C>: From<C> {
    fn get(&self) -> &C;
    fn get_mut(&mut self) -> &mut C;
    fn into_cursor(self) -> C;
}

/// Default mixin: stores the cursor unchanged and adds nothing.
///
/// `BasicMixin::default()` is `C::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BasicMixin<C>(C);

impl<C> BasicMixin<C> {
    #[inline(always)]
    pub const fn new(cursor: C) -> Self {
        BasicMixin(cursor)
    }
}

impl<C> From<C> for BasicMixin<C> {
    #[inline(always)]
    fn from(cursor: C) -> Self {
        BasicMixin(cursor)
    }
}

impl<C> Mixin<C> for BasicMixin<C> {
    #[inline(always)]
    fn get(&self) -> &C {
        &self.0
    }

    #[inline(always)]
    fn get_mut(&mut self) -> &mut C {
        &mut self.0
    }

    #[inline(always)]
    fn into_cursor(self) -> C {
        self.0
    }
}
