//! Autoref-based capability probes.
//!
//! "Inherent Const Fallback": for each trait `T` there is a fallback trait
//! carrying `const IS_T: bool = false`, implemented for every `Detect<X>`,
//! and an inherent `const IS_T: bool = true` on `Detect<X>` where `X: T`.
//! Resolving `Detect::<Concrete>::IS_T` picks the inherent const when the
//! bound holds and the trait const otherwise.
//!
//! Only works for **concrete types** at the call site. Inside
//! `fn foo<C>()` the fallback always wins; use the concept traits as
//! bounds there instead.
//!
//! ```
//! use tola_iter::detect::autoref::*;
//! use tola_iter::prelude::*;
//!
//! #[derive(Clone, Copy, Default)]
//! struct Countdown(u8);
//!
//! #[cursor]
//! impl Countdown {
//!     fn current(&self) -> u8 { self.0 }
//!     fn next(&mut self) { self.0 -= 1; }
//!     fn equal(&self, other: &Self) -> bool { self.0 == other.0 }
//! }
//!
//! assert!(Detect::<Countdown>::IS_FORWARD_CURSOR);
//! assert!(!Detect::<Countdown>::IS_PREV);
//! ```

use core::marker::PhantomData;

use crate::protocol::{
    Advance, BidirectionalCursor, DistanceTo, Equal, ForwardCursor, InputCursor, Next, Prev,
    RandomAccessCursor, Readable, WeakInputCursor,
};

/// Detection wrapper type.
#[doc(hidden)]
pub struct Detect<T>(PhantomData<T>);

macro_rules! impl_detect {
    ($($Trait:ident => $NAME:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc(hidden)]
                pub trait [<$Trait Fallback>] { const $NAME: bool = false; }
                impl<T> [<$Trait Fallback>] for Detect<T> {}
                impl<T: $Trait> Detect<T> { pub const $NAME: bool = true; }
            }
        )*
    };
}

impl_detect! {
    Readable => IS_READABLE,
    Next => IS_NEXT,
    Prev => IS_PREV,
    Advance => IS_ADVANCE,
    DistanceTo => IS_DISTANCE_TO,
    Equal => IS_EQUAL,
    WeakInputCursor => IS_WEAK_INPUT_CURSOR,
    InputCursor => IS_INPUT_CURSOR,
    ForwardCursor => IS_FORWARD_CURSOR,
    BidirectionalCursor => IS_BIDIRECTIONAL_CURSOR,
    RandomAccessCursor => IS_RANDOM_ACCESS_CURSOR,
}

// =============================================================================
// satisfies! - arbitrary trait queries (concrete types only)
// =============================================================================

/// Whether a concrete type implements a trait, as a `bool`.
///
/// Handy for conformance checks of generic traits the [`Detect`] probes
/// do not cover, such as `WeakOutputCursor<T>` or cross-type `Equal<O>`.
///
/// ```
/// use tola_iter::satisfies;
///
/// assert!(satisfies!(String, Clone));
/// assert!(!satisfies!(String, Copy));
/// assert!(satisfies!(u8, PartialEq<u8>));
/// ```
#[macro_export]
macro_rules! satisfies {
    ($T:ty, $Trait:path) => {{
        struct __Probe<T>(::core::marker::PhantomData<T>);

        trait __Fallback { const VAL: bool = false; }
        impl<T> __Fallback for __Probe<T> {}

        impl<T: $Trait> __Probe<T> {
            #[allow(dead_code)]
            const VAL: bool = true;
        }

        __Probe::<$T>::VAL
    }};
}
