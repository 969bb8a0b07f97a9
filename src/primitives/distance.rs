//! Signed distance types.
//!
//! `Cursor::Difference` must be a signed integer so that subtraction is
//! antisymmetric and relational operators can read the sign.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A signed integral distance between two cursor positions.
pub trait Distance:
    Copy
    + Ord
    + Hash
    + Debug
    + Default
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    #[inline(always)]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_distance {
    ($($int:ty),* $(,)?) => {
        $(
            impl Distance for $int {
                const ZERO: Self = 0;
                const ONE: Self = 1;
            }
        )*
    };
}

impl_distance!(i8, i16, i32, i64, i128, isize);
