//! # Capability Detection (runtime mirror)
//!
//! The authoritative capability set of a cursor lives in its `Cursor` impl
//! as type-level booleans. This module reads it back as plain values:
//!
//! ```ignore
//! use tola_iter::detect::CapabilitySet;
//!
//! const CAPS: CapabilitySet = CapabilitySet::of::<MyCursor>();
//! assert!(CAPS.read && CAPS.next);
//! assert_eq!(CAPS.tier(), Some(Tier::Forward));
//! ```
//!
//! For arbitrary trait queries on concrete types see [`Detect`] and
//! [`satisfies!`](crate::satisfies).

pub mod autoref;

use core::fmt;

use crate::category::Tier;
use crate::primitives::Bool;
use crate::protocol::Cursor;

pub use autoref::Detect;

/// Capability set of a cursor as plain booleans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CapabilitySet {
    pub read: bool,
    pub write: bool,
    pub next: bool,
    pub prev: bool,
    pub advance: bool,
    pub distance: bool,
    pub equal: bool,
    pub single_pass: bool,
}

impl CapabilitySet {
    pub const fn of<C: Cursor>() -> Self {
        CapabilitySet {
            read: <C::HasRead as Bool>::VALUE,
            write: <C::HasWrite as Bool>::VALUE,
            next: <C::HasNext as Bool>::VALUE,
            prev: <C::HasPrev as Bool>::VALUE,
            advance: <C::HasAdvance as Bool>::VALUE,
            distance: <C::HasDistance as Bool>::VALUE,
            equal: <C::HasEqual as Bool>::VALUE,
            single_pass: <C::SinglePass as Bool>::VALUE,
        }
    }

    /// Strongest tier the set supports, or `None` when it supports none.
    ///
    /// Same decision tree as [`CursorCategory`](crate::category::CursorCategory).
    pub const fn tier(&self) -> Option<Tier> {
        if self.read && self.next {
            Some(if !self.equal {
                Tier::WeakInput
            } else if self.single_pass {
                Tier::Input
            } else if !self.prev {
                Tier::Forward
            } else if self.advance && self.distance {
                Tier::RandomAccess
            } else {
                Tier::Bidirectional
            })
        } else if self.write && self.next {
            Some(if self.equal { Tier::Output } else { Tier::WeakOutput })
        } else {
            None
        }
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [
            (self.read, "read"),
            (self.write, "write"),
            (self.next, "next"),
            (self.prev, "prev"),
            (self.advance, "advance"),
            (self.distance, "distance"),
            (self.equal, "equal"),
            (self.single_pass, "single_pass"),
        ];
        f.write_str("{")?;
        let mut first = true;
        for (_, name) in flags.iter().filter(|(on, _)| *on) {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        f.write_str("}")
    }
}
