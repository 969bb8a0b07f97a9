//! # Layer 2: Categories
//!
//! The seven capability tiers, their zero-sized tags, and the refinement
//! traits generic algorithms dispatch on.
//!
//! | Tier            | Tag                  | Conventional name |
//! |-----------------|----------------------|-------------------|
//! | `WeakOutput`    | [`WeakOutputTag`]    | `weak-output`     |
//! | `WeakInput`     | [`WeakInputTag`]     | `weak-input`      |
//! | `Output`        | [`OutputTag`]        | `output`          |
//! | `Input`         | [`InputTag`]         | `input`           |
//! | `Forward`       | [`ForwardTag`]       | `forward`         |
//! | `Bidirectional` | [`BidirectionalTag`] | `bidirectional`   |
//! | `RandomAccess`  | [`RandomAccessTag`]  | `random-access`   |

pub mod derive;

use core::fmt;

pub use derive::{CursorCategory, DeriveCategory, NoCategory};

// =============================================================================
// Tier
// =============================================================================

/// Capability tier, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    WeakOutput,
    WeakInput,
    Output,
    Input,
    Forward,
    Bidirectional,
    RandomAccess,
}

impl Tier {
    pub const ALL: [Tier; 7] = [
        Tier::WeakOutput,
        Tier::WeakInput,
        Tier::Output,
        Tier::Input,
        Tier::Forward,
        Tier::Bidirectional,
        Tier::RandomAccess,
    ];

    /// Conventional name used by generic-algorithm libraries.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tier::WeakOutput => "weak-output",
            Tier::WeakInput => "weak-input",
            Tier::Output => "output",
            Tier::Input => "input",
            Tier::Forward => "forward",
            Tier::Bidirectional => "bidirectional",
            Tier::RandomAccess => "random-access",
        }
    }

    pub const fn is_readable(self) -> bool {
        !matches!(self, Tier::WeakOutput | Tier::Output)
    }

    /// Equality is part of the tier.
    pub const fn is_comparable(self) -> bool {
        !matches!(self, Tier::WeakOutput | Tier::WeakInput)
    }

    /// Safe to traverse more than once through independent copies.
    pub const fn is_multi_pass(self) -> bool {
        matches!(self, Tier::Forward | Tier::Bidirectional | Tier::RandomAccess)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Category Tags
// =============================================================================

/// A category tag: the type-level face of a [`Tier`].
pub trait Category: Copy + Default + fmt::Debug + 'static {
    const TIER: Tier;
    const NAME: &'static str = Self::TIER.as_str();
}

macro_rules! define_tags {
    ($($tier:ident),* $(,)?) => {
        $(
            ::paste::paste! {
                #[doc = "Category tag for [`Tier::" $tier "`]."]
                #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
                pub struct [<$tier Tag>];

                impl Category for [<$tier Tag>] {
                    const TIER: Tier = Tier::$tier;
                }
            }
        )*
    };
}

define_tags!(WeakOutput, WeakInput, Output, Input, Forward, Bidirectional, RandomAccess);

// =============================================================================
// Refinement Traits
// =============================================================================

/// Readable tiers.
pub trait WeakInputCategory: Category {}
/// Readable tiers with equality.
pub trait InputCategory: WeakInputCategory {}
pub trait ForwardCategory: InputCategory {}
pub trait BidirectionalCategory: ForwardCategory {}
pub trait RandomAccessCategory: BidirectionalCategory {}

/// Write-only tiers.
pub trait WeakOutputCategory: Category {}
pub trait OutputCategory: WeakOutputCategory {}

macro_rules! refines {
    ($tag:ty => $($category:ident),+) => {
        $( impl $category for $tag {} )+
    };
}

refines!(WeakInputTag => WeakInputCategory);
refines!(InputTag => WeakInputCategory, InputCategory);
refines!(ForwardTag => WeakInputCategory, InputCategory, ForwardCategory);
refines!(BidirectionalTag => WeakInputCategory, InputCategory, ForwardCategory, BidirectionalCategory);
refines!(RandomAccessTag =>
    WeakInputCategory, InputCategory, ForwardCategory, BidirectionalCategory, RandomAccessCategory);
refines!(WeakOutputTag => WeakOutputCategory);
refines!(OutputTag => WeakOutputCategory, OutputCategory);
