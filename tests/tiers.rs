//! Trait derivation across all seven tiers.

mod common;

use common::{CellOutput, CellWriter, ConstPos, MutPos, TextCursor};
use tola_iter::category::*;
use tola_iter::detect::autoref::*;
use tola_iter::prelude::*;
use tola_iter::{satisfies, CapabilitySet};

// =============================================================================
// Cursors for the tiers the shared set lacks
// =============================================================================

/// Move-only token stream: readable, comparable, single pass.
#[derive(Debug)]
struct Tokens {
    queue: Vec<u32>,
}

#[cursor(single_pass)]
impl Tokens {
    fn current(&self) -> u32 {
        self.queue[0]
    }

    fn next(&mut self) {
        self.queue.remove(0);
    }

    fn equal(&self, other: &Self) -> bool {
        self.queue.is_empty() == other.queue.is_empty()
    }
}

/// Counts upward forever.
#[derive(Debug, Clone, Copy, Default)]
struct Up(u64);

#[cursor]
impl Up {
    fn current(&self) -> u64 {
        self.0
    }

    fn next(&mut self) {
        self.0 += 1;
    }

    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Walks a number line; no offsets.
#[derive(Debug, Clone, Copy, Default)]
struct Walk(i16);

#[cursor(difference = i16)]
impl Walk {
    fn current(&self) -> i16 {
        self.0
    }

    fn next(&mut self) {
        self.0 += 1;
    }

    fn prev(&mut self) {
        self.0 -= 1;
    }

    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Has `advance` but no `distance_to`: stays bidirectional.
#[derive(Debug, Clone, Copy, Default)]
struct Skip(i64);

#[cursor]
impl Skip {
    fn current(&self) -> i64 {
        self.0
    }

    fn next(&mut self) {
        self.0 += 1;
    }

    fn prev(&mut self) {
        self.0 -= 1;
    }

    fn advance(&mut self, n: i64) {
        self.0 += n;
    }

    fn equal(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Reads and writes; `set` takes anything convertible to the element.
#[derive(Debug, Clone, Copy, Default)]
struct Gauge(u8);

#[cursor]
impl Gauge {
    fn current(&self) -> u8 {
        self.0
    }

    fn set<V: Into<u8>>(&mut self, value: V) {
        self.0 = value.into();
    }

    fn next(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

fn tier_of<C: Cursor>() -> Tier
where
    CursorCategory<C>: Category,
{
    <CursorCategory<C> as Category>::TIER
}

fn assert_tier<C: Cursor>(expected: Tier)
where
    CursorCategory<C>: Category,
{
    assert_eq!(tier_of::<C>(), expected, "{}", std::any::type_name::<C>());
    assert_eq!(CapabilitySet::of::<C>().tier(), Some(expected));
    assert_eq!(<BasicIterator<C> as IteratorTraits>::TIER, expected);
}

// =============================================================================
// Derivation
// =============================================================================

#[test]
fn test_all_seven_tiers() {
    assert_tier::<CellWriter<'static>>(Tier::WeakOutput);
    assert_tier::<TextCursor<'static>>(Tier::WeakInput);
    assert_tier::<CellOutput<'static>>(Tier::Output);
    assert_tier::<Tokens>(Tier::Input);
    assert_tier::<Up>(Tier::Forward);
    assert_tier::<Walk>(Tier::Bidirectional);
    assert_tier::<Skip>(Tier::Bidirectional);
    assert_tier::<MutPos<'static>>(Tier::RandomAccess);
    assert_tier::<ConstPos<'static>>(Tier::RandomAccess);
}

#[test]
fn test_category_tags() {
    let _: CursorCategory<Tokens> = InputTag;
    let _: CursorCategory<Up> = ForwardTag;
    let _: CursorCategory<Walk> = BidirectionalTag;
    assert_eq!(<CursorCategory<Up> as Category>::NAME, "forward");
}

#[test]
fn test_refinement_dispatch() {
    fn is_forward<C: Cursor>() -> bool
    where
        CursorCategory<C>: Category,
    {
        <CursorCategory<C> as Category>::TIER >= Tier::Forward
    }

    fn needs_bidirectional<C: Cursor>()
    where
        CursorCategory<C>: BidirectionalCategory,
    {
    }

    needs_bidirectional::<Walk>();
    needs_bidirectional::<MutPos<'static>>();
    assert!(is_forward::<Up>());
    assert!(!is_forward::<Tokens>());
}

#[test]
fn test_difference_type_selection() {
    let _: <Walk as Cursor>::Difference = 0i16;
    let _: <Skip as Cursor>::Difference = 0i64;
    let _: <Up as Cursor>::Difference = 0isize;
}

// =============================================================================
// Capability sets
// =============================================================================

#[test]
fn test_capability_sets() {
    let caps = CapabilitySet::of::<Skip>();
    assert!(caps.read && caps.next && caps.prev && caps.advance && caps.equal);
    assert!(!caps.distance && !caps.write && !caps.single_pass);

    let caps = CapabilitySet::of::<Tokens>();
    assert!(caps.single_pass);
    assert_eq!(caps.to_string(), "{read, next, equal, single_pass}");
}

/// Strongest readable concept the cursor actually satisfies.
macro_rules! probed_tier {
    ($C:ty) => {
        if Detect::<$C>::IS_RANDOM_ACCESS_CURSOR {
            Some(Tier::RandomAccess)
        } else if Detect::<$C>::IS_BIDIRECTIONAL_CURSOR {
            Some(Tier::Bidirectional)
        } else if Detect::<$C>::IS_FORWARD_CURSOR {
            Some(Tier::Forward)
        } else if Detect::<$C>::IS_INPUT_CURSOR {
            Some(Tier::Input)
        } else if Detect::<$C>::IS_WEAK_INPUT_CURSOR {
            Some(Tier::WeakInput)
        } else {
            None
        }
    };
}

#[test]
fn test_derived_tier_is_backed_by_concepts() {
    assert_eq!(probed_tier!(TextCursor<'static>), Some(tier_of::<TextCursor<'static>>()));
    assert_eq!(probed_tier!(Tokens), Some(tier_of::<Tokens>()));
    assert_eq!(probed_tier!(Up), Some(tier_of::<Up>()));
    assert_eq!(probed_tier!(Walk), Some(tier_of::<Walk>()));
    assert_eq!(probed_tier!(Skip), Some(tier_of::<Skip>()));
    assert_eq!(probed_tier!(Gauge), Some(tier_of::<Gauge>()));

    // Generic `equal<O>` / `distance_to<O>` still cover `O = Self`.
    assert_eq!(probed_tier!(MutPos<'static>), Some(tier_of::<MutPos<'static>>()));
    assert_eq!(probed_tier!(ConstPos<'static>), Some(tier_of::<ConstPos<'static>>()));
    assert!(satisfies!(BasicIterator<MutPos<'static>>, Ord));
    assert!(satisfies!(MutPos<'static>, Equal<ConstPos<'static>>));

    assert!(satisfies!(CellWriter<'static>, WeakOutputCursor<u8>));
    assert!(satisfies!(CellOutput<'static>, OutputCursor<u8>));
    assert!(satisfies!(BasicIterator<CellOutput<'static>>, Eq));
}

#[test]
fn test_generic_set_accepts_element_type() {
    assert_tier::<Gauge>(Tier::WeakInput);
    assert!(satisfies!(Gauge, Writable<u8>));
    assert!(satisfies!(Gauge, Writable<bool>));

    let mut it = BasicIterator::from_cursor(Gauge(0));
    it.set(7u8);
    assert_eq!(it.get(), 7);
    it.set(true);
    it.inc();
    assert_eq!(it.get(), 2);
}

#[test]
fn test_concept_probes_match_tiers() {
    assert!(Detect::<Tokens>::IS_INPUT_CURSOR);
    assert!(!Detect::<Tokens>::IS_FORWARD_CURSOR);
    assert!(Detect::<Up>::IS_FORWARD_CURSOR);
    assert!(!Detect::<Up>::IS_BIDIRECTIONAL_CURSOR);
    assert!(Detect::<Walk>::IS_BIDIRECTIONAL_CURSOR);
    assert!(!Detect::<Skip>::IS_RANDOM_ACCESS_CURSOR);
    assert!(Detect::<Skip>::IS_ADVANCE);
}

// =============================================================================
// Single pass
// =============================================================================

#[test]
fn test_single_pass_iterator_is_move_only() {
    assert!(!satisfies!(BasicIterator<Tokens>, Clone));
    assert!(satisfies!(BasicIterator<Tokens>, PartialEq));

    let mut it = BasicIterator::from_cursor(Tokens { queue: vec![4, 5] });
    let end = BasicIterator::from_cursor(Tokens { queue: Vec::new() });

    assert_eq!(it.get(), 4);
    it.inc();
    assert_eq!(it.get(), 5);
    assert!(it != end);
    it.inc();
    assert!(it == end);
}

#[test]
fn test_forward_copies_are_independent() {
    let mut a = BasicIterator::from_cursor(Up(0));
    let b = a;
    a.inc().inc();
    assert_eq!(a.get(), 2);
    assert_eq!(b.get(), 0);
    assert!(a != b);
}
