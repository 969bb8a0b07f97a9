//! Procedural macros for the tola-iter cursor protocol
//!
//! # Macro API
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[cursor]` | inherent impl | Detect cursor operations, emit capability impls |
//! | `#[derive(Mixin)]` | struct | Turn a single-field struct into a construction adapter |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Copy, Default)]
//! struct Pos<'a> { text: &'a [u8], at: usize }
//!
//! #[cursor]
//! impl<'a> Pos<'a> {
//!     fn current(&self) -> u8 { self.text[self.at] }
//!     fn next(&mut self) { self.at += 1; }
//! }
//!
//! // Pos is now a weak-input cursor:
//! let mut it = BasicIterator::from_cursor(Pos { text: b"hi", at: 0 });
//! assert_eq!(it.get(), b'h');
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Two-tier: common / user)
// =============================================================================

mod common;
mod user;

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Capability detector for cursor types.
///
/// Scans the annotated inherent `impl` block for the operations
/// `current`, `set`, `next`, `prev`, `advance`, `distance_to` and `equal`.
/// Each one found becomes the matching capability trait impl, and the
/// `Cursor` impl records the findings as type-level booleans.
///
/// `equal` and `distance_to` must take `&Self` (or a method generic);
/// `set` must accept what `current` returns.
///
/// # Arguments
///
/// - `single_pass` - copies of the cursor do not traverse independently
/// - `mixin = Type` - construction adapter (default `BasicMixin<Self>`)
/// - `difference = Type` - distance type when no operation fixes it
///
/// # Usage
/// ```ignore
/// #[cursor(mixin = SliceMixin<'a>)]
/// impl<'a> SliceCursor<'a> {
///     fn current(&self) -> u8 { self.data[self.pos] }
///     fn next(&mut self) { self.pos += 1; }
///     fn equal(&self, other: &Self) -> bool { self.pos == other.pos }
/// }
/// ```
#[proc_macro_attribute]
pub fn cursor(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as user::CursorArgs);
    let item = parse_macro_input!(item as syn::ItemImpl);

    user::expand_cursor(args, item)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}

/// Derive macro for construction adapters.
///
/// The struct must hold exactly one field: either the cursor itself or a
/// `BasicMixin<Cursor>`. Generates `From<Cursor>` and `Mixin<Cursor>`;
/// extra constructors are plain `From` impls written next to it.
///
/// # Usage
/// ```ignore
/// #[derive(Clone, Copy, Default, Mixin)]
/// struct SliceMixin<'a>(BasicMixin<SliceCursor<'a>>);
///
/// impl<'a> From<&'a [u8]> for SliceMixin<'a> {
///     fn from(data: &'a [u8]) -> Self {
///         SliceCursor { data, pos: 0 }.into()
///     }
/// }
/// ```
#[proc_macro_derive(Mixin)]
pub fn derive_mixin(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    user::expand_derive_mixin(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
