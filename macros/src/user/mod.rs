//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[cursor]` | on inherent impl | Capability detection |
//! | `#[derive(Mixin)]` | on struct | Construction adapter |

mod cursor;
mod cursor_args;
mod mixin;
mod operation;

pub use cursor::expand_cursor;
pub use cursor_args::CursorArgs;
pub use mixin::expand_derive_mixin;

/// Path of the runtime crate in generated code.
fn krate() -> proc_macro2::TokenStream {
    quote::quote! { ::tola_iter }
}
