// Common utilities shared by the user-facing macros
//
// This module contains:
// - parse_utils: keyword parsing helpers
// - generics: `Self` substitution and generics merging for generated impls

mod generics;
mod parse_utils;

pub use generics::*;
pub use parse_utils::*;
