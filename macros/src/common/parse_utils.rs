//! Common parsing utilities
//!
//! Shared parsing helpers for `key` / `key = value` attribute arguments.

use syn::{parse::ParseStream, Ident, Token};

// =============================================================================
// Keyword Detection
// =============================================================================

/// Check if the next identifier is any of the given keywords
pub fn peek_any_keyword(input: ParseStream, keywords: &[&str]) -> bool {
    if input.peek(Ident) {
        let fork = input.fork();
        if let Ok(ident) = fork.parse::<Ident>() {
            let name = ident.to_string();
            return keywords.contains(&name.as_str());
        }
    }
    false
}

/// Parse `= Value` after a keyword, rejecting a second occurrence.
pub fn parse_assign_once<T: syn::parse::Parse>(
    input: ParseStream,
    key: &Ident,
    slot: &mut Option<T>,
) -> syn::Result<()> {
    input.parse::<Token![=]>()?;
    let value: T = input.parse()?;
    if slot.is_some() {
        return Err(syn::Error::new(key.span(), format!("duplicate `{}` argument", key)));
    }
    *slot = Some(value);
    Ok(())
}

/// Consume a trailing `,` unless the stream is exhausted.
pub fn parse_separator(input: ParseStream) -> syn::Result<()> {
    if !input.is_empty() {
        input.parse::<Token![,]>()?;
    }
    Ok(())
}
