//! `#[cursor(...)]` argument parser
//!
//! ```ignore
//! #[cursor]
//! #[cursor(single_pass)]
//! #[cursor(mixin = MyMixin<'a>, difference = i64)]
//! ```

use syn::{
    parse::{Parse, ParseStream},
    Ident, Type,
};

use crate::common::{parse_assign_once, parse_separator, peek_any_keyword};

const KEYWORDS: &[&str] = &["single_pass", "mixin", "difference"];

#[derive(Default)]
pub struct CursorArgs {
    pub single_pass: bool,
    pub mixin: Option<Type>,
    pub difference: Option<Type>,
}

impl Parse for CursorArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = CursorArgs::default();

        while !input.is_empty() {
            if !peek_any_keyword(input, KEYWORDS) {
                return Err(input.error(
                    "expected `single_pass`, `mixin = Type` or `difference = Type`",
                ));
            }

            let key: Ident = input.parse()?;
            if key == "single_pass" {
                if args.single_pass {
                    return Err(syn::Error::new(key.span(), "duplicate `single_pass` argument"));
                }
                args.single_pass = true;
            } else if key == "mixin" {
                parse_assign_once(input, &key, &mut args.mixin)?;
            } else {
                parse_assign_once(input, &key, &mut args.difference)?;
            }

            parse_separator(input)?;
        }

        Ok(args)
    }
}
