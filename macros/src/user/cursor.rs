//! `#[cursor]` expansion
//!
//! Input: an inherent impl block. Output: the block unchanged, plus
//!
//! 1. `impl Cursor for Self` carrying the capability set as `Present` /
//!    `Absent` associated types, the element and distance types, and the
//!    construction adapter type;
//! 2. one capability trait impl per detected operation, forwarding to the
//!    inherent method;
//! 3. for a generic `set` next to `current`, a check that the cursor can
//!    write its own element type.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::{parse_quote, Generics, ItemImpl, Type};

use super::cursor_args::CursorArgs;
use super::krate;
use super::operation::{CursorModel, OpKind, Operation};
use crate::common::{merge_generics, replace_self};

pub fn expand_cursor(args: CursorArgs, item: ItemImpl) -> syn::Result<TokenStream2> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[cursor] must be placed on an inherent impl block",
        ));
    }

    let model = CursorModel::detect(&item)?;
    let krate = krate();
    let self_ty = &*item.self_ty;

    for op in [&model.equal, &model.distance_to].into_iter().flatten() {
        if !compares_with_self(op, self_ty) {
            return Err(syn::Error::new_spanned(
                &op.sig.inputs,
                format!(
                    "`{}` must compare against `Self` or a method generic that `Self` \
                     satisfies; the tier is derived from self-comparison",
                    op.sig.ident
                ),
            ));
        }
    }

    let value_ty = replace_self(&model.value_type()?, self_ty);
    let set_is_generic = model
        .set
        .as_ref()
        .is_some_and(|set| !set.sig.generics.params.is_empty());
    if let (Some(_), Some(set), false) = (&model.current, &model.set, set_is_generic) {
        if let Some(arg) = &set.arg {
            if !same_type(&replace_self(arg, self_ty), &value_ty) {
                return Err(syn::Error::new_spanned(
                    arg,
                    format!(
                        "`set` must accept the element type `current` yields (`{}`)",
                        value_ty.to_token_stream()
                    ),
                ));
            }
        }
    }
    let difference_ty = match (model.difference_type(), &args.difference) {
        (Some(ty), _) => replace_self(&ty, self_ty),
        (None, Some(ty)) => ty.clone(),
        (None, None) => parse_quote!(isize),
    };
    let mixin_ty: Type = match &args.mixin {
        Some(ty) => ty.clone(),
        None => parse_quote!(#krate::BasicMixin<#self_ty>),
    };

    // Multi-pass readable cursors must hand out independent copies.
    let mut generics = item.generics.clone();
    let multi_pass = model.current.is_some() && model.equal.is_some() && !args.single_pass;
    if multi_pass {
        generics
            .make_where_clause()
            .predicates
            .push(parse_quote!(#self_ty: ::core::clone::Clone));
    }

    let flag = |present: bool| {
        if present {
            quote! { #krate::Present }
        } else {
            quote! { #krate::Absent }
        }
    };
    let has_read = flag(model.current.is_some());
    let has_write = flag(model.set.is_some());
    let has_next = flag(model.next.is_some());
    let has_prev = flag(model.prev.is_some());
    let has_advance = flag(model.advance.is_some());
    let has_distance = flag(model.distance_to.is_some());
    let has_equal = flag(model.equal.is_some());
    let single_pass = flag(args.single_pass);

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let cursor_impl = quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Cursor for #self_ty #where_clause {
            type Value = #value_ty;
            type Difference = #difference_ty;
            type Mixin = #mixin_ty;

            type HasRead = #has_read;
            type HasWrite = #has_write;
            type HasNext = #has_next;
            type HasPrev = #has_prev;
            type HasAdvance = #has_advance;
            type HasDistance = #has_distance;
            type HasEqual = #has_equal;
            type SinglePass = #single_pass;
        }
    };

    let op_impls = model
        .operations()
        .map(|op| expand_operation(op, &generics, self_ty));

    // A generic `set` must at least accept `Value`.
    let value_check = (model.current.is_some() && set_is_generic).then(|| {
        quote! {
            #[allow(dead_code)]
            const _: () = {
                fn writes_own_value #impl_generics () #where_clause {
                    fn check<C: #krate::Writable<<C as #krate::Cursor>::Value>>() {}
                    check::<#self_ty>();
                }
            };
        }
    });

    Ok(quote! {
        #item
        #cursor_impl
        #(#op_impls)*
        #value_check
    })
}

/// `equal` / `distance_to` argument is `Self`, the self type, or one of the
/// method's own type parameters.
fn compares_with_self(op: &Operation, self_ty: &Type) -> bool {
    let Some(arg) = &op.arg else {
        return false;
    };
    if same_type(&replace_self(arg, self_ty), self_ty) {
        return true;
    }
    match arg {
        Type::Path(path) if path.qself.is_none() => op
            .sig
            .generics
            .type_params()
            .any(|param| path.path.is_ident(&param.ident)),
        _ => false,
    }
}

fn same_type(a: &Type, b: &Type) -> bool {
    a.to_token_stream().to_string() == b.to_token_stream().to_string()
}

/// Forwarding impl for one operation.
fn expand_operation(op: &Operation, base: &Generics, self_ty: &Type) -> TokenStream2 {
    let krate = krate();
    let generics = merge_generics(base, &op.sig.generics, self_ty);
    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let arg = op.arg.as_ref().map(|ty| replace_self(ty, self_ty));

    let body = match op.kind {
        OpKind::Current => quote! {
            #krate::Readable for #self_ty #where_clause {
                #[inline]
                fn current(&self) -> <Self as #krate::Cursor>::Value {
                    <#self_ty>::current(self)
                }
            }
        },
        OpKind::Set => quote! {
            #krate::Writable<#arg> for #self_ty #where_clause {
                #[inline]
                fn set(&mut self, value: #arg) {
                    <#self_ty>::set(self, value)
                }
            }
        },
        OpKind::Next => quote! {
            #krate::Next for #self_ty #where_clause {
                #[inline]
                fn next(&mut self) {
                    <#self_ty>::next(self)
                }
            }
        },
        OpKind::Prev => quote! {
            #krate::Prev for #self_ty #where_clause {
                #[inline]
                fn prev(&mut self) {
                    <#self_ty>::prev(self)
                }
            }
        },
        OpKind::Advance => quote! {
            #krate::Advance for #self_ty #where_clause {
                #[inline]
                fn advance(&mut self, n: <Self as #krate::Cursor>::Difference) {
                    <#self_ty>::advance(self, n)
                }
            }
        },
        OpKind::DistanceTo => quote! {
            #krate::DistanceTo<#arg> for #self_ty #where_clause {
                #[inline]
                fn distance_to(&self, other: &#arg) -> <Self as #krate::Cursor>::Difference {
                    <#self_ty>::distance_to(self, other)
                }
            }
        },
        OpKind::Equal => quote! {
            #krate::Equal<#arg> for #self_ty #where_clause {
                #[inline]
                fn equal(&self, other: &#arg) -> bool {
                    <#self_ty>::equal(self, other)
                }
            }
        },
    };

    quote! {
        #[automatically_derived]
        impl #impl_generics #body
    }
}
