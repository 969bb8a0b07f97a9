//! `#[derive(Mixin)]` expansion
//!
//! Accepted shapes:
//!
//! ```ignore
//! struct A<'a>(BasicMixin<MyCursor<'a>>);      // delegates to BasicMixin
//! struct B<'a>(MyCursor<'a>);                  // holds the cursor directly
//! struct C<'a> { inner: BasicMixin<MyCursor<'a>> }
//! ```

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, GenericArgument, Index, Member, PathArguments, Type};

use super::krate;

pub fn expand_derive_mixin(input: DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Mixin can only be derived for structs",
        ));
    };

    let mut fields = data.fields.iter();
    let (Some(field), None) = (fields.next(), fields.next()) else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Mixin requires exactly one field holding the cursor",
        ));
    };

    let krate = krate();
    let name = &input.ident;
    let member = match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(0)),
    };
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (cursor_ty, get, get_mut, into_cursor) = match basic_mixin_cursor(&field.ty) {
        Some(cursor_ty) => {
            let get = quote! { #krate::Mixin::<#cursor_ty>::get(&self.#member) };
            let get_mut = quote! { #krate::Mixin::<#cursor_ty>::get_mut(&mut self.#member) };
            let into_cursor = quote! { #krate::Mixin::<#cursor_ty>::into_cursor(self.#member) };
            (cursor_ty, get, get_mut, into_cursor)
        }
        None => (
            field.ty.clone(),
            quote! { &self.#member },
            quote! { &mut self.#member },
            quote! { self.#member },
        ),
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::core::convert::From<#cursor_ty> for #name #ty_generics #where_clause {
            #[inline]
            fn from(cursor: #cursor_ty) -> Self {
                Self { #member: ::core::convert::From::from(cursor) }
            }
        }

        #[automatically_derived]
        impl #impl_generics #krate::Mixin<#cursor_ty> for #name #ty_generics #where_clause {
            #[inline]
            fn get(&self) -> &#cursor_ty {
                #get
            }

            #[inline]
            fn get_mut(&mut self) -> &mut #cursor_ty {
                #get_mut
            }

            #[inline]
            fn into_cursor(self) -> #cursor_ty {
                #into_cursor
            }
        }
    })
}

/// `BasicMixin<C>` -> `Some(C)`
fn basic_mixin_cursor(ty: &Type) -> Option<Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != "BasicMixin" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner.clone()),
        _ => None,
    }
}
