//! Generics plumbing for generated trait impls.
//!
//! Operations declared with their own generics (`fn equal<O: Position>`)
//! are lifted onto the trait impl, so the impl's generics become the
//! union of the block generics and the method generics.

use syn::{
    punctuated::Punctuated,
    visit_mut::{self, VisitMut},
    GenericParam, Generics, Lifetime, Token, Type, WhereClause,
};

// =============================================================================
// Self substitution
// =============================================================================

/// Replaces bare `Self` with the concrete self type.
///
/// Trait arguments in an impl header cannot name `Self`.
struct ReplaceSelf<'a>(&'a Type);

impl VisitMut for ReplaceSelf<'_> {
    fn visit_type_mut(&mut self, ty: &mut Type) {
        if let Type::Path(path) = ty {
            if path.qself.is_none() && path.path.is_ident("Self") {
                *ty = self.0.clone();
                return;
            }
        }
        visit_mut::visit_type_mut(self, ty);
    }
}

pub fn replace_self(ty: &Type, self_ty: &Type) -> Type {
    let mut ty = ty.clone();
    ReplaceSelf(self_ty).visit_type_mut(&mut ty);
    ty
}

// =============================================================================
// Elided lifetime detection
// =============================================================================

struct FindElided(bool);

impl VisitMut for FindElided {
    fn visit_type_reference_mut(&mut self, reference: &mut syn::TypeReference) {
        if reference.lifetime.is_none() {
            self.0 = true;
        }
        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            self.0 = true;
        }
    }
}

/// True if the type borrows with an elided (`&T`, `'_`) lifetime.
pub fn has_elided_lifetime(ty: &Type) -> bool {
    let mut finder = FindElided(false);
    finder.visit_type_mut(&mut ty.clone());
    finder.0
}

// =============================================================================
// Generics merging
// =============================================================================

/// Merge method generics into block generics.
///
/// Lifetimes are kept ahead of type and const parameters.
pub fn merge_generics(base: &Generics, method: &Generics, self_ty: &Type) -> Generics {
    let mut method = method.clone();
    ReplaceSelf(self_ty).visit_generics_mut(&mut method);

    let (base_lifetimes, base_rest): (Vec<_>, Vec<_>) = base
        .params
        .iter()
        .cloned()
        .partition(|p| matches!(p, GenericParam::Lifetime(_)));
    let (method_lifetimes, method_rest): (Vec<_>, Vec<_>) = method
        .params
        .iter()
        .cloned()
        .partition(|p| matches!(p, GenericParam::Lifetime(_)));

    let mut params: Punctuated<GenericParam, Token![,]> = Punctuated::new();
    for param in base_lifetimes
        .into_iter()
        .chain(method_lifetimes)
        .chain(base_rest)
        .chain(method_rest)
    {
        params.push(param);
    }

    let mut predicates = Punctuated::new();
    for clause in [&base.where_clause, &method.where_clause].into_iter().flatten() {
        for predicate in &clause.predicates {
            predicates.push(predicate.clone());
        }
    }

    let where_clause = if predicates.is_empty() {
        None
    } else {
        Some(WhereClause {
            where_token: Default::default(),
            predicates,
        })
    };

    Generics {
        lt_token: Some(Default::default()),
        params,
        gt_token: Some(Default::default()),
        where_clause,
    }
}
