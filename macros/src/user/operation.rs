//! Structural detection of cursor operations.
//!
//! An operation is present when the impl block defines a method with its
//! name. Its shape (receiver, arity, return) is then checked so that the
//! generated forwarding impl is well-formed; shape errors are reported on
//! the method signature instead of deep inside the expansion.

use syn::{FnArg, ImplItem, ImplItemFn, ItemImpl, ReturnType, Signature, Type};

use crate::common::has_elided_lifetime;

// =============================================================================
// Operation Kinds
// =============================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Current,
    Set,
    Next,
    Prev,
    Advance,
    DistanceTo,
    Equal,
}

impl OpKind {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "current" => OpKind::Current,
            "set" => OpKind::Set,
            "next" => OpKind::Next,
            "prev" => OpKind::Prev,
            "advance" => OpKind::Advance,
            "distance_to" => OpKind::DistanceTo,
            "equal" => OpKind::Equal,
            _ => return None,
        })
    }

    /// Operations whose generics may be lifted onto the trait impl.
    ///
    /// Only these carry a trait parameter that can constrain the lifted
    /// generics (`Writable<T>`, `DistanceTo<O>`, `Equal<O>`).
    fn allows_generics(self) -> bool {
        matches!(self, OpKind::Set | OpKind::DistanceTo | OpKind::Equal)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Recv {
    Shared,
    Exclusive,
    Other,
}

fn receiver_kind(sig: &Signature) -> Option<Recv> {
    let recv = sig.receiver()?;
    if recv.colon_token.is_some() {
        return Some(Recv::Other);
    }
    Some(match (&recv.reference, &recv.mutability) {
        (Some(_), None) => Recv::Shared,
        (Some(_), Some(_)) => Recv::Exclusive,
        _ => Recv::Other,
    })
}

// =============================================================================
// Detected Operation
// =============================================================================

/// A validated cursor operation.
pub struct Operation {
    pub kind: OpKind,
    pub sig: Signature,
    /// Single non-receiver argument type. For `equal` and `distance_to`
    /// this is the referent, i.e. `O` for `other: &O`.
    pub arg: Option<Type>,
    pub output: Option<Type>,
}

impl Operation {
    fn parse(kind: OpKind, method: &ImplItemFn) -> syn::Result<Self> {
        let sig = &method.sig;
        let name = &sig.ident;

        if !sig.generics.params.is_empty() && !kind.allows_generics() {
            return Err(syn::Error::new_spanned(
                &sig.generics,
                format!("cursor operation `{}` cannot be generic", name),
            ));
        }

        let recv = receiver_kind(sig);
        let recv_ok = match kind {
            OpKind::Current | OpKind::DistanceTo | OpKind::Equal => recv == Some(Recv::Shared),
            OpKind::Next | OpKind::Prev | OpKind::Advance => recv == Some(Recv::Exclusive),
            OpKind::Set => matches!(recv, Some(Recv::Shared | Recv::Exclusive)),
        };
        if !recv_ok {
            let expected = match kind {
                OpKind::Current | OpKind::DistanceTo | OpKind::Equal => "`&self`",
                OpKind::Next | OpKind::Prev | OpKind::Advance => "`&mut self`",
                OpKind::Set => "`&self` or `&mut self`",
            };
            return Err(syn::Error::new_spanned(
                sig,
                format!("cursor operation `{}` must take {}", name, expected),
            ));
        }

        let args: Vec<&Type> = sig
            .inputs
            .iter()
            .filter_map(|arg| match arg {
                FnArg::Typed(pat) => Some(&*pat.ty),
                FnArg::Receiver(_) => None,
            })
            .collect();
        let arity = match kind {
            OpKind::Current | OpKind::Next | OpKind::Prev => 0,
            _ => 1,
        };
        if args.len() != arity {
            return Err(syn::Error::new_spanned(
                &sig.inputs,
                format!(
                    "cursor operation `{}` takes {} argument(s) besides the receiver",
                    name, arity
                ),
            ));
        }

        let arg = match (kind, args.first()) {
            (OpKind::DistanceTo | OpKind::Equal, Some(ty)) => match ty {
                Type::Reference(r) if r.mutability.is_none() => Some((*r.elem).clone()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        ty,
                        format!("`{}` must take the other cursor by shared reference", name),
                    ));
                }
            },
            (_, Some(ty)) => Some((*ty).clone()),
            (_, None) => None,
        };

        let output = match &sig.output {
            ReturnType::Default => None,
            ReturnType::Type(_, ty) => Some((**ty).clone()),
        };
        match kind {
            OpKind::Next | OpKind::Prev | OpKind::Advance | OpKind::Set if output.is_some() => {
                return Err(syn::Error::new_spanned(
                    &sig.output,
                    format!("cursor operation `{}` must not return a value", name),
                ));
            }
            OpKind::Current | OpKind::DistanceTo if output.is_none() => {
                return Err(syn::Error::new_spanned(
                    sig,
                    format!("cursor operation `{}` must return a value", name),
                ));
            }
            OpKind::Equal if !output.as_ref().is_some_and(is_bool) => {
                return Err(syn::Error::new_spanned(sig, "`equal` must return `bool`"));
            }
            _ => {}
        }

        if kind == OpKind::Current {
            if let Some(ty) = &output {
                if has_elided_lifetime(ty) {
                    return Err(syn::Error::new_spanned(
                        ty,
                        "`current` must return an owned value or a reference with a named \
                         lifetime; the element type cannot borrow from the cursor",
                    ));
                }
            }
        }

        Ok(Operation { kind, sig: sig.clone(), arg, output })
    }
}

fn is_bool(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident("bool"))
}

// =============================================================================
// Cursor Model
// =============================================================================

/// Everything `#[cursor]` found in one impl block.
#[derive(Default)]
pub struct CursorModel {
    pub current: Option<Operation>,
    pub set: Option<Operation>,
    pub next: Option<Operation>,
    pub prev: Option<Operation>,
    pub advance: Option<Operation>,
    pub distance_to: Option<Operation>,
    pub equal: Option<Operation>,
}

impl CursorModel {
    pub fn detect(item: &ItemImpl) -> syn::Result<Self> {
        let mut model = CursorModel::default();

        for impl_item in &item.items {
            let ImplItem::Fn(method) = impl_item else {
                continue;
            };
            let Some(kind) = OpKind::from_name(&method.sig.ident.to_string()) else {
                continue;
            };

            let op = Operation::parse(kind, method)?;
            let slot = match kind {
                OpKind::Current => &mut model.current,
                OpKind::Set => &mut model.set,
                OpKind::Next => &mut model.next,
                OpKind::Prev => &mut model.prev,
                OpKind::Advance => &mut model.advance,
                OpKind::DistanceTo => &mut model.distance_to,
                OpKind::Equal => &mut model.equal,
            };
            *slot = Some(op);
        }

        if model.current.is_none() && model.set.is_none() {
            return Err(syn::Error::new_spanned(
                &item.self_ty,
                "cursor has no valid tier: it must provide `current` (read) or `set` (write)",
            ));
        }
        if model.next.is_none() {
            return Err(syn::Error::new_spanned(
                &item.self_ty,
                "cursor has no valid tier: every tier requires `next`",
            ));
        }

        Ok(model)
    }

    pub fn operations(&self) -> impl Iterator<Item = &Operation> {
        [
            &self.current,
            &self.set,
            &self.next,
            &self.prev,
            &self.advance,
            &self.distance_to,
            &self.equal,
        ]
        .into_iter()
        .flatten()
    }

    /// Element type: what `current` yields, else what `set` accepts.
    pub fn value_type(&self) -> syn::Result<Type> {
        match (&self.current, &self.set) {
            (Some(current), _) => current.output.clone().ok_or_else(|| {
                syn::Error::new_spanned(&current.sig, "`current` must return a value")
            }),
            (None, Some(set)) if !set.sig.generics.params.is_empty() => Err(syn::Error::new_spanned(
                &set.sig,
                "a write-only cursor must `set` a concrete element type",
            )),
            (None, Some(set)) => set
                .arg
                .clone()
                .ok_or_else(|| syn::Error::new_spanned(&set.sig, "`set` takes one argument")),
            (None, None) => Err(syn::Error::new(
                proc_macro2::Span::call_site(),
                "cursor has no valid tier: it must provide `current` (read) or `set` (write)",
            )),
        }
    }

    /// Distance type: `distance_to` result, else `advance` argument.
    pub fn difference_type(&self) -> Option<Type> {
        if let Some(distance) = &self.distance_to {
            return distance.output.clone();
        }
        self.advance.as_ref().and_then(|advance| advance.arg.clone())
    }
}
