/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Default parameters.
//!
//! A method `set_item(index, text, icon = null)` becomes
//! * `set_item(index, text)`, using all defaults,
//! * `set_item_ex(index, text)`, returning the builder `ExSetItem` with one setter per defaulted parameter and `done()`,
//! * crate-private `set_item_full(index, text, icon)`, which `done()` calls.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::conv;
use crate::generator::functions_common::{
    self, FnArgExpr, FnCode, FnKind, FnParamDecl, FnParamTokens, LifetimeGen,
};
use crate::models::domain::{ArgPassing, ClassMethod, FnParam, FnQualifier, RustTy, TyName};
use crate::util::safe_ident;

/// Static and varcall methods keep positional parameters; the builder needs a receiver to borrow.
pub fn function_uses_default_params(sig: &ClassMethod) -> bool {
    !sig.is_vararg && !sig.qualifier.is_static() && sig.params().iter().any(|p| p.default_value.is_some())
}

/// Returns `(functions, builder)`. Functions go into the class `impl`, the builder into the sidecar module.
pub fn make_function_definition_with_defaults(
    class_name: &TyName,
    sig: &ClassMethod,
    code: &FnCode,
    full_fn_name: &Ident,
) -> (TokenStream, TokenStream) {
    let required: Vec<&FnParam> = sig.params().iter().filter(|p| p.default_value.is_none()).collect();

    let simple_fn_name = safe_ident(&sig.name);
    let ex_fn_name = format_ident!("{}_ex", simple_fn_name);
    let builder_ty = format_ident!("Ex{}", conv::to_pascal_case(&sig.name));

    let functions = make_forwarding_fns(sig, code, &required, &simple_fn_name, &ex_fn_name, &builder_ty);
    let builder = make_builder(class_name, sig, &required, &ex_fn_name, &builder_ty, full_fn_name);

    (functions, builder)
}

/// `method()` and `method_ex()` inside the class `impl`.
fn make_forwarding_fns(
    sig: &ClassMethod,
    code: &FnCode,
    required: &[&FnParam],
    simple_fn_name: &Ident,
    ex_fn_name: &Ident,
    builder_ty: &Ident,
) -> TokenStream {
    let vis = functions_common::make_vis(sig.is_private);
    let return_decl = &sig.return_value().decl;
    let receiver = &code.receiver.param;
    let receiver_ex = &code.receiver.param_lifetime_ex;
    let self_prefix = &code.receiver.self_prefix;

    let FnParamTokens {
        param_decls: simple_params,
        arg_exprs: simple_args,
        ..
    } = functions_common::make_params_exprs(required.iter().copied(), FnKind::DefaultSimpleOrEx);

    let FnParamTokens {
        param_decls: ex_params,
        ..
    } = functions_common::make_params_exprs(required.iter().copied(), FnKind::DefaultSimpleOrExLifetimed);

    // Arguments are converted once, when stored in the builder.
    let FnParamTokens {
        arg_exprs: ctor_args, ..
    } = functions_common::make_params_exprs(required.iter().copied(), FnKind::ExBuilderConstructor);

    quote! {
        #[inline]
        #vis fn #simple_fn_name(
            #receiver
            #( #simple_params, )*
        ) #return_decl {
            #self_prefix #ex_fn_name(#( #simple_args, )*).done()
        }

        #[inline]
        #vis fn #ex_fn_name<'ex>(
            #receiver_ex
            #( #ex_params, )*
        ) -> super::#builder_ty<'ex> {
            super::#builder_ty::new(self, #( #ctor_args, )*)
        }
    }
}

/// `ExMethod<'ex>`: borrows the receiver and holds every argument, defaults pre-filled.
fn make_builder(
    class_name: &TyName,
    sig: &ClassMethod,
    required: &[&FnParam],
    ex_fn_name: &Ident,
    builder_ty: &Ident,
    full_fn_name: &Ident,
) -> TokenStream {
    let class = &class_name.rust_ty;
    let receiver_mut = (sig.qualifier == FnQualifier::Mut).then(|| quote! { mut });
    let return_decl = &sig.return_value().decl;

    let doc = format!("Default-param extender for [`{class}::{ex_fn_name}`][super::{class}::{ex_fn_name}].");

    let FnParamTokens {
        param_decls: ctor_params,
        ..
    } = functions_common::make_params_exprs(required.iter().copied(), FnKind::ExBuilderConstructor);

    let mut fields = Vec::new();
    let mut inits = Vec::new();
    for param in sig.params() {
        let (field, _) = functions_common::make_param_or_field_type(
            &param.name,
            &param.type_,
            FnParamDecl::Field,
            &mut LifetimeGen::new(),
        );
        fields.push(field);
        inits.push(make_field_init(param));
    }

    let field_names = sig.params().iter().map(|p| &p.name);
    let setters = sig
        .params()
        .iter()
        .filter(|p| p.default_value.is_some())
        .map(make_setter);

    // #[allow] exceptions:
    // - wrong_self_convention:     to_*() and from_*() are taken from Godot
    // - needless_update:           `..self` may have nothing left to fill in
    quote! {
        #[doc = #doc]
        #[must_use]
        pub struct #builder_ty<'ex> {
            surround_object: &'ex #receiver_mut re_export::#class,
            #( #fields, )*
        }

        #[allow(clippy::wrong_self_convention, clippy::needless_update)]
        impl<'ex> #builder_ty<'ex> {
            fn new(
                surround_object: &'ex #receiver_mut re_export::#class,
                #( #ctor_params, )*
            ) -> Self {
                Self {
                    surround_object,
                    #( #inits, )*
                }
            }

            #( #setters )*

            #[inline]
            pub fn done(self) #return_decl {
                re_export::#class::#full_fn_name(self.surround_object, #( self.#field_names, )*)
            }
        }
    }
}

/// Required parameters come from `new()`'s arguments, defaulted ones from their default expression.
fn make_field_init(param: &FnParam) -> TokenStream {
    let name = &param.name;

    let Some(default) = param.default_value.as_ref() else {
        return quote! { #name };
    };

    match &param.type_ {
        RustTy::BuiltinIdent {
            arg_passing: ArgPassing::ImplAsArg | ArgPassing::ByRef,
            ..
        } => quote! { #name: CowArg::Owned(#default) },

        // `Gd::null_arg()` is already an `ObjectArg`.
        _ => quote! { #name: #default },
    }
}

fn make_setter(param: &FnParam) -> TokenStream {
    let name = &param.name;
    let value = format_ident!("value");

    let (value_decl, _) = functions_common::make_param_or_field_type(
        &value,
        &param.type_,
        FnParamDecl::FnPublicLifetime,
        &mut LifetimeGen::new(),
    );
    let stored = functions_common::make_arg_expr(&value, &param.type_, FnArgExpr::Convert);

    quote! {
        #[inline]
        pub fn #name(self, #value_decl) -> Self {
            Self {
                #name: #stored,
                ..self
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::FnReturn;
    use crate::util::ident;

    fn method(qualifier: FnQualifier, is_vararg: bool) -> ClassMethod {
        ClassMethod {
            name: "add_item".to_string(),
            godot_name: "add_item".to_string(),
            params: vec![FnParam {
                name: ident("selectable"),
                type_: RustTy::BuiltinIdent {
                    ty: ident("bool"),
                    arg_passing: ArgPassing::ByValue,
                },
                default_value: Some(quote! { true }),
            }],
            return_value: FnReturn {
                decl: TokenStream::new(),
                type_: None,
            },
            qualifier,
            is_vararg,
            is_private: false,
            hash: 0,
            table_index: 0,
        }
    }

    #[test]
    fn builders_need_a_receiver() {
        assert!(function_uses_default_params(&method(FnQualifier::Mut, false)));
        assert!(function_uses_default_params(&method(FnQualifier::Const, false)));

        assert!(!function_uses_default_params(&method(FnQualifier::Static, false)));
        assert!(!function_uses_default_params(&method(FnQualifier::Mut, true)));
    }
}
