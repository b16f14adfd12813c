/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Method bodies and parameter lists shared by plain methods, varcall methods and default-param extenders.

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::generator::default_parameters;
use crate::models::domain::{ArgPassing, ClassMethod, FnParam, FnQualifier, RustTy, TyName};
use crate::util::lifetime;

/// Receiver-dependent pieces of a method.
pub struct FnReceiver {
    /// `&self,`, `&mut self,` or nothing.
    pub param: TokenStream,

    /// Like `param`, bound to the extender lifetime: `&'ex self,`.
    pub param_lifetime_ex: TokenStream,

    /// Object pointer handed to the engine; null for static methods.
    pub ffi_arg: TokenStream,

    /// `self.` or `Self::`
    pub self_prefix: TokenStream,
}

impl FnReceiver {
    pub fn new(qualifier: FnQualifier, object_ptr: TokenStream) -> Self {
        let (param, param_lifetime_ex) = match qualifier {
            FnQualifier::Const => (quote! { &self, }, quote! { &'ex self, }),
            FnQualifier::Mut => (quote! { &mut self, }, quote! { &'ex mut self, }),
            FnQualifier::Static => {
                return Self {
                    param: TokenStream::new(),
                    param_lifetime_ex: TokenStream::new(),
                    ffi_arg: quote! { std::ptr::null_mut() },
                    self_prefix: quote! { Self:: },
                }
            }
        };

        Self {
            param,
            param_lifetime_ex,
            ffi_arg: object_ptr,
            self_prefix: quote! { self. },
        }
    }
}

/// Engine call of one method, in both calling conventions. Expects `CallParams`, `CallRet` and `args` in scope.
pub struct FnCode {
    pub receiver: FnReceiver,
    pub varcall_invocation: TokenStream,
    pub ptrcall_invocation: TokenStream,
}

/// Methods go into the class `impl`, builders into the sidecar module.
#[derive(Default)]
pub struct FnDefinition {
    pub functions: TokenStream,
    pub builders: TokenStream,
}

impl FromIterator<FnDefinition> for FnDefinition {
    fn from_iter<I: IntoIterator<Item = FnDefinition>>(iter: I) -> Self {
        let mut all = Self::default();
        for definition in iter {
            all.functions.extend(definition.functions);
            all.builders.extend(definition.builders);
        }
        all
    }
}

#[derive(Default)]
pub struct FnParamTokens {
    pub param_decls: Vec<TokenStream>,
    /// Element types of the `CallParams` tuple.
    pub callsig_param_types: Vec<TokenStream>,
    /// `<'a0, 'a1, ...>` after `type CallParams`, if any parameter borrows.
    pub callsig_lifetime_args: Option<TokenStream>,
    pub arg_exprs: Vec<TokenStream>,
}

pub fn make_function_definition(class_name: &TyName, sig: &ClassMethod, code: &FnCode) -> FnDefinition {
    let fn_name = sig.name_ident();
    let with_defaults = default_parameters::function_uses_default_params(sig);

    // With defaults, public `method()` and `method_ex()` forward to a crate-private `method_full()`.
    let (vis, primary_name, kind) = if with_defaults {
        (quote! { pub(crate) }, format_ident!("{}_full", fn_name), FnKind::DefaultFull)
    } else {
        (make_vis(sig.is_private), fn_name, FnKind::Regular)
    };

    let params = make_params_exprs(sig.params().iter(), kind);
    let primary = if sig.is_vararg {
        make_varcall_fns(sig, code, &vis, &primary_name, &params)
    } else {
        make_ptrcall_fn(sig, code, &vis, &primary_name, &params)
    };

    let mut definition = FnDefinition {
        functions: primary,
        builders: TokenStream::new(),
    };

    if with_defaults {
        let (forwarding_fns, builder) =
            default_parameters::make_function_definition_with_defaults(class_name, sig, code, &primary_name);

        definition.functions.extend(forwarding_fns);
        definition.builders = builder;
    }

    definition
}

pub fn make_vis(is_private: bool) -> TokenStream {
    if is_private {
        quote! { pub(crate) }
    } else {
        quote! { pub }
    }
}

fn make_call_sig_decl(sig: &ClassMethod, params: &FnParamTokens) -> TokenStream {
    let return_ty = sig.return_value().type_tokens();
    let lifetimes = &params.callsig_lifetime_args;
    let param_types = &params.callsig_param_types;

    quote! {
        type CallRet = #return_ty;
        type CallParams #lifetimes = (#( #param_types, )*);
    }
}

fn make_ptrcall_fn(
    sig: &ClassMethod,
    code: &FnCode,
    vis: &TokenStream,
    fn_name: &Ident,
    params: &FnParamTokens,
) -> TokenStream {
    let call_sig_decl = make_call_sig_decl(sig, params);
    let receiver = &code.receiver.param;
    let param_decls = &params.param_decls;
    let arg_exprs = &params.arg_exprs;
    let return_decl = &sig.return_value().decl;
    let invocation = &code.ptrcall_invocation;

    quote! {
        #vis fn #fn_name(
            #receiver
            #( #param_decls, )*
        ) #return_decl {
            #call_sig_decl

            let args = (#( #arg_exprs, )*);

            unsafe {
                #invocation
            }
        }
    }
}

/// `method(.., varargs)` panicking on call errors, and `try_method(.., varargs)` returning them.
fn make_varcall_fns(
    sig: &ClassMethod,
    code: &FnCode,
    vis: &TokenStream,
    fn_name: &Ident,
    params: &FnParamTokens,
) -> TokenStream {
    let call_sig_decl = make_call_sig_decl(sig, params);
    let try_fn_name = format_ident!("try_{}", fn_name);

    let receiver = &code.receiver.param;
    let self_prefix = &code.receiver.self_prefix;
    let param_decls = &params.param_decls;
    let arg_exprs = &params.arg_exprs;
    let forwarded = make_params_exprs(sig.params().iter(), FnKind::DelegateTry).arg_exprs;

    let return_decl = &sig.return_value().decl;
    let try_return_decl = sig.return_value().call_result_decl();
    let invocation = &code.varcall_invocation;

    quote! {
        /// # Panics
        /// This is a _varcall_ method, meaning parameters and return values are passed as `Variant`.
        /// It can detect call failures and will panic in such a case.
        #vis fn #fn_name(
            #receiver
            #( #param_decls, )*
            varargs: &[Variant]
        ) #return_decl {
            #self_prefix #try_fn_name(#( #forwarded, )* varargs)
                .unwrap_or_else(|e| panic!("{e}"))
        }

        /// # Return type
        /// This is a _varcall_ method, meaning parameters and return values are passed as `Variant`.
        /// It can detect call failures and will return `Err` in such a case.
        #vis fn #try_fn_name(
            #receiver
            #( #param_decls, )*
            varargs: &[Variant]
        ) #try_return_decl {
            #call_sig_decl

            let args = (#( #arg_exprs, )*);

            unsafe {
                #invocation
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Parameters

/// Role of a function in the generated code, which decides how it declares and passes on its parameters.
#[derive(Copy, Clone)]
pub(crate) enum FnKind {
    /// Methods without default parameters.
    Regular,

    /// Crate-private `method_full()`, taking already converted arguments.
    DefaultFull,

    /// Public `method()` and `method_ex()`, forwarding their required arguments.
    DefaultSimpleOrEx,

    /// Like `DefaultSimpleOrEx`, with parameters bound to `'ex`.
    DefaultSimpleOrExLifetimed,

    /// Panicking varcall method forwarding to its `try_` sibling.
    DelegateTry,

    /// `ExMethod::new()`, storing the required arguments in fields.
    ExBuilderConstructor,
}

/// Declared type of a parameter or extender field.
#[derive(Copy, Clone)]
pub(crate) enum FnParamDecl {
    /// `T`, `&T`, `impl AsArg<T>`, `impl AsObjectArg<T>`.
    FnPublic,

    /// Like `FnPublic`, bound to `'ex`.
    FnPublicLifetime,

    /// `CowArg<'_, T>` or `ObjectArg<T>`.
    FnInternal,

    /// `CowArg<'ex, T>` or `ObjectArg<T>`.
    Field,
}

/// How a parameter is turned into an argument.
#[derive(Copy, Clone)]
pub(crate) enum FnArgExpr {
    /// Into the `CallParams` representation: `v.into_arg()`, `v.as_object_arg()`, `CowArg::Borrowed(v)`.
    Convert,

    /// Unchanged.
    Forward,
}

/// Numbered lifetimes `'a0, 'a1, ...` for the borrowed elements of `CallParams`.
pub(crate) struct LifetimeGen {
    count: usize,
}

impl LifetimeGen {
    pub fn new() -> Self {
        LifetimeGen { count: 0 }
    }

    fn next(&mut self) -> TokenStream {
        let lft = lifetime(&format!("a{}", self.count));
        self.count += 1;
        lft
    }

    fn generic_args(&self) -> Option<TokenStream> {
        if self.count == 0 {
            return None;
        }

        let lifetimes = (0..self.count).map(|i| lifetime(&format!("a{i}")));
        Some(quote! { < #( #lifetimes, )* > })
    }
}

/// Returns `(declaration, callsig_type)`: `name: Type` and the matching element type of `CallParams`.
pub(crate) fn make_param_or_field_type(
    name: &Ident,
    ty: &RustTy,
    decl: FnParamDecl,
    lifetimes: &mut LifetimeGen,
) -> (TokenStream, TokenStream) {
    let (declared, callsig) = match ty {
        RustTy::EngineClass {
            object_arg,
            impl_as_object_arg,
            ..
        } => {
            let declared = match decl {
                FnParamDecl::FnPublic | FnParamDecl::FnPublicLifetime => impl_as_object_arg.clone(),
                FnParamDecl::FnInternal | FnParamDecl::Field => object_arg.clone(),
            };
            (declared, object_arg.clone())
        }

        RustTy::BuiltinIdent { arg_passing, .. } if *arg_passing != ArgPassing::ByValue => {
            let lft = lifetimes.next();
            let declared = match (decl, arg_passing) {
                (FnParamDecl::FnPublic, ArgPassing::ImplAsArg) => quote! { impl AsArg<#ty> },
                (FnParamDecl::FnPublicLifetime, ArgPassing::ImplAsArg) => quote! { impl AsArg<#ty> + 'ex },
                (FnParamDecl::FnPublic, _) => quote! { &#ty },
                (FnParamDecl::FnPublicLifetime, _) => quote! { &'ex #ty },
                (FnParamDecl::FnInternal, _) => quote! { CowArg<'_, #ty> },
                (FnParamDecl::Field, _) => quote! { CowArg<'ex, #ty> },
            };
            (declared, quote! { CowArg<#lft, #ty> })
        }

        _ => (quote! { #ty }, quote! { #ty }),
    };

    (quote! { #name: #declared }, callsig)
}

pub(crate) fn make_arg_expr(name: &Ident, ty: &RustTy, expr: FnArgExpr) -> TokenStream {
    if let FnArgExpr::Forward = expr {
        return quote! { #name };
    }

    match ty {
        RustTy::EngineClass { .. } => quote! { #name.as_object_arg() },
        RustTy::BuiltinIdent {
            arg_passing: ArgPassing::ImplAsArg,
            ..
        } => quote! { #name.into_arg() },
        RustTy::BuiltinIdent {
            arg_passing: ArgPassing::ByRef,
            ..
        } => quote! { CowArg::Borrowed(#name) },
        _ => quote! { #name },
    }
}

pub(crate) fn make_params_exprs<'a>(params: impl Iterator<Item = &'a FnParam>, kind: FnKind) -> FnParamTokens {
    let (decl, expr) = match kind {
        FnKind::Regular => (FnParamDecl::FnPublic, FnArgExpr::Convert),
        FnKind::DefaultFull => (FnParamDecl::FnInternal, FnArgExpr::Forward),
        FnKind::DefaultSimpleOrEx | FnKind::DelegateTry => (FnParamDecl::FnPublic, FnArgExpr::Forward),
        FnKind::DefaultSimpleOrExLifetimed => (FnParamDecl::FnPublicLifetime, FnArgExpr::Forward),
        FnKind::ExBuilderConstructor => (FnParamDecl::Field, FnArgExpr::Convert),
    };

    let mut tokens = FnParamTokens::default();
    let mut lifetimes = LifetimeGen::new();

    for param in params {
        let (param_decl, callsig_ty) = make_param_or_field_type(&param.name, &param.type_, decl, &mut lifetimes);

        tokens.param_decls.push(param_decl);
        tokens.callsig_param_types.push(callsig_ty);
        tokens.arg_exprs.push(make_arg_expr(&param.name, &param.type_, expr));
    }

    tokens.callsig_lifetime_args = lifetimes.generic_args();
    tokens
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::ident;

    fn param(name: &str, ty: &str, arg_passing: ArgPassing) -> FnParam {
        FnParam {
            name: ident(name),
            type_: RustTy::BuiltinIdent {
                ty: ident(ty),
                arg_passing,
            },
            default_value: None,
        }
    }

    #[test]
    fn only_borrowing_params_get_lifetimes() {
        let params = [
            param("index", "i32", ArgPassing::ByValue),
            param("text", "GString", ArgPassing::ImplAsArg),
            param("meta", "Variant", ArgPassing::ByRef),
        ];

        let tokens = make_params_exprs(params.iter(), FnKind::Regular);
        let compact = |ts: &TokenStream| ts.to_string().replace(' ', "");

        let decls: Vec<String> = tokens.param_decls.iter().map(compact).collect();
        assert_eq!(decls, ["index:i32", "text:implAsArg<GString>", "meta:&Variant"]);

        let args: Vec<String> = tokens.arg_exprs.iter().map(compact).collect();
        assert_eq!(args, ["index", "text.into_arg()", "CowArg::Borrowed(meta)"]);

        let lifetimes = tokens.callsig_lifetime_args.as_ref().map(compact);
        assert_eq!(lifetimes.as_deref(), Some("<'a0,'a1,>"));
    }

    #[test]
    fn static_receiver_passes_null() {
        let receiver = FnReceiver::new(FnQualifier::Static, quote! { self.object_ptr });

        assert!(receiver.param.is_empty());
        assert_eq!(receiver.ffi_arg.to_string(), "std :: ptr :: null_mut ()");
        assert_eq!(receiver.self_prefix.to_string(), "Self ::");
    }
}
