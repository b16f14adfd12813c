/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Type and expression conversions (Godot -> Rust)

use std::fmt;

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{quote, ToTokens};

use crate::context::Context;
use crate::conv;
use crate::models::domain::{ArgPassing, GodotTy, ModName, RustTy, TyName};
use crate::special_cases::is_builtin_type_supported;
use crate::util::ident;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Godot -> Rust types

fn to_hardcoded_rust_ident(full_ty: &GodotTy) -> Option<&str> {
    let ty = full_ty.ty.as_str();
    let meta = full_ty.meta.as_deref();

    let result = match (ty, meta) {
        // Integers
        ("int", Some("int64") | None) => "i64",
        ("int", Some("int32")) => "i32",
        ("int", Some("int16")) => "i16",
        ("int", Some("int8")) => "i8",
        ("int", Some("uint64")) => "u64",
        ("int", Some("uint32")) => "u32",
        ("int", Some("uint16")) => "u16",
        ("int", Some("uint8")) => "u8",
        ("int", Some(meta)) => panic!("unhandled type int with meta {meta:?}"),

        // Floats
        ("float", Some("double") | None) => "f64",
        ("float", Some("float")) => "f32",
        ("float", Some(meta)) => panic!("unhandled type float with meta {meta:?}"),

        // Others
        ("bool", None) => "bool",
        ("String", None) => "GString",
        ("RID", None) => "Rid",

        (ty, Some(meta)) => panic!("unhandled type {ty:?} with meta {meta:?}"),

        _ => return None,
    };

    Some(result)
}

fn arg_passing_of(rust_ty: &str) -> ArgPassing {
    match rust_ty {
        "GString" | "StringName" | "NodePath" => ArgPassing::ImplAsArg,
        "Variant" | "Callable" | "PackedInt32Array" => ArgPassing::ByRef,
        _ => ArgPassing::ByValue,
    }
}

fn builtin(rust_ty: &str) -> RustTy {
    RustTy::BuiltinIdent {
        ty: ident(rust_ty),
        arg_passing: arg_passing_of(rust_ty),
    }
}

/// Maps an _input_ type from the Godot JSON to the corresponding Rust type (wrapping some sort of token stream).
///
/// Uses an internal cache (via `ctx`), as several types are ubiquitous.
pub(crate) fn to_rust_type<'a>(ty: &'a str, meta: Option<&'a String>, ctx: &mut Context) -> RustTy {
    let full_ty = GodotTy {
        ty: ty.to_string(),
        meta: meta.cloned(),
    };

    // Separate find + insert slightly slower, but much easier with lifetimes.
    if let Some(rust_ty) = ctx.find_rust_type(&full_ty) {
        rust_ty.clone()
    } else {
        let rust_ty = to_rust_type_uncached(&full_ty, ctx);
        ctx.insert_rust_type(full_ty, rust_ty.clone());
        rust_ty
    }
}

fn to_rust_type_uncached(full_ty: &GodotTy, ctx: &Context) -> RustTy {
    let ty = full_ty.ty.as_str();

    // Only place where meta is relevant is here.
    if let Some(hardcoded) = to_hardcoded_rust_ident(full_ty) {
        return builtin(hardcoded);
    }

    let (qualified, is_bitfield) = if let Some(bitfield) = ty.strip_prefix("bitfield::") {
        (bitfield, true)
    } else if let Some(enum_) = ty.strip_prefix("enum::") {
        (enum_, false)
    } else if is_builtin_type_supported(ty) {
        // Unchanged (Vector2, Color, StringName...).
        return builtin(ty);
    } else {
        assert!(
            ctx.is_engine_class(ty),
            "type {ty:?} is neither builtin nor a bound class; should have been excluded"
        );

        let class = TyName::from_godot(ty).rust_ty;
        let qualified_class = quote! { crate::classes::#class };

        return RustTy::EngineClass {
            gd_tokens: quote! { Gd<#qualified_class> },
            object_arg: quote! { ObjectArg<#qualified_class> },
            impl_as_object_arg: quote! { impl AsObjectArg<#qualified_class> },
            inner_class: class,
        };
    };

    if let Some((class, enum_)) = qualified.split_once('.') {
        // Class-local enum or bitfield.
        let module = ModName::from_godot(class);
        let enum_ty = conv::make_enum_name(enum_);

        RustTy::EngineEnum {
            tokens: quote! { crate::classes::#module::#enum_ty },
            is_bitfield,
        }
    } else {
        // Global enum or bitfield.
        let enum_ty = conv::make_enum_name(qualified);

        RustTy::EngineEnum {
            tokens: quote! { crate::global::#enum_ty },
            is_bitfield,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Godot -> Rust expressions

/// Translates a GDScript default value from the JSON into an expression of type `ty`.
pub(crate) fn to_rust_expr(expr: &str, ty: &RustTy) -> TokenStream {
    // Variant parameters take any literal; the literal's own type decides the conversion.
    if ty.is_builtin("Variant") && expr != "null" {
        let literal_ty = literal_type(expr);
        let value = to_rust_expr_inner(expr, &literal_ty, false);
        return quote! { Variant::from(#value) };
    }

    to_rust_expr_inner(expr, ty, false)
}

/// Type that a GDScript literal has on its own.
fn literal_type(expr: &str) -> RustTy {
    let name = if expr == "true" || expr == "false" {
        "bool"
    } else if expr.parse::<i64>().is_ok() {
        "i64"
    } else if expr.parse::<f64>().is_ok() {
        "f64"
    } else if expr.starts_with('"') {
        "GString"
    } else if expr.starts_with("&\"") {
        "StringName"
    } else if expr.starts_with("^\"") {
        "NodePath"
    } else if let Some((ctor, _)) = expr.split_once('(') {
        match ctor {
            "String" => "GString",
            "RID" => "Rid",
            other => other,
        }
    } else {
        panic!("cannot infer type of GDScript literal '{expr}'")
    };

    builtin(name)
}

fn to_rust_expr_inner(expr: &str, ty: &RustTy, is_inner: bool) -> TokenStream {
    match expr {
        "true" => return quote! { true },
        "false" => return quote! { false },
        "null" => {
            return match ty {
                RustTy::BuiltinIdent { ty, .. } if ty == "Variant" => quote! { Variant::nil() },
                RustTy::EngineClass { .. } => quote! { Gd::null_arg() },
                _ => panic!("null not representable in target type {ty:?}"),
            }
        }
        "RID()" if !is_inner && ty.is_builtin("Rid") => return quote! { Rid::Invalid },
        "Callable()" if !is_inner && ty.is_builtin("Callable") => return quote! { Callable::invalid() },
        _ => {}
    }

    if let Ok(num) = expr.parse::<i64>() {
        return int_expr(num, ty, is_inner);
    }

    // Also accepts `inf` and `nan`.
    if let Ok(num) = expr.parse::<f64>() {
        return float_expr(num, ty, is_inner);
    }

    if let Some(text) = expr.strip_prefix('"') {
        let text = text.strip_suffix('"').expect("unmatched opening '\"'");
        if is_inner {
            return quote! { #text };
        }

        return match ty {
            RustTy::BuiltinIdent { ty, .. } if ty == "StringName" || ty == "NodePath" => quote! { #ty::from(#text) },
            _ => quote! { GString::from(#text) },
        };
    }

    if let Some(text) = expr.strip_prefix("&\"") {
        let text = text.strip_suffix('"').expect("unmatched opening '&\"'");
        return quote! { StringName::from(#text) };
    }

    if let Some(text) = expr.strip_prefix("^\"") {
        let text = text.strip_suffix('"').expect("unmatched opening '^\"'");
        return quote! { NodePath::from(#text) };
    }

    if let Some((godot_ty, rest)) = expr.split_once('(') {
        let args = rest.strip_suffix(')').expect("unmatched '('");
        return constructor_expr(godot_ty, args, ty);
    }

    panic!("unsupported GDScript expression in default value: '{expr}'");
}

fn int_expr(num: i64, ty: &RustTy, is_inner: bool) -> TokenStream {
    let lit = Literal::i64_unsuffixed(num);

    match ty {
        RustTy::EngineEnum { is_bitfield: true, .. } => quote! { crate::obj::EngineBitfield::from_ord(#lit) },
        RustTy::EngineEnum { .. } => quote! { crate::obj::EngineEnum::from_ord(#lit) },
        RustTy::BuiltinIdent { ty, .. } if is_numeric(ty) => suffixed_lit(num, ty),
        _ if is_inner => quote! { #lit as _ },
        _ => panic!("cannot map integer literal {num} to type {ty:?}"),
    }
}

fn float_expr(num: f64, ty: &RustTy, is_inner: bool) -> TokenStream {
    let float_ty = match ty {
        RustTy::BuiltinIdent { ty, .. } if ty == "f64" || ty == "f32" => Some(ty.clone()),
        _ if is_inner => None,
        _ => panic!("cannot map float literal {num} to type {ty:?}"),
    };

    if num.is_finite() {
        return match float_ty {
            Some(float_ty) => suffixed_lit(num, &float_ty),
            None => {
                let lit = Literal::f64_unsuffixed(num);
                quote! { #lit as _ }
            }
        };
    }

    let constant = if num.is_nan() {
        ident("NAN")
    } else if num > 0.0 {
        ident("INFINITY")
    } else {
        ident("NEG_INFINITY")
    };

    match float_ty {
        Some(float_ty) => quote! { #float_ty::#constant },
        None => quote! { f64::#constant as _ },
    }
}

fn constructor_expr(godot_ty: &str, args: &str, outer_ty: &RustTy) -> TokenStream {
    let arg_count = args.split(',').count();

    let (rust_ty, ctor) = match godot_ty {
        "NodePath" | "StringName" => (godot_ty, "from"),
        "String" => ("GString", "from"),
        "Rect2" | "Rect2i" => (godot_ty, "from_components"),
        "Vector2" | "Vector2i" | "Vector3" => (godot_ty, "new"),
        "Color" if arg_count == 3 => ("Color", "from_rgb"),
        "Color" => ("Color", "from_rgba"),
        "PackedInt32Array" => {
            assert_eq!(args, "", "only empty packed arrays supported");
            ("PackedInt32Array", "new")
        }
        _ => panic!("unsupported type in default value: {godot_ty}"),
    };

    // `Foo()` has one empty part, which must stay empty.
    let arg_exprs = args
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| to_rust_expr_inner(part, outer_ty, true));

    let rust_ty = ident(rust_ty);
    let ctor = ident(ctor);
    quote! {
        #rust_ty::#ctor(#(#arg_exprs),*)
    }
}

fn is_numeric(ty: &Ident) -> bool {
    ["i64", "i32", "i16", "i8", "u64", "u32", "u16", "u8", "f64", "f32"]
        .iter()
        .any(|numeric| ty == numeric)
}

pub(crate) fn suffixed_lit(num: impl fmt::Display, suffix: &Ident) -> TokenStream {
    // i32, u16 etc. happen to be also the literal suffixes
    let combined = format!("{num}{suffix}");
    combined
        .parse::<Literal>()
        .unwrap_or_else(|_| panic!("invalid literal {combined}"))
        .to_token_stream()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tests

#[test]
fn gdscript_to_rust_expr() {
    let ty_int = builtin("i64");
    let ty_int = Some(&ty_int);

    let ty_int_i32 = builtin("i32");
    let ty_int_i32 = Some(&ty_int_i32);

    let ty_float = builtin("f64");
    let ty_float = Some(&ty_float);

    let ty_float_f32 = builtin("f32");
    let ty_float_f32 = Some(&ty_float_f32);

    let ty_enum = RustTy::EngineEnum {
        tokens: quote! { SomeEnum },
        is_bitfield: false,
    };
    let ty_enum = Some(&ty_enum);

    let ty_bitfield = RustTy::EngineEnum {
        tokens: quote! { SomeEnum },
        is_bitfield: true,
    };
    let ty_bitfield = Some(&ty_bitfield);

    let ty_variant = builtin("Variant");
    let ty_variant = Some(&ty_variant);

    let ty_callable = builtin("Callable");
    let ty_callable = Some(&ty_callable);

    let ty_object = RustTy::EngineClass {
        gd_tokens: quote! { Gd<Texture2D> },
        object_arg: quote! { ObjectArg<Texture2D> },
        impl_as_object_arg: quote! { impl AsObjectArg<Texture2D> },
        inner_class: ident("Texture2D"),
    };
    let ty_object = Some(&ty_object);

    let ty_string = builtin("GString");
    let ty_string = Some(&ty_string);

    let ty_stringname = builtin("StringName");
    let ty_stringname = Some(&ty_stringname);

    #[rustfmt::skip]
    let table = [
        // int
        ("0",                           ty_int,             quote! { 0i64 }),
        ("-1",                          ty_int,             quote! { -1i64 }),
        ("500",                         ty_int_i32,         quote! { 500i32 }),
        ("-1",                          ty_int_i32,         quote! { -1i32 }),

        // float (from int/float)
        ("0",                           ty_float,           quote! { 0f64 }),
        ("-1.5",                        ty_float,           quote! { -1.5f64 }),
        ("1.0",                         ty_float_f32,       quote! { 1f32 }),
        ("-1",                          ty_float_f32,       quote! { -1f32 }),
        ("inf",                         ty_float,           quote! { f64::INFINITY }),
        ("-inf",                        ty_float_f32,       quote! { f32::NEG_INFINITY }),

        // enum + bitfield (from int)
        ("0",                           ty_enum,            quote! { crate::obj::EngineEnum::from_ord(0) }),
        ("7",                           ty_bitfield,        quote! { crate::obj::EngineBitfield::from_ord(7) }),

        // Variant
        ("8",                           ty_variant,         quote! { Variant::from(8i64) }),
        ("0.5",                         ty_variant,         quote! { Variant::from(0.5f64) }),
        ("true",                        ty_variant,         quote! { Variant::from(true) }),
        ("\"\"",                        ty_variant,         quote! { Variant::from(GString::from("")) }),
        ("Vector2(1, 0)",               ty_variant,         quote! { Variant::from(Vector2::new(1 as _, 0 as _)) }),
        ("null",                        ty_variant,         quote! { Variant::nil() }),

        // Objects
        ("null",                        ty_object,          quote! { Gd::null_arg() }),

        // Special literals
        ("true",                        None,               quote! { true }),
        ("false",                       None,               quote! { false }),
        ("Callable()",                  ty_callable,        quote! { Callable::invalid() }),

        // String-likes
        ("\" \"",                       None,               quote! { GString::from(" ") }),
        ("&\"\"",                       None,               quote! { StringName::from("") }),
        ("^\"text\"",                   None,               quote! { NodePath::from("text") }),
        ("\"text\"",                    ty_string,          quote! { GString::from("text") }),
        ("\"text\"",                    ty_stringname,      quote! { StringName::from("text") }),

        // Composites
        ("Vector2(0, 0)",               None,               quote! { Vector2::new(0 as _, 0 as _) }),
        ("Vector2(inf, inf)",           None,               quote! { Vector2::new(f64::INFINITY as _, f64::INFINITY as _) }),
        ("Vector2i(-1, -1)",            None,               quote! { Vector2i::new(-1 as _, -1 as _) }),
        ("Vector3(0, 1, 0)",            None,               quote! { Vector3::new(0 as _, 1 as _, 0 as _) }),
        ("Color(1, 0, 0.5, 1)",         None,               quote! { Color::from_rgba(1 as _, 0 as _, 0.5 as _, 1 as _) }),
        ("Color(1, 1, 1)",              None,               quote! { Color::from_rgb(1 as _, 1 as _, 1 as _) }),
        ("Rect2(1, 2.2, -3.3, 0)",      None,               quote! { Rect2::from_components(1 as _, 2.2 as _, -3.3 as _, 0 as _) }),
        ("PackedInt32Array()",          None,               quote! { PackedInt32Array::new() }),
    ];

    for (gdscript, ty, rust) in table {
        // Arbitrary type if not specified; must not influence the result.
        let ty_dontcare = builtin("bool");
        let ty = ty.unwrap_or(&ty_dontcare);

        // Negative literals are one token when parsed, but `-` and literal in `quote!`.
        let actual = to_rust_expr(gdscript, ty).to_string().replace(' ', "");
        let expected = rust.to_string().replace(' ', "");

        assert_eq!(actual, expected, "GDScript: {gdscript}");
    }
}
