/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Codegen-ready view of the engine API, restricted to the bound classes.
//!
//! Built from the raw JSON in `domain_mapping.rs`. Names are already converted to Rust conventions, and every type has
//! been resolved to a [`RustTy`].

use std::fmt;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote, ToTokens};

use crate::conv;
use crate::util::{ident, safe_ident};

mod enums;

pub use enums::{Enum, Enumerator};

pub struct ExtensionApi {
    pub classes: Vec<Class>,
    /// Bound classes that the engine exposes as singletons.
    pub singletons: Vec<TyName>,
    pub global_enums: Vec<Enum>,
    pub godot_version: GodotApiVersion,
    /// Single-precision builds only.
    pub builtin_sizes: Vec<BuiltinSize>,
}

pub struct GodotApiVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    /// `4.3.stable.official`, without the `Godot Engine v` prefix.
    pub version_string: String,
}

pub struct BuiltinSize {
    pub godot_name: String,
    pub is_64bit: bool,
    pub size: usize,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes

pub struct Class {
    pub name: TyName,
    pub mod_name: ModName,
    pub base_class: Option<TyName>,
    pub api_level: ClassCodegenLevel,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    pub constants: Vec<ClassConstant>,
    pub enums: Vec<Enum>,
    pub methods: Vec<ClassMethod>,
    pub signals: Vec<ClassSignal>,
    /// Reflection-visible property names, for the interned name table.
    pub property_names: Vec<String>,
}

impl Class {
    pub fn name(&self) -> &TyName {
        &self.name
    }

    pub fn mod_name(&self) -> &ModName {
        &self.mod_name
    }
}

pub struct ClassConstant {
    pub name: String,
    pub value: ClassConstantValue,
}

/// Engine constants fit `i32`; wider values keep `i64`.
pub enum ClassConstantValue {
    I32(i32),
    I64(i64),
}

pub struct ClassMethod {
    /// After renames such as `new` -> `instantiate`.
    pub name: String,
    pub godot_name: String,
    pub params: Vec<FnParam>,
    pub return_value: FnReturn,
    pub qualifier: FnQualifier,
    pub is_vararg: bool,
    pub is_private: bool,
    pub hash: i64,

    /// Slot in the method table of the class' init level.
    pub table_index: usize,
}

impl ClassMethod {
    pub fn name_ident(&self) -> Ident {
        safe_ident(&self.name)
    }

    pub fn params(&self) -> &[FnParam] {
        &self.params
    }

    pub fn return_value(&self) -> &FnReturn {
        &self.return_value
    }
}

pub struct ClassSignal {
    pub name: String,
    pub params: Vec<FnParam>,
}

/// Receiver of a method.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FnQualifier {
    /// `&mut self`
    Mut,
    /// `&self`
    Const,
    /// no receiver
    Static,
}

impl FnQualifier {
    pub fn is_static(self) -> bool {
        self == Self::Static
    }
}

pub struct FnParam {
    pub name: Ident,

    /// Type as seen by the caller; the `CallParams` tuple may use a borrowed form of it.
    pub type_: RustTy,

    /// Rust expression for the engine default, if any.
    pub default_value: Option<TokenStream>,
}

pub struct FnReturn {
    /// `-> T`, or empty for `()`.
    pub decl: TokenStream,
    pub type_: Option<RustTy>,
}

impl FnReturn {
    pub fn type_tokens(&self) -> TokenStream {
        self.type_
            .as_ref()
            .map_or_else(|| quote! { () }, ToTokens::to_token_stream)
    }

    pub fn call_result_decl(&self) -> TokenStream {
        let ret = self.type_tokens();
        quote! { -> Result<#ret, crate::meta::CallError> }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Types

/// Type as spelled in the JSON, e.g. `int` with meta `int32`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct GodotTy {
    pub ty: String,
    pub meta: Option<String>,
}

#[derive(Clone, Debug)]
pub enum RustTy {
    /// `bool`, `i32`, `Vector2`, `GString`, `Variant`, ...
    BuiltinIdent { ty: Ident, arg_passing: ArgPassing },

    /// `crate::classes::input::MouseMode` or `crate::global::Key`.
    EngineEnum { tokens: TokenStream, is_bitfield: bool },

    /// Engine object; appears as `Option<Gd<T>>` in signatures.
    EngineClass {
        /// `Gd<T>`
        gd_tokens: TokenStream,

        /// `ObjectArg<T>`, what ptrcalls receive.
        object_arg: TokenStream,

        /// `impl AsObjectArg<T>`, the public parameter type.
        impl_as_object_arg: TokenStream,

        /// `T`
        inner_class: Ident,
    },
}

impl RustTy {
    pub fn return_decl(&self) -> TokenStream {
        quote! { -> #self }
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        matches!(self, RustTy::BuiltinIdent { ty, .. } if ty == name)
    }
}

impl ToTokens for RustTy {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        match self {
            RustTy::BuiltinIdent { ty, .. } => ty.to_tokens(tokens),
            RustTy::EngineEnum { tokens: path, .. } => path.to_tokens(tokens),
            RustTy::EngineClass { gd_tokens, .. } => quote! { Option<#gd_tokens> }.to_tokens(tokens),
        }
    }
}

impl fmt::Display for RustTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let compact = self.to_token_stream().to_string().replace(' ', "");
        f.write_str(&compact)
    }
}

/// How a builtin parameter is declared in public signatures.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArgPassing {
    /// `T`
    ByValue,

    /// `&T`
    ByRef,

    /// `impl AsArg<T>`, so that string types accept `&str`.
    ImplAsArg,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Names

/// Godot name of a class or enum together with its Rust identifier.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TyName {
    pub godot_ty: String,
    pub rust_ty: Ident,
}

impl TyName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            godot_ty: godot_ty.to_string(),
            rust_ty: ident(&conv::to_pascal_case(godot_ty)),
        }
    }
}

impl ToTokens for TyName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_ty.to_tokens(tokens)
    }
}

/// Sidecar module of a class: `Label3D` -> `label_3d`.
#[derive(Clone)]
pub struct ModName {
    pub rust_mod: Ident,
}

impl ModName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            rust_mod: ident(&conv::to_snake_case(godot_ty)),
        }
    }
}

impl ToTokens for ModName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_mod.to_tokens(tokens)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Init levels

/// Init level whose method table holds a class' method binds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ClassCodegenLevel {
    Core,
    Servers,
    Scene,
    Editor,
}

impl ClassCodegenLevel {
    pub fn with_tables() -> [Self; 4] {
        [Self::Core, Self::Servers, Self::Scene, Self::Editor]
    }

    pub fn lower(self) -> &'static str {
        match self {
            Self::Core => "core",
            Self::Servers => "servers",
            Self::Scene => "scene",
            Self::Editor => "editor",
        }
    }

    fn upper(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::Servers => "Servers",
            Self::Scene => "Scene",
            Self::Editor => "Editor",
        }
    }

    /// `class_scene_api`, the accessor in `glue-ffi`.
    pub fn table_global_getter(self) -> Ident {
        format_ident!("class_{}_api", self.lower())
    }

    pub fn table_file(self) -> String {
        format!("table_{}_classes.rs", self.lower())
    }

    pub fn table_struct(self) -> Ident {
        format_ident!("Class{}MethodTable", self.upper())
    }

    pub fn to_init_level(self) -> TokenStream {
        let variant = ident(self.upper());
        quote! { crate::init::InitLevel::#variant }
    }
}
