/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Lists all cases in the Godot class API, where deviations are considered appropriate.

// Naming:
// * Classes:        is_class_*
// * Class methods:  is_class_method_*
// * Any method:     is_method_*

#![allow(clippy::match_like_matches_macro)] // if there is only one rule

use crate::context::Context;
use crate::models::domain::{ClassCodegenLevel, TyName};
use crate::models::json::{JsonClass, JsonMethod, JsonSignal};
use crate::special_cases::codegen_special_cases;

pub(crate) use codegen_special_cases::is_builtin_type_supported;

#[rustfmt::skip]
pub fn is_class_method_deleted(class_name: &TyName, method: &JsonMethod, ctx: &Context) -> bool {
    // Virtual methods are overridden by scripts or user classes, which are not registered through these bindings.
    if method.is_virtual {
        return true;
    }

    if codegen_special_cases::is_class_method_excluded(method, ctx) {
        return true;
    }

    match (class_name.godot_ty.as_str(), method.name.as_str()) {
        // Already covered by manual APIs (`Gd::instance_id()`).
        | ("Object", "get_instance_id")

        => true, _ => false
    }
}

pub fn is_class_deleted(class_name: &TyName) -> bool {
    codegen_special_cases::is_class_excluded(&class_name.godot_ty)
}

pub fn is_signal_deleted(_class_name: &TyName, signal: &JsonSignal, ctx: &Context) -> bool {
    codegen_special_cases::is_signal_excluded(signal, ctx)
}

/// Whether a class method should be hidden from the public API.
#[rustfmt::skip]
pub fn is_method_private(class_name: &TyName, godot_method_name: &str) -> bool {
    match (class_name.godot_ty.as_str(), godot_method_name) {
        // Reference counting is managed by `Gd<T>`.
        | ("RefCounted", "init_ref")
        | ("RefCounted", "reference")
        | ("RefCounted", "unreference")

        => true, _ => false
    }
}

pub fn maybe_rename_class_method<'m>(_class_name: &TyName, godot_method_name: &'m str) -> &'m str {
    match godot_method_name {
        "new" => "instantiate",
        _ => godot_method_name,
    }
}

/// Init level at which the method table containing this class is loaded.
pub fn get_class_level(class: &JsonClass) -> ClassCodegenLevel {
    if class.api_type == "editor" {
        ClassCodegenLevel::Editor
    } else if is_class_level_core(&class.name) {
        ClassCodegenLevel::Core
    } else if is_class_level_server(&class.name) {
        ClassCodegenLevel::Servers
    } else {
        ClassCodegenLevel::Scene
    }
}

#[rustfmt::skip]
pub fn is_class_level_core(class_name: &str) -> bool {
    match class_name {
        | "Object" | "RefCounted" | "Resource"

        => true, _ => false
    }
}

#[rustfmt::skip]
pub fn is_class_level_server(class_name: &str) -> bool {
    match class_name {
        // Singletons registered together with the servers.
        | "Input" | "NativeMenu"

        => true,

        _ => class_name.ends_with("Server"),
    }
}

/// Whether a class can be instantiated from Rust through `new_alloc()`/`new_gd()`.
///
/// `None` keeps the JSON value.
#[rustfmt::skip]
pub fn is_class_instantiable(class_name: &TyName) -> Option<bool> {
    match class_name.godot_ty.as_str() {
        // Abstract in practice; the engine refuses to construct them.
        | "Texture" | "Texture2D" | "Font"

        => Some(false),

        _ => None,
    }
}
