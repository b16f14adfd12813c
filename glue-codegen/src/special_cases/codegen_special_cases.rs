/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Exclusions that follow from binding only a subset of the engine API.

use crate::context::Context;
use crate::models::json::{JsonMethod, JsonParam, JsonSignal};

pub(crate) fn is_class_excluded(godot_class_name: &str) -> bool {
    !SELECTED_CLASSES.contains(&godot_class_name)
}

/// Whether a Godot type (as spelled in the JSON) has no Rust counterpart in the bindings.
///
/// Must be checked before mapping a type with `conv::to_rust_type()`, which assumes support.
pub(crate) fn is_type_excluded(ty: &str, meta: Option<&String>, ctx: &Context) -> bool {
    if let Some(meta) = meta {
        if !is_meta_supported(ty, meta) {
            return true;
        }
    }

    if let Some(enum_ty) = ty
        .strip_prefix("enum::")
        .or_else(|| ty.strip_prefix("bitfield::"))
    {
        return match enum_ty.split_once('.') {
            Some((class, _enum)) => !ctx.is_engine_class(class),
            None => !ctx.is_global_enum(enum_ty),
        };
    }

    if ty.starts_with("typedarray::") {
        return true;
    }

    if is_builtin_type_supported(ty) {
        return false;
    }

    // Remaining builtins (Array, Dictionary, most packed arrays, ...) are not bound; neither are unselected classes.
    !ctx.is_engine_class(ty)
}

/// Metas narrow `int` and `float` to a Rust width. Others, such as `char32` or `required`, have no mapping.
#[rustfmt::skip]
fn is_meta_supported(ty: &str, meta: &str) -> bool {
    match (ty, meta) {
        | ("int", "int8" | "int16" | "int32" | "int64")
        | ("int", "uint8" | "uint16" | "uint32" | "uint64")
        | ("float", "float" | "double")

        => true, _ => false
    }
}

#[rustfmt::skip]
pub(crate) fn is_builtin_type_supported(ty: &str) -> bool {
    match ty {
        | "bool" | "int" | "float"
        | "String" | "StringName" | "NodePath"
        | "Vector2" | "Vector2i" | "Vector3" | "Rect2" | "Rect2i" | "Color" | "RID"
        | "Variant" | "Callable" | "PackedInt32Array"

        => true, _ => false
    }
}

pub(crate) fn is_class_method_excluded(method: &JsonMethod, ctx: &Context) -> bool {
    let is_return_excluded = method
        .return_value
        .as_ref()
        .is_some_and(|ret| is_type_excluded(&ret.type_, ret.meta.as_ref(), ctx));

    is_return_excluded || is_any_param_excluded(method.params(), ctx)
}

pub(crate) fn is_signal_excluded(signal: &JsonSignal, ctx: &Context) -> bool {
    is_any_param_excluded(signal.params(), ctx)
}

fn is_any_param_excluded(params: &[JsonParam], ctx: &Context) -> bool {
    params
        .iter()
        .any(|param| is_type_excluded(&param.type_, param.meta.as_ref(), ctx))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes for which bindings are generated.

// Base classes must be listed as well.
#[rustfmt::skip]
const SELECTED_CLASSES: &[&str] = &[
    // Core hierarchy.
    "Object",
    "RefCounted",
    "Resource",

    // Resources referenced by the bound nodes.
    "Texture",
    "Texture2D",
    "Font",
    "InputEvent",
    "TileSet",
    "Theme",

    // Scene tree.
    "MainLoop",
    "SceneTree",
    "SceneTreeTimer",
    "Node",
    "Viewport",
    "Window",

    // 2D and UI.
    "CanvasItem",
    "Control",
    "ItemList",
    "Node2D",
    "TileMap",

    // 3D.
    "Node3D",
    "VisualInstance3D",
    "GeometryInstance3D",
    "Label3D",

    // Singletons.
    "Input",
    "NativeMenu",
];

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_narrows_only_numbers() {
        let ctx = Context::default();

        assert!(!is_type_excluded("int", Some(&"uint32".to_string()), &ctx));
        assert!(!is_type_excluded("float", Some(&"float".to_string()), &ctx));
        assert!(!is_type_excluded("int", None, &ctx));

        assert!(is_type_excluded("int", Some(&"char32".to_string()), &ctx));
        assert!(is_type_excluded("String", Some(&"required".to_string()), &ctx));
    }

    #[test]
    fn builtin_owned_enums_are_excluded() {
        let ctx = Context::default();

        assert!(is_type_excluded("enum::Variant.Type", None, &ctx));
        assert!(is_type_excluded("typedarray::StringName", None, &ctx));
        assert!(is_type_excluded("Dictionary", None, &ctx));
    }
}
