/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! JSON -> domain mapping.
//!
//! Classes and methods are visited in JSON order; method table indices depend on it.

use proc_macro2::TokenStream;

use crate::context::Context;
use crate::models::domain::{
    BuiltinSize, Class, ClassCodegenLevel, ClassConstant, ClassConstantValue, ClassMethod, ClassSignal, Enum, Enumerator,
    ExtensionApi, FnParam, FnQualifier, FnReturn, GodotApiVersion, ModName, TyName,
};
use crate::models::json::{
    JsonApi, JsonApiHeader, JsonClass, JsonEnum, JsonEnumValue, JsonMethod, JsonParam, JsonReturn, JsonSignal,
    JsonSizeTable,
};
use crate::util::{ident, safe_ident};
use crate::{conv, special_cases};

impl ExtensionApi {
    pub fn from_json(json: &JsonApi, ctx: &mut Context) -> Self {
        let classes: Vec<Class> = json.classes.iter().filter_map(|class| map_class(class, ctx)).collect();

        let singletons = json
            .singletons
            .iter()
            .map(|singleton| TyName::from_godot(&singleton.name))
            .filter(|name| ctx.is_singleton(name))
            .collect();

        let global_enums = json
            .global_enums
            .iter()
            .filter(|enum_| ctx.is_global_enum(&enum_.name))
            .map(map_enum)
            .collect();

        Self {
            classes,
            singletons,
            global_enums,
            godot_version: map_version(&json.header),
            builtin_sizes: map_builtin_sizes(&json.builtin_class_sizes),
        }
    }
}

fn map_version(header: &JsonApiHeader) -> GodotApiVersion {
    let full_name = header.version_full_name.as_str();

    GodotApiVersion {
        major: header.version_major,
        minor: header.version_minor,
        patch: header.version_patch,
        version_string: full_name.strip_prefix("Godot Engine ").unwrap_or(full_name).to_string(),
    }
}

/// Flattens the per-configuration tables. Double-precision configurations are not supported and dropped.
fn map_builtin_sizes(tables: &[JsonSizeTable]) -> Vec<BuiltinSize> {
    let mut sizes = Vec::new();

    for table in tables {
        let is_64bit = match table.build_configuration.as_str() {
            "float_32" => false,
            "float_64" => true,
            "double_32" | "double_64" => continue,
            other => panic!("unknown build configuration `{other}` in extension_api.json"),
        };

        sizes.extend(table.sizes.iter().map(|entry| BuiltinSize {
            godot_name: entry.name.clone(),
            is_64bit,
            size: entry.size,
        }));
    }

    sizes
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes

fn map_class(json: &JsonClass, ctx: &mut Context) -> Option<Class> {
    let name = TyName::from_godot(&json.name);
    if special_cases::is_class_deleted(&name) {
        return None;
    }

    let api_level = special_cases::get_class_level(json);

    let methods = json
        .methods()
        .iter()
        .filter_map(|method| map_method(method, &name, api_level, ctx))
        .collect();

    let signals = json
        .signals()
        .iter()
        .filter_map(|signal| map_signal(signal, &name, ctx))
        .collect();

    Some(Class {
        mod_name: ModName::from_godot(&json.name),
        base_class: json.inherits.as_deref().map(TyName::from_godot),
        api_level,
        is_refcounted: json.is_refcounted,
        is_instantiable: special_cases::is_class_instantiable(&name).unwrap_or(json.is_instantiable),
        constants: json.constants().iter().map(map_constant).collect(),
        enums: json.enums().iter().map(map_enum).collect(),
        methods,
        signals,
        property_names: json.properties().iter().map(|p| p.name.clone()).collect(),
        name,
    })
}

fn map_constant(json: &JsonEnumValue) -> ClassConstant {
    let value = match i32::try_from(json.value) {
        Ok(narrow) => ClassConstantValue::I32(narrow),
        Err(_) => ClassConstantValue::I64(json.value),
    };

    ClassConstant {
        name: json.name.clone(),
        value,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Methods and signals

fn map_method(
    json: &JsonMethod,
    class_name: &TyName,
    api_level: ClassCodegenLevel,
    ctx: &mut Context,
) -> Option<ClassMethod> {
    if special_cases::is_class_method_deleted(class_name, json, ctx) {
        return None;
    }

    let Some(hash) = json.hash else {
        panic!("non-virtual method {}::{} has no hash", class_name.godot_ty, json.name);
    };

    let qualifier = match (json.is_static, json.is_const) {
        (true, _) => FnQualifier::Static,
        (false, true) => FnQualifier::Const,
        (false, false) => FnQualifier::Mut,
    };

    let params = json.params().iter().map(|param| map_param(param, true, ctx)).collect();
    let return_value = map_return(json.return_value.as_ref(), ctx);

    Some(ClassMethod {
        name: special_cases::maybe_rename_class_method(class_name, &json.name).to_string(),
        godot_name: json.name.clone(),
        params,
        return_value,
        qualifier,
        is_vararg: json.is_vararg,
        is_private: special_cases::is_method_private(class_name, &json.name),
        hash,
        // Only kept methods take a slot; the table stays dense.
        table_index: ctx.next_table_index(api_level),
    })
}

fn map_signal(json: &JsonSignal, class_name: &TyName, ctx: &mut Context) -> Option<ClassSignal> {
    if special_cases::is_signal_deleted(class_name, json, ctx) {
        return None;
    }

    Some(ClassSignal {
        name: json.name.clone(),
        params: json.params().iter().map(|param| map_param(param, false, ctx)).collect(),
    })
}

/// Signal parameters never have defaults, so `with_default` is only set for methods.
fn map_param(json: &JsonParam, with_default: bool, ctx: &mut Context) -> FnParam {
    let type_ = conv::to_rust_type(&json.type_, json.meta.as_ref(), ctx);

    let default_value: Option<TokenStream> = json
        .default_value
        .as_deref()
        .filter(|_| with_default)
        .map(|expr| conv::to_rust_expr(expr, &type_));

    FnParam {
        name: safe_ident(&json.name),
        type_,
        default_value,
    }
}

fn map_return(json: Option<&JsonReturn>, ctx: &mut Context) -> FnReturn {
    match json {
        Some(ret) => {
            let type_ = conv::to_rust_type(&ret.type_, ret.meta.as_ref(), ctx);
            FnReturn {
                decl: type_.return_decl(),
                type_: Some(type_),
            }
        }
        None => FnReturn {
            decl: TokenStream::new(),
            type_: None,
        },
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enums

fn map_enum(json: &JsonEnum) -> Enum {
    let godot_names: Vec<&str> = json.values.iter().map(|value| value.name.as_str()).collect();
    let rust_names = conv::make_enumerator_names(&json.name, &godot_names);

    let enumerators = json
        .values
        .iter()
        .zip(rust_names)
        .map(|(value, name)| Enumerator {
            name,
            godot_name: value.name.clone(),
            ord: checked_ord(json, value),
        })
        .collect();

    Enum {
        name: ident(&conv::make_enum_name_str(&json.name)),
        godot_name: json.name.clone(),
        is_bitfield: json.is_bitfield,
        enumerators,
    }
}

/// Enum ordinals are stored as `i32`, bitfield ordinals as `u64`.
fn checked_ord(json: &JsonEnum, value: &JsonEnumValue) -> i64 {
    let fits = if json.is_bitfield {
        value.value >= 0
    } else {
        i32::try_from(value.value).is_ok()
    };

    assert!(
        fits,
        "value {} = {} out of range for {} `{}`",
        value.name,
        value.value,
        if json.is_bitfield { "bitfield" } else { "enum" },
        json.name
    );

    value.value
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::json::JsonSizeEntry;

    fn size_table(config: &str) -> JsonSizeTable {
        JsonSizeTable {
            build_configuration: config.to_string(),
            sizes: vec![JsonSizeEntry {
                name: "Vector2".to_string(),
                size: 8,
            }],
        }
    }

    #[test]
    fn double_precision_sizes_are_dropped() {
        let tables = ["float_32", "double_32", "float_64", "double_64"].map(size_table);
        let sizes = map_builtin_sizes(&tables);

        let configs: Vec<bool> = sizes.iter().map(|s| s.is_64bit).collect();
        assert_eq!(configs, [false, true]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn negative_bitfield_value_is_rejected() {
        let json = JsonEnum {
            name: "MouseButtonMask".to_string(),
            is_bitfield: true,
            values: vec![JsonEnumValue {
                name: "MOUSE_BUTTON_MASK_LEFT".to_string(),
                value: -1,
            }],
        };

        map_enum(&json);
    }
}
