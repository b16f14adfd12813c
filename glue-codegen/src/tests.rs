/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proptest::prelude::*;

use crate::context::Context;
use crate::conv;
use crate::generator::{central_files, classes, method_tables};
use crate::models::domain::{ClassCodegenLevel, ExtensionApi};
use crate::models::json::{load_extension_api, JsonApi};

#[test]
fn test_pascal_conversion() {
    #[rustfmt::skip]
    let mappings = [
                                 ("AABB", "Aabb"),
                           ("AESContext", "AesContext"),
                   ("GeometryInstance3D", "GeometryInstance3D"),
                                ("Input", "Input"),
                           ("InputEvent", "InputEvent"),
                             ("ItemList", "ItemList"),
                                 ("JSON", "Json"),
                              ("JSONRPC", "JsonRpc"),
                              ("Label3D", "Label3D"),
                           ("NativeMenu", "NativeMenu"),
                   ("OpenXRAPIExtension", "OpenXrApiExtension"),
                     ("PackedInt32Array", "PackedInt32Array"),
                                ("Rect2", "Rect2"),
                               ("Rect2i", "Rect2i"),
                                  ("RID", "Rid"),
                       ("SceneTreeTimer", "SceneTreeTimer"),
                              ("TileMap", "TileMap"),
                     ("VisualInstance3D", "VisualInstance3D"),
                             ("XRServer", "XrServer"),
    ];

    for (class_name, expected) in mappings {
        let actual = conv::to_pascal_case(class_name);
        assert_eq!(actual, expected, "PascalCase: ident `{class_name}`");
    }
}

#[test]
fn test_snake_conversion() {
    #[rustfmt::skip]
    let mappings = [
                                 ("AABB", "aabb"),
                           ("AESContext", "aes_context"),
                   ("GeometryInstance3D", "geometry_instance_3d"),
                                ("Input", "input"),
                           ("InputEvent", "input_event"),
                             ("ItemList", "item_list"),
                              ("JSONRPC", "json_rpc"),
                              ("Label3D", "label_3d"),
                           ("NativeMenu", "native_menu"),
                               ("Node2D", "node_2d"),
                   ("OpenXRAPIExtension", "open_xr_api_extension"),
                                  ("RID", "rid"),
                       ("SceneTreeTimer", "scene_tree_timer"),
                              ("TileMap", "tile_map"),
                     ("VisualInstance3D", "visual_instance_3d"),

        // Enum names
                            ("VSyncMode", "vsync_mode"),
                 ("ShadowCastingSetting", "shadow_casting_setting"),
    ];

    for (class_name, expected) in mappings {
        let actual = conv::to_snake_case(class_name);
        assert_eq!(actual, expected, "snake_case: ident `{class_name}`");
    }
}

#[test]
fn test_enumerator_names() {
    #[rustfmt::skip]
    let cases: &[(&str, &[&str], &[&str])] = &[
        // All enumerators start with the enum name.
        ("MouseMode",       &["MOUSE_MODE_VISIBLE", "MOUSE_MODE_CAPTURED"],          &["VISIBLE", "CAPTURED"]),
        ("Feature",         &["FEATURE_GLOBAL_MENU", "FEATURE_POPUP_MENU"],          &["GLOBAL_MENU", "POPUP_MENU"]),

        // Common word prefix, different from the enum name.
        ("CursorShape",     &["CURSOR_ARROW", "CURSOR_IBEAM", "CURSOR_HSIZE"],       &["ARROW", "IBEAM", "HSIZE"]),
        ("DrawFlags",       &["FLAG_SHADED", "FLAG_FIXED_SIZE", "FLAG_MAX"],         &["SHADED", "FIXED_SIZE", "MAX"]),
        ("ConnectFlags",    &["CONNECT_DEFERRED", "CONNECT_ONE_SHOT"],               &["DEFERRED", "ONE_SHOT"]),

        // No common prefix.
        ("SystemMenus",     &["INVALID_MENU_ID", "MAIN_MENU_ID"],                    &["INVALID_MENU_ID", "MAIN_MENU_ID"]),

        // Stripping would leave a leading digit.
        ("Key",             &["KEY_NONE", "KEY_0", "KEY_A"],                         &["NONE", "KEY_0", "A"]),

        // Single enumerator keeps its full name unless it starts with the enum name.
        ("TileShape",       &["TILE_SHAPE_SQUARE"],                                  &["SQUARE"]),
        ("Lonely",          &["ONLY_VALUE"],                                         &["ONLY_VALUE"]),
    ];

    for (enum_name, enumerators, expected) in cases {
        let actual: Vec<String> = conv::make_enumerator_names(enum_name, enumerators)
            .iter()
            .map(|ident| ident.to_string())
            .collect();

        assert_eq!(&actual, expected, "enumerators of `{enum_name}`");
    }
}

proptest! {
    #[test]
    fn enumerator_names_are_valid_suffixes(enumerators in prop::collection::vec("[A-Z]{1,4}(_[A-Z0-9]{1,4}){0,3}", 1..6)) {
        let refs: Vec<&str> = enumerators.iter().map(String::as_str).collect();
        let names = conv::make_enumerator_names("TestEnum", &refs);

        prop_assert_eq!(names.len(), enumerators.len());
        for (name, original) in names.iter().zip(enumerators.iter()) {
            let name = name.to_string();

            prop_assert!(!name.is_empty());
            prop_assert!(original.ends_with(&name), "{name} is not a suffix of {original}");
            prop_assert!(!name.starts_with(|c: char| c.is_ascii_digit()));
        }
    }

    #[test]
    fn snake_case_has_no_uppercase(class_name in "[A-Z][A-Za-z0-9]{0,15}") {
        let snake = conv::to_snake_case(&class_name);

        prop_assert!(!snake.chars().any(|c| c.is_ascii_uppercase()), "{class_name} -> {snake}");
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Generation from the prebuilt API

fn load_api() -> JsonApi {
    load_extension_api(&mut glue_bindings::StopWatch::start())
}

#[test]
fn test_singletons_and_levels() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    // Only singletons whose class is bound.
    let mut singletons: Vec<&str> = api.singletons.iter().map(|s| s.godot_ty.as_str()).collect();
    singletons.sort_unstable();
    assert_eq!(singletons, ["Input", "NativeMenu"]);

    let level_of = |name: &str| {
        api.classes
            .iter()
            .find(|c| c.name().godot_ty == name)
            .map(|c| c.api_level)
            .unwrap_or_else(|| panic!("class {name} not bound"))
    };

    assert_eq!(level_of("Object"), ClassCodegenLevel::Core);
    assert_eq!(level_of("Theme"), ClassCodegenLevel::Scene);
    assert_eq!(level_of("Input"), ClassCodegenLevel::Servers);
    assert_eq!(level_of("NativeMenu"), ClassCodegenLevel::Servers);
    assert_eq!(level_of("ItemList"), ClassCodegenLevel::Scene);
    assert_eq!(level_of("Label3D"), ClassCodegenLevel::Scene);
    assert_eq!(level_of("SceneTree"), ClassCodegenLevel::Scene);
    assert_eq!(level_of("TileMap"), ClassCodegenLevel::Scene);
}

#[test]
fn test_method_table_indices_are_dense() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    for level in ClassCodegenLevel::with_tables() {
        let indices: Vec<usize> = api
            .classes
            .iter()
            .filter(|c| c.api_level == level)
            .flat_map(|c| c.methods.iter().map(|m| m.table_index))
            .collect();

        let expected: Vec<usize> = (0..indices.len()).collect();
        assert_eq!(indices, expected, "table indices of level {level:?}");
    }
}

#[test]
fn test_virtual_methods_are_skipped() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    let has_virtual = api
        .classes
        .iter()
        .flat_map(|c| c.methods.iter())
        .any(|m| m.godot_name.starts_with('_'));

    assert!(!has_virtual);
}

#[test]
fn test_central_file_resets_every_singleton() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    let code = central_files::make_core_central_code(&api).to_string();

    assert!(code.contains("ENGINE_CLASS_NAMES"));
    assert_eq!(code.matches("__singleton_cell").count(), 2);
    assert!(code.contains("Input :: __singleton_cell"));
    assert!(code.contains("NativeMenu :: __singleton_cell"));
}

#[test]
fn test_item_list_code() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    let item_list = api
        .classes
        .iter()
        .find(|c| c.name().godot_ty == "ItemList")
        .expect("ItemList bound");

    let code = classes::make_class(item_list, &ctx).to_string();

    // Default-param builder for `add_item(text, icon = null, selectable = true)`.
    assert!(code.contains("pub struct ExAddItem"));
    assert!(code.contains("fn add_item_ex"));
    assert!(code.contains("Gd :: null_arg ()"));

    // Signals and interned names.
    assert!(code.contains("pub struct SignalsOfItemList"));
    assert!(code.contains("fn item_selected"));
    assert!(code.contains("pub struct PropertyName"));
    assert!(code.contains("ITEM_COUNT"));

    // Not a singleton.
    assert!(!code.contains("fn singleton"));
}

#[test]
fn test_singleton_code() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    for name in ["Input", "NativeMenu"] {
        let class = api
            .classes
            .iter()
            .find(|c| c.name().godot_ty == name)
            .expect("singleton bound");

        let code = classes::make_class(class, &ctx).to_string();
        assert!(code.contains("fn singleton"), "{name} lacks singleton()");
        assert!(code.contains("fn __singleton_cell"), "{name} lacks singleton cell");
    }
}

#[test]
fn test_builtin_owned_global_enums_are_skipped() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    assert!(api.global_enums.iter().any(|e| e.godot_name == "Key"));
    assert!(api.global_enums.iter().all(|e| !e.godot_name.contains('.')));
}

#[test]
#[cfg(not(feature = "codegen-lazy-fptrs"))]
fn test_empty_method_table_has_no_mutable_vec() {
    let json = load_api();
    let mut ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &mut ctx);

    // No bound class is an editor class.
    let editor = method_tables::make_class_method_table(&api, ClassCodegenLevel::Editor).to_string();
    assert!(editor.contains("METHOD_COUNT : usize = 0usize"), "{editor}");
    assert!(!editor.contains("let mut"), "{editor}");
    assert!(!editor.contains("with_capacity"), "{editor}");

    let scene = method_tables::make_class_method_table(&api, ClassCodegenLevel::Scene).to_string();
    assert!(scene.contains("let mut function_pointers = Vec :: with_capacity"));
    assert!(scene.contains("fn load_item_list_methods"));
}
