/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Identifier renamings (Godot -> Rust)

use proc_macro2::Ident;

use crate::util::ident;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Case conversions

fn to_snake_special_case(class_name: &str) -> Option<&'static str> {
    match class_name {
        // Classes
        "JSONRPC" => Some("json_rpc"),
        "OpenXRAPIExtension" => Some("open_xr_api_extension"),

        // Enums
        "VSyncMode" => Some("vsync_mode"),
        _ => None,
    }
}

pub fn to_snake_case(class_name: &str) -> String {
    use heck::ToSnakeCase;

    // Special cases
    if let Some(special_case) = to_snake_special_case(class_name) {
        return special_case.to_string();
    }

    class_name
        .replace("1D", "_1d")
        .replace("2D", "_2d")
        .replace("3D", "_3d")
        .replace("GDExtension", "Gdextension")
        .to_snake_case()
}

pub fn to_pascal_case(class_name: &str) -> String {
    use heck::ToPascalCase;

    // Special cases: reuse snake_case impl to ensure at least consistency between those 2.
    if let Some(snake_special) = to_snake_special_case(class_name) {
        return snake_special.to_pascal_case();
    }

    class_name
        .to_pascal_case()
        .replace("GdExtension", "GDExtension")
}

/// `MouseMode` -> `MOUSE_MODE`.
pub fn to_shout_case(name: &str) -> String {
    use heck::ToShoutySnakeCase;

    name.replace("2D", "_2D")
        .replace("3D", "_3D")
        .to_shouty_snake_case()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enum conversions

pub fn make_enum_name(enum_name: &str) -> Ident {
    ident(&make_enum_name_str(enum_name))
}

pub fn make_enum_name_str(enum_name: &str) -> String {
    to_pascal_case(enum_name)
}

/// Rust names for all enumerators of one enum, with the shared prefix removed.
///
/// `MOUSE_MODE_CAPTURED` in `MouseMode` becomes `CAPTURED`. If not all enumerators start with the enum name, the longest
/// common `_`-separated word prefix is removed instead (`CURSOR_ARROW` in `CursorShape` becomes `ARROW`). Enumerators keep
/// their full name if stripping would leave an invalid identifier.
pub fn make_enumerator_names(enum_name: &str, enumerators: &[&str]) -> Vec<Ident> {
    let enum_prefix = format!("{}_", to_shout_case(enum_name));

    let prefix_len = if enumerators.iter().all(|e| e.starts_with(&enum_prefix)) {
        enum_prefix.len()
    } else {
        common_word_prefix_len(enumerators)
    };

    enumerators
        .iter()
        .map(|name| ident(strip_if_valid(name, prefix_len)))
        .collect()
}

fn strip_if_valid(enumerator: &str, prefix_len: usize) -> &str {
    let stripped = &enumerator[prefix_len..];

    match stripped.chars().next() {
        Some(first) if !first.is_ascii_digit() => stripped,
        _ => enumerator,
    }
}

/// Length (in bytes, including trailing `_`) of the word prefix shared by all names; 0 if fewer than 2 names.
///
/// At least one word is always left over in every name.
fn common_word_prefix_len(names: &[&str]) -> usize {
    if names.len() < 2 {
        return 0;
    }

    let split: Vec<Vec<&str>> = names.iter().map(|n| n.split('_').collect()).collect();
    let max_words = split.iter().map(|words| words.len() - 1).min().unwrap_or(0);

    let mut common_words = 0;
    while common_words < max_words {
        let word = split[0][common_words];
        if split.iter().any(|words| words[common_words] != word) {
            break;
        }
        common_words += 1;
    }

    split[0][..common_words].iter().map(|word| word.len() + 1).sum()
}
