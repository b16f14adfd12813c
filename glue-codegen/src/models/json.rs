/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// In #[derive(DeJson)]: "this block may be rewritten with the `?` operator"
#![allow(clippy::question_mark)]

//! Raw view of `extension_api.json`.
//!
//! Only keys read by the generator are declared. nanoserde skips the rest, which covers whole sections such as
//! `builtin_classes`, `utility_functions` and `native_structures`.

use nanoserde::DeJson;

#[derive(DeJson)]
pub struct JsonApi {
    pub header: JsonApiHeader,
    pub builtin_class_sizes: Vec<JsonSizeTable>,
    pub global_enums: Vec<JsonEnum>,
    pub classes: Vec<JsonClass>,
    pub singletons: Vec<JsonNamed>,
}

#[derive(DeJson)]
pub struct JsonApiHeader {
    pub version_major: u8,
    pub version_minor: u8,
    pub version_patch: u8,
    pub version_full_name: String,
}

/// Byte sizes of all builtins for one build configuration, e.g. `float_64`.
#[derive(DeJson)]
pub struct JsonSizeTable {
    pub build_configuration: String,
    pub sizes: Vec<JsonSizeEntry>,
}

#[derive(DeJson)]
pub struct JsonSizeEntry {
    pub name: String,
    pub size: usize,
}

#[derive(DeJson)]
pub struct JsonClass {
    pub name: String,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    pub inherits: Option<String>,
    /// `core` or `editor`.
    pub api_type: String,
    pub constants: Option<Vec<JsonEnumValue>>,
    pub enums: Option<Vec<JsonEnum>>,
    pub methods: Option<Vec<JsonMethod>>,
    pub properties: Option<Vec<JsonNamed>>,
    pub signals: Option<Vec<JsonSignal>>,
}

impl JsonClass {
    pub fn constants(&self) -> &[JsonEnumValue] {
        slice_or_empty(&self.constants)
    }

    pub fn enums(&self) -> &[JsonEnum] {
        slice_or_empty(&self.enums)
    }

    pub fn methods(&self) -> &[JsonMethod] {
        slice_or_empty(&self.methods)
    }

    pub fn properties(&self) -> &[JsonNamed] {
        slice_or_empty(&self.properties)
    }

    pub fn signals(&self) -> &[JsonSignal] {
        slice_or_empty(&self.signals)
    }
}

/// Entry of which only the name matters: singletons (their `type` repeats the name) and properties.
#[derive(DeJson)]
pub struct JsonNamed {
    pub name: String,
}

#[derive(DeJson)]
pub struct JsonEnum {
    pub name: String,
    pub is_bitfield: bool,
    pub values: Vec<JsonEnumValue>,
}

/// Enumerator or integer class constant. Both use `i64` in the JSON.
#[derive(DeJson)]
pub struct JsonEnumValue {
    pub name: String,
    pub value: i64,
}

#[derive(DeJson)]
pub struct JsonMethod {
    pub name: String,
    pub is_const: bool,
    pub is_vararg: bool,
    pub is_static: bool,
    pub is_virtual: bool,
    /// Compatibility hash; absent for virtual methods.
    pub hash: Option<i64>,
    pub return_value: Option<JsonReturn>,
    pub arguments: Option<Vec<JsonParam>>,
}

impl JsonMethod {
    pub fn params(&self) -> &[JsonParam] {
        slice_or_empty(&self.arguments)
    }
}

#[derive(DeJson)]
pub struct JsonSignal {
    pub name: String,
    pub arguments: Option<Vec<JsonParam>>,
}

impl JsonSignal {
    pub fn params(&self) -> &[JsonParam] {
        slice_or_empty(&self.arguments)
    }
}

/// `{"name": "icon", "type": "Texture2D", "default_value": "null"}`
#[derive(DeJson)]
pub struct JsonParam {
    pub name: String,
    #[nserde(rename = "type")]
    pub type_: String,
    /// Width of `int`/`float` (`int32`, `float`, ...), for other types an unsupported annotation.
    pub meta: Option<String>,
    pub default_value: Option<String>,
}

/// `{"type": "int", "meta": "int32"}`
#[derive(DeJson)]
pub struct JsonReturn {
    #[nserde(rename = "type")]
    pub type_: String,
    pub meta: Option<String>,
}

fn slice_or_empty<T>(list: &Option<Vec<T>>) -> &[T] {
    list.as_deref().unwrap_or_default()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

pub fn load_extension_api(watch: &mut glue_bindings::StopWatch) -> JsonApi {
    let json = glue_bindings::load_gdextension_json(watch);

    let api: JsonApi = DeJson::deserialize_json(&json).expect("extension_api.json does not match the expected layout");
    watch.record("deserialize_json");

    println!("Parsed extension_api.json of {}", api.header.version_full_name);
    api
}
