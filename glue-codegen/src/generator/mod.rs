/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::conv;
use crate::models::domain::{ClassCodegenLevel, ExtensionApi};
use crate::SubmitFn;

pub mod central_files;
pub mod classes;
pub mod constants;
pub mod default_parameters;
pub mod enums;
pub mod functions_common;
pub mod method_tables;
pub mod name_tables;
pub mod signals;

// ----------------------------------------------------------------------------------------------------------------------------------------------

// Some file generation functions are in specific modules:
// - classes
// - enums
// - central_files

pub fn generate_sys_module_file(api: &ExtensionApi, sys_gen_path: &Path, submit_fn: &mut SubmitFn) {
    let version = &api.godot_version;
    let (major, minor, patch) = (version.major, version.minor, version.patch);
    let version_string = &version.version_string;

    let code = quote! {
        pub mod table_core_classes;
        pub mod table_servers_classes;
        pub mod table_scene_classes;
        pub mod table_editor_classes;
        pub mod types;

        /// Version of `extension_api.json` that the tables were generated from.
        pub const GODOT_API_VERSION: (u8, u8, u8) = (#major, #minor, #patch);
        pub const GODOT_API_VERSION_STRING: &str = #version_string;
    };

    submit_fn(sys_gen_path.join("mod.rs"), code);
}

/// Opaque storage types for builtins that are only handled through engine-provided lifecycle functions.
pub fn generate_sys_types_file(api: &ExtensionApi, sys_gen_path: &Path, submit_fn: &mut SubmitFn) {
    let [opaque_32bit, opaque_64bit] = make_opaque_types(api);

    let code = quote! {
        #[cfg(target_pointer_width = "32")]
        mod types_32 {
            #( #opaque_32bit )*
        }
        #[cfg(target_pointer_width = "64")]
        mod types_64 {
            #( #opaque_64bit )*
        }

        #[cfg(target_pointer_width = "32")]
        pub use types_32::*;
        #[cfg(target_pointer_width = "64")]
        pub use types_64::*;
    };

    submit_fn(sys_gen_path.join("types.rs"), code);
}

pub fn generate_sys_classes_file(
    api: &ExtensionApi,
    sys_gen_path: &Path,
    watch: &mut glue_bindings::StopWatch,
    submit_fn: &mut SubmitFn,
) {
    for api_level in ClassCodegenLevel::with_tables() {
        let code = method_tables::make_class_method_table(api, api_level);
        let filename = api_level.table_file();

        submit_fn(sys_gen_path.join(filename), code);
        watch.record(format!("generate_classes_{}_file", api_level.lower()));
    }
}

pub fn generate_core_mod_file(gen_path: &Path, submit_fn: &mut SubmitFn) {
    let code = quote! {
        pub mod central;
        pub mod classes;
        pub mod global;
    };

    submit_fn(gen_path.join("mod.rs"), code);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

fn make_opaque_types(api: &ExtensionApi) -> [Vec<TokenStream>; 2] {
    let mut opaque_types = [Vec::new(), Vec::new()];

    for b in api.builtin_sizes.iter() {
        let index = b.is_64bit as usize;
        let type_def = make_opaque_type(&b.godot_name, b.size);

        opaque_types[index].push(type_def);
    }

    opaque_types
}

fn make_opaque_type(godot_original_name: &str, size: usize) -> TokenStream {
    let name = conv::to_pascal_case(godot_original_name);
    let (first, rest) = name.split_at(1);

    // Capitalize: "int" -> "Int".
    let ident = format_ident!("Opaque{}{}", first.to_ascii_uppercase(), rest);
    quote! {
        pub type #ident = crate::Opaque<#size>;
    }
}
