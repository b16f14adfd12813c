/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Code generator for the engine class bindings.
//!
//! Reads `extension_api.json` (through `glue-bindings`), maps it to a domain model restricted to the bound classes, and writes
//! Rust files into the `src/gen` folders of `glue-ffi` (method-bind tables) and `glue-core` (class wrappers).

mod context;
mod conv;
mod generator;
mod models;
mod special_cases;
mod util;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use glue_bindings::StopWatch;
use proc_macro2::TokenStream;

use crate::context::Context;
use crate::generator::central_files::generate_core_central_file;
use crate::generator::classes::generate_class_files;
use crate::generator::enums::generate_global_enums_file;
use crate::generator::{
    generate_core_mod_file, generate_sys_classes_file, generate_sys_module_file, generate_sys_types_file,
};
use crate::models::domain::ExtensionApi;
use crate::models::json::load_extension_api;

pub type SubmitFn = dyn FnMut(PathBuf, TokenStream);

fn write_file(path: &Path, contents: String) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }

    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write code file to {};\n\t{}", path.display(), e));
}

#[cfg(feature = "codegen-rustfmt")]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());
    format_file_if_needed(&path);
}

#[cfg(not(feature = "codegen-rustfmt"))]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());
}

/// Runs `rustfmt` from the stable toolchain on a generated file. Failure to format is reported, but not fatal.
#[cfg(feature = "codegen-rustfmt")]
fn format_file_if_needed(output_rs: &Path) {
    let output = std::process::Command::new("rustup")
        .arg("run")
        .arg("stable")
        .arg("rustfmt")
        .arg("--edition=2021")
        .arg(output_rs)
        .output();

    match output {
        Ok(out) if out.status.success() => {}
        Ok(out) => println!(
            "Formatting {} failed:\n{}",
            output_rs.display(),
            String::from_utf8_lossy(&out.stderr)
        ),
        Err(err) => println!("Formatting {} failed: {err}", output_rs.display()),
    }
}

/// Generates the FFI-level files: opaque type sizes, API version constants, and one method-bind table per init level.
pub fn generate_sys_files(sys_gen_path: &Path, watch: &mut StopWatch) {
    let json_api = load_extension_api(watch);

    let mut ctx = Context::build_from_api(&json_api);
    watch.record("build_context");

    let api = ExtensionApi::from_json(&json_api, &mut ctx);
    watch.record("map_domain_models");

    generate_sys_module_file(&api, sys_gen_path, &mut submit_fn);
    watch.record("generate_module_file");

    generate_sys_types_file(&api, sys_gen_path, &mut submit_fn);
    watch.record("generate_types_file");

    generate_sys_classes_file(&api, sys_gen_path, watch, &mut submit_fn);
    // watch records inside the function.
}

/// Generates the class wrappers with their sidecar modules, the global enums and the per-level loader.
pub fn generate_core_files(core_gen_path: &Path, watch: &mut StopWatch) {
    generate_core_mod_file(core_gen_path, &mut submit_fn);

    let json_api = load_extension_api(watch);

    let mut ctx = Context::build_from_api(&json_api);
    watch.record("build_context");

    let api = ExtensionApi::from_json(&json_api, &mut ctx);
    watch.record("map_domain_models");

    generate_core_central_file(&api, core_gen_path, &mut submit_fn);
    watch.record("generate_central_file");

    generate_global_enums_file(&api, core_gen_path, &mut submit_fn);
    watch.record("generate_global_enums_file");

    generate_class_files(&api, &mut ctx, &core_gen_path.join("classes"), &mut submit_fn);
    watch.record("generate_class_files");
}
