/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Build-time resources for the binding crates.
//!
//! Provides the engine's reflection metadata (`extension_api.json`) to the code generator, and the Godot version to build
//! scripts which turn it into `since_api`/`before_api` cfgs.

pub(crate) mod godot_json;
pub(crate) mod godot_version;
mod watch;

use std::borrow::Cow;
use std::path::Path;

pub use godot_version::parse_godot_version;
pub use watch::StopWatch;

#[cfg(not(feature = "api-custom-json"))]
pub use gdextension_api::version_4_3 as prebuilt;

#[derive(Eq, PartialEq, Debug)]
pub struct GodotVersion {
    /// the original string (trimmed, stripped of text around)
    pub full_string: String,

    pub major: u8,
    pub minor: u8,

    /// 0 if none
    pub patch: u8,

    /// alpha|beta|dev|stable
    pub status: String,

    /// Git revision 'custom_build.{rev}' or '{official}.rev', if available
    pub custom_rev: Option<String>,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Load JSON

/// Minimum minor version of Godot 4 that the generated bindings run against (`NativeMenu` and `callable_custom_create2`).
pub const MIN_MINOR_VERSION: u8 = 3;

/// First minor version that is not yet released; `before_api` cfgs are emitted up to this one.
const NEXT_MINOR_VERSION: u8 = 5;

#[cfg(feature = "api-custom-json")]
pub fn load_gdextension_json(watch: &mut StopWatch) -> Cow<'static, str> {
    let json = godot_json::load_custom_gdextension_json();
    watch.record("load_api_json");
    Cow::Owned(json)
}

#[cfg(not(feature = "api-custom-json"))]
pub fn load_gdextension_json(watch: &mut StopWatch) -> Cow<'static, str> {
    let json = Cow::from(prebuilt::load_gdextension_json());
    watch.record("load_api_json");
    json
}

/// Version of the API that code is generated against.
pub fn get_godot_version() -> GodotVersion {
    let mut watch = StopWatch::start();
    let json = load_gdextension_json(&mut watch);

    let version = godot_json::read_godot_version(&json);
    godot_version::validate_godot_version(&version);
    version
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Build script helpers

pub fn clear_dir(dir: &Path, watch: &mut StopWatch) {
    if dir.exists() {
        remove_dir_all_reliable(dir);
        watch.record("delete_gen_dir");
    }
    std::fs::create_dir_all(dir).unwrap_or_else(|e| panic!("failed to create dir: {e}"));
}

pub fn emit_godot_version_cfg() {
    let GodotVersion {
        major,
        minor,
        patch,
        ..
    } = get_godot_version();

    // Start at 1; checking for "since/before 4.0" makes no sense.
    let max = NEXT_MINOR_VERSION;
    for m in 1..=minor {
        println!(r#"cargo:rustc-cfg=since_api="{major}.{m}""#);
    }
    for m in minor + 1..=max {
        println!(r#"cargo:rustc-cfg=before_api="{major}.{m}""#);
    }

    // Godot drops the patch version if it is 0.
    if patch != 0 {
        println!(r#"cargo:rustc-cfg=gdextension_exact_api="{major}.{minor}.{patch}""#);
    } else {
        println!(r#"cargo:rustc-cfg=gdextension_exact_api="{major}.{minor}""#);
    }
}

/// Declares all cfgs that [`emit_godot_version_cfg()`] may emit, so that `unexpected_cfgs` stays quiet.
pub fn emit_checks_cfg() {
    let minors = (1..=NEXT_MINOR_VERSION)
        .map(|m| format!(r#""4.{m}""#))
        .collect::<Vec<_>>()
        .join(", ");

    println!("cargo:rustc-check-cfg=cfg(since_api, values({minors}))");
    println!("cargo:rustc-check-cfg=cfg(before_api, values({minors}))");
    println!("cargo:rustc-check-cfg=cfg(gdextension_exact_api, values(any()))");
}

// Function for safely removal of build directory. Workaround for errors happening during CI builds:
// https://github.com/godot-rust/gdext/issues/616
pub fn remove_dir_all_reliable(path: &Path) {
    let mut retry_count = 0;

    while path.exists() {
        match std::fs::remove_dir_all(path) {
            Ok(_) => break,
            Err(err) => {
                assert_ne!(
                    retry_count,
                    5,
                    "cannot remove directory: {path_display} after 5 tries with error: {err}",
                    path_display = path.display()
                );
                retry_count += 1;
                std::thread::sleep(std::time::Duration::from_millis(10));
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prebuilt_json_has_supported_version() {
        let version = get_godot_version();

        assert_eq!(version.major, 4);
        assert!(version.minor >= MIN_MINOR_VERSION);
        assert_eq!(version.status, "stable");
    }

    #[test]
    fn clear_dir_recreates_empty_dir() {
        let dir = std::env::temp_dir().join(format!("glue-bindings-clear-{}", std::process::id()));
        std::fs::create_dir_all(dir.join("nested")).unwrap();
        std::fs::write(dir.join("nested/file.rs"), "// generated").unwrap();

        let mut watch = StopWatch::start();
        clear_dir(&dir, &mut watch);

        assert!(dir.exists());
        assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);

        remove_dir_all_reliable(&dir);
        assert!(!dir.exists());
    }
}
