/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Reading the header of `extension_api.json`.
//!
//! Only the header is parsed here; the full model lives in the code generator, which depends on this crate (and not the
//! other way around).

use nanoserde::DeJson;

use crate::GodotVersion;

/// A minimal version of deserialized JsonExtensionApi that includes only the header.
#[derive(DeJson)]
struct JsonExtensionApi {
    pub header: JsonHeader,
}

/// Deserialized "header" key in given `extension_api.json`.
#[derive(DeJson)]
struct JsonHeader {
    pub version_major: u8,
    pub version_minor: u8,
    pub version_patch: u8,
    pub version_status: String,
    pub version_build: String,
    pub version_full_name: String,
}

impl JsonHeader {
    fn into_godot_version(self) -> GodotVersion {
        GodotVersion {
            full_string: self.version_full_name,
            major: self.version_major,
            minor: self.version_minor,
            patch: self.version_patch,
            status: self.version_status,
            custom_rev: Some(self.version_build),
        }
    }
}

#[cfg(feature = "api-custom-json")]
pub fn load_custom_gdextension_json() -> String {
    use std::path::Path;

    let path = std::env::var("GODOT4_GDEXTENSION_JSON").expect(
        "feature `api-custom-json` requires the GODOT4_GDEXTENSION_JSON \
        environment variable (with the path to the JSON file).",
    );
    println!("cargo:rerun-if-env-changed=GODOT4_GDEXTENSION_JSON");
    println!("cargo:rerun-if-changed={path}");

    let json_path = Path::new(&path);
    std::fs::read_to_string(json_path).unwrap_or_else(|_| {
        panic!(
            "failed to open file with custom GDExtension JSON {}.",
            json_path.display()
        )
    })
}

pub(crate) fn read_godot_version(json: &str) -> GodotVersion {
    let extension_api: JsonExtensionApi = DeJson::deserialize_json(json)
        .unwrap_or_else(|e| panic!("failed to parse header of extension_api.json: {e}"));

    extension_api.header.into_godot_version()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_read_and_rest_ignored() {
        let json = r#"{
            "header": {
                "version_major": 4,
                "version_minor": 3,
                "version_patch": 0,
                "version_status": "stable",
                "version_build": "official",
                "version_full_name": "Godot Engine v4.3.stable.official"
            },
            "classes": []
        }"#;

        let version = read_godot_version(json);
        assert_eq!(version.major, 4);
        assert_eq!(version.minor, 3);
        assert_eq!(version.full_string, "Godot Engine v4.3.stable.official");
        assert_eq!(version.custom_rev.as_deref(), Some("official"));
    }
}
