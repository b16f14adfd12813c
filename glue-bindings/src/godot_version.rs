/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::str::FromStr;

use regex::{Captures, Regex};

use crate::{GodotVersion, MIN_MINOR_VERSION};

/// Parses the output of `godot --version`, e.g. `4.3.stable.official.77dcf97d8`.
pub fn parse_godot_version(version_str: &str) -> Result<GodotVersion, Box<dyn Error>> {
    // We assume that the version is on a line of its own, but it may be surrounded by other lines.
    let regex = Regex::new(
        r"(?xm)
        # x: ignore whitespace and allow line comments (starting with `#`)
        # m: multi-line mode, ^ and $ match start and end of line
        ^
        (?P<major>\d+)
        \.(?P<minor>\d+)
        # Patch version is omitted if it's zero.
        (?:\.(?P<patch>\d+))?
        # stable|dev|alpha|beta|rc12|... Can be set through an env var when the engine is built.
        \.(?P<status>[^.]+)
        # Capture both module config and build, could be multiple components:
        # mono|official|custom_build|gentoo|arch_linux|...
        # Notice +? for non-greedy match.
        (\.[^.]+)+?
        # Git commit SHA1, currently truncated to 9 chars, but accept the full thing
        (?:\.(?P<custom_rev>[a-f0-9]{9,40}))?
        # Optional newline printed in some systems
        (?:\\n)?
        $
        ",
    )?;

    let fail = || format!("Version substring cannot be parsed: `{version_str}`");
    let caps = regex.captures(version_str).ok_or_else(fail)?;
    let required = |key: &str| -> Result<u8, Box<dyn Error>> {
        cap(&caps, key)?.ok_or_else(|| format!("missing `{key}` in `{version_str}`").into())
    };

    let full_string = caps.get(0).map_or("", |m| m.as_str()).trim().to_string();
    let status = cap::<String>(&caps, "status")?.unwrap_or_default();

    Ok(GodotVersion {
        full_string,
        major: required("major")?,
        minor: required("minor")?,
        patch: cap(&caps, "patch")?.unwrap_or(0),
        status,
        custom_rev: cap(&caps, "custom_rev")?,
    })
}

pub(crate) fn validate_godot_version(godot_version: &GodotVersion) {
    assert_eq!(
        godot_version.major, 4,
        "Only Godot versions with major version 4 are supported; found version {}.",
        godot_version.full_string
    );

    assert!(
        godot_version.minor >= MIN_MINOR_VERSION,
        "Godot 4.{MIN_MINOR_VERSION} or later is required; found version {}.",
        godot_version.full_string
    );
}

/// Extracts and parses a named capture group from a regex match.
fn cap<T: FromStr>(caps: &Captures, key: &str) -> Result<Option<T>, Box<dyn Error>> {
    caps.name(key)
        .map(|m| m.as_str().parse())
        .transpose()
        .map_err(|_| {
            let whole = caps.get(0).map_or("", |m| m.as_str());
            format!("Version string cannot be parsed: `{whole}`").into()
        })
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[test]
#[rustfmt::skip]
fn test_godot_versions() {
    fn s(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    let good_versions = [
        ("4.3.stable.official", 4, 3, 0, "stable", None),
        ("4.3.1.stable.official", 4, 3, 1, "stable", None),
        ("4.3.stable.official.77dcf97d8", 4, 3, 0, "stable", s("77dcf97d8")),
        ("4.4.beta1.custom_build.837f2c5f8", 4, 4, 0, "beta1", s("837f2c5f8")),
        ("4.3.rc3.mono.custom_build.b28ddd918", 4, 3, 0, "rc3", s("b28ddd918")),
        ("4.3.stable.arch_linux", 4, 3, 0, "stable", None),
        ("4.3.2.stable.arch_linux\n", 4, 3, 2, "stable", None),
        ("arguments
0: /opt/godot/godot.linuxbsd.editor.dev.x86_64
1: --version
4.4.dev.custom_build.79454bfd3", 4, 4, 0, "dev", s("79454bfd3")),
    ];

    let bad_versions = [
        "Godot Engine v4.3.stable.arch_linux - https://godotengine.org", // Surrounding cruft
        "4.stable.official.206ba70f4", // No minor version
        "4.3.stable", // No build type
    ];

    for (full, major, minor, patch, status, custom_rev) in good_versions {
        let expected = GodotVersion {
            // Version line is last in every test at the moment.
            full_string: full.lines().last().unwrap().trim().to_owned(),
            major,
            minor,
            patch,
            status: status.to_owned(),
            custom_rev,
        };
        let parsed: GodotVersion = parse_godot_version(full).unwrap();
        assert_eq!(parsed, expected, "{full}");
    }

    for full in bad_versions {
        let parsed = parse_godot_version(full);
        assert!(parsed.is_err(), "{}", full);
    }
}

#[test]
#[should_panic(expected = "or later is required")]
fn test_old_version_rejected() {
    let version = parse_godot_version("4.2.2.stable.official").unwrap();
    validate_godot_version(&version);
}

#[cfg(test)]
mod proptests {
    use super::*;

    proptest::proptest! {
        #[test]
        fn test_generated_versions(
            minor in 3u8..40,
            patch in 0u8..10,
            status in "(stable|dev[1-9]?|beta[1-9]|rc[1-9])",
            build in "(official|custom_build|mono\\.official|[g-z_]{3,12})",
            rev in proptest::option::of("[a-f0-9]{9}"),
        ) {
            let mut full = format!("4.{minor}");
            if patch != 0 {
                full.push_str(&format!(".{patch}"));
            }
            full.push_str(&format!(".{status}.{build}"));
            if let Some(rev) = &rev {
                full.push_str(&format!(".{rev}"));
            }

            let parsed = parse_godot_version(&full).expect("generated version must parse");

            proptest::prop_assert_eq!(parsed.major, 4);
            proptest::prop_assert_eq!(parsed.minor, minor);
            proptest::prop_assert_eq!(parsed.patch, patch);
            proptest::prop_assert_eq!(&parsed.status, &status);
            proptest::prop_assert_eq!(&parsed.custom_rev, &rev);
            proptest::prop_assert_eq!(&parsed.full_string, &full);
        }
    }
}
