/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use glue_bindings::StopWatch;

fn main() {
    let mut watch = StopWatch::start();

    // Generated into the crate directory, since IDEs struggle with symbols in OUT_DIR.
    let gen_path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/src/gen"));
    glue_bindings::clear_dir(gen_path, &mut watch);

    glue_codegen::generate_sys_files(gen_path, &mut watch);

    glue_bindings::emit_checks_cfg();
    glue_bindings::emit_godot_version_cfg();
    watch.write_stats_to(&mut std::io::stdout());

    println!("cargo:rerun-if-changed=build.rs");
}
