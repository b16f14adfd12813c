/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Checks the code generated by #[gdextension] from the user's side. Loading happens in glue-core's engine tests.

use glue::prelude::*;
use glue::sys;

struct DefaultEntry;

#[gdextension]
unsafe impl ExtensionLibrary for DefaultEntry {}

mod custom {
    use glue::init::{gdextension, ExtensionLibrary, InitLevel};

    pub struct CustomEntry;

    #[gdextension(entry_symbol = custom_rust_init)]
    unsafe impl ExtensionLibrary for CustomEntry {
        fn min_level() -> InitLevel {
            InitLevel::Servers
        }
    }

    pub fn entry() -> glue::sys::GDExtensionInitializationFunction {
        Some(custom_rust_init)
    }
}

#[test]
fn entry_points_have_ffi_signature() {
    let default_entry: sys::GDExtensionInitializationFunction = Some(gdext_rust_init);
    assert!(default_entry.is_some());
    assert!(custom::entry().is_some());
}

#[test]
fn trait_impl_is_kept() {
    assert_eq!(DefaultEntry::min_level(), InitLevel::Scene);
    assert_eq!(custom::CustomEntry::min_level(), InitLevel::Servers);
}

#[test]
fn prelude_math_without_engine() {
    assert_eq!(Vector2i::new(1, 2) + Vector2i::new(3, 4), Vector2i::new(4, 6));
}
