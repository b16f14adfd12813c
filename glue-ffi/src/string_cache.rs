/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::mem::MaybeUninit;

use crate as sys;

/// Engine `StringName`s for class and method names, alive while method tables are loaded.
///
/// Each name is constructed once per cache; all of them are destroyed when the cache is dropped.
pub struct StringCache<'a> {
    // Boxed, so that pointers handed out stay valid when the map grows.
    names: HashMap<&'static str, Box<sys::types::OpaqueStringName>>,
    interface: &'a sys::GDExtensionInterface,
    lifecycle: &'a sys::BuiltinLifecycleTable,
}

impl<'a> StringCache<'a> {
    pub fn new(interface: &'a sys::GDExtensionInterface, lifecycle: &'a sys::BuiltinLifecycleTable) -> Self {
        Self {
            names: HashMap::new(),
            interface,
            lifecycle,
        }
    }

    /// Pointer to the `StringName` for `key`, constructing it on first request.
    pub fn fetch(&mut self, key: &'static str) -> sys::GDExtensionConstStringNamePtr {
        assert!(key.is_ascii(), "string is not ASCII: {key}");

        let interface = self.interface;
        let boxed = self.names.entry(key).or_insert_with(|| {
            let mut uninit = MaybeUninit::<sys::types::OpaqueStringName>::uninit();

            // SAFETY: the constructor initializes the whole opaque storage.
            unsafe {
                (interface.string_name_new_with_utf8_chars_and_len)(
                    uninit.as_mut_ptr() as sys::GDExtensionUninitializedStringNamePtr,
                    key.as_ptr() as *const std::ffi::c_char,
                    key.len() as sys::GDExtensionInt,
                );
                Box::new(uninit.assume_init())
            }
        });

        &**boxed as *const sys::types::OpaqueStringName as sys::GDExtensionConstStringNamePtr
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Drop for StringCache<'_> {
    fn drop(&mut self) {
        let destroy = self.lifecycle.string_name_destroy;

        for (_, mut boxed) in self.names.drain() {
            // SAFETY: each entry was constructed by the engine and is destroyed exactly once.
            unsafe { destroy(&mut *boxed as *mut sys::types::OpaqueStringName as sys::GDExtensionTypePtr) };
        }
    }
}
