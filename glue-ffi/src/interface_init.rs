/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The entry point receives `get_proc_address`, which loads all other GDExtension functions by name.

use crate as sys;
use crate::toolbox::read_version_string;

/// Panics if the running engine is older than the API the bindings were generated from.
///
/// Method hashes of newer APIs are unknown to older engines, so every method bind would fail to resolve.
pub fn ensure_static_runtime_compatibility(get_proc_address: sys::GDExtensionInterfaceGetProcAddress) {
    let static_version = sys::GODOT_API_VERSION;

    // SAFETY: pointer passed by the engine to the entry point.
    let runtime_version_raw = unsafe { runtime_version(get_proc_address) };
    let runtime_version = (
        runtime_version_raw.major as u8,
        runtime_version_raw.minor as u8,
        runtime_version_raw.patch as u8,
    );

    if runtime_version < static_version {
        let runtime_version_str = read_version_string(&runtime_version_raw);
        let static_version_str = sys::GODOT_API_VERSION_STRING;

        panic!(
            "bindings were generated for Godot version: {static_version_str}\n\
            but loaded by older Godot binary, with version: {runtime_version_str}\n\
            \n\
            Update your Godot engine version, or generate the bindings from an older `extension_api.json`.\n"
        );
    }
}

/// # Safety
/// `get_proc_address` must be the pointer passed by the engine to the entry point.
pub unsafe fn runtime_version(get_proc_address: sys::GDExtensionInterfaceGetProcAddress) -> sys::GDExtensionGodotVersion {
    let get_proc_address = get_proc_address.expect("get_proc_address unexpectedly null");

    let get_godot_version = get_proc_address(sys::c_str(b"get_godot_version\0"))
        .expect("get_godot_version unexpectedly null");
    let get_godot_version =
        std::mem::transmute::<unsafe extern "C" fn(), sys::GDExtensionInterfaceGetGodotVersion>(get_godot_version);

    let mut version = std::mem::MaybeUninit::<sys::GDExtensionGodotVersion>::zeroed();
    get_godot_version(version.as_mut_ptr());

    version.assume_init()
}

/// # Safety
/// `get_proc_address` must be the pointer passed by the engine to the entry point.
pub unsafe fn load_interface(get_proc_address: sys::GDExtensionInterfaceGetProcAddress) -> sys::GDExtensionInterface {
    sys::GDExtensionInterface::load(get_proc_address)
}
