/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Entry point of the extension library, and per-level initialization.

use std::sync::atomic::{AtomicBool, Ordering::Relaxed};

use crate::sys;

pub use sys::InitLevel;

#[doc(hidden)]
pub unsafe fn __gdext_load_library<E: ExtensionLibrary>(
    get_proc_address: sys::GDExtensionInterfaceGetProcAddress,
    library: sys::GDExtensionClassLibraryPtr,
    init: *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool {
    let init_code = || {
        // SAFETY: pointers come straight from the engine; this is the first call into the binding.
        unsafe { sys::initialize(get_proc_address, library) };

        let godot_init_params = sys::GDExtensionInitialization {
            minimum_initialization_level: E::min_level().to_sys(),
            userdata: std::ptr::null_mut(),
            initialize: Some(ffi_initialize_layer::<E>),
            deinitialize: Some(ffi_deinitialize_layer::<E>),
        };

        // SAFETY: the engine passes a valid out-parameter.
        unsafe { *init = godot_init_params };

        // Currently no way to express failure; could be exposed to E if necessary.
        true as u8
    };

    let ctx = || "error when loading GDExtension library";
    let is_success = crate::private::handle_panic(ctx, init_code);

    is_success.unwrap_or(0)
}

static LEVEL_SERVERS_CORE_LOADED: AtomicBool = AtomicBool::new(false);

unsafe extern "C" fn ffi_initialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);
    let ctx = || format!("failed to initialize GDExtension level `{level:?}`");

    fn try_load<E: ExtensionLibrary>(level: InitLevel) {
        // Editor reloads may skip Core and Servers and start at Scene; the lower tables are still needed.
        if level == InitLevel::Scene {
            if !LEVEL_SERVERS_CORE_LOADED.load(Relaxed) {
                try_load::<E>(InitLevel::Core);
                try_load::<E>(InitLevel::Servers);
            }
        } else if level == InitLevel::Core {
            LEVEL_SERVERS_CORE_LOADED.store(true, Relaxed);
        }

        // SAFETY: the engine calls this on the main thread, after `__gdext_load_library`, once per level.
        unsafe { gdext_on_level_init(level) };
        E::on_level_init(level);
    }

    // Swallow panics; they are already reported.
    let _ = crate::private::handle_panic(ctx, || {
        try_load::<E>(level);
    });
}

unsafe extern "C" fn ffi_deinitialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let level = InitLevel::from_sys(init_level);
    let ctx = || format!("failed to deinitialize GDExtension level `{level:?}`");

    let _ = crate::private::handle_panic(ctx, || {
        if level == InitLevel::Core {
            LEVEL_SERVERS_CORE_LOADED.store(false, Relaxed);
        }

        E::on_level_deinit(level);
        gdext_on_level_deinit(level);
    });
}

/// Loads the method tables of `level`. Called before user code.
///
/// # Safety
/// - Must be called from the main thread, after the binding is initialized.
/// - Must only be called once per level.
#[deny(unsafe_op_in_unsafe_fn)]
unsafe fn gdext_on_level_init(level: InitLevel) {
    if level == InitLevel::Core {
        // SAFETY: see function contract.
        unsafe { sys::load_builtin_method_table() };
    }

    // SAFETY: see function contract.
    unsafe { sys::load_class_method_table(level) };
}

/// Releases cached engine resources once the lowest level unloads. Called after user code.
fn gdext_on_level_deinit(level: InitLevel) {
    if level != InitLevel::Core {
        return;
    }

    // Cached values refer to engine memory and must go before the binding.
    crate::classes::reset_singletons();
    crate::meta::clear_interned_names();

    // SAFETY: called after all other logic, so no further engine calls follow.
    unsafe {
        sys::deinitialize();
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Defines the entry point for an extension library written in Rust.
///
/// Every library should have exactly one implementation of this trait. It is always used in combination with the
/// `#[gdextension]` proc-macro attribute.
///
/// ```ignore
/// # use glue::init::*;
/// // This is just a type tag without any functionality. Its name is irrelevant.
/// struct MyExtension;
///
/// #[gdextension]
/// unsafe impl ExtensionLibrary for MyExtension {}
/// ```
///
/// The entry symbol defaults to `gdext_rust_init` and must match the one listed in the `.gdextension` file. It can be changed
/// with `#[gdextension(entry_symbol = my_init)]`.
///
/// # Safety
/// The library must not be unloaded while engine objects created by it are still alive.
// Unsafe trait, so that the attribute macro is only usable with `unsafe impl`.
pub unsafe trait ExtensionLibrary {
    /// Determines the initialization level at which the extension is loaded (`Scene` by default).
    ///
    /// If the level is lower than [`InitLevel::Scene`], the engine needs to be restarted for changes to take effect.
    fn min_level() -> InitLevel {
        InitLevel::Scene
    }

    /// Custom logic when a certain init-level of the engine is loaded.
    ///
    /// This will only be invoked for levels >= [`Self::min_level()`], in ascending order. The method tables of `level` are
    /// loaded at that point, so engine classes of the level can be used.
    #[allow(unused_variables)]
    fn on_level_init(level: InitLevel) {
        // Nothing by default.
    }

    /// Custom logic when a certain init-level of the engine is unloaded.
    ///
    /// This will only be invoked for levels >= [`Self::min_level()`], in descending order.
    #[allow(unused_variables)]
    fn on_level_deinit(level: InitLevel) {
        // Nothing by default.
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DefaultExtension;

    // SAFETY: test only, never loaded.
    unsafe impl ExtensionLibrary for DefaultExtension {}

    #[test]
    fn default_min_level_is_scene() {
        assert_eq!(DefaultExtension::min_level(), InitLevel::Scene);

        // Default hooks are no-ops.
        DefaultExtension::on_level_init(InitLevel::Core);
        DefaultExtension::on_level_deinit(InitLevel::Core);
    }
}
