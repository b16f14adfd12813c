/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**glue**](https://docs.rs/glue)
//!
//! Low-level bindings to the GDExtension C interface, plus the method tables generated from `extension_api.json`.
//! Do not depend on this crate directly, instead use the `glue` crate.
//! No SemVer or other guarantees are provided.

#![cfg_attr(test, allow(unused))]

// Output of generated code. Mimics the file structure, symbols are re-exported.
#[rustfmt::skip]
#[allow(
    non_camel_case_types,
    non_upper_case_globals,
    non_snake_case,
    deref_nullptr,
    clippy::redundant_static_lifetimes,
)]
pub(crate) mod gen;

mod binding;
mod builtin_lifecycle;
mod gdextension_interface;
mod global;
mod godot_ffi;
mod init_level;
mod interface_init;
mod opaque;
mod singleton_cell;
mod string_cache;
mod toolbox;
mod variant_type;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public API

pub use binding::{
    builtin_lifecycle_api, builtin_method_table, class_core_api, class_editor_api, class_scene_api, class_servers_api,
    get_interface, get_library, is_initialized, utility_function_table,
};
pub use builtin_lifecycle::{
    BuiltinLifecycleTable, BuiltinMethodTable, ConstructFn, DestroyFn, FromVariantFn, ToVariantFn,
    UtilityFunctionTable, VariantConversions,
};
pub use gdextension_interface::*;
pub use gen::table_core_classes::*;
pub use gen::table_editor_classes::*;
pub use gen::table_scene_classes::*;
pub use gen::table_servers_classes::*;
pub use gen::{types, GODOT_API_VERSION, GODOT_API_VERSION_STRING};
pub use global::{Global, GlobalGuard};
pub use godot_ffi::GodotFfi;
pub use init_level::InitLevel;
pub use interface_init::{ensure_static_runtime_compatibility, runtime_version};
pub use opaque::Opaque;
pub use singleton_cell::SingletonCell;
pub use string_cache::StringCache;
pub use toolbox::*;
pub use variant_type::VariantType;

use binding::GodotBinding;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Lifecycle

/// Loads the GDExtension interface and stores it together with the library pointer.
///
/// Builtin lifecycle functions and utility functions are loaded immediately; class method tables follow per
/// initialization level via [`load_class_method_table()`].
///
/// # Safety
/// - `get_proc_address` and `library` must be the pointers passed by the engine to the entry point.
/// - Must be called on the main thread, exactly once before any other function of this crate (until [`deinitialize()`]).
pub unsafe fn initialize(
    get_proc_address: GDExtensionInterfaceGetProcAddress,
    library: GDExtensionClassLibraryPtr,
) {
    out!("Initialize glue-ffi...");

    ensure_static_runtime_compatibility(get_proc_address);
    let version = runtime_version(get_proc_address);

    let interface = interface_init::load_interface(get_proc_address);
    out!("Loaded interface.");

    let builtin_lifecycle = BuiltinLifecycleTable::load(&interface);
    out!("Loaded builtin lifecycle table.");

    let utility_functions = {
        let mut string_names = StringCache::new(&interface, &builtin_lifecycle);
        UtilityFunctionTable::load(&interface, &mut string_names)
    };
    out!("Loaded utility function table.");

    binding::initialize_binding(GodotBinding::new(
        interface,
        library,
        builtin_lifecycle,
        utility_functions,
    ));

    println!(
        "Initialize glue (API v{GODOT_API_VERSION_STRING}, runtime {})",
        read_version_string(&version)
    );
}

/// Drops the binding with all loaded method tables.
///
/// # Safety
/// Must be called on the main thread, after the last engine call. Values that hold engine resources (cached names, objects)
/// must already be released.
pub unsafe fn deinitialize() {
    binding::deinitialize_binding();
    out!("Deinitialized glue-ffi.");
}

/// Loads the builtin-method table. Happens once, together with the `Core` class table.
///
/// # Safety
/// The binding must be initialized; main thread only.
pub unsafe fn load_builtin_method_table() {
    let interface = get_interface();
    let mut string_names = StringCache::new(interface, builtin_lifecycle_api());

    let table = BuiltinMethodTable::load(interface, &mut string_names);
    binding::initialize_builtin_method_table(table);

    out!("Loaded {} builtin methods.", BuiltinMethodTable::METHOD_COUNT);
}

/// Loads the class method table of one initialization level.
///
/// With feature `codegen-lazy-fptrs`, the table starts out empty and resolves binds on first call instead.
///
/// # Panics
/// If the table for `level` has already been loaded, or (eager mode) if any method cannot be resolved.
///
/// # Safety
/// The binding must be initialized; main thread only.
pub unsafe fn load_class_method_table(level: InitLevel) {
    out!("Load class method table for level '{level:?}'...");

    #[cfg(not(feature = "codegen-lazy-fptrs"))]
    let (class_count, method_count) = {
        let interface = get_interface();
        let mut string_names = StringCache::new(interface, builtin_lifecycle_api());

        match level {
            InitLevel::Core => {
                binding::initialize_class_core_method_table(ClassCoreMethodTable::load(interface, &mut string_names));
                (ClassCoreMethodTable::CLASS_COUNT, ClassCoreMethodTable::METHOD_COUNT)
            }
            InitLevel::Servers => {
                binding::initialize_class_servers_method_table(ClassServersMethodTable::load(
                    interface,
                    &mut string_names,
                ));
                (ClassServersMethodTable::CLASS_COUNT, ClassServersMethodTable::METHOD_COUNT)
            }
            InitLevel::Scene => {
                binding::initialize_class_scene_method_table(ClassSceneMethodTable::load(interface, &mut string_names));
                (ClassSceneMethodTable::CLASS_COUNT, ClassSceneMethodTable::METHOD_COUNT)
            }
            InitLevel::Editor => {
                binding::initialize_class_editor_method_table(ClassEditorMethodTable::load(
                    interface,
                    &mut string_names,
                ));
                (ClassEditorMethodTable::CLASS_COUNT, ClassEditorMethodTable::METHOD_COUNT)
            }
        }
    };

    #[cfg(feature = "codegen-lazy-fptrs")]
    let (class_count, method_count) = {
        match level {
            InitLevel::Core => {
                binding::initialize_class_core_method_table(ClassCoreMethodTable::load());
                (ClassCoreMethodTable::CLASS_COUNT, ClassCoreMethodTable::METHOD_COUNT)
            }
            InitLevel::Servers => {
                binding::initialize_class_servers_method_table(ClassServersMethodTable::load());
                (ClassServersMethodTable::CLASS_COUNT, ClassServersMethodTable::METHOD_COUNT)
            }
            InitLevel::Scene => {
                binding::initialize_class_scene_method_table(ClassSceneMethodTable::load());
                (ClassSceneMethodTable::CLASS_COUNT, ClassSceneMethodTable::METHOD_COUNT)
            }
            InitLevel::Editor => {
                binding::initialize_class_editor_method_table(ClassEditorMethodTable::load());
                (ClassEditorMethodTable::CLASS_COUNT, ClassEditorMethodTable::METHOD_COUNT)
            }
        }
    };

    out!("{level:?} level: {class_count} classes, {method_count} methods.");
}
