/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::cell::OnceCell;

use crate::{
    BuiltinLifecycleTable, BuiltinMethodTable, ClassCoreMethodTable, ClassEditorMethodTable, ClassSceneMethodTable,
    ClassServersMethodTable, GDExtensionClassLibraryPtr, GDExtensionInterface, UtilityFunctionTable,
};

mod single_threaded;

use single_threaded::BindingStorage;

pub(crate) struct GodotBinding {
    interface: GDExtensionInterface,
    library: GDExtensionClassLibraryPtr,
    builtin_lifecycle: BuiltinLifecycleTable,
    utility_functions: UtilityFunctionTable,
    builtin_method_table: OnceCell<BuiltinMethodTable>,
    class_core_method_table: OnceCell<ClassCoreMethodTable>,
    class_servers_method_table: OnceCell<ClassServersMethodTable>,
    class_scene_method_table: OnceCell<ClassSceneMethodTable>,
    class_editor_method_table: OnceCell<ClassEditorMethodTable>,
}

impl GodotBinding {
    pub fn new(
        interface: GDExtensionInterface,
        library: GDExtensionClassLibraryPtr,
        builtin_lifecycle: BuiltinLifecycleTable,
        utility_functions: UtilityFunctionTable,
    ) -> Self {
        Self {
            interface,
            library,
            builtin_lifecycle,
            utility_functions,
            builtin_method_table: OnceCell::new(),
            class_core_method_table: OnceCell::new(),
            class_servers_method_table: OnceCell::new(),
            class_scene_method_table: OnceCell::new(),
            class_editor_method_table: OnceCell::new(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

fn initialize_table<T>(table: &OnceCell<T>, value: T, what: &str) {
    if table.set(value).is_err() {
        panic!("method table for {what} should only be initialized once");
    }
}

fn get_table<'a, T>(table: &'a OnceCell<T>, msg: &str) -> &'a T {
    table.get().unwrap_or_else(|| panic!("{msg}"))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public API

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn get_interface() -> &'static GDExtensionInterface {
    &get_binding().interface
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn get_library() -> GDExtensionClassLibraryPtr {
    get_binding().library
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn builtin_lifecycle_api() -> &'static BuiltinLifecycleTable {
    &get_binding().builtin_lifecycle
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn utility_function_table() -> &'static UtilityFunctionTable {
    &get_binding().utility_functions
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn builtin_method_table() -> &'static BuiltinMethodTable {
    get_table(
        &get_binding().builtin_method_table,
        "cannot fetch builtin methods; init level 'Core' not yet loaded",
    )
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn class_core_api() -> &'static ClassCoreMethodTable {
    get_table(
        &get_binding().class_core_method_table,
        "cannot fetch classes; init level 'Core' not yet loaded",
    )
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn class_servers_api() -> &'static ClassServersMethodTable {
    get_table(
        &get_binding().class_servers_method_table,
        "cannot fetch classes; init level 'Servers' not yet loaded",
    )
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn class_scene_api() -> &'static ClassSceneMethodTable {
    get_table(
        &get_binding().class_scene_method_table,
        "cannot fetch classes; init level 'Scene' not yet loaded",
    )
}

/// # Safety
/// The binding must have been initialized; must be called from the main thread.
#[inline(always)]
pub unsafe fn class_editor_api() -> &'static ClassEditorMethodTable {
    get_table(
        &get_binding().class_editor_method_table,
        "cannot fetch classes; init level 'Editor' not yet loaded",
    )
}

#[inline]
pub fn is_initialized() -> bool {
    BindingStorage::is_initialized()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Crate-local implementation

/// # Safety
/// See [`BindingStorage::initialize()`].
pub(crate) unsafe fn initialize_binding(binding: GodotBinding) {
    BindingStorage::initialize(binding);
}

/// # Safety
/// See [`BindingStorage::deinitialize()`].
pub(crate) unsafe fn deinitialize_binding() {
    BindingStorage::deinitialize();
}

#[inline(always)]
pub(crate) unsafe fn get_binding() -> &'static GodotBinding {
    BindingStorage::get_binding_unchecked()
}

pub(crate) unsafe fn initialize_builtin_method_table(table: BuiltinMethodTable) {
    initialize_table(&get_binding().builtin_method_table, table, "builtins")
}

pub(crate) unsafe fn initialize_class_core_method_table(table: ClassCoreMethodTable) {
    initialize_table(&get_binding().class_core_method_table, table, "classes (Core level)")
}

pub(crate) unsafe fn initialize_class_servers_method_table(table: ClassServersMethodTable) {
    initialize_table(&get_binding().class_servers_method_table, table, "classes (Servers level)")
}

pub(crate) unsafe fn initialize_class_scene_method_table(table: ClassSceneMethodTable) {
    initialize_table(&get_binding().class_scene_method_table, table, "classes (Scene level)")
}

pub(crate) unsafe fn initialize_class_editor_method_table(table: ClassEditorMethodTable) {
    initialize_table(&get_binding().class_editor_method_table, table, "classes (Editor level)")
}
