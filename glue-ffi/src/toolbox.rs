/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Macros and helpers for loading and calling into the engine.

use crate as sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

/// Verifies a condition at compile time.
#[macro_export]
macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal) => {
        const _: () = assert!($cond, $msg);
    };
}

/// Verifies at compile time that two types `T` and `U` have the same size.
#[macro_export]
macro_rules! static_assert_eq_size {
    ($T:ty, $U:ty) => {
        $crate::static_assert!(std::mem::size_of::<$T>() == std::mem::size_of::<$U>());
    };
    ($T:ty, $U:ty, $msg:literal) => {
        $crate::static_assert!(std::mem::size_of::<$T>() == std::mem::size_of::<$U>(), $msg);
    };
}

/// Trace output.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! out {
    ()                          => (eprintln!());
    ($fmt:literal)              => (eprintln!($fmt));
    ($fmt:literal, $($arg:tt)*) => (eprintln!($fmt, $($arg)*));
}

/// Trace output.
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! out {
    ()                          => ({});
    ($fmt:literal)              => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt); });
    ($fmt:literal, $($arg:tt)*) => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt, $($arg)*); });
}

/// Access a function of the loaded GDExtension interface.
///
/// Requires the binding to be initialized.
#[macro_export]
macro_rules! interface_fn {
    ($name:ident) => {{
        unsafe { $crate::get_interface().$name }
    }};
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Method bind types

/// Handle of an engine method, as returned by `classdb_get_method_bind`.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(transparent)]
pub struct ClassMethodBind(pub sys::GDExtensionMethodBindPtr);

// SAFETY: the handle identifies a method in the engine's ClassDB and is never dereferenced on the Rust side.
// Whether calling it is thread-safe is decided at the call site, not by moving the handle.
unsafe impl Send for ClassMethodBind {}
// SAFETY: see `Send`.
unsafe impl Sync for ClassMethodBind {}

/// Pointer to a builtin-type method (`GDExtensionPtrBuiltInMethod` without the `Option`).
pub type BuiltinMethodBind = unsafe extern "C" fn(
    p_base: sys::GDExtensionTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    r_return: sys::GDExtensionTypePtr,
    p_argument_count: std::ffi::c_int,
);

/// Pointer to a utility function (`GDExtensionPtrUtilityFunction` without the `Option`).
pub type UtilityFunctionBind = unsafe extern "C" fn(
    r_return: sys::GDExtensionTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    p_argument_count: std::ffi::c_int,
);

/// Lookup keys for method tables generated with `codegen-lazy-fptrs`.
#[cfg(feature = "codegen-lazy-fptrs")]
pub mod lazy_keys {
    #[derive(Clone, Eq, PartialEq, Hash, Debug)]
    pub struct ClassMethodKey {
        pub class_name: &'static str,
        pub method_name: &'static str,
        pub hash: i64,
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

/// Explicitly cast away `const` from a pointer, similar to C++ `const_cast`.
pub fn force_mut_ptr<T>(ptr: *const T) -> *mut T {
    ptr as *mut T
}

/// If `ptr` is not null, returns `Some(mapper(ptr))`; otherwise `None`.
#[inline]
pub fn ptr_then<T, R, F>(ptr: *mut T, mapper: F) -> Option<R>
where
    F: FnOnce(*mut T) -> R,
{
    if ptr.is_null() {
        None
    } else {
        Some(mapper(ptr))
    }
}

/// Returns a C `const char*` for a null-terminated byte string.
#[inline]
pub fn c_str(s: &[u8]) -> *const std::ffi::c_char {
    debug_assert!(!s.is_empty() && s[s.len() - 1] == 0);

    s.as_ptr() as *const std::ffi::c_char
}

#[doc(hidden)]
#[inline]
pub fn default_call_error() -> sys::GDExtensionCallError {
    sys::GDExtensionCallError {
        error: sys::GDEXTENSION_CALL_OK,
        argument: -1,
        expected: -1,
    }
}

/// Reads the human-readable version string out of the engine's version struct.
pub fn read_version_string(version: &sys::GDExtensionGodotVersion) -> String {
    if version.string.is_null() {
        return format!("{}.{}.{}", version.major, version.minor, version.patch);
    }

    // SAFETY: the engine provides a null-terminated static string.
    let char_ptr = unsafe { std::ffi::CStr::from_ptr(version.string) };

    char_ptr
        .to_str()
        .unwrap_or("(invalid UTF-8 in version)")
        .to_string()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Table loaders

/// Resolves one engine method.
///
/// `class_sname_ptr` may be passed if the class `StringName` has already been fetched from `string_names`.
///
/// # Panics
/// If the engine returns a null bind, naming class, method and hash. This indicates an API mismatch between the
/// `extension_api.json` used for code generation and the running engine.
pub fn load_class_method(
    get_method_bind: sys::GDExtensionInterfaceClassdbGetMethodBind,
    string_names: &mut sys::StringCache,
    class_sname_ptr: Option<sys::GDExtensionConstStringNamePtr>,
    class_name: &'static str,
    method_name: &'static str,
    hash: i64,
) -> ClassMethodBind {
    crate::out!("Load class method {class_name}::{method_name} (hash {hash})...");

    let class_sname_ptr = class_sname_ptr.unwrap_or_else(|| string_names.fetch(class_name));
    let method_sname_ptr = string_names.fetch(method_name);

    // SAFETY: function pointer provided by the engine; string names are alive for the duration of the call.
    let method = unsafe { get_method_bind(class_sname_ptr, method_sname_ptr, hash) };

    if method.is_null() {
        panic!("Failed to load class method {class_name}::{method_name} (hash {hash}).{INFO}")
    }

    ClassMethodBind(method)
}

pub(crate) fn load_builtin_method(
    get_builtin_method: sys::GDExtensionInterfaceVariantGetPtrBuiltinMethod,
    string_names: &mut sys::StringCache,
    variant_type: sys::VariantType,
    method_name: &'static str,
    hash: i64,
) -> BuiltinMethodBind {
    // SAFETY: function pointer provided by the engine.
    let method = unsafe { get_builtin_method(variant_type.sys(), string_names.fetch(method_name), hash) };

    method.unwrap_or_else(|| {
        panic!("Failed to load builtin method {variant_type:?}::{method_name} (hash {hash}).{INFO}")
    })
}

pub(crate) fn load_utility_function(
    get_utility_fn: sys::GDExtensionInterfaceVariantGetPtrUtilityFunction,
    string_names: &mut sys::StringCache,
    fn_name: &'static str,
    hash: i64,
) -> UtilityFunctionBind {
    // SAFETY: function pointer provided by the engine.
    let utility_fn = unsafe { get_utility_fn(string_names.fetch(fn_name), hash) };

    utility_fn.unwrap_or_else(|| panic!("Failed to load utility function {fn_name} (hash {hash}).{INFO}"))
}

pub(crate) fn validate_builtin_lifecycle<T>(function: Option<T>, description: &str) -> T {
    function.unwrap_or_else(|| panic!("Failed to load builtin lifecycle function {description}.{INFO}"))
}

const INFO: &str = "\nMake sure the bindings were generated from the API of the running Godot version \
    (see feature `api-custom-json`).";

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptr_then_skips_null() {
        let mut value = 7;
        assert_eq!(ptr_then(&mut value as *mut i32, |p| unsafe { *p }), Some(7));
        assert_eq!(ptr_then(std::ptr::null_mut::<i32>(), |p| unsafe { *p }), None);
    }

    #[test]
    fn version_string_falls_back_to_numbers() {
        let version = sys::GDExtensionGodotVersion {
            major: 4,
            minor: 3,
            patch: 1,
            string: std::ptr::null(),
        };
        assert_eq!(read_version_string(&version), "4.3.1");

        let text = c"Godot Engine v4.3.stable.official";
        let version = sys::GDExtensionGodotVersion {
            string: text.as_ptr(),
            ..version
        };
        assert_eq!(read_version_string(&version), "Godot Engine v4.3.stable.official");
    }

    #[test]
    fn default_call_error_is_ok() {
        let err = default_call_error();
        assert_eq!(err.error, sys::GDEXTENSION_CALL_OK);
        assert_eq!(err.argument, -1);
    }
}
