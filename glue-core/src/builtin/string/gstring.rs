/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_char;
use std::fmt;

use crate::builtin::{NodePath, StringName};
use crate::sys;
use sys::types::OpaqueString;
use sys::{ffi_methods, interface_fn, GodotFfi};

/// The engine's general-purpose, reference-counted string type.
///
/// This is the binding of GDScript's `String`. It uses copy-on-write semantics and is cheap to clone. Its memory layout
/// differs from Rust's `String`; conversions in both directions go through UTF-8 and allocate.
///
/// Engine methods accept string parameters as `impl AsArg<GString>`, so `&str` and `&String` can be passed directly.
#[doc(alias = "String")]
#[repr(transparent)]
pub struct GString {
    opaque: OpaqueString,
}

impl GString {
    /// Construct a new empty `GString`.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_opaque(opaque: OpaqueString) -> Self {
        Self { opaque }
    }

    /// Number of bytes in the UTF-8 representation.
    pub fn utf8_len(&self) -> usize {
        // SAFETY: a null buffer with length 0 only queries the required size.
        let len = unsafe { interface_fn!(string_to_utf8_chars)(self.string_sys(), std::ptr::null_mut(), 0) };
        len.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.utf8_len() == 0
    }

    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringPtr {
        self.sys()
    }

    #[doc(hidden)]
    pub fn string_sys_mut(&mut self) -> sys::GDExtensionStringPtr {
        self.sys_mut()
    }

    /// Writes a new string into an uninitialized slot, e.g. an engine out-parameter.
    ///
    /// # Safety
    /// `init_fn` must fully initialize the string behind the pointer.
    #[doc(hidden)]
    pub unsafe fn new_with_string_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedStringPtr)) -> Self {
        Self::new_with_uninit(init_fn)
    }

    fn to_rust_string(&self) -> String {
        let len = self.utf8_len();
        if len == 0 {
            return String::new();
        }

        let mut buf = vec![0u8; len];

        // SAFETY: `buf` holds exactly `len` bytes; the engine writes at most that many.
        let written = unsafe {
            interface_fn!(string_to_utf8_chars)(self.string_sys(), buf.as_mut_ptr() as *mut c_char, len as i64)
        };
        buf.truncate(written.max(0) as usize);

        // The engine emits valid UTF-8; stay lenient in case of unpaired surrogates.
        match String::from_utf8(buf) {
            Ok(s) => s,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }
    }
}

// SAFETY: `GString` is a transparent wrapper around the engine's opaque string storage.
unsafe impl GodotFfi for GString {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::String
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; .. }
}

crate::meta::impl_godot_as_self!(GString);

impl_builtin_traits! {
    for GString {
        Default => string_construct_default;
        Clone => string_construct_copy;
        Drop => string_destroy;
        Eq;
        Hash;
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rust_string())
    }
}

/// Uses string literal syntax: `"text"`.
impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_rust_string())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversion from other string types

impl From<&str> for GString {
    fn from(s: &str) -> Self {
        let bytes = s.as_bytes();

        // SAFETY: the engine copies `len` bytes of UTF-8 into the fresh string.
        unsafe {
            Self::new_with_string_uninit(|string_ptr| {
                let ctor = interface_fn!(string_new_with_utf8_chars_and_len);
                ctor(string_ptr, bytes.as_ptr() as *const c_char, bytes.len() as i64);
            })
        }
    }
}

impl From<&StringName> for GString {
    fn from(string: &StringName) -> Self {
        // SAFETY: `String(StringName)` takes one argument of that type.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                let ctor = sys::builtin_lifecycle_api().string_from_string_name;
                let args = [string.sys()];
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl From<StringName> for GString {
    fn from(string: StringName) -> Self {
        Self::from(&string)
    }
}

impl From<&NodePath> for GString {
    fn from(path: &NodePath) -> Self {
        // SAFETY: `String(NodePath)` takes one argument of that type.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                let ctor = sys::builtin_lifecycle_api().string_from_node_path;
                let args = [path.sys()];
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl From<NodePath> for GString {
    fn from(path: NodePath) -> Self {
        Self::from(&path)
    }
}
