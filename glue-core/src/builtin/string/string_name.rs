/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_char;
use std::fmt;

use crate::builtin::GString;
use crate::sys;
use sys::types::OpaqueStringName;
use sys::{ffi_methods, interface_fn, GodotFfi};

/// A string optimized for unique names.
///
/// StringNames are immutable strings; the engine ensures that only one instance of a given name exists, which makes
/// comparison and hashing cheap on the engine side. Method, property and signal names are `StringName`s.
///
/// Names used repeatedly are best kept as an [`InternedName`](crate::meta::InternedName) constant, which creates the
/// `StringName` once per process and reuses it afterwards.
#[repr(transparent)]
pub struct StringName {
    opaque: OpaqueStringName,
}

impl StringName {
    fn from_opaque(opaque: OpaqueStringName) -> Self {
        Self { opaque }
    }

    pub fn is_empty(&self) -> bool {
        GString::from(self).is_empty()
    }

    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        self.sys()
    }

    #[doc(hidden)]
    pub fn string_sys_mut(&mut self) -> sys::GDExtensionStringNamePtr {
        self.sys_mut()
    }

    /// Writes a new name into an uninitialized slot, e.g. an engine out-parameter.
    ///
    /// # Safety
    /// `init_fn` must fully initialize the name behind the pointer.
    #[doc(hidden)]
    pub unsafe fn new_with_string_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedStringNamePtr)) -> Self {
        Self::new_with_uninit(init_fn)
    }

    /// Creates a new reference to the name behind `ptr`, leaving the original untouched.
    ///
    /// # Safety
    /// `ptr` must point to a live `StringName`.
    #[doc(hidden)]
    pub unsafe fn new_copy_from_string_sys(ptr: sys::GDExtensionConstStringNamePtr) -> Self {
        Self::new_with_uninit(|self_ptr| {
            let ctor = sys::builtin_lifecycle_api().string_name_construct_copy;
            let args = [ptr];
            ctor(self_ptr, args.as_ptr());
        })
    }
}

// SAFETY: `StringName` is a transparent wrapper around the engine's opaque name storage.
unsafe impl GodotFfi for StringName {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::StringName
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; .. }
}

crate::meta::impl_godot_as_self!(StringName);

impl_builtin_traits! {
    for StringName {
        Default => string_name_construct_default;
        Clone => string_name_construct_copy;
        Drop => string_name_destroy;
        Eq;
        Hash;
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&GString::from(self), f)
    }
}

/// Uses the GDScript literal syntax: `&"name"`.
impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&\"{}\"", GString::from(self))
    }
}

impl From<&str> for StringName {
    fn from(s: &str) -> Self {
        let bytes = s.as_bytes();

        // SAFETY: the engine copies `len` bytes of UTF-8 and interns the result.
        unsafe {
            Self::new_with_string_uninit(|ptr| {
                let ctor = interface_fn!(string_name_new_with_utf8_chars_and_len);
                ctor(ptr, bytes.as_ptr() as *const c_char, bytes.len() as i64);
            })
        }
    }
}

impl From<&GString> for StringName {
    fn from(string: &GString) -> Self {
        // SAFETY: `StringName(String)` takes one argument of that type.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                let ctor = sys::builtin_lifecycle_api().string_name_from_string;
                let args = [string.sys()];
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl From<GString> for StringName {
    fn from(string: GString) -> Self {
        Self::from(&string)
    }
}
