/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::sys;
use sys::types::OpaquePackedInt32Array;
use sys::{ffi_methods, interface_fn, GodotFfi};

/// Reference-counted, copy-on-write array of `i32`, as used by the engine for index lists.
///
/// Only read access is bound; arrays are obtained from engine methods such as `ItemList::get_selected_items()`.
pub struct PackedInt32Array {
    opaque: OpaquePackedInt32Array,
}

impl PackedInt32Array {
    /// Constructs an empty array.
    pub fn new() -> Self {
        Self::default()
    }

    fn from_opaque(opaque: OpaquePackedInt32Array) -> Self {
        Self { opaque }
    }

    /// Returns the number of elements in the array.
    pub fn len(&self) -> usize {
        let mut size = 0_i64;

        // SAFETY: `size()` takes no arguments and writes an `int`.
        unsafe {
            let method = sys::builtin_method_table().packed_int32_array_size;
            method(
                sys::force_mut_ptr(self.sys()),
                std::ptr::null(),
                size.sys_mut(),
                0,
            );
        }

        size.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<i32> {
        if index >= self.len() {
            return None;
        }

        // SAFETY: index is in bounds (checked above).
        let element = unsafe { *interface_fn!(packed_int32_array_operator_index_const)(self.sys(), index as i64) };
        Some(element)
    }

    /// Copies all elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<i32> {
        let len = self.len();
        if len == 0 {
            return Vec::new();
        }

        // SAFETY: elements are stored contiguously; the first one is in bounds since `len > 0`.
        unsafe {
            let first = interface_fn!(packed_int32_array_operator_index_const)(self.sys(), 0);
            std::slice::from_raw_parts(first, len).to_vec()
        }
    }
}

// SAFETY: `PackedInt32Array` wraps the engine's opaque packed array storage.
unsafe impl GodotFfi for PackedInt32Array {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::PackedInt32Array
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; .. }
}

crate::meta::impl_godot_as_self!(PackedInt32Array);

impl_builtin_traits! {
    for PackedInt32Array {
        Default => packed_int32_array_construct_default;
        Clone => packed_int32_array_construct_copy;
        Drop => packed_int32_array_destroy;
    }
}

impl fmt::Debug for PackedInt32Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_vec())
    }
}

impl PartialEq for PackedInt32Array {
    fn eq(&self, other: &Self) -> bool {
        self.to_vec() == other.to_vec()
    }
}

impl Eq for PackedInt32Array {}

impl From<&PackedInt32Array> for Vec<i32> {
    fn from(array: &PackedInt32Array) -> Self {
        array.to_vec()
    }
}
