/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::{GString, VariantType};
use crate::meta::error::ConvertError;
use crate::meta::{FromGodot, GodotFfiVariant, GodotType};
use crate::sys;
use sys::types::OpaqueVariant;
use sys::{ffi_methods, interface_fn, GodotFfi};

mod impls;

/// Dynamic value that can hold any engine type.
///
/// Used for the _varcall_ calling convention (varargs of [`Object::call()`](crate::classes::Object::call),
/// [`Object::emit_signal()`](crate::classes::Object::emit_signal) and similar), for arguments of [`Callable`](crate::builtin::Callable)s,
/// and for engine APIs that are typed as `Variant` themselves.
///
/// Convert from Rust values with `Variant::from(value)` or [`ToGodot::to_variant()`], and back with [`to()`](Self::to) or
/// [`try_to()`](Self::try_to).
#[repr(transparent)]
pub struct Variant {
    opaque: OpaqueVariant,
}

impl Variant {
    /// Create an empty variant (`null` value in GDScript).
    pub fn nil() -> Self {
        // SAFETY: `variant_new_nil` fully initializes the slot.
        unsafe { Self::new_with_var_uninit(|variant_ptr| interface_fn!(variant_new_nil)(variant_ptr)) }
    }

    /// ⚠️ Convert to type `T`, panicking on failure.
    ///
    /// # Panics
    /// When this variant holds a different type, or a value that does not fit `T` (e.g. an `int` out of `i32` range).
    pub fn to<T: FromGodot>(&self) -> T {
        T::from_variant(self)
    }

    /// Convert to type `T`, returning `Err` on failure.
    pub fn try_to<T: FromGodot>(&self) -> Result<T, ConvertError> {
        T::try_from_variant(self)
    }

    /// Checks whether the variant is empty (`null` value in GDScript).
    pub fn is_nil(&self) -> bool {
        self.get_type() == VariantType::Nil
    }

    /// Returns the type that is currently held by this variant.
    pub fn get_type(&self) -> VariantType {
        // SAFETY: `self` is a valid variant.
        let ty = unsafe { interface_fn!(variant_get_type)(self.var_sys()) };
        VariantType::from_sys(ty)
    }

    /// Converts to a string the same way the engine does when printing.
    pub fn stringify(&self) -> GString {
        let mut result = GString::new();

        // SAFETY: `result` is a valid string; the engine overwrites it in place.
        unsafe {
            interface_fn!(variant_stringify)(self.var_sys(), result.string_sys_mut());
        }

        result
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Low-level access

    #[doc(hidden)]
    pub fn var_sys(&self) -> sys::GDExtensionConstVariantPtr {
        self.sys()
    }

    #[doc(hidden)]
    pub fn var_sys_mut(&mut self) -> sys::GDExtensionVariantPtr {
        self.sys_mut()
    }

    /// # Safety
    /// `init_fn` must fully initialize the variant behind the pointer.
    #[doc(hidden)]
    pub unsafe fn new_with_var_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedVariantPtr)) -> Self {
        Self::new_with_uninit(init_fn)
    }

    /// Views the engine's argument array of a varcall as a slice of references.
    ///
    /// # Safety
    /// `variant_ptr_array` must point to `length` valid variants that outlive `'a`. Ignored if `length` is 0.
    pub(crate) unsafe fn borrow_ref_slice<'a>(
        variant_ptr_array: *const sys::GDExtensionConstVariantPtr,
        length: usize,
    ) -> &'a [&'a Variant] {
        if length == 0 || variant_ptr_array.is_null() {
            return &[];
        }

        // `&Variant` has the layout of a pointer to the opaque storage, since `Variant` is `repr(transparent)`.
        sys::static_assert_eq_size!(&Variant, sys::GDExtensionConstVariantPtr);
        std::slice::from_raw_parts(variant_ptr_array as *const &Variant, length)
    }

    fn from_opaque(opaque: OpaqueVariant) -> Self {
        Self { opaque }
    }
}

// SAFETY: `Variant` is a transparent wrapper around the engine's opaque variant storage.
unsafe impl GodotFfi for Variant {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Nil
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; .. }
}

impl GodotFfiVariant for Variant {
    fn ffi_to_variant(&self) -> Variant {
        self.clone()
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        Ok(variant.clone())
    }
}

impl GodotType for Variant {
    type Ffi = Variant;

    fn to_ffi(&self) -> Self::Ffi {
        self.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(ffi)
    }

    fn godot_type_name() -> String {
        "Variant".to_string()
    }
}

crate::meta::impl_godot_as_self!(Variant);

impl Clone for Variant {
    fn clone(&self) -> Self {
        // SAFETY: `self` is a valid variant; the copy is written into fresh storage.
        unsafe {
            Self::new_with_var_uninit(|variant_ptr| {
                interface_fn!(variant_new_copy)(variant_ptr, self.var_sys());
            })
        }
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        // SAFETY: `self` is initialized and destroyed exactly once.
        unsafe {
            interface_fn!(variant_destroy)(self.var_sys_mut());
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stringify();
        write!(f, "{s}")
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_type() {
            VariantType::Nil => write!(f, "null"),

            // Quote strings, so they are distinguishable from numbers or identifiers.
            VariantType::String => write!(f, "{:?}", self.stringify()),
            VariantType::StringName => write!(f, "&{:?}", self.stringify()),
            VariantType::NodePath => write!(f, "^{:?}", self.stringify()),

            _ => write!(f, "{}", self.stringify()),
        }
    }
}
