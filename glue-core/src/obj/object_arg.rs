/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use sys::{ffi_methods, GodotFfi};

use crate::builtin::Variant;
use crate::meta::error::ConvertError;
use crate::meta::{FromGodot, GodotConvert, GodotFfiVariant, GodotType, ToGodot};
use crate::obj::{Gd, GodotClass, Inherits};
use crate::sys;

/// Objects that can be passed as arguments to engine functions, without ownership transfer.
///
/// Implemented for `Gd<U>`, `&Gd<U>`, `Option<Gd<U>>` and `Option<&Gd<U>>`, whenever `U` inherits `T`. This allows passing
/// a `Gd<Node2D>` to a method expecting `impl AsObjectArg<Node>`, without manual upcast. `None` and [`Gd::null_arg()`] pass
/// a null object.
pub trait AsObjectArg<T>
where
    T: GodotClass,
{
    #[doc(hidden)]
    fn as_object_arg(&self) -> ObjectArg<T>;
}

impl<T, U> AsObjectArg<T> for Gd<U>
where
    T: GodotClass,
    U: Inherits<T>,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        ObjectArg::from_gd(self)
    }
}

impl<T, U> AsObjectArg<T> for &Gd<U>
where
    T: GodotClass,
    U: Inherits<T>,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        ObjectArg::from_gd(self)
    }
}

impl<T, U> AsObjectArg<T> for Option<Gd<U>>
where
    T: GodotClass,
    U: Inherits<T>,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        self.as_ref().map_or_else(ObjectArg::null, ObjectArg::from_gd)
    }
}

impl<T, U> AsObjectArg<T> for Option<&Gd<U>>
where
    T: GodotClass,
    U: Inherits<T>,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        self.map_or_else(ObjectArg::null, ObjectArg::from_gd)
    }
}

impl<T> AsObjectArg<T> for ObjectArg<T>
where
    T: GodotClass,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        *self
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// View on an object pointer, passed to the engine for the duration of one call.
///
/// Does not hold a reference; the caller keeps the object alive. Null represents "no object".
#[doc(hidden)]
#[repr(C)]
pub struct ObjectArg<T: GodotClass> {
    object_ptr: sys::GDExtensionObjectPtr,
    _marker: PhantomData<*const T>,
}

impl<T: GodotClass> ObjectArg<T> {
    pub fn from_gd<U>(obj: &Gd<U>) -> Self
    where
        U: Inherits<T>,
    {
        Self {
            object_ptr: obj.obj_sys(),
            _marker: PhantomData,
        }
    }

    pub fn null() -> Self {
        Self {
            object_ptr: std::ptr::null_mut(),
            _marker: PhantomData,
        }
    }

    pub fn is_null(&self) -> bool {
        self.object_ptr.is_null()
    }
}

// Manual impls, since derives would require `T: Clone`.
impl<T: GodotClass> Clone for ObjectArg<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: GodotClass> Copy for ObjectArg<T> {}

impl<T: GodotClass> Default for ObjectArg<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: GodotClass> PartialEq for ObjectArg<T> {
    fn eq(&self, other: &Self) -> bool {
        self.object_ptr == other.object_ptr
    }
}

impl<T: GodotClass> fmt::Debug for ObjectArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "ObjectArg<{}>(null)", T::CLASS_NAME)
        } else {
            write!(f, "ObjectArg<{}>({:p})", T::CLASS_NAME, self.object_ptr)
        }
    }
}

// SAFETY: same layout as the native `Object*`.
unsafe impl<T: GodotClass> GodotFfi for ObjectArg<T> {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Object
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

impl<T: GodotClass> GodotConvert for ObjectArg<T> {
    type Via = Self;
}

impl<T: GodotClass> ToGodot for ObjectArg<T> {
    fn to_godot(&self) -> Self::Via {
        *self
    }
}

impl<T: GodotClass> FromGodot for ObjectArg<T> {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: GodotClass> GodotFfiVariant for ObjectArg<T> {
    fn ffi_to_variant(&self) -> Variant {
        if self.is_null() {
            return Variant::nil();
        }

        // SAFETY: the engine copies the pointer into the variant, incrementing reference-counted objects itself.
        unsafe {
            Variant::new_with_var_uninit(|variant_ptr| {
                let converter = sys::builtin_lifecycle_api().conversions.object_to_variant;
                converter(variant_ptr, sys::force_mut_ptr(self.sys()));
            })
        }
    }

    fn ffi_from_variant(_variant: &Variant) -> Result<Self, ConvertError> {
        Err(ConvertError::new(
            "ObjectArg cannot be created from Variant; use Gd<T> or Option<Gd<T>>",
        ))
    }
}

impl<T: GodotClass> GodotType for ObjectArg<T> {
    type Ffi = Self;

    fn to_ffi(&self) -> Self::Ffi {
        *self
    }

    fn into_ffi(self) -> Self::Ffi {
        self
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(ffi)
    }

    fn godot_type_name() -> String {
        T::CLASS_NAME.to_string()
    }
}
