/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::marker::PhantomData;

use sys::{ffi_methods, interface_fn, out, GodotFfi};

use crate::builtin::Variant;
use crate::classes;
use crate::meta::error::{ConvertError, FromVariantError};
use crate::meta::GodotFfiVariant;
use crate::obj::{GodotClass, Inherits, InstanceId, Memory};
use crate::sys;

/// Nullable, low-level object pointer, which owns one reference if the object is reference-counted.
///
/// This is the FFI representation of [`Gd<T>`][crate::obj::Gd] and `Option<Gd<T>>`. It has the same layout as the native
/// `Object*`, so a pointer to a `RawGd` can be handed to the engine as a ptrcall argument or return slot.
#[repr(C)]
#[doc(hidden)]
pub struct RawGd<T: GodotClass> {
    pub(super) obj: sys::GDExtensionObjectPtr,
    _marker: PhantomData<*const T>,
}

impl<T: GodotClass> RawGd<T> {
    pub(crate) fn null() -> Self {
        Self {
            obj: std::ptr::null_mut(),
            _marker: PhantomData,
        }
    }

    /// Takes over one existing reference (or plain ownership for manually-managed objects). Does not increment.
    ///
    /// # Safety
    /// `obj` must be null or a live object of class `T` (or a subclass).
    pub(crate) unsafe fn from_obj_sys(obj: sys::GDExtensionObjectPtr) -> Self {
        Self {
            obj,
            _marker: PhantomData,
        }
    }

    /// Creates a new handle to an object which the caller does not own; reference-counted objects are incremented.
    ///
    /// # Safety
    /// See [`from_obj_sys()`](Self::from_obj_sys).
    pub(crate) unsafe fn from_obj_sys_weak(obj: sys::GDExtensionObjectPtr) -> Self {
        Self::from_obj_sys(obj).with_inc_refcount()
    }

    pub(crate) fn is_null(&self) -> bool {
        self.obj.is_null()
    }

    pub(crate) fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.obj
    }

    pub(crate) fn is_ref_counted(&self) -> bool {
        !self.is_null() && <T::Memory as Memory>::is_ref_counted(self.obj)
    }

    /// Instance ID as reported by the engine; `None` for null.
    ///
    /// Does not check whether the object is still alive.
    pub(crate) fn instance_id_unchecked(&self) -> Option<InstanceId> {
        if self.is_null() {
            return None;
        }

        // SAFETY: non-null object pointer.
        let raw_id = unsafe { interface_fn!(object_get_instance_id)(self.obj) };
        InstanceId::try_from_u64(raw_id)
    }

    /// Whether the object behind this pointer has not been destroyed.
    pub(crate) fn is_instance_valid(&self) -> bool {
        let Some(id) = self.instance_id_unchecked() else {
            return false;
        };

        // SAFETY: lookup by ID is valid for dead objects too, returning null.
        let looked_up = unsafe { interface_fn!(object_get_instance_from_id)(id.to_u64()) };
        !looked_up.is_null()
    }

    /// Converts to a handle of a base class; the reference is moved, not duplicated.
    pub(crate) fn upcast<Base>(self) -> RawGd<Base>
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        let obj = self.obj;
        std::mem::forget(self);

        // SAFETY: `T: Inherits<Base>` guarantees a compatible class, the reference travels along.
        unsafe { RawGd::from_obj_sys(obj) }
    }

    /// Same object under another static type, without checking the class.
    ///
    /// # Safety
    /// The dynamic class of the object must be `U` or a subclass.
    pub(crate) unsafe fn transmute_class<U: GodotClass>(self) -> RawGd<U> {
        let obj = self.obj;
        std::mem::forget(self);

        RawGd::from_obj_sys(obj)
    }

    pub(crate) fn with_inc_refcount(self) -> Self {
        if self.is_ref_counted() {
            // `init_ref()` also covers freshly constructed objects with a count of zero.
            self.with_ref_counted(|refc| refc.init_ref());
        }

        self
    }

    /// Runs `apply` on this object, seen as a `RefCounted`.
    ///
    /// Must only be called if [`is_ref_counted()`](Self::is_ref_counted) is true.
    fn with_ref_counted<R>(&self, apply: impl FnOnce(&mut classes::RefCounted) -> R) -> R {
        let mut local = self.obj;

        // SAFETY: engine classes are #[repr(C)] structs holding just the object pointer; the object inherits RefCounted.
        let refc = unsafe { &mut *(std::ptr::addr_of_mut!(local) as *mut classes::RefCounted) };
        apply(refc)
    }
}

impl<T: GodotClass> Drop for RawGd<T> {
    fn drop(&mut self) {
        if !self.is_ref_counted() {
            return;
        }

        out!("RawGd::drop:      {self:?}");

        let is_last = self.with_ref_counted(|refc| refc.unreference());
        if is_last {
            // SAFETY: the last reference was just released; nobody else can observe the object.
            unsafe {
                interface_fn!(object_destroy)(self.obj);
            }
        }
    }
}

impl<T: GodotClass> Clone for RawGd<T> {
    fn clone(&self) -> Self {
        out!("RawGd::clone:     {self:?}");

        // SAFETY: same pointer as self, which is null or valid.
        unsafe { Self::from_obj_sys_weak(self.obj) }
    }
}

impl<T: GodotClass> fmt::Debug for RawGd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            return write!(f, "{} {{ null }}", T::CLASS_NAME);
        }

        match self.instance_id_unchecked() {
            Some(id) => write!(f, "{} {{ id: {id} }}", T::CLASS_NAME),
            None => write!(f, "{} {{ ptr: {:p} }}", T::CLASS_NAME, self.obj),
        }
    }
}

impl<T: GodotClass> Default for RawGd<T> {
    fn default() -> Self {
        Self::null()
    }
}

// SAFETY: `RawGd` is #[repr(C)] with a single object pointer, matching the native `Object*` slot.
unsafe impl<T: GodotClass> GodotFfi for RawGd<T> {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Object
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

impl<T: GodotClass> GodotFfiVariant for RawGd<T> {
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

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let variant_type = variant.get_type();

        // Nil is accepted and yields a null pointer; `Gd<T>` rejects it later, `Option<Gd<T>>` maps it to `None`.
        if variant_type == sys::VariantType::Nil {
            return Ok(Self::null());
        }

        if variant_type != sys::VariantType::Object {
            return Err(FromVariantError::BadType {
                expected: sys::VariantType::Object,
                actual: variant_type,
            }
            .into_error(variant));
        }

        // SAFETY: the variant holds an object; the engine writes a pointer without transferring a reference.
        let raw = unsafe {
            Self::new_with_uninit(|self_ptr| {
                let converter = sys::builtin_lifecycle_api().conversions.object_from_variant;
                converter(self_ptr, sys::force_mut_ptr(variant.var_sys()));
            })
        };

        Ok(raw.with_inc_refcount())
    }
}
