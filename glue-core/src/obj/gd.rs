/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::ops::{Deref, DerefMut};

use sys::{interface_fn, static_assert_eq_size};

use crate::builtin::{GString, Variant};
use crate::classes::Object;
use crate::meta::error::{ConvertError, FromFfiError};
use crate::meta::{FromGodot, GodotConvert, GodotType, InternedName, ObjectArg, ToGodot};
use crate::obj::{
    GodotClass, Inherits, Instantiable, InstanceId, MemManual, MemRefCounted, Memory, RawGd,
};
use crate::sys;

/// Smart pointer to objects owned by the engine.
///
/// `Gd<T>` never holds null objects. If you need nullability, use `Option<Gd<T>>`.
///
/// # Memory management
///
/// The strategy depends on `T`'s [`Memory`][GodotClass::Memory] type:
///
/// - **Reference-counted**<br>
///   Objects of type `RefCounted` or inherited from it are **reference-counted**. Every [`clone()`][Clone::clone] increments
///   the reference counter, every drop decrements it. The last reference (either in Rust or the engine) frees the object.<br><br>
///
/// - **Manual**<br>
///   All other objects are **manually managed**. Their destructor is not automatically called (unless they are part of the
///   scene tree). Use [`free()`][Self::free] to destroy them.<br><br>
///
/// For `T = Object`, the strategy is determined at runtime: a `Gd<Object>` pointing to a `RefCounted` instance still counts
/// references.
///
/// # Construction
///
/// | Memory strategy  | Constructor           |
/// |------------------|-----------------------|
/// | Ref-counted      | `Resource::new_gd()`  |
/// | Manually managed | `Node::new_alloc()`   |
/// | Singleton        | `Input::singleton()`  |
#[repr(transparent)]
pub struct Gd<T: GodotClass> {
    pub(crate) raw: RawGd<T>,
}

// Same layout as the native `Object*`.
static_assert_eq_size!(Gd<Object>, sys::GDExtensionObjectPtr);

impl<T: GodotClass> Gd<T> {
    /// Creates a handle from an object pointer the caller does not own. Reference-counted objects are incremented.
    ///
    /// # Safety
    /// `object_ptr` must be a non-null, live object of class `T` (or a subclass).
    #[doc(hidden)]
    pub unsafe fn from_obj_sys_weak(object_ptr: sys::GDExtensionObjectPtr) -> Self {
        Self::from_raw(RawGd::from_obj_sys_weak(object_ptr))
    }

    /// Creates a handle that takes over one reference (or manual ownership) held by the caller.
    ///
    /// # Safety
    /// `object_ptr` must be a non-null, live object of class `T` (or a subclass), and its reference must not be released elsewhere.
    #[doc(hidden)]
    pub unsafe fn from_obj_sys(object_ptr: sys::GDExtensionObjectPtr) -> Self {
        Self::from_raw(RawGd::from_obj_sys(object_ptr))
    }

    pub(crate) fn from_raw(raw: RawGd<T>) -> Self {
        debug_assert!(!raw.is_null(), "Gd::from_raw() called with null pointer");
        Self { raw }
    }

    #[doc(hidden)]
    pub fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.raw.obj_sys()
    }

    /// ⚠️ Returns the instance ID of this object.
    ///
    /// # Panics
    /// If the object has been freed.
    pub fn instance_id(&self) -> InstanceId {
        self.instance_id_or_none().unwrap_or_else(|| {
            panic!("failed to call instance_id() on destroyed {} object", T::CLASS_NAME)
        })
    }

    /// Returns the instance ID, or `None` if the object has been freed.
    pub fn instance_id_or_none(&self) -> Option<InstanceId> {
        if self.raw.is_instance_valid() {
            self.raw.instance_id_unchecked()
        } else {
            None
        }
    }

    /// Checks if this smart pointer points to a live object (read description!).
    ///
    /// Using this method is often indicative of bad design: manually-managed objects should be freed by their owner, and
    /// other handles should not outlive them. Reference-counted objects are always valid while a `Gd` exists.
    pub fn is_instance_valid(&self) -> bool {
        self.raw.is_instance_valid()
    }

    /// **Upcast:** convert into a smart pointer to a base class. Always succeeds.
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        Gd::from_raw(self.into_raw().upcast())
    }

    /// **Upcast shared-ref:** access this object as a shared reference to a base class.
    ///
    /// Useful to call base methods without moving the `Gd`.
    pub fn upcast_ref<Base>(&self) -> &Base
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        // SAFETY: `T: Inherits<Base>`, and all engine classes share the layout of `Gd` (a single object pointer).
        unsafe { &*(self as *const Self as *const Base) }
    }

    /// **Upcast exclusive-ref:** access this object as an exclusive reference to a base class.
    pub fn upcast_mut<Base>(&mut self) -> &mut Base
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        // SAFETY: see upcast_ref().
        unsafe { &mut *(self as *mut Self as *mut Base) }
    }

    /// **Downcast:** try to convert into a smart pointer to a derived class.
    ///
    /// If `T`'s dynamic type is not `Derived` or one of its subclasses, `Err(self)` is returned, so that the object can still
    /// be used (or freed).
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Self>
    where
        Derived: GodotClass + Inherits<T>,
        T: Inherits<Object>,
    {
        let object: &Object = self.upcast_ref();
        if !object.is_class(Derived::CLASS_NAME) {
            return Err(self);
        }

        // SAFETY: the engine confirmed the dynamic class.
        Ok(Gd::from_raw(unsafe { self.into_raw().transmute_class() }))
    }

    /// ⚠️ **Downcast:** convert into a smart pointer to a derived class. Panics on error.
    ///
    /// # Panics
    /// If the class' dynamic type is not `Derived` or one of its subclasses. Use [`Self::try_cast()`] if you want to check the result.
    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: GodotClass + Inherits<T>,
        T: Inherits<Object>,
    {
        self.try_cast().unwrap_or_else(|from_obj| {
            panic!(
                "downcast from {from} to {to} failed; instance {from_obj:?}",
                from = T::CLASS_NAME,
                to = Derived::CLASS_NAME,
            )
        })
    }

    /// Null object argument, for engine APIs that accept `impl AsObjectArg<T>` and allow "no object".
    pub fn null_arg() -> ObjectArg<T> {
        ObjectArg::null()
    }

    fn into_raw(self) -> RawGd<T> {
        self.raw
    }
}

impl<T> Gd<T>
where
    T: GodotClass<Memory = MemManual>,
{
    /// Destroy the manually-managed engine object.
    ///
    /// Consumes this smart pointer and renders all other `Gd` smart pointers (as well as any engine-side references) to the
    /// same object immediately invalid. Using those pointers afterwards is a logic error.
    ///
    /// # Panics
    /// - When the referred-to object has already been destroyed.
    /// - When this is invoked on an upcast `Gd<Object>` that dynamically points to a reference-counted type.
    pub fn free(self) {
        assert!(
            self.is_instance_valid(),
            "called free() on already destroyed object of class {}",
            T::CLASS_NAME
        );

        assert!(
            !MemManual::is_ref_counted(self.obj_sys()),
            "called free() on Gd<{}> which points to a RefCounted dynamic type; free() only supported for manually managed types",
            T::CLASS_NAME
        );

        let object_ptr = self.obj_sys();
        std::mem::forget(self);

        // SAFETY: live, manually-managed object; the handle was consumed.
        unsafe {
            interface_fn!(object_destroy)(object_ptr);
        }
    }
}

/// Allocates a manually-managed engine object; see [`Gd::free()`].
pub trait NewAlloc: GodotClass {
    #[must_use]
    fn new_alloc() -> Gd<Self>;
}

/// Creates a reference-counted engine object.
pub trait NewGd: GodotClass {
    fn new_gd() -> Gd<Self>;
}

impl<T> NewAlloc for T
where
    T: GodotClass<Memory = MemManual> + Instantiable,
{
    fn new_alloc() -> Gd<Self> {
        construct_engine_object::<T>()
    }
}

impl<T> NewGd for T
where
    T: GodotClass<Memory = MemRefCounted> + Instantiable,
{
    fn new_gd() -> Gd<Self> {
        construct_engine_object::<T>()
    }
}

fn construct_engine_object<T: GodotClass>() -> Gd<T> {
    let class_name = InternedName::new(T::CLASS_NAME);

    // SAFETY: interface is loaded; the class name is alive for the duration of the call.
    let object_ptr = unsafe {
        #[cfg(before_api = "4.4")]
        let construct_fn = interface_fn!(classdb_construct_object);
        #[cfg(since_api = "4.4")]
        let construct_fn = interface_fn!(classdb_construct_object2);

        construct_fn(class_name.string_sys())
    };

    assert!(
        !object_ptr.is_null(),
        "engine could not construct object of class {}",
        T::CLASS_NAME
    );

    // Fresh reference-counted objects start at zero and receive their first reference here.
    // SAFETY: non-null object of class T.
    unsafe { Gd::from_obj_sys_weak(object_ptr) }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Trait impls

impl<T: GodotClass> Deref for Gd<T> {
    type Target = T;

    fn deref(&self) -> &T {
        // SAFETY: engine classes are #[repr(C)] structs with a single object pointer, the same layout as Gd.
        unsafe { &*(self as *const Self as *const T) }
    }
}

impl<T: GodotClass> DerefMut for Gd<T> {
    fn deref_mut(&mut self) -> &mut T {
        // SAFETY: see Deref.
        unsafe { &mut *(self as *mut Self as *mut T) }
    }
}

impl<T: GodotClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
        }
    }
}

impl<T: GodotClass> PartialEq for Gd<T> {
    /// ⚠️ Returns whether two `Gd` pointers point to the same object.
    ///
    /// # Panics
    /// When `self` or `other` is dead.
    fn eq(&self, other: &Self) -> bool {
        self.instance_id() == other.instance_id()
    }
}

impl<T: GodotClass> Eq for Gd<T> {}

impl<T: GodotClass + Inherits<Object>> Display for Gd<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if !self.is_instance_valid() {
            return f.write_str("<Freed Object>");
        }

        let mut object: Gd<Object> = self.clone().upcast();
        let string: GString = Object::to_string(&mut object);

        write!(f, "{string}")
    }
}

impl<T: GodotClass> Debug for Gd<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.instance_id_or_none() {
            Some(id) => write!(f, "Gd {{ id: {}, class: {} }}", id.to_i64(), T::CLASS_NAME),
            None => write!(f, "Gd {{ freed {} }}", T::CLASS_NAME),
        }
    }
}

// Unwinding does not invalidate any invariants of Gd; the mutability is anyway present in the engine.
impl<T: GodotClass> std::panic::UnwindSafe for Gd<T> {}
impl<T: GodotClass> std::panic::RefUnwindSafe for Gd<T> {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversions

impl<T: GodotClass> GodotConvert for Gd<T> {
    type Via = Gd<T>;
}

impl<T: GodotClass> ToGodot for Gd<T> {
    fn to_godot(&self) -> Self::Via {
        self.clone()
    }
}

impl<T: GodotClass> FromGodot for Gd<T> {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: GodotClass> GodotType for Gd<T> {
    type Ffi = RawGd<T>;

    fn to_ffi(&self) -> Self::Ffi {
        self.raw.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self.raw
    }

    fn try_from_ffi(raw: Self::Ffi) -> Result<Self, ConvertError> {
        if raw.is_null() {
            Err(FromFfiError::NullRawGd.into_error(raw))
        } else {
            Ok(Self { raw })
        }
    }

    fn godot_type_name() -> String {
        T::CLASS_NAME.to_string()
    }
}

impl<T: GodotClass> GodotConvert for Option<Gd<T>> {
    type Via = Option<Gd<T>>;
}

impl<T: GodotClass> ToGodot for Option<Gd<T>> {
    fn to_godot(&self) -> Self::Via {
        self.clone()
    }
}

impl<T: GodotClass> FromGodot for Option<Gd<T>> {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: GodotClass> GodotType for Option<Gd<T>> {
    type Ffi = RawGd<T>;

    fn to_ffi(&self) -> Self::Ffi {
        match self {
            Some(gd) => gd.raw.clone(),
            None => RawGd::null(),
        }
    }

    fn into_ffi(self) -> Self::Ffi {
        match self {
            Some(gd) => gd.raw,
            None => RawGd::null(),
        }
    }

    fn try_from_ffi(raw: Self::Ffi) -> Result<Self, ConvertError> {
        if raw.is_null() {
            Ok(None)
        } else {
            Ok(Some(Gd { raw }))
        }
    }

    fn godot_type_name() -> String {
        T::CLASS_NAME.to_string()
    }
}

impl<T: GodotClass> From<Gd<T>> for Variant {
    fn from(gd: Gd<T>) -> Self {
        gd.to_variant()
    }
}

impl<T: GodotClass> From<&Gd<T>> for Variant {
    fn from(gd: &Gd<T>) -> Self {
        gd.to_variant()
    }
}
