/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Types that can directly and fully represent some Godot type in a native call.
///
/// Adds methods to convert from and to Godot FFI pointers. See [`ffi_methods!`](crate::ffi_methods) for implementations.
///
/// # Safety
/// The memory layout of `Self` (or of its opaque payload) must match the engine's ptrcall representation of
/// [`variant_type()`](Self::variant_type).
#[doc(hidden)]
pub unsafe trait GodotFfi {
    fn variant_type() -> sys::VariantType;

    /// Construct from a pointer, taking over ownership of the pointee's payload.
    ///
    /// # Safety
    /// `ptr` must point to a valid, initialized value; afterwards, the pointee must not be destroyed by the caller.
    unsafe fn new_from_sys(ptr: sys::GDExtensionConstTypePtr) -> Self;

    /// Construct uninitialized storage, then initialize it with `init_fn`.
    ///
    /// # Safety
    /// `init_fn` must fully initialize the value behind the pointer it receives.
    unsafe fn new_with_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self;

    /// Construct a default value, then let `init_fn` overwrite it in place.
    ///
    /// Ptrcall return slots must hold a live value: the engine assigns to them, destroying the previous content.
    ///
    /// # Safety
    /// `init_fn` must leave a valid value behind the pointer it receives.
    unsafe fn new_with_init(init_fn: impl FnOnce(sys::GDExtensionTypePtr)) -> Self;

    /// Native pointer for an immutable operation.
    fn sys(&self) -> sys::GDExtensionConstTypePtr;

    /// Native pointer for a mutable operation.
    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr;

    /// Pointer to pass this value as a ptrcall argument.
    fn as_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        self.sys()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros to implement `GodotFfi` methods, depending on the native representation.

/// Implements the pointer-related methods of [`GodotFfi`].
///
/// Both representations require `Self: Default`, which provides the live value behind return slots.
///
/// Two representations are supported:
/// * `type GDExtensionTypePtr = *mut Self;` -- the Rust type itself has the native layout (`Vector2`, `i64`, ...).
/// * `type GDExtensionTypePtr = *mut Opaque;` -- the Rust type stores an engine-owned blob in a field `opaque`
///   and offers `fn from_opaque(opaque) -> Self`.
#[macro_export]
#[doc(hidden)]
macro_rules! ffi_methods {
    (type $Ptr:ty = *mut Self; ..) => {
        unsafe fn new_from_sys(ptr: $crate::GDExtensionConstTypePtr) -> Self {
            std::ptr::read(ptr as *const Self)
        }

        unsafe fn new_with_uninit(init_fn: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::<Self>::uninit();
            init_fn(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            raw.assume_init()
        }

        unsafe fn new_with_init(init_fn: impl FnOnce($crate::GDExtensionTypePtr)) -> Self {
            let mut value = <Self as Default>::default();
            init_fn(value.sys_mut() as $crate::GDExtensionTypePtr);
            value
        }

        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            self as *const Self as $crate::GDExtensionConstTypePtr
        }

        fn sys_mut(&mut self) -> $Ptr {
            self as *mut Self as $Ptr
        }
    };

    (type $Ptr:ty = *mut Opaque; ..) => {
        unsafe fn new_from_sys(ptr: $crate::GDExtensionConstTypePtr) -> Self {
            let opaque = std::ptr::read(ptr as *const _);
            Self::from_opaque(opaque)
        }

        unsafe fn new_with_uninit(init_fn: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::uninit();
            init_fn(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            Self::from_opaque(raw.assume_init())
        }

        unsafe fn new_with_init(init_fn: impl FnOnce($crate::GDExtensionTypePtr)) -> Self {
            let mut value = <Self as Default>::default();
            init_fn(value.sys_mut() as $crate::GDExtensionTypePtr);
            value
        }

        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            std::ptr::addr_of!(self.opaque) as $crate::GDExtensionConstTypePtr
        }

        fn sys_mut(&mut self) -> $Ptr {
            std::ptr::addr_of_mut!(self.opaque) as $Ptr
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementations for primitive types

macro_rules! impl_godot_ffi_as_self {
    ($T:ty => $Variant:ident) => {
        // SAFETY: the engine's ptrcall layout of these types matches Rust's.
        unsafe impl GodotFfi for $T {
            fn variant_type() -> sys::VariantType {
                sys::VariantType::$Variant
            }

            ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
        }
    };
}

impl_godot_ffi_as_self!(bool => Bool);
impl_godot_ffi_as_self!(i64 => Int);
impl_godot_ffi_as_self!(f64 => Float);

// SAFETY: void returns never touch the pointer.
unsafe impl GodotFfi for () {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Nil
    }

    unsafe fn new_from_sys(_ptr: sys::GDExtensionConstTypePtr) -> Self {}

    unsafe fn new_with_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        // Engine ignores the return slot for void methods; pass a dangling-but-valid dummy.
        let mut unused = 0_u8;
        init_fn(std::ptr::addr_of_mut!(unused) as sys::GDExtensionUninitializedTypePtr);
    }

    unsafe fn new_with_init(init_fn: impl FnOnce(sys::GDExtensionTypePtr)) -> Self {
        Self::new_with_uninit(|ptr| init_fn(ptr as sys::GDExtensionTypePtr))
    }

    fn sys(&self) -> sys::GDExtensionConstTypePtr {
        std::ptr::null()
    }

    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr {
        std::ptr::null_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_round_trip_through_slots() {
        let value = unsafe { i64::new_with_uninit(|ptr| *(ptr as *mut i64) = -42) };
        assert_eq!(value, -42);

        let mut flag = true;
        let read_back = unsafe { bool::new_from_sys(flag.sys_mut()) };
        assert!(read_back);

        assert_eq!(f64::variant_type(), sys::VariantType::Float);
    }

    #[test]
    fn init_slot_starts_from_default() {
        let mut seen = None;
        let value = unsafe {
            i64::new_with_init(|ptr| {
                seen = Some(*(ptr as *const i64));
                *(ptr as *mut i64) += 7;
            })
        };

        assert_eq!(seen, Some(0));
        assert_eq!(value, 7);
    }
}
