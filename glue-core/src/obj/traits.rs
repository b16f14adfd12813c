/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::init::InitLevel;
use crate::obj::InstanceId;
use crate::sys;

/// Makes `T` eligible to be managed by the engine and stored in [`Gd<T>`][crate::obj::Gd] pointers.
///
/// Implemented by every generated engine class.
pub trait GodotClass: 'static
where
    Self: Sized,
{
    /// The name of the class, under which it is registered in the engine.
    const CLASS_NAME: &'static str;

    /// The immediate superclass of `T`. This is always an engine class; `()` for `Object`.
    type Base;

    /// Whether instances are reference-counted ([`MemRefCounted`]) or freed manually ([`MemManual`]).
    type Memory: Memory;

    /// Initialization level, during which the method binds of this class become available.
    const INIT_LEVEL: InitLevel;
}

/// Access to the raw object pointer behind an engine class.
#[doc(hidden)]
pub trait EngineClass: GodotClass {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr;
}

/// Non-strict inheritance relationship in the engine class hierarchy.
///
/// `Derived: Inherits<Base>` means that either `Derived` is a subclass of `Base`, or the class `Base` itself (hence "non-strict").
///
/// This trait is automatically implemented for all engine classes and their base classes.
///
/// # Safety
///
/// This trait must only be implemented for subclasses of `Base`.
///
/// Importantly, this means it is always safe to upcast a value of type `Gd<Self>` to `Gd<Base>`.
pub unsafe trait Inherits<Base: GodotClass>: GodotClass {}

// SAFETY: Every class is a subclass of itself.
unsafe impl<T: GodotClass> Inherits<T> for T {}

/// Trait implemented for all concrete engine classes that can be constructed, with `Gd::new_alloc()` or `Gd::new_gd()`.
///
/// Abstract classes and singletons do not implement it.
pub trait Instantiable: GodotClass {}

/// Memory strategy of a class: how [`Gd<T>`][crate::obj::Gd] pointers to it are cloned and dropped.
pub trait Memory: Sized + 'static {
    /// Whether the object behind `object_ptr` participates in reference counting.
    ///
    /// Statically known for `RefCounted` subclasses. Handles typed as manually-managed classes (e.g. `Gd<Object>`) may still
    /// point to a reference-counted instance, in which case the engine marks the instance ID.
    #[doc(hidden)]
    fn is_ref_counted(object_ptr: sys::GDExtensionObjectPtr) -> bool;
}

/// Memory of classes inheriting `RefCounted`: freed when the last reference is dropped.
pub struct MemRefCounted {}

impl Memory for MemRefCounted {
    fn is_ref_counted(_object_ptr: sys::GDExtensionObjectPtr) -> bool {
        true
    }
}

/// Memory of all other classes: the user calls `free()` or hands ownership to the engine (e.g. by adding a node to the tree).
pub struct MemManual {}

impl Memory for MemManual {
    fn is_ref_counted(object_ptr: sys::GDExtensionObjectPtr) -> bool {
        if object_ptr.is_null() {
            return false;
        }

        // SAFETY: non-null object pointer, interface is loaded.
        let raw_id = unsafe { sys::interface_fn!(object_get_instance_id)(object_ptr) };

        InstanceId::try_from_u64(raw_id).is_some_and(|id| id.is_ref_counted())
    }
}

/// Auto-implemented for all engine-provided enums.
pub trait EngineEnum: Copy {
    fn try_from_ord(ord: i32) -> Option<Self>;

    /// Ordinal value of the enumerator, as specified in the engine.
    /// This is not necessarily unique.
    fn ord(self) -> i32;

    fn from_ord(ord: i32) -> Self {
        Self::try_from_ord(ord).unwrap_or_else(|| panic!("ordinal {ord} does not map to any enumerator"))
    }
}

/// Auto-implemented for all engine-provided bitfields.
pub trait EngineBitfield: Copy {
    fn try_from_ord(ord: u64) -> Option<Self>;

    /// Ordinal value of the bit flag, as specified in the engine.
    fn ord(self) -> u64;

    fn from_ord(ord: u64) -> Self {
        Self::try_from_ord(ord).unwrap_or_else(|| panic!("ordinal {ord} does not map to any valid bit flag"))
    }

    fn is_set(self, flag: Self) -> bool {
        self.ord() & flag.ord() != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone, Debug, PartialEq)]
    struct Flags(u64);

    impl EngineBitfield for Flags {
        fn try_from_ord(ord: u64) -> Option<Self> {
            Some(Self(ord))
        }

        fn ord(self) -> u64 {
            self.0
        }
    }

    #[derive(Copy, Clone, Debug, PartialEq)]
    struct Side(i32);

    impl EngineEnum for Side {
        fn try_from_ord(ord: i32) -> Option<Self> {
            (0..4).contains(&ord).then_some(Self(ord))
        }

        fn ord(self) -> i32 {
            self.0
        }
    }

    #[test]
    fn bitfield_is_set() {
        let combined = Flags(0b101);

        assert!(combined.is_set(Flags(0b001)));
        assert!(combined.is_set(Flags(0b100)));
        assert!(!combined.is_set(Flags(0b010)));
    }

    #[test]
    fn enum_from_ord() {
        assert_eq!(Side::from_ord(2), Side(2));
        assert_eq!(Side::try_from_ord(7), None);
    }

    #[test]
    #[should_panic(expected = "ordinal 9 does not map to any enumerator")]
    fn enum_from_invalid_ord_panics() {
        Side::from_ord(9);
    }

    #[test]
    fn null_manual_object_is_not_ref_counted() {
        assert!(!MemManual::is_ref_counted(std::ptr::null_mut()));
        assert!(MemRefCounted::is_ref_counted(std::ptr::null_mut()));
    }
}
