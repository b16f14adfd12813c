/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#![macro_use]

macro_rules! impl_builtin_traits_inner {
    ( Default for $Type:ty => $gd_method:ident ) => {
        impl Default for $Type {
            #[inline]
            fn default() -> Self {
                // SAFETY: default constructors take no arguments and fully initialize the slot.
                unsafe {
                    <Self as $crate::sys::GodotFfi>::new_with_uninit(|self_ptr| {
                        let ctor = $crate::sys::builtin_lifecycle_api().$gd_method;
                        ctor(self_ptr, std::ptr::null());
                    })
                }
            }
        }
    };

    ( Clone for $Type:ty => $gd_method:ident ) => {
        impl Clone for $Type {
            #[inline]
            fn clone(&self) -> Self {
                // SAFETY: copy constructors take exactly one argument of the same type.
                unsafe {
                    <Self as $crate::sys::GodotFfi>::new_with_uninit(|self_ptr| {
                        let ctor = $crate::sys::builtin_lifecycle_api().$gd_method;
                        let args = [$crate::sys::GodotFfi::sys(self)];
                        ctor(self_ptr, args.as_ptr());
                    })
                }
            }
        }
    };

    ( Drop for $Type:ty => $gd_method:ident ) => {
        impl Drop for $Type {
            #[inline]
            fn drop(&mut self) {
                // SAFETY: `self` is initialized and destroyed exactly once.
                unsafe {
                    let destructor = $crate::sys::builtin_lifecycle_api().$gd_method;
                    destructor($crate::sys::GodotFfi::sys_mut(self));
                }
            }
        }
    };

    // Compares the UTF-8 contents; the engine's equality operator is not part of the loaded tables.
    ( Eq for $Type:ty ) => {
        impl PartialEq for $Type {
            fn eq(&self, other: &Self) -> bool {
                self.to_string() == other.to_string()
            }
        }

        impl Eq for $Type {}
    };

    ( Hash for $Type:ty ) => {
        impl std::hash::Hash for $Type {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&self.to_string(), state)
            }
        }
    };
}

macro_rules! impl_builtin_traits {
    (
        for $Type:ty {
            $( $Trait:ident $(=> $gd_method:ident)?; )*
        }
    ) => (
        $(
            impl_builtin_traits_inner! {
                $Trait for $Type $(=> $gd_method)?
            }
        )*
    )
}
