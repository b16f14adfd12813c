/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! `Variant` conversions of all builtin types, through the engine's type constructors.

use super::Variant;
use crate::builtin::*;
use crate::meta::error::{ConvertError, FromVariantError};
use crate::meta::{GodotFfiVariant, GodotType};
use crate::sys;
use sys::GodotFfi;

macro_rules! impl_ffi_variant {
    ($T:ty, $to_fn:ident, $from_fn:ident; $type_name:literal) => {
        impl GodotFfiVariant for $T {
            fn ffi_to_variant(&self) -> Variant {
                // SAFETY: the converter reads a value of this type and writes a fresh variant.
                unsafe {
                    Variant::new_with_var_uninit(|variant_ptr| {
                        let converter = sys::builtin_lifecycle_api().conversions.$to_fn;
                        converter(variant_ptr, sys::force_mut_ptr(self.sys()));
                    })
                }
            }

            fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
                // Type check first, the engine's converters perform no checks.
                let actual = variant.get_type();
                let expected = <Self as GodotFfi>::variant_type();
                if actual != expected {
                    return Err(FromVariantError::BadType { expected, actual }.into_error(variant));
                }

                // SAFETY: the variant holds this type (checked above); the converter writes a fresh value.
                let value = unsafe {
                    <Self as GodotFfi>::new_with_uninit(|self_ptr| {
                        let converter = sys::builtin_lifecycle_api().conversions.$from_fn;
                        converter(self_ptr, sys::force_mut_ptr(variant.var_sys()));
                    })
                };

                Ok(value)
            }
        }

        impl GodotType for $T {
            type Ffi = Self;

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
                $type_name.to_string()
            }
        }

        impl From<$T> for Variant {
            fn from(value: $T) -> Self {
                GodotFfiVariant::ffi_to_variant(&value)
            }
        }

        impl From<&$T> for Variant {
            fn from(value: &$T) -> Self {
                GodotFfiVariant::ffi_to_variant(value)
            }
        }
    };
}

impl_ffi_variant!(bool, bool_to_variant, bool_from_variant; "bool");
impl_ffi_variant!(i64, int_to_variant, int_from_variant; "int");
impl_ffi_variant!(f64, float_to_variant, float_from_variant; "float");
impl_ffi_variant!(GString, string_to_variant, string_from_variant; "String");
impl_ffi_variant!(StringName, string_name_to_variant, string_name_from_variant; "StringName");
impl_ffi_variant!(NodePath, node_path_to_variant, node_path_from_variant; "NodePath");
impl_ffi_variant!(Vector2, vector2_to_variant, vector2_from_variant; "Vector2");
impl_ffi_variant!(Vector2i, vector2i_to_variant, vector2i_from_variant; "Vector2i");
impl_ffi_variant!(Vector3, vector3_to_variant, vector3_from_variant; "Vector3");
impl_ffi_variant!(Rect2, rect2_to_variant, rect2_from_variant; "Rect2");
impl_ffi_variant!(Rect2i, rect2i_to_variant, rect2i_from_variant; "Rect2i");
impl_ffi_variant!(Color, color_to_variant, color_from_variant; "Color");
impl_ffi_variant!(Rid, rid_to_variant, rid_from_variant; "RID");
impl_ffi_variant!(Callable, callable_to_variant, callable_from_variant; "Callable");
impl_ffi_variant!(PackedInt32Array, packed_int32_array_to_variant, packed_int32_array_from_variant; "PackedInt32Array");

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Rust types that are stored as one of the above

macro_rules! impl_variant_from_via {
    ($($T:ty),* $(,)?) => {
        $(
            impl From<$T> for Variant {
                fn from(value: $T) -> Self {
                    crate::meta::ToGodot::to_variant(&value)
                }
            }
        )*
    };
}

impl_variant_from_via!(i8, u8, i16, u16, i32, u32, u64, f32);

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Self::from(GString::from(value))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Self::from(GString::from(value.as_str()))
    }
}
