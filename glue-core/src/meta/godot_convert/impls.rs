/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta;
use crate::meta::error::{ConvertError, FromFfiError};
use crate::meta::traits::GodotFfiVariant;
use crate::meta::{FromGodot, GodotConvert, GodotType, ToGodot};

// The following ToGodot/FromGodot/Convert impls are generated for each engine type, co-located with their definitions:
// - enums and bitfields (`Via` = ordinal)

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalars

macro_rules! impl_godot_scalar {
    ($T:ty as $Via:ty, $err:path) => {
        impl GodotType for $T {
            type Ffi = $Via;

            fn to_ffi(&self) -> Self::Ffi {
                (*self).into()
            }

            fn into_ffi(self) -> Self::Ffi {
                self.into()
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                Self::try_from(ffi).map_err(|_rust_err| $err.into_error(ffi))
            }

            fn godot_type_name() -> String {
                <$Via as GodotType>::godot_type_name()
            }
        }

        impl_godot_scalar!(@shared_traits; $T);
    };

    ($T:ty as $Via:ty; lossy) => {
        impl GodotType for $T {
            type Ffi = $Via;

            fn to_ffi(&self) -> Self::Ffi {
                *self as $Via
            }

            fn into_ffi(self) -> Self::Ffi {
                self as $Via
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                Ok(ffi as $T)
            }

            fn godot_type_name() -> String {
                <$Via as GodotType>::godot_type_name()
            }
        }

        impl_godot_scalar!(@shared_traits; $T);
    };

    (@shared_traits; $T:ty) => {
        impl GodotConvert for $T {
            type Via = $T;
        }

        impl ToGodot for $T {
            fn to_godot(&self) -> Self::Via {
               *self
            }
        }

        impl FromGodot for $T {
            fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
                Ok(via)
            }
        }
    };
}

// `GodotType` for these three is implemented in `builtin/variant/impls.rs`.
meta::impl_godot_as_self!(bool);
meta::impl_godot_as_self!(i64);
meta::impl_godot_as_self!(f64);

impl_godot_scalar!(i8 as i64, FromFfiError::I8);
impl_godot_scalar!(u8 as i64, FromFfiError::U8);
impl_godot_scalar!(i16 as i64, FromFfiError::I16);
impl_godot_scalar!(u16 as i64, FromFfiError::U16);
impl_godot_scalar!(i32 as i64, FromFfiError::I32);
impl_godot_scalar!(u32 as i64, FromFfiError::U32);
impl_godot_scalar!(f32 as f64; lossy);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// u64: bit-cast, so that bitfield values with the highest bit set survive the round trip.

impl GodotType for u64 {
    type Ffi = i64;

    fn to_ffi(&self) -> Self::Ffi {
        *self as i64
    }

    fn into_ffi(self) -> Self::Ffi {
        self as i64
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(ffi as u64)
    }

    fn godot_type_name() -> String {
        <i64 as GodotType>::godot_type_name()
    }
}

impl GodotConvert for u64 {
    type Via = u64;
}

impl ToGodot for u64 {
    fn to_godot(&self) -> Self::Via {
        *self
    }
}

impl FromGodot for u64 {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Unit: return type of void methods.

impl GodotFfiVariant for () {
    fn ffi_to_variant(&self) -> Variant {
        Variant::nil()
    }

    fn ffi_from_variant(_variant: &Variant) -> Result<Self, ConvertError> {
        // Void returns ignore whatever the engine wrote into the variant.
        Ok(())
    }
}

impl GodotType for () {
    type Ffi = ();

    fn to_ffi(&self) -> Self::Ffi {}

    fn into_ffi(self) -> Self::Ffi {}

    fn try_from_ffi(_ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(())
    }

    fn godot_type_name() -> String {
        "Variant".to_string()
    }
}

impl GodotConvert for () {
    type Via = ();
}

impl ToGodot for () {
    fn to_godot(&self) -> Self::Via {}
}

impl FromGodot for () {
    fn try_from_godot(_via: Self::Via) -> Result<Self, ConvertError> {
        Ok(())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_ints_check_range() {
        assert_eq!(i32::try_from_ffi(-7).ok(), Some(-7));
        assert_eq!(u8::try_from_ffi(255).ok(), Some(255));

        let err = i32::try_from_ffi(i64::MAX).expect_err("out of range");
        assert_eq!(err.to_string(), format!("`i32` cannot store the given value: {}", i64::MAX));

        assert!(u16::try_from_ffi(-1).is_err());
    }

    #[test]
    fn u64_bitfields_keep_high_bit() {
        let flags = 1_u64 << 63;
        let ffi = flags.into_ffi();

        assert!(ffi < 0);
        assert_eq!(u64::try_from_ffi(ffi).ok(), Some(flags));
    }

    #[test]
    fn f32_widens_to_f64() {
        assert_eq!(1.5_f32.to_ffi(), 1.5_f64);
        assert_eq!(f32::try_from_ffi(0.25).ok(), Some(0.25_f32));
    }

    #[test]
    fn scalars_are_their_own_via() {
        assert_eq!(17_i16.to_godot(), 17);
        assert_eq!(u32::from_godot(3), 3);
        assert!(bool::try_from_godot(true).unwrap());
    }
}
