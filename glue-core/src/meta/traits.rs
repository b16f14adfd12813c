/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::error::ConvertError;
use crate::meta::{sealed, FromGodot, GodotConvert, ToGodot};

// Re-export sys traits in this module, so all are in one place.
pub use crate::sys::GodotFfi;

/// Conversion of [`GodotFfi`] types to/from [`Variant`].
#[doc(hidden)]
pub trait GodotFfiVariant: Sized + GodotFfi {
    fn ffi_to_variant(&self) -> Variant;
    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError>;
}

/// Type that is directly representable in the engine.
///
/// This trait cannot be implemented for custom user types; for those, [`GodotConvert`] exists instead.
/// A type implements `GodotType` when the engine has a direct, native representation for it. For instance, `i32` is
/// transported as the engine's 64-bit `int`, with a range check on the way back.
pub trait GodotType: GodotConvert<Via = Self> + ToGodot + FromGodot + sealed::Sealed + 'static {
    #[doc(hidden)]
    type Ffi: GodotFfiVariant;

    #[doc(hidden)]
    fn to_ffi(&self) -> Self::Ffi;

    #[doc(hidden)]
    fn into_ffi(self) -> Self::Ffi;

    #[doc(hidden)]
    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError>;

    #[doc(hidden)]
    fn from_ffi(ffi: Self::Ffi) -> Self {
        Self::try_from_ffi(ffi).unwrap_or_else(|err| panic!("GodotType::from_ffi() failed: {err}"))
    }

    /// Name of the type as it appears in error messages.
    #[doc(hidden)]
    fn godot_type_name() -> String;
}
