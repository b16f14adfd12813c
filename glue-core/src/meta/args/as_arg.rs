/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{GString, NodePath, StringName};
use crate::meta::{CowArg, InternedName};

/// Implicit conversions for string arguments passed to engine APIs.
///
/// An `impl AsArg<T>` parameter allows values to be passed which can be represented in the target type `T`. Note that unlike `From<T>`,
/// this trait is implemented conservatively:
/// - `&T` for the string types `GString`, `StringName`, `NodePath` (no clone, the reference is passed through).
/// - `&str` and `&String` for each of them (converted on the spot).
/// - [`InternedName`] for `StringName`.
///
/// Passing an owned `GString` is not supported; borrow it instead.
///
/// Objects use [`AsObjectArg`][crate::meta::AsObjectArg] instead; `Variant`, `Callable` and packed arrays are taken as `&T`.
pub trait AsArg<T>
where
    Self: Sized,
{
    #[doc(hidden)]
    fn into_arg<'r>(self) -> CowArg<'r, T>
    where
        Self: 'r;
}

macro_rules! impl_asarg_by_ref {
    ($T:ty) => {
        impl<'r> AsArg<$T> for &'r $T {
            fn into_arg<'cow>(self) -> CowArg<'cow, $T>
            where
                'r: 'cow, // Original reference must be valid for at least as long as the returned cow.
            {
                CowArg::Borrowed(self)
            }
        }

        impl AsArg<$T> for &str {
            fn into_arg<'r>(self) -> CowArg<'r, $T> {
                CowArg::Owned(<$T>::from(self))
            }
        }

        impl AsArg<$T> for &String {
            fn into_arg<'r>(self) -> CowArg<'r, $T> {
                CowArg::Owned(<$T>::from(self.as_str()))
            }
        }
    };
}

impl_asarg_by_ref!(GString);
impl_asarg_by_ref!(StringName);
impl_asarg_by_ref!(NodePath);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Blanket impls

/// `CowArg` can itself be passed as an argument (internal only), which allows forwarding `impl AsArg<T>` parameters.
impl<T> AsArg<T> for CowArg<'_, T> {
    fn into_arg<'r>(self) -> CowArg<'r, T>
    where
        Self: 'r,
    {
        self
    }
}

/// Interned names are converted to an owned `StringName` per call; use [`InternedName::string_sys()`] to avoid this.
impl AsArg<StringName> for InternedName {
    fn into_arg<'r>(self) -> CowArg<'r, StringName> {
        CowArg::Owned(self.to_string_name())
    }
}
