/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use super::{InParamTuple, OutParamTuple, ParamTuple};
use crate::builtin::Variant;
use crate::meta::error::CallError;
use crate::meta::{CallContext, FromGodot, GodotFfiVariant, GodotType, ToGodot};
use crate::sys;

macro_rules! count_idents {
    () => { 0 };
    ($id:ident $($rest:ident)*) => { 1 + count_idents!($($rest)*)};
}

macro_rules! impl_param_tuple {
    ($(($n:tt): $P:ident),*) => {
        impl<$($P),*> ParamTuple for ($($P,)*) where $($P: fmt::Debug),* {
            const LEN: usize = count_idents!($($P)*);

            #[doc(hidden)]
            fn format_args(&self) -> String {
                let args: [String; count_idents!($($P)*)] = [
                    $(
                        format!("{:?}", self.$n),
                    )*
                ];

                args.join(", ")
            }
        }

        impl<$($P),*> InParamTuple for ($($P,)*) where $($P: FromGodot + fmt::Debug),* {
            fn from_variant_args(args: &[&Variant], call_ctx: &CallContext) -> Result<Self, CallError> {
                CallError::check_arg_count(call_ctx, args.len(), Self::LEN)?;

                let param_tuple = (
                    $(
                        <$P as FromGodot>::try_from_variant(args[$n])
                            .map_err(|err| CallError::failed_param_conversion::<$P>(call_ctx, $n, err))?,
                    )*
                );

                Ok(param_tuple)
            }
        }

        impl<$($P),*> OutParamTuple for ($($P,)*) where $($P: ToGodot + fmt::Debug),* {
            fn with_type_pointers<F, R>(self, call: F) -> R
            where
                F: FnOnce(&[sys::GDExtensionConstTypePtr]) -> R,
            {
                // Owned FFI values must outlive the pointers into them.
                let ffi_args = (
                    $(
                        GodotType::into_ffi(ToGodot::to_godot(&self.$n)),
                    )*
                );

                let ptr_args: [sys::GDExtensionConstTypePtr; count_idents!($($P)*)] = [
                    $(
                        sys::GodotFfi::as_arg_ptr(&ffi_args.$n),
                    )*
                ];

                call(&ptr_args)
            }

            fn to_variant_array(&self) -> Vec<Variant> {
                let ffi_args = (
                    $(
                        GodotType::into_ffi(ToGodot::to_godot(&self.$n)),
                    )*
                );

                vec![
                    $(
                        GodotFfiVariant::ffi_to_variant(&ffi_args.$n),
                    )*
                ]
            }
        }
    };
}

impl_param_tuple!();
impl_param_tuple!((0): P0);
impl_param_tuple!((0): P0, (1): P1);
impl_param_tuple!((0): P0, (1): P1, (2): P2);
impl_param_tuple!((0): P0, (1): P1, (2): P2, (3): P3);
impl_param_tuple!((0): P0, (1): P1, (2): P2, (3): P3, (4): P4);
impl_param_tuple!((0): P0, (1): P1, (2): P2, (3): P3, (4): P4, (5): P5);
impl_param_tuple!((0): P0, (1): P1, (2): P2, (3): P3, (4): P4, (5): P5, (6): P6);
impl_param_tuple!((0): P0, (1): P1, (2): P2, (3): P3, (4): P4, (5): P5, (6): P6, (7): P7);
impl_param_tuple!((0): P0, (1): P1, (2): P2, (3): P3, (4): P4, (5): P5, (6): P6, (7): P7, (8): P8);
impl_param_tuple!((0): P0, (1): P1, (2): P2, (3): P3, (4): P4, (5): P5, (6): P6, (7): P7, (8): P8, (9): P9);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuple_lengths() {
        assert_eq!(<() as ParamTuple>::LEN, 0);
        assert_eq!(<(i64,) as ParamTuple>::LEN, 1);
        assert_eq!(<(i32, bool, f32) as ParamTuple>::LEN, 3);
    }

    #[test]
    fn format_args_in_order() {
        assert_eq!((3_i32, true, 0.5_f64).format_args(), "3, true, 0.5");
        assert_eq!(().format_args(), "");
    }

    #[test]
    fn type_pointers_use_engine_widths() {
        // i32 and f32 travel as 64-bit values.
        let seen = (7_i32, 1.5_f32, true).with_type_pointers(|ptrs| unsafe {
            assert_eq!(ptrs.len(), 3);
            (
                *(ptrs[0] as *const i64),
                *(ptrs[1] as *const f64),
                *(ptrs[2] as *const u8),
            )
        });

        assert_eq!(seen, (7, 1.5, 1));
    }
}
