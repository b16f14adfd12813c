/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::error::CallError;
use crate::meta::CallContext;
use crate::sys;

mod impls;

/// Represents a parameter list as Rust tuple where each tuple element is one parameter.
///
/// This trait only contains metadata for the parameter list, the actual functionality is contained in [`InParamTuple`] and
/// [`OutParamTuple`].
pub trait ParamTuple: Sized {
    /// The number of elements in this parameter list.
    const LEN: usize;

    /// Return a string representing the arguments.
    fn format_args(&self) -> String;
}

/// Represents a parameter list that is received from the engine, e.g. arguments of a signal emission reaching a Rust closure.
pub trait InParamTuple: ParamTuple {
    /// Converts each argument positionally with [`FromGodot::try_from_variant()`](crate::meta::FromGodot::try_from_variant).
    ///
    /// `args.len()` must equal [`Self::LEN`](ParamTuple::LEN); the count is checked by the caller.
    #[doc(hidden)]
    fn from_variant_args(args: &[&Variant], call_ctx: &CallContext) -> Result<Self, CallError>;
}

/// Represents a parameter list that is used to call engine code through FFI.
pub trait OutParamTuple: ParamTuple {
    /// Converts `self` to the FFI representation and calls `call` with a pointer to each element.
    ///
    /// The pointers are only valid for the duration of `call`.
    #[doc(hidden)]
    fn with_type_pointers<F, R>(self, call: F) -> R
    where
        F: FnOnce(&[sys::GDExtensionConstTypePtr]) -> R;

    /// Converts each element to a `Variant`, in declaration order.
    fn to_variant_array(&self) -> Vec<Variant>;
}
