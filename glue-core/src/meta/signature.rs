/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::builtin::Variant;
use crate::meta::error::{CallError, ConvertError};
use crate::meta::{FromGodot, GodotType, InParamTuple, OutParamTuple, ToGodot};
use crate::sys;
use crate::sys::GodotFfi;

/// A full signature for a function.
///
/// For out-calls (Rust calling the engine), `Params` implements [`OutParamTuple`] and `Ret` implements [`FromGodot`].
///
/// For in-calls (the engine calling a Rust closure through a custom callable), `Params` implements [`InParamTuple`] and `Ret`
/// implements [`ToGodot`].
#[doc(hidden)]
pub struct Signature<Params, Ret> {
    _p: PhantomData<Params>,
    _r: PhantomData<Ret>,
}

/// Out-calls: engine class methods.
impl<Params: OutParamTuple, Ret: FromGodot> Signature<Params, Ret> {
    /// Calls an engine method through the _ptrcall_ convention: every argument is passed as a pointer to its native
    /// representation, the return value is decoded from a native slot.
    ///
    /// # Panics
    /// If the returned value cannot be converted to `Ret`.
    ///
    /// # Safety
    /// - `method_bind` must belong to `class_name::method_name`, with parameters and return matching `Params` and `Ret`.
    /// - `object_ptr` must be a live instance of that class (or null for static methods).
    #[inline]
    pub unsafe fn out_class_ptrcall(
        method_bind: sys::ClassMethodBind,
        // Separate parameters to reduce tokens in generated class API.
        class_name: &'static str,
        method_name: &'static str,
        object_ptr: sys::GDExtensionObjectPtr,
        args: Params,
    ) -> Ret {
        let call_ctx = CallContext::outbound(class_name, method_name);
        #[cfg(feature = "trace")]
        trace::push(false, true, &call_ctx);

        let class_fn = sys::interface_fn!(object_method_bind_ptrcall);

        let result = args.with_type_pointers(|explicit_args| {
            Self::raw_ptrcall(|return_ptr| {
                class_fn(method_bind.0, object_ptr, explicit_args.as_ptr(), return_ptr);
            })
        });

        result.unwrap_or_else(|err| return_error::<Ret>(&call_ctx, err))
    }

    /// Calls an engine method through the _varcall_ convention: arguments are passed as `Variant`, followed by `varargs`.
    ///
    /// # Safety
    /// Same as [`out_class_ptrcall()`](Self::out_class_ptrcall).
    pub unsafe fn out_class_varcall(
        method_bind: sys::ClassMethodBind,
        class_name: &'static str,
        method_name: &'static str,
        object_ptr: sys::GDExtensionObjectPtr,
        args: Params,
        varargs: &[Variant],
    ) -> Result<Ret, CallError> {
        let call_ctx = CallContext::outbound(class_name, method_name);
        #[cfg(feature = "trace")]
        trace::push(false, false, &call_ctx);

        let class_fn = sys::interface_fn!(object_method_bind_call);

        let explicit_args = args.to_variant_array();
        let mut variant_ptrs = Vec::with_capacity(explicit_args.len() + varargs.len());
        variant_ptrs.extend(explicit_args.iter().map(Variant::var_sys));
        variant_ptrs.extend(varargs.iter().map(Variant::var_sys));

        let mut err = sys::default_call_error();
        let variant = Variant::new_with_var_uninit(|return_ptr| {
            class_fn(
                method_bind.0,
                object_ptr,
                variant_ptrs.as_ptr(),
                variant_ptrs.len() as i64,
                return_ptr,
                std::ptr::addr_of_mut!(err),
            );
        });

        CallError::check_out_varcall(&call_ctx, err, &explicit_args, varargs)?;

        Ret::try_from_variant(&variant).map_err(|err| CallError::failed_return_conversion::<Ret>(&call_ctx, err))
    }

    unsafe fn raw_ptrcall(call: impl FnOnce(sys::GDExtensionTypePtr)) -> Result<Ret, ConvertError> {
        // The engine assigns into the return slot, so it must hold a constructed value (null for objects).
        let ffi = <<Ret::Via as GodotType>::Ffi as GodotFfi>::new_with_init(|return_ptr| call(return_ptr));

        <Ret::Via as GodotType>::try_from_ffi(ffi).and_then(Ret::try_from_godot)
    }
}

/// In-calls: Rust closures invoked by the engine.
impl<Params: InParamTuple, Ret: ToGodot> Signature<Params, Ret> {
    /// Converts engine-provided arguments positionally and invokes `func` with them.
    ///
    /// Wrong argument count or types are returned as `CallError`, carrying the native error code for the engine.
    pub fn in_callable_varcall(
        call_ctx: &CallContext,
        args: &[&Variant],
        func: impl FnOnce(Params) -> Ret,
    ) -> Result<Variant, CallError> {
        #[cfg(feature = "trace")]
        trace::push(true, false, call_ctx);

        let params = Params::from_variant_args(args, call_ctx)?;
        let ret = func(params);

        Ok(ret.to_variant())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Return value conversions

fn return_error<R>(call_ctx: &CallContext, err: ConvertError) -> ! {
    let return_ty = std::any::type_name::<R>();

    panic!("in function `{call_ctx}` at return type {return_ty}: {err}");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Call context

// Lazy Display, so we don't create tens of thousands of extra string literals.
#[derive(Clone)]
#[doc(hidden)]
pub struct CallContext<'a> {
    pub(crate) class_name: Cow<'a, str>,
    pub(crate) function_name: &'a str,
}

impl<'a> CallContext<'a> {
    /// Call from the engine into a custom `Callable`. Has no surrounding class.
    pub const fn custom_callable(function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Borrowed(""),
            function_name,
        }
    }

    /// Outbound call from Rust into the engine, class APIs.
    pub const fn outbound(class_name: &'a str, function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Borrowed(class_name),
            function_name,
        }
    }
}

impl fmt::Display for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.class_name.is_empty() {
            write!(f, "{}", self.function_name)
        } else {
            write!(f, "{}::{}", self.class_name, self.function_name)
        }
    }
}

/// Records the last call crossing the FFI boundary on this thread; used by tests to tell ptrcalls from varcalls.
#[cfg(feature = "trace")]
pub mod trace {
    use std::cell::Cell;

    use crate::meta::CallContext;

    /// Stores information about the current call for diagnostic purposes.
    #[derive(Clone, Debug)]
    pub struct CallReport {
        pub class: String,
        pub method: String,
        pub is_inbound: bool,
        pub is_ptrcall: bool,
    }

    /// Takes the report of the most recent call.
    ///
    /// # Panics
    /// If no call has been recorded since the last `pop()`.
    pub fn pop() -> CallReport {
        let report = TRACE.take();

        report.expect("trace::pop() had no prior call stored.")
    }

    pub(crate) fn push(inbound: bool, ptrcall: bool, call_ctx: &CallContext) {
        let report = CallReport {
            class: call_ctx.class_name.to_string(),
            method: call_ctx.function_name.to_string(),
            is_inbound: inbound,
            is_ptrcall: ptrcall,
        };

        TRACE.set(Some(report));
    }

    thread_local! {
        static TRACE: Cell<Option<CallReport>> = const { Cell::new(None) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_context_display() {
        assert_eq!(CallContext::outbound("TileMap", "set_cell").to_string(), "TileMap::set_cell");
        assert_eq!(CallContext::custom_callable("on_changed").to_string(), "on_changed");
    }
}
