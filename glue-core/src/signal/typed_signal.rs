/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::marker::PhantomData;

use crate::builtin::{Callable, StringName, Variant};
use crate::classes::Object;
use crate::meta::{CallContext, InParamTuple, OutParamTuple, Signature};
use crate::obj::Gd;
use crate::signal::{ConnectHandle, IndirectSignalReceiver, SignalReceiver};
use crate::sys;

/// Object that owns a signal collection, borrowed for the lifetime `'c` of the `signals()` call.
#[doc(hidden)]
#[derive(Copy, Clone)]
pub struct SignalObject<'c> {
    object_ptr: sys::GDExtensionObjectPtr,
    _borrow: PhantomData<&'c mut ()>,
}

impl SignalObject<'_> {
    #[doc(hidden)]
    pub fn __new(object_ptr: sys::GDExtensionObjectPtr) -> Self {
        Self {
            object_ptr,
            _borrow: PhantomData,
        }
    }

    fn to_gd(self) -> Gd<Object> {
        // SAFETY: created from `&mut self` of a live engine object, which is borrowed for 'c.
        unsafe { Gd::from_obj_sys_weak(self.object_ptr) }
    }
}

/// Type-safe version of an engine signal.
///
/// Short-lived, obtained from the `signals()` accessor of an engine class; for example
/// `item_list.signals().item_selected()` derefs to a `TypedSignal<'_, (i64,)>`.
///
/// `Ps` is the tuple of parameter types. Emission converts each parameter to a `Variant`; connected functions receive
/// them converted back, position by position.
pub struct TypedSignal<'c, Ps> {
    object: SignalObject<'c>,
    name: &'static str,
    _signature: PhantomData<Ps>,
}

impl<'c, Ps> TypedSignal<'c, Ps> {
    #[doc(hidden)]
    pub fn __new(object: SignalObject<'c>, name: &'static str) -> Self {
        Self {
            object,
            name,
            _signature: PhantomData,
        }
    }

    /// Name of the signal, as registered in the engine.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<Ps: OutParamTuple> TypedSignal<'_, Ps> {
    /// Emit the signal with the given parameters, in tuple form.
    ///
    /// The individual signal types also offer `emit(p0, p1, ...)` with named parameters.
    pub fn emit_tuple(&mut self, args: Ps) {
        let mut object = self.object.to_gd();
        object.emit_signal(self.name, &args.to_variant_array());
    }
}

impl<Ps: InParamTuple + 'static> TypedSignal<'_, Ps> {
    /// Connect a non-member function (global function, associated function or closure).
    ///
    /// Example usages:
    /// ```ignore
    /// sig.connect(Self::static_func);
    /// sig.connect(global_func);
    /// sig.connect(|index| { /* closure */ });
    /// ```
    ///
    /// The returned handle can disconnect the function again. Dropping it keeps the connection alive.
    pub fn connect<F>(&mut self, mut function: F) -> ConnectHandle
    where
        F: SignalReceiver<Ps>,
        for<'v> IndirectSignalReceiver<'v, Ps, F>: From<&'v mut F>,
    {
        let callable_name = std::any::type_name_of_val(&function);
        let signal_name = self.name;

        // Argument mismatches are reported as call errors to the engine; panics are caught by the callable.
        let godot_fn = move |variant_args: &[&Variant]| {
            let call_ctx = CallContext::custom_callable(signal_name);

            Signature::<Ps, ()>::in_callable_varcall(&call_ctx, variant_args, |params| {
                IndirectSignalReceiver::from(&mut function)
                    .function()
                    .call(params)
            })
        };

        let callable = Callable::from_local_fn(callable_name, godot_fn);

        let mut object = self.object.to_gd();
        object.connect(self.name, &callable);

        ConnectHandle::new(object, StringName::from(self.name), callable)
    }
}
