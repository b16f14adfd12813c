/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_void;
use std::fmt;

use crate::builtin::{GString, Variant};
use crate::meta::{CallContext, CallError};
use crate::sys;
use sys::types::OpaqueCallable;
use sys::{ffi_methods, interface_fn, GodotFfi};

/// A `Callable` represents a function in the engine.
///
/// Usually a callable is a reference to an object and a method name. The bindings additionally create _custom_ callables
/// backed by a Rust closure, through [`from_local_fn()`](Self::from_local_fn); this is what typed signal connections use.
pub struct Callable {
    opaque: OpaqueCallable,
}

impl Callable {
    fn from_opaque(opaque: OpaqueCallable) -> Self {
        Self { opaque }
    }

    /// Creates an invalid/empty callable that is not able to be called.
    pub fn invalid() -> Self {
        Self::default()
    }

    /// Create a callable from a Rust closure that may only be invoked on the current (main) thread.
    ///
    /// `name` appears in engine error messages and when printing the callable. The closure receives the call arguments
    /// as `Variant`s; errors it returns are reported back to the engine as a native call error.
    ///
    /// If the closure panics, the panic is caught and reported as a failed call, so it does not unwind into the engine.
    pub fn from_local_fn<F, S>(name: S, rust_function: F) -> Self
    where
        F: FnMut(&[&Variant]) -> Result<Variant, CallError> + 'static,
        S: Into<String>,
    {
        let userdata = FnWrapper {
            rust_function,
            name: name.into(),
            thread_id: std::thread::current().id(),
        };

        let info = sys::GDExtensionCallableCustomInfo2 {
            callable_userdata: Box::into_raw(Box::new(userdata)) as *mut c_void,
            // SAFETY: the binding is initialized whenever engine values are created.
            token: unsafe { sys::get_library() } as *mut c_void,
            object_id: 0,
            call_func: Some(rust_callable_call_fn::<F>),
            is_valid_func: None,
            free_func: Some(rust_callable_destroy::<F>),
            hash_func: None,
            equal_func: None,
            less_than_func: None,
            to_string_func: Some(rust_callable_to_string::<F>),
            get_argument_count_func: None,
        };

        Self::from_custom_info(info)
    }

    fn from_custom_info(mut info: sys::GDExtensionCallableCustomInfo2) -> Self {
        // SAFETY: the engine takes over the userdata and calls `free_func` exactly once.
        unsafe {
            Self::new_with_uninit(|callable_ptr| {
                interface_fn!(callable_custom_create2)(callable_ptr, std::ptr::addr_of_mut!(info));
            })
        }
    }
}

// SAFETY: `Callable` wraps the engine's opaque callable storage.
unsafe impl GodotFfi for Callable {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Callable
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; .. }
}

crate::meta::impl_godot_as_self!(Callable);

impl_builtin_traits! {
    for Callable {
        Default => callable_construct_default;
        Clone => callable_construct_copy;
        Drop => callable_destroy;
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callable({})", Variant::from(self))
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Variant::from(self))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Callbacks for custom callables

struct FnWrapper<F> {
    rust_function: F,
    name: String,
    thread_id: std::thread::ThreadId,
}

unsafe extern "C" fn rust_callable_call_fn<F>(
    callable_userdata: *mut c_void,
    p_args: *const sys::GDExtensionConstVariantPtr,
    p_argument_count: sys::GDExtensionInt,
    r_return: sys::GDExtensionVariantPtr,
    r_error: *mut sys::GDExtensionCallError,
) where
    F: FnMut(&[&Variant]) -> Result<Variant, CallError>,
{
    let arg_refs: &[&Variant] = Variant::borrow_ref_slice(p_args, p_argument_count.max(0) as usize);
    let FnWrapper {
        rust_function,
        name,
        thread_id,
    } = &mut *(callable_userdata as *mut FnWrapper<F>);

    let call_ctx = CallContext::custom_callable(name.as_str());

    if *thread_id != std::thread::current().id() {
        crate::godot_error!("callable `{name}` invoked from a thread other than the one it was created on");
        (*r_error).error = sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD;
        return;
    }

    let result = crate::private::handle_panic(|| format!("in callable `{call_ctx}`"), || rust_function(arg_refs));

    match result {
        Ok(Ok(ret)) => {
            // `r_return` points to an initialized (nil) variant; assignment drops it.
            *(r_return as *mut Variant) = ret;
            (*r_error).error = sys::GDEXTENSION_CALL_OK;
        }
        Ok(Err(call_error)) => {
            crate::godot_error!("{call_error}");
            *r_error = call_error.to_sys_error();
        }
        Err(panic_message) => {
            *r_error = CallError::failed_by_user_panic(&call_ctx, &panic_message).to_sys_error();
        }
    }
}

unsafe extern "C" fn rust_callable_destroy<F>(callable_userdata: *mut c_void) {
    let boxed = Box::from_raw(callable_userdata as *mut FnWrapper<F>);
    drop(boxed);
}

unsafe extern "C" fn rust_callable_to_string<F>(
    callable_userdata: *mut c_void,
    r_is_valid: *mut sys::GDExtensionBool,
    r_out: sys::GDExtensionStringPtr,
) {
    let wrapper = &*(callable_userdata as *const FnWrapper<F>);

    // `r_out` points to an initialized string; assignment drops it.
    *(r_out as *mut GString) = GString::from(wrapper.name.as_str());
    *r_is_valid = true as sys::GDExtensionBool;
}
