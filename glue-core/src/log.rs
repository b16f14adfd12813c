/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Printing and logging functionality.
//!
//! Messages go to the engine's output (and debugger), or to stdout/stderr when no engine is attached.

use crate::builtin::{GString, Variant};
use crate::sys;

/// Pushes a warning message to the engine's output, with file and line of the call site.
///
/// Behaves like the GDScript `push_warning` function. Takes a format string, like `format!()`.
#[macro_export]
macro_rules! godot_warn {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::log::__print_diagnostic(
            $crate::log::Severity::Warning,
            &format!($fmt $(, $args)*),
            concat!(file!(), "\0"),
            line!(),
        )
    };
}

/// Pushes an error message to the engine's output, with file and line of the call site.
///
/// Behaves like the GDScript `push_error` function. Takes a format string, like `format!()`.
#[macro_export]
macro_rules! godot_error {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::log::__print_diagnostic(
            $crate::log::Severity::Error,
            &format!($fmt $(, $args)*),
            concat!(file!(), "\0"),
            line!(),
        )
    };
}

/// Prints to the engine console, like the GDScript `print` function.
#[macro_export]
macro_rules! godot_print {
    ($fmt:literal $(, $args:expr)* $(,)?) => {
        $crate::log::__print_line(&format!($fmt $(, $args)*))
    };
}

pub use crate::{godot_error, godot_print, godot_warn};

/// Severity of a message sent through [`godot_warn!`] or [`godot_error!`].
#[doc(hidden)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Severity {
    Warning,
    Error,
}

/// Prints each argument stringified, concatenated to one line.
///
/// # Panics
/// If no engine is attached; use [`godot_print!`] for output that also works outside the engine.
pub fn print(varargs: &[Variant]) {
    let arg_ptrs: Vec<sys::GDExtensionConstTypePtr> = varargs
        .iter()
        .map(|arg| arg.var_sys() as sys::GDExtensionConstTypePtr)
        .collect();

    // SAFETY: binding is initialized; `print` takes any number of variants and returns nil.
    unsafe {
        let print_fn = sys::utility_function_table().print;
        let mut unused_ret = Variant::nil();

        print_fn(
            unused_ret.var_sys_mut() as sys::GDExtensionTypePtr,
            arg_ptrs.as_ptr(),
            arg_ptrs.len() as std::ffi::c_int,
        );
    }
}

#[doc(hidden)]
pub fn __print_diagnostic(severity: Severity, message: &str, file_nul: &'static str, line: u32) {
    if !sys::is_initialized() {
        let label = match severity {
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
        };
        eprintln!("{label}: {message}\n   at {}:{line}", file_nul.trim_end_matches('\0'));
        return;
    }

    // Interior NUL bytes would truncate the message on the engine side.
    let c_message = format!("{}\0", message.replace('\0', "\\0"));
    let function_nul = "<function unset>\0";

    // SAFETY: all strings are NUL-terminated and alive for the duration of the call.
    unsafe {
        let print_fn = match severity {
            Severity::Warning => sys::interface_fn!(print_warning),
            Severity::Error => sys::interface_fn!(print_error),
        };

        print_fn(
            sys::c_str(c_message.as_bytes()),
            sys::c_str(function_nul.as_bytes()),
            sys::c_str(file_nul.as_bytes()),
            line as i32,
            false as u8,
        );
    }
}

#[doc(hidden)]
pub fn __print_line(message: &str) {
    if sys::is_initialized() {
        print(&[Variant::from(GString::from(message))]);
    } else {
        println!("{message}");
    }
}
