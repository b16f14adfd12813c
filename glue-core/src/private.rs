/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Items used by generated code and the `#[gdextension]` macro. Not part of the public API.

use crate::godot_error;

pub use crate::init::__gdext_load_library;
pub use crate::sys;

/// Turns a panic payload into a readable message.
pub fn extract_panic_message(err: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = err.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        format!("(panic of type ID {:?})", err.type_id())
    }
}

fn format_panic_message(msg: &str) -> String {
    // Multi-line messages start on their own line, indented.
    let lbegin = "\n  ";
    let indented = msg.replace('\n', lbegin);

    if indented.len() != msg.len() {
        format!("[panic]{lbegin}{indented}")
    } else {
        format!("[panic]  {msg}")
    }
}

/// Executes `code`. If a panic is thrown, it is caught and an error message is printed to the engine.
///
/// Returns `Err(message)` if a panic occurred, and `Ok(result)` with the result of `code` otherwise.
///
/// Must wrap every Rust function invoked by the engine: unwinding across the FFI boundary is undefined behavior.
pub fn handle_panic<E, F, R, S>(error_context: E, code: F) -> Result<R, String>
where
    E: FnOnce() -> S,
    F: FnOnce() -> R,
    S: std::fmt::Display,
{
    // Whatever `code` touched is not observed again after a panic, except through the error message.
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(code)) {
        Ok(result) => Ok(result),
        Err(err) => {
            let msg = extract_panic_message(err);
            godot_error!("Rust function panicked {}\n{}", error_context(), format_panic_message(&msg));

            Err(msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_is_caught() {
        // Not initialized: the error goes to stderr instead of the engine.
        let result: Result<i32, String> = handle_panic(|| "in test", || panic!("tile {} missing", 7));

        assert_eq!(result, Err("tile 7 missing".to_string()));
        assert_eq!(handle_panic(|| "in test", || 5), Ok(5));
    }

    #[test]
    fn multiline_panic_is_indented() {
        assert_eq!(format_panic_message("one line"), "[panic]  one line");
        assert_eq!(format_panic_message("first\nsecond"), "[panic]\n  first\n  second");
    }
}
