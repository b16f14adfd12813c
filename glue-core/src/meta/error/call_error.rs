/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::builtin::{Variant, VariantType};
use crate::meta::error::ConvertError;
use crate::meta::{CallContext, GodotConvert, GodotType};
use crate::sys;

/// Error capable of representing failed function calls.
///
/// This type is returned from _varcall_ functions in the engine API that begin with `try_` prefixes,
/// e.g. [`Object::try_call()`](crate::classes::Object::try_call). _Varcall_ refers to the "variant call" calling convention,
/// meaning that arguments and return values are passed as `Variant` (as opposed to _ptrcall_, which passes direct pointers).
///
/// The same type describes failures of Rust closures invoked by the engine through a [`Callable`](crate::builtin::Callable),
/// for example signal receivers that get arguments of the wrong type. In that case, the error is handed back to the engine
/// as a native call error.
///
/// # Possible error causes
/// - **Invalid method**: The method does not exist on the object.
/// - **Failed argument conversion**: The arguments cannot be converted to the declared parameter types.
/// - **Failed return value conversion**: The returned `Variant` cannot be converted to the expected return type.
/// - **Too many or too few arguments**: The number of arguments does not match the number of parameters.
/// - **User panic**: A Rust closure caused a panic.
pub struct CallError {
    // Boxed to keep `Result<..., CallError>` small.
    b: Box<InnerCallError>,
}

/// Inner struct. All functionality on outer `impl`.
#[derive(Debug)]
struct InnerCallError {
    class_name: String,
    function_name: String,
    call_expr: String,
    reason: String,
    source: Option<ConvertError>,
    engine_error: sys::GDExtensionCallError,
}

impl CallError {
    // Naming:
    // - check_* means possible failure -- Result<(), Self> is returned.
    // - failed_* means definitive failure -- Self is returned.

    /// Name of the class whose method failed. **Not** the dynamic type.
    ///
    /// Returns `None` for calls without a surrounding class, such as custom callables.
    pub fn class_name(&self) -> Option<&str> {
        if self.b.class_name.is_empty() {
            None
        } else {
            Some(&self.b.class_name)
        }
    }

    /// Name of the function or method that failed.
    pub fn method_name(&self) -> &str {
        &self.b.function_name
    }

    /// Native error code, as reported to or by the engine (`GDEXTENSION_CALL_ERROR_*`).
    pub fn error_code(&self) -> sys::GDExtensionCallErrorType {
        self.b.engine_error.error
    }

    /// Low-level representation, to be written into the engine's `r_error` out-parameter.
    #[doc(hidden)]
    pub fn to_sys_error(&self) -> sys::GDExtensionCallError {
        self.b.engine_error
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Constructors returning Result<(), Self>; possible failure

    /// Checks whether number of arguments matches the number of parameters.
    pub(crate) fn check_arg_count(call_ctx: &CallContext, arg_count: usize, param_count: usize) -> Result<(), Self> {
        if arg_count == param_count {
            return Ok(());
        }

        Err(Self::failed_param_count(call_ctx, arg_count, param_count))
    }

    /// Checks the engine side of an outbound varcall (low-level `sys::GDExtensionCallError`).
    pub(crate) fn check_out_varcall(
        call_ctx: &CallContext,
        err: sys::GDExtensionCallError,
        explicit_args: &[Variant],
        varargs: &[Variant],
    ) -> Result<(), Self> {
        if err.error == sys::GDEXTENSION_CALL_OK {
            return Ok(());
        }

        let arg_types: Vec<VariantType> = explicit_args
            .iter()
            .chain(varargs.iter())
            .map(Variant::get_type)
            .collect();

        let explicit_args_str = join_args(explicit_args);
        let vararg_str = if varargs.is_empty() {
            String::new()
        } else {
            format!(", [va] {}", join_args(varargs))
        };

        let call_expr = format!("{call_ctx}({explicit_args_str}{vararg_str})");

        Err(Self::failed_varcall_inner(
            call_ctx,
            call_expr,
            err,
            &arg_types,
            explicit_args.len(),
        ))
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Constructors returning Self; guaranteed failure

    /// Returns an error for a failed parameter conversion.
    pub(crate) fn failed_param_conversion<P>(
        call_ctx: &CallContext,
        param_index: usize,
        convert_error: ConvertError,
    ) -> Self
    where
        P: GodotConvert,
    {
        let param_ty = std::any::type_name::<P>();
        let expected = <<P::Via as GodotType>::Ffi as sys::GodotFfi>::variant_type();

        let mut call_error = Self::new(
            call_ctx,
            format!("parameter #{param_index} ({param_ty}) conversion"),
            Some(convert_error),
        );

        call_error.b.engine_error = sys::GDExtensionCallError {
            error: sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT,
            argument: param_index as i32,
            expected: expected.sys() as i32,
        };
        call_error
    }

    fn failed_param_conversion_engine(
        call_ctx: &CallContext,
        param_index: i32,
        actual: Option<VariantType>,
        expected: VariantType,
    ) -> Self {
        // Same wording as in FromVariantError's Display impl.
        let reason = match actual {
            Some(actual) => format!("parameter #{param_index} -- cannot convert from {actual:?} to {expected:?}"),
            None => format!("parameter #{param_index} -- cannot convert to {expected:?}"),
        };

        Self::new(call_ctx, reason, None)
    }

    /// Returns an error for a failed return type conversion.
    ///
    /// Outbound engine calls have statically typed returns, so this only happens on a binding/engine mismatch.
    pub(crate) fn failed_return_conversion<R>(call_ctx: &CallContext, convert_error: ConvertError) -> Self {
        let return_ty = std::any::type_name::<R>();

        Self::new(
            call_ctx,
            format!("return value {return_ty} conversion"),
            Some(convert_error),
        )
    }

    fn failed_param_count(call_ctx: &CallContext, arg_count: usize, param_count: usize) -> CallError {
        let param_plural = plural(param_count);
        let arg_plural = plural(arg_count);

        let mut call_error = Self::new(
            call_ctx,
            format!("function has {param_count} parameter{param_plural}, but received {arg_count} argument{arg_plural}"),
            None,
        );

        let error = if arg_count > param_count {
            sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS
        } else {
            sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS
        };

        call_error.b.engine_error = sys::GDExtensionCallError {
            error,
            argument: 0,
            expected: param_count as i32,
        };
        call_error
    }

    fn failed_varcall_inner(
        call_ctx: &CallContext,
        call_expr: String,
        err: sys::GDExtensionCallError,
        arg_types: &[VariantType],
        vararg_offset: usize,
    ) -> Self {
        // This specializes on reflection-style calls, e.g. call(), emit_signal() etc.
        // In these cases, varargs are the _actual_ arguments, with required args being metadata such as method name.
        debug_assert_ne!(err.error, sys::GDEXTENSION_CALL_OK);

        let sys::GDExtensionCallError {
            error,
            argument,
            expected,
        } = err;

        let mut call_error = match error {
            sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD => Self::new(call_ctx, "method not found", None),
            sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT => {
                let from = usize::try_from(argument)
                    .ok()
                    .and_then(|index| arg_types.get(vararg_offset + index))
                    .copied();
                let to = VariantType::from_sys(expected as sys::GDExtensionVariantType);

                Self::failed_param_conversion_engine(call_ctx, argument + 1, from, to)
            }
            sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS | sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS => {
                let arg_count = arg_types.len().saturating_sub(vararg_offset);
                let param_count = expected.max(0) as usize;
                Self::failed_param_count(call_ctx, arg_count, param_count)
            }
            sys::GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL => Self::new(call_ctx, "instance is null", None),
            sys::GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST => Self::new(call_ctx, "method is not const", None),
            _ => Self::new(call_ctx, format!("unknown reason (error code {error})"), None),
        };

        call_error.b.engine_error = err;
        call_error.b.call_expr = call_expr;
        call_error
    }

    /// Returns an error for a Rust closure that panicked while being called by the engine.
    #[doc(hidden)]
    pub fn failed_by_user_panic(call_ctx: &CallContext, panic_message: &str) -> Self {
        Self::new(call_ctx, format!("function panicked: {panic_message}"), None)
    }

    fn new(call_ctx: &CallContext, reason: impl Into<String>, source: Option<ConvertError>) -> Self {
        let inner = InnerCallError {
            class_name: call_ctx.class_name.to_string(),
            function_name: call_ctx.function_name.to_string(),
            call_expr: format!("{call_ctx}()"),
            reason: reason.into(),
            source,
            engine_error: sys::GDExtensionCallError {
                error: sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD,
                argument: 0,
                expected: 0,
            },
        };

        Self { b: Box::new(inner) }
    }

    /// Describes the error.
    ///
    /// This is the same as the `Display`/`ToString` repr, but without the prefix naming the function.
    pub fn message(&self, with_source: bool) -> String {
        let InnerCallError { reason, source, .. } = &*self.b;

        let source_str = match source {
            Some(convert_error) if with_source => format!("\n  Source: {convert_error}"),
            _ => String::new(),
        };

        format!("{reason}{source_str}")
    }

    /// The call expression with stringified arguments, as far as known (e.g. `Object::emit_signal("item_selected", [va] 3)`).
    pub fn call_expr(&self) -> &str {
        &self.b.call_expr
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message(true);

        match self.class_name() {
            Some(class_name) => write!(f, "function {class_name}::{}: {message}", self.method_name()),
            None => write!(f, "function {}: {message}", self.method_name()),
        }
    }
}

impl fmt::Debug for CallError {
    // Delegate to inner box.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.b)
    }
}

impl Error for CallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.b.source.as_ref().map(|e| e as &(dyn Error + 'static))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

fn join_args(args: &[Variant]) -> String {
    args.iter()
        .map(|arg| arg.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> CallContext<'static> {
        CallContext::outbound("ItemList", "add_item")
    }

    #[test]
    fn display_names_class_and_method() {
        let err = CallError::failed_varcall_inner(
            &ctx(),
            String::from("ItemList::add_item()"),
            sys::GDExtensionCallError {
                error: sys::GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL,
                argument: 0,
                expected: 0,
            },
            &[],
            0,
        );

        assert_eq!(err.to_string(), "function ItemList::add_item: instance is null");
        assert_eq!(err.class_name(), Some("ItemList"));
        assert_eq!(err.method_name(), "add_item");
        assert_eq!(err.error_code(), sys::GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL);
    }

    #[test]
    fn arg_count_maps_to_engine_codes() {
        assert!(CallError::check_arg_count(&ctx(), 2, 2).is_ok());

        let too_many = CallError::check_arg_count(&ctx(), 3, 1).unwrap_err();
        assert_eq!(too_many.error_code(), sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS);
        assert_eq!(too_many.to_sys_error().expected, 1);
        assert_eq!(
            too_many.message(false),
            "function has 1 parameter, but received 3 arguments"
        );

        let too_few = CallError::check_arg_count(&ctx(), 0, 2).unwrap_err();
        assert_eq!(too_few.error_code(), sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS);
        assert_eq!(too_few.to_sys_error().expected, 2);
    }

    #[test]
    fn invalid_argument_without_known_type() {
        let err = CallError::failed_varcall_inner(
            &ctx(),
            String::new(),
            sys::GDExtensionCallError {
                error: sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT,
                argument: 4,
                expected: VariantType::Int.sys() as i32,
            },
            &[VariantType::String],
            0,
        );

        assert_eq!(err.message(false), "parameter #5 -- cannot convert to Int");
        assert_eq!(err.to_sys_error().argument, 4);
    }

    #[test]
    fn callable_errors_have_no_class() {
        let err = CallError::failed_by_user_panic(&CallContext::custom_callable("on_item_selected"), "boom");

        assert_eq!(err.class_name(), None);
        assert_eq!(err.to_string(), "function on_item_selected: function panicked: boom");
    }
}
