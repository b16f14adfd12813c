/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Meta-information about engine types, their conversions and the marshalling of calls.
//!
//! # Conversions between types
//!
//! ## Godot representation
//!
//! The library provides two traits [`FromGodot`] and [`ToGodot`], which are used at the Rust <-> engine boundary, both in user-defined
//! callables and engine APIs. These traits are implemented for all types that can be passed to the engine.
//!
//! [`GodotConvert`] names the type through which a value travels (its `Via`). For builtins this is the type itself; engine enums
//! travel as their ordinal.
//!
//! ## Variants
//!
//! [`ToGodot`] and [`FromGodot`] also allow conversions to and from [`Variant`][crate::builtin::Variant]. `to_variant()` is infallible,
//! while `try_from_variant()` reports mismatched types or out-of-range numbers as [`ConvertError`].
//!
//! ## Arguments
//!
//! Engine methods take strings as `impl AsArg<T>`, objects as `impl AsObjectArg<T>`, and other reference-counted builtins as `&T`.
//! All of them are converted into a pass-by-pointer form before the call ([`CowArg`], [`ObjectArg`]).

mod args;
mod godot_convert;
mod interned_name;
mod param_tuple;
mod signature;
mod traits;

pub mod error;
pub(crate) mod sealed;

pub use args::*;
pub use godot_convert::{FromGodot, GodotConvert, ToGodot};
pub use interned_name::InternedName;
pub use param_tuple::{InParamTuple, OutParamTuple, ParamTuple};
pub use signature::*;
pub use traits::{GodotFfiVariant, GodotType};

pub use crate::obj::{AsObjectArg, ObjectArg};

#[doc(inline)]
pub use error::{CallError, ConvertError};

pub(crate) use godot_convert::impl_godot_as_self;
pub(crate) use interned_name::clear_interned_names;
