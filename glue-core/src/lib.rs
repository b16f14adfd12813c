/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**glue**](https://docs.rs/glue)
//!
//! Builtin types, argument/return marshalling, object handles, typed signals, and the generated engine classes.
//! Do not depend on this crate directly, instead use the `glue` crate.
//! No SemVer or other guarantees are provided.

#![cfg_attr(test, allow(unused))]

pub mod builtin;
pub mod classes;
pub mod global;
pub mod init;
pub mod log;
pub mod meta;
pub mod obj;
pub mod signal;

pub use glue_ffi as sys;
#[doc(hidden)]
pub use glue_ffi::out;

// Output of generated code. Mimics the file structure, symbols are re-exported.
#[rustfmt::skip]
#[allow(unused_imports, dead_code, non_upper_case_globals, non_snake_case)]
#[allow(clippy::too_many_arguments, clippy::let_and_return, clippy::new_ret_no_self)]
#[allow(clippy::wrong_self_convention, clippy::upper_case_acronyms, clippy::let_unit_value)]
mod gen;

#[doc(hidden)]
pub mod private;
