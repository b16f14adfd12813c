/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in types like [`Vector2`], [`GString`] and [`Variant`].
//!
//! Only the builtins that appear in the bound engine API are provided. Value types (vectors, rects, colors, `Rid`) are
//! plain Rust structs with the engine's memory layout; the others wrap engine-owned storage and are created, copied and
//! destroyed through the engine.

// Some macros are used by the modules below, so they must come first.
mod macros;

pub use crate::sys::VariantType;

pub use callable::*;
pub use color::*;
pub use packed_array::*;
pub use rect2::*;
pub use rect2i::*;
pub use rid::*;
pub use string::*;
pub use variant::*;
pub use vectors::*;

pub use real_inner::{real, real_consts};

mod callable;
mod color;
mod packed_array;
mod rect2;
mod rect2i;
mod rid;
mod string;
mod variant;
mod vectors;

#[path = "real.rs"]
pub(crate) mod real_inner;
