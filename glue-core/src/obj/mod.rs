/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Types and traits related to objects.
//!
//! The most important symbols in this module are:
//! * [`GodotClass`], which is implemented for every engine class.
//! * [`Gd`], a smart pointer that manages instances of engine classes.

mod gd;
mod instance_id;
mod object_arg;
mod raw_gd;
mod traits;

pub use gd::*;
pub use instance_id::*;
pub use object_arg::*;
pub use raw_gd::*;
pub use traits::*;
