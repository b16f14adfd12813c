/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use super::builtin::{
    real, Callable, Color, GString, NodePath, PackedInt32Array, Rect2, Rect2i, Rid, StringName, Variant,
    VariantType, Vector2, Vector2i, Vector3,
};
pub use super::classes::{Input, Node, Node2D, Object, RefCounted, Resource, SceneTree};
pub use super::init::{gdextension, ExtensionLibrary, InitLevel};
pub use super::meta::{ConvertError, FromGodot, GodotConvert, ToGodot};
pub use super::obj::{Gd, GodotClass, Inherits, InstanceId};
pub use super::{godot_error, godot_print, godot_warn};

// Make trait methods available.
#[rustfmt::skip] // One per line.
mod trait_reexports {
    pub use crate::obj::EngineBitfield as _;
    pub use crate::obj::EngineEnum as _;
    pub use crate::obj::NewAlloc as _;
    pub use crate::obj::NewGd as _;
}

pub use trait_reexports::*;
