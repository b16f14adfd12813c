/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Prevents `GodotType` from being implemented outside this crate.

use crate::builtin::*;
use crate::meta::ObjectArg;
use crate::obj::{Gd, GodotClass, RawGd};

pub trait Sealed {}

impl Sealed for () {}
impl Sealed for bool {}
impl Sealed for i64 {}
impl Sealed for i32 {}
impl Sealed for i16 {}
impl Sealed for i8 {}
impl Sealed for u64 {}
impl Sealed for u32 {}
impl Sealed for u16 {}
impl Sealed for u8 {}
impl Sealed for f64 {}
impl Sealed for f32 {}
impl Sealed for Vector2 {}
impl Sealed for Vector2i {}
impl Sealed for Vector3 {}
impl Sealed for Rect2 {}
impl Sealed for Rect2i {}
impl Sealed for Color {}
impl Sealed for Rid {}
impl Sealed for GString {}
impl Sealed for StringName {}
impl Sealed for NodePath {}
impl Sealed for Variant {}
impl Sealed for Callable {}
impl Sealed for PackedInt32Array {}
impl<T: GodotClass> Sealed for Gd<T> {}
impl<T: GodotClass> Sealed for RawGd<T> {}
impl<T: GodotClass> Sealed for Option<Gd<T>> {}
impl<T: GodotClass> Sealed for ObjectArg<T> {}
