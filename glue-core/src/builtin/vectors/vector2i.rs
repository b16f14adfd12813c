/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::real_inner::real;
use crate::builtin::Vector2;
use crate::sys;
use sys::{ffi_methods, GodotFfi};

/// Vector used for 2D math using integer coordinates.
///
/// 2-element structure that can be used to represent positions in 2D space, tile coordinates, or any other pair of
/// integers.
///
/// See [`Vector2`] for its floating-point counterpart.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(C)]
pub struct Vector2i {
    /// The vector's X component.
    pub x: i32,

    /// The vector's Y component.
    pub y: i32,
}

impl_vector_operators!(Vector2i, i32, (x, y));
impl_vector_fns!(Vector2i, glam::IVec2, i32, (x, y));
impl_vector_display!(Vector2i, (x, y));

impl Vector2i {
    /// Zero vector, a vector with all components set to `0`.
    pub const ZERO: Self = Self::splat(0);

    /// One vector, a vector with all components set to `1`.
    pub const ONE: Self = Self::splat(1);

    pub const LEFT: Self = Self::new(-1, 0);
    pub const RIGHT: Self = Self::new(1, 0);
    pub const UP: Self = Self::new(0, -1);
    pub const DOWN: Self = Self::new(0, 1);

    /// Converts to a float vector.
    pub fn cast_float(self) -> Vector2 {
        Vector2::new(self.x as real, self.y as real)
    }

    /// Length as a float. Integer vectors have no exact length.
    pub fn length(self) -> real {
        self.cast_float().length()
    }

    /// Squared length, exact for all components below ~46340 in magnitude.
    pub fn length_squared(self) -> i64 {
        let (x, y) = (self.x as i64, self.y as i64);
        x * x + y * y
    }
}

// SAFETY: `Vector2i` is `repr(C)` with two `i32` fields, the engine's layout.
unsafe impl GodotFfi for Vector2i {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector2i
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

crate::meta::impl_godot_as_self!(Vector2i);

impl From<(i32, i32)> for Vector2i {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn coord_min_max() {
        let a = Vector2i::new(-3, 8);
        let b = Vector2i::new(5, 2);

        assert_eq!(a.coord_min(b), Vector2i::new(-3, 2));
        assert_eq!(a.coord_max(b), Vector2i::new(5, 8));
        assert_eq!(a.abs(), Vector2i::new(3, 8));
    }

    #[test]
    fn lengths() {
        let v = Vector2i::new(-6, 8);

        assert_eq!(v.length_squared(), 100);
        assert_eq!(v.length(), 10.0);
        assert_eq!(v.cast_float(), Vector2::new(-6.0, 8.0));
    }

    #[test]
    fn display() {
        assert_eq!(Vector2i::new(4, -1).to_string(), "(4, -1)");
    }

    proptest! {
        #[test]
        fn add_then_sub_is_identity(ax in -1_000_000i32..1_000_000, ay in -1_000_000i32..1_000_000,
                                    bx in -1_000_000i32..1_000_000, by in -1_000_000i32..1_000_000) {
            let a = Vector2i::new(ax, ay);
            let b = Vector2i::new(bx, by);

            prop_assert_eq!(a + b - b, a);
            prop_assert_eq!(-(-a), a);
        }
    }
}
