/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::real_inner::{real, RVec2};
use crate::builtin::Vector2i;
use crate::sys;
use sys::{ffi_methods, GodotFfi};

/// Vector used for 2D math using floating point coordinates.
///
/// 2-element structure that can be used to represent positions in 2D space or any other pair of numeric values.
///
/// It uses floating-point coordinates of 32-bit precision, unlike the engine's `float` type which is always 64-bit.
///
/// See [`Vector2i`] for its integer counterpart.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[repr(C)]
pub struct Vector2 {
    /// The vector's X component.
    pub x: real,

    /// The vector's Y component.
    pub y: real,
}

impl_vector_operators!(Vector2, real, (x, y));
impl_vector_fns!(Vector2, RVec2, real, (x, y));
impl_float_vector_fns!(Vector2, (x, y));
impl_vector_display!(Vector2, (x, y));

/// # Constants
impl Vector2 {
    /// Zero vector, a vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);

    /// One vector, a vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);

    /// Left unit vector. Represents the direction of left.
    pub const LEFT: Self = Self::new(-1.0, 0.0);

    /// Right unit vector. Represents the direction of right.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Up unit vector. Y is down in 2D, so this vector points -Y.
    pub const UP: Self = Self::new(0.0, -1.0);

    /// Down unit vector. Y is down in 2D, so this vector points +Y.
    pub const DOWN: Self = Self::new(0.0, 1.0);
}

/// # 2D functions
impl Vector2 {
    /// Creates a unit vector pointing in the direction of `angle` (radians, clockwise from +X since Y points down).
    pub fn from_angle(angle: real) -> Self {
        Self::from_glam(RVec2::from_angle(angle))
    }

    /// Angle of this vector with respect to the positive X axis, in radians.
    pub fn angle(self) -> real {
        self.y.atan2(self.x)
    }

    /// Returns a perpendicular vector rotated 90 degrees counter-clockwise, with the same length.
    pub fn orthogonal(self) -> Self {
        Self::new(self.y, -self.x)
    }

    /// Converts to an integer vector, truncating each component towards zero.
    pub fn cast_int(self) -> Vector2i {
        Vector2i::new(self.x as i32, self.y as i32)
    }
}

// SAFETY: `Vector2` is `repr(C)` with two `f32` fields, which is the engine's layout in single-precision builds.
unsafe impl GodotFfi for Vector2 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector2
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

crate::meta::impl_godot_as_self!(Vector2);

impl From<(real, real)> for Vector2 {
    fn from((x, y): (real, real)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;
    use crate::builtin::real_consts::FRAC_PI_2;

    #[test]
    fn operators() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);

        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(b / 2.0, Vector2::new(1.5, -2.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));

        let mut c = a;
        c += b;
        c *= 0.5;
        assert_eq!(c, Vector2::new(2.0, -1.0));
    }

    #[test]
    fn length_and_normalization() {
        let v = Vector2::new(3.0, 4.0);

        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
        assert!(v.normalized().is_normalized());
        assert_eq!(Vector2::ZERO.normalized(), Vector2::ZERO);
    }

    #[test]
    fn angles() {
        assert!(Vector2::from_angle(FRAC_PI_2).is_equal_approx(Vector2::DOWN));
        assert!((Vector2::UP.angle() + FRAC_PI_2).abs() < 1e-6);
        assert_eq!(Vector2::RIGHT.orthogonal(), Vector2::UP);
    }

    #[test]
    fn display() {
        assert_eq!(Vector2::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[test]
    fn glam_conversion() {
        let v = Vector2::new(7.0, -0.25);
        let g: glam::Vec2 = v.into();

        assert_eq!(Vector2::from(g), v);
        assert_eq!(v.cast_int(), Vector2i::new(7, 0));
    }

    proptest! {
        #[test]
        fn lerp_hits_endpoints(ax in -1e3f32..1e3, ay in -1e3f32..1e3, bx in -1e3f32..1e3, by in -1e3f32..1e3) {
            let a = Vector2::new(ax, ay);
            let b = Vector2::new(bx, by);

            prop_assert_eq!(a.lerp(b, 0.0), a);
            prop_assert!(a.lerp(b, 1.0).is_equal_approx(b) || (a.lerp(b, 1.0) - b).length() < 1e-3);
        }

        #[test]
        fn dot_with_self_is_length_squared(x in -1e3f32..1e3, y in -1e3f32..1e3) {
            let v = Vector2::new(x, y);
            let diff = (v.dot(v) - v.length_squared()).abs();

            prop_assert!(diff <= 1e-3 * v.length_squared().max(1.0));
        }
    }
}
