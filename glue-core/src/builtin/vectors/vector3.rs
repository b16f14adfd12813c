/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::real_inner::{real, RVec3};
use crate::sys;
use sys::{ffi_methods, GodotFfi};

/// Vector used for 3D math using floating point coordinates.
///
/// 3-element structure that can be used to represent positions in 3D space or any other triple of numeric values.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[repr(C)]
pub struct Vector3 {
    /// The vector's X component.
    pub x: real,

    /// The vector's Y component.
    pub y: real,

    /// The vector's Z component.
    pub z: real,
}

impl_vector_operators!(Vector3, real, (x, y, z));
impl_vector_fns!(Vector3, RVec3, real, (x, y, z));
impl_float_vector_fns!(Vector3, (x, y, z));
impl_vector_display!(Vector3, (x, y, z));

impl Vector3 {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Forward unit vector; -Z in the engine's right-handed convention.
    pub const FORWARD: Self = Self::new(0.0, 0.0, -1.0);
    pub const BACK: Self = Self::new(0.0, 0.0, 1.0);

    /// Returns the cross product of `self` and `with`.
    pub fn cross(self, with: Self) -> Self {
        Self::from_glam(self.to_glam().cross(with.to_glam()))
    }
}

// SAFETY: `Vector3` is `repr(C)` with three `f32` fields, the engine's layout in single-precision builds.
unsafe impl GodotFfi for Vector3 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector3
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

crate::meta::impl_godot_as_self!(Vector3);

#[cfg(test)]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn cross_of_axes() {
        assert_eq!(Vector3::RIGHT.cross(Vector3::UP), Vector3::BACK);
        assert_eq!(Vector3::UP.cross(Vector3::RIGHT), Vector3::FORWARD);
    }

    #[test]
    fn distance() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0, 2.0, -1.0);

        assert_eq!(a.distance_to(b), 4.0);
        assert_eq!(a.to_string(), "(1, 2, 3)");
    }

    proptest! {
        #[test]
        fn cross_is_orthogonal(ax in -100f32..100.0, ay in -100f32..100.0, az in -100f32..100.0,
                               bx in -100f32..100.0, by in -100f32..100.0, bz in -100f32..100.0) {
            let a = Vector3::new(ax, ay, az);
            let b = Vector3::new(bx, by, bz);
            let c = a.cross(b);

            let tolerance = 1e-2 * (a.length() * b.length()).max(1.0) * c.length().max(1.0);
            prop_assert!(c.dot(a).abs() <= tolerance);
            prop_assert!(c.dot(b).abs() <= tolerance);
        }
    }
}
