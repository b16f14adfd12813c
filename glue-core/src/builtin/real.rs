/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Floating-point type used for vector, rect and color components. This is the equivalent of `real_t` in the engine's C++ code.
///
/// Always `f32`; engines compiled with `precision=double` are not supported.
#[allow(non_camel_case_types)]
pub type real = f32;

/// Mathematical constants of type [`real`].
pub mod real_consts {
    pub use std::f32::consts::*;
}

pub(crate) type RVec2 = glam::f32::Vec2;
pub(crate) type RVec3 = glam::f32::Vec3;

/// Tolerance of the engine's `is_equal_approx()` for small magnitudes.
pub(crate) const CMP_EPSILON: real = 0.00001;

/// Whether `a` and `b` are approximately equal, using the same relative tolerance as the engine.
pub(crate) fn is_equal_approx(a: real, b: real) -> bool {
    if a == b {
        return true;
    }

    let tolerance = (CMP_EPSILON * a.abs()).max(CMP_EPSILON);
    (a - b).abs() < tolerance
}
