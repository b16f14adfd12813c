/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::real_inner::real;
use crate::builtin::{Rect2i, Vector2};
use crate::sys;
use sys::{ffi_methods, GodotFfi};

/// 2D axis-aligned bounding box.
///
/// `Rect2` consists of a position, a size, and several utility functions. It is typically used for fast overlap tests.
/// A negative size is not supported by most methods; use [`abs()`](Self::abs) first.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[repr(C)]
pub struct Rect2 {
    pub position: Vector2,
    pub size: Vector2,
}

impl Rect2 {
    #[inline]
    pub const fn new(position: Vector2, size: Vector2) -> Self {
        Self { position, size }
    }

    /// Create a rect from position `(x, y)` and size `(width, height)`.
    #[inline]
    pub const fn from_components(x: real, y: real, width: real, height: real) -> Self {
        Self::new(Vector2::new(x, y), Vector2::new(width, height))
    }

    /// Create a rect spanning the two corners `start` and `end`, in any order.
    pub fn from_corners(start: Vector2, end: Vector2) -> Self {
        let position = start.coord_min(end);
        Self::new(position, start.coord_max(end) - position)
    }

    /// Bottom-right corner, `position + size`.
    #[inline]
    pub fn end(self) -> Vector2 {
        self.position + self.size
    }

    #[inline]
    pub fn center(self) -> Vector2 {
        self.position + self.size / 2.0
    }

    #[inline]
    pub fn area(self) -> real {
        self.size.x * self.size.y
    }

    /// Whether both width and height are positive.
    #[inline]
    pub fn has_area(self) -> bool {
        self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Equivalent rect with non-negative size.
    pub fn abs(self) -> Self {
        Self::from_corners(self.position, self.end())
    }

    /// Whether `point` lies inside; the right and bottom edges are excluded.
    pub fn has_point(self, point: Vector2) -> bool {
        let end = self.end();
        point.x >= self.position.x && point.y >= self.position.y && point.x < end.x && point.y < end.y
    }

    /// Whether the rects overlap. Touching edges count only if `include_borders` is set.
    pub fn intersects(self, other: Self, include_borders: bool) -> bool {
        let (a_end, b_end) = (self.end(), other.end());

        if include_borders {
            self.position.x <= b_end.x
                && a_end.x >= other.position.x
                && self.position.y <= b_end.y
                && a_end.y >= other.position.y
        } else {
            self.position.x < b_end.x
                && a_end.x > other.position.x
                && self.position.y < b_end.y
                && a_end.y > other.position.y
        }
    }

    /// Smallest rect enclosing both.
    pub fn merge(self, other: Self) -> Self {
        Self::from_corners(
            self.position.coord_min(other.position),
            self.end().coord_max(other.end()),
        )
    }

    /// Truncates position and size to integers.
    pub fn cast_int(self) -> Rect2i {
        Rect2i::new(self.position.cast_int(), self.size.cast_int())
    }

    pub fn is_equal_approx(self, other: Self) -> bool {
        self.position.is_equal_approx(other.position) && self.size.is_equal_approx(other.size)
    }
}

impl std::fmt::Display for Rect2 {
    /// Engine format: `[P: (x, y), S: (w, h)]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[P: {}, S: {}]", self.position, self.size)
    }
}

// SAFETY: two `Vector2` in `repr(C)`, matching the engine's layout.
unsafe impl GodotFfi for Rect2 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Rect2
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

crate::meta::impl_godot_as_self!(Rect2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_and_area() {
        let rect = Rect2::from_components(1.0, 2.0, 3.0, 4.0);

        assert_eq!(rect.end(), Vector2::new(4.0, 6.0));
        assert_eq!(rect.center(), Vector2::new(2.5, 4.0));
        assert_eq!(rect.area(), 12.0);
        assert!(rect.has_area());

        let flipped = Rect2::new(rect.end(), -rect.size);
        assert_eq!(flipped.abs(), rect);
    }

    #[test]
    fn point_containment() {
        let rect = Rect2::from_components(0.0, 0.0, 2.0, 2.0);

        assert!(rect.has_point(Vector2::new(0.0, 0.0)));
        assert!(rect.has_point(Vector2::new(1.9, 1.0)));
        assert!(!rect.has_point(Vector2::new(2.0, 1.0)));
    }

    #[test]
    fn intersection_and_merge() {
        let a = Rect2::from_components(0.0, 0.0, 2.0, 2.0);
        let b = Rect2::from_components(2.0, 0.0, 2.0, 2.0);

        assert!(!a.intersects(b, false));
        assert!(a.intersects(b, true));
        assert_eq!(a.merge(b), Rect2::from_components(0.0, 0.0, 4.0, 2.0));
    }

    #[test]
    fn display() {
        let rect = Rect2::from_components(1.0, 2.0, 3.5, 4.0);
        assert_eq!(rect.to_string(), "[P: (1, 2), S: (3.5, 4)]");
    }
}
