/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{Rect2, Vector2i};
use crate::sys;
use sys::{ffi_methods, GodotFfi};

/// 2D axis-aligned bounding box with integer coordinates.
///
/// Used for pixel regions, tile ranges and other grid-aligned areas. See [`Rect2`] for the float version.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(C)]
pub struct Rect2i {
    pub position: Vector2i,
    pub size: Vector2i,
}

impl Rect2i {
    #[inline]
    pub const fn new(position: Vector2i, size: Vector2i) -> Self {
        Self { position, size }
    }

    #[inline]
    pub const fn from_components(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(Vector2i::new(x, y), Vector2i::new(width, height))
    }

    pub fn from_corners(start: Vector2i, end: Vector2i) -> Self {
        let position = start.coord_min(end);
        Self::new(position, start.coord_max(end) - position)
    }

    #[inline]
    pub fn end(self) -> Vector2i {
        self.position + self.size
    }

    #[inline]
    pub fn area(self) -> i64 {
        self.size.x as i64 * self.size.y as i64
    }

    #[inline]
    pub fn has_area(self) -> bool {
        self.size.x > 0 && self.size.y > 0
    }

    pub fn abs(self) -> Self {
        Self::from_corners(self.position, self.end())
    }

    /// Whether `point` lies inside; the right and bottom edges are excluded.
    pub fn has_point(self, point: Vector2i) -> bool {
        let end = self.end();
        point.x >= self.position.x && point.y >= self.position.y && point.x < end.x && point.y < end.y
    }

    /// Whether the rects share at least one cell.
    pub fn intersects(self, other: Self) -> bool {
        let (a_end, b_end) = (self.end(), other.end());

        self.position.x < b_end.x
            && a_end.x > other.position.x
            && self.position.y < b_end.y
            && a_end.y > other.position.y
    }

    /// Overlapping region, or `None` if the rects do not intersect.
    pub fn intersection(self, other: Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }

        let start = self.position.coord_max(other.position);
        let end = self.end().coord_min(other.end());
        Some(Self::new(start, end - start))
    }

    pub fn merge(self, other: Self) -> Self {
        Self::from_corners(
            self.position.coord_min(other.position),
            self.end().coord_max(other.end()),
        )
    }

    pub fn cast_float(self) -> Rect2 {
        Rect2::new(self.position.cast_float(), self.size.cast_float())
    }
}

impl std::fmt::Display for Rect2i {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[P: {}, S: {}]", self.position, self.size)
    }
}

// SAFETY: two `Vector2i` in `repr(C)`, matching the engine's layout.
unsafe impl GodotFfi for Rect2i {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Rect2i
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

crate::meta::impl_godot_as_self!(Rect2i);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection() {
        let a = Rect2i::from_components(0, 0, 4, 4);
        let b = Rect2i::from_components(2, 3, 4, 4);

        assert_eq!(a.intersection(b), Some(Rect2i::from_components(2, 3, 2, 1)));
        assert_eq!(a.intersection(Rect2i::from_components(4, 0, 1, 1)), None);
        assert_eq!(a.merge(b), Rect2i::from_components(0, 0, 6, 7));
    }

    #[test]
    fn area_does_not_overflow() {
        let rect = Rect2i::from_components(0, 0, 100_000, 100_000);
        assert_eq!(rect.area(), 10_000_000_000);
    }

    #[test]
    fn conversions() {
        let rect = Rect2i::from_components(-1, 2, 3, 4);

        assert_eq!(rect.cast_float().cast_int(), rect);
        assert_eq!(rect.to_string(), "[P: (-1, 2), S: (3, 4)]");
        assert!(rect.has_point(Vector2i::new(-1, 5)));
        assert!(!rect.has_point(Vector2i::new(2, 2)));
    }
}
