/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::sys;
use sys::{ffi_methods, GodotFfi};

/// Color built-in type, in floating-point RGBA format.
///
/// Channel values are typically in the range of 0 to 1, but overbright (HDR) values above 1 are allowed.
/// Components are always `f32`, independent of the engine's float precision.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[repr(C)]
pub struct Color {
    /// Red color component.
    pub r: f32,

    /// Green color component.
    pub g: f32,

    /// Blue color component.
    pub b: f32,

    /// Alpha component: 0 is transparent, 1 is opaque.
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT_BLACK: Color = Self::from_rgba(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Color = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Self::from_rgb(1.0, 1.0, 1.0);

    /// Constructs a new `Color` with the given components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a new opaque `Color`.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Constructs a new `Color` from 8-bit channels (0..=255).
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_rgba(from_u8(r), from_u8(g), from_u8(b), from_u8(a))
    }

    /// Channels rounded to 8 bits, clamped to 0..=255.
    pub fn to_rgba8(self) -> [u8; 4] {
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation of all four channels.
    pub fn lerp(self, to: Color, weight: f64) -> Self {
        let weight = weight as f32;
        let mix = |a: f32, b: f32| a + (b - a) * weight;

        Self::from_rgba(mix(self.r, to.r), mix(self.g, to.g), mix(self.b, to.b), mix(self.a, to.a))
    }

    /// Relative luminance (ITU-R BT.709) of a color in linear space.
    pub fn luminance(self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }

    /// `#rrggbbaa` in lowercase hex; the alpha pair is omitted if `with_alpha` is false.
    pub fn to_html(self, with_alpha: bool) -> String {
        let [r, g, b, a] = self.to_rgba8();

        if with_alpha {
            format!("{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("{r:02x}{g:02x}{b:02x}")
        }
    }
}

impl Default for Color {
    /// Opaque black, like the engine's default.
    fn default() -> Self {
        Self::BLACK
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

fn from_u8(v: u8) -> f32 {
    v as f32 / 255.0
}

fn to_u8(v: f32) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// SAFETY: four `f32` in `repr(C)`, matching the engine's layout.
unsafe impl GodotFfi for Color {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Color
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

crate::meta::impl_godot_as_self!(Color);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_conversion() {
        let color = Color::from_rgba8(255, 128, 0, 255);

        assert_eq!(color.r, 1.0);
        assert_eq!(color.to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(color.to_html(false), "ff8000");
        assert_eq!(color.to_html(true), "ff8000ff");
    }

    #[test]
    fn overbright_is_clamped_in_8bit() {
        let hdr = Color::from_rgb(2.0, -1.0, 0.5);
        assert_eq!(hdr.to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn lerp_and_defaults() {
        let grey = Color::BLACK.lerp(Color::WHITE, 0.5);

        assert_eq!(grey, Color::from_rgb(0.5, 0.5, 0.5));
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::WHITE.with_alpha(0.0).a, 0.0);
    }
}
