/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::num::NonZeroU64;

use crate::sys;
use sys::{ffi_methods, static_assert, static_assert_eq_size, GodotFfi};

/// Opaque handle that refers to a resource owned by one of the engine's servers.
///
/// A `Rid` does not grant access to the resource. Passing an invalid or stale handle to a server method makes the engine
/// report an error; it cannot cause undefined behavior.
// Plain Rust repr, so the nullable-niche optimization applies and the layout equals `u64`.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Rid {
    /// May refer to some resource, but is not guaranteed to.
    Valid(NonZeroU64),

    /// Never refers to a resource. Represented as `0` by the engine.
    Invalid,
}

static_assert_eq_size!(Rid, u64);

// SAFETY: same size as u64 (asserted above), and `Invalid` is initialized.
static_assert!(unsafe { std::mem::transmute::<Rid, u64>(Rid::Invalid) } == 0u64);

impl Rid {
    #[inline]
    pub const fn new(id: u64) -> Self {
        match NonZeroU64::new(id) {
            Some(id) => Self::Valid(id),
            None => Self::Invalid,
        }
    }

    /// Raw ID; `0` if invalid.
    #[inline]
    pub const fn to_u64(self) -> u64 {
        match self {
            Rid::Valid(id) => id.get(),
            Rid::Invalid => 0,
        }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Rid::Valid(_))
    }

    #[inline]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Rid::Invalid)
    }
}

impl Default for Rid {
    fn default() -> Self {
        Self::Invalid
    }
}

impl std::fmt::Display for Rid {
    /// Same format as the engine: `RID(id)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RID({})", self.to_u64())
    }
}

// SAFETY: layout is identical to the engine's 64-bit ID.
unsafe impl GodotFfi for Rid {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Rid
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; .. }
}

crate::meta::impl_godot_as_self!(Rid);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_invalid() {
        assert_eq!(Rid::new(0), Rid::Invalid);
        assert!(Rid::new(0).is_invalid());
        assert!(Rid::new(17).is_valid());
        assert_eq!(Rid::new(17).to_u64(), 17);
    }

    #[test]
    fn display_matches_engine() {
        assert_eq!(Rid::new(42).to_string(), "RID(42)");
        assert_eq!(Rid::Invalid.to_string(), "RID(0)");
    }

    #[test]
    fn reads_from_native_slot() {
        let mut raw = 99_u64;
        let rid = unsafe { Rid::new_from_sys(std::ptr::addr_of_mut!(raw) as sys::GDExtensionConstTypePtr) };
        assert_eq!(rid, Rid::new(99));
    }
}
