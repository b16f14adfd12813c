/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Stores an opaque object of a certain size, with very restricted operations.
///
/// Note: due to `align(4)` / `align(8)` and not `packed` repr, this type may be bigger than `N` bytes
/// (which should be OK since C++ just needs to read/write those `N` bytes reliably).
///
/// The sizes come from `builtin_class_sizes` in `extension_api.json`; see the generated `types` module.
#[cfg_attr(target_pointer_width = "32", repr(C, align(4)))]
#[cfg_attr(target_pointer_width = "64", repr(C, align(8)))]
#[derive(Copy, Clone)]
pub struct Opaque<const N: usize> {
    storage: [u8; N],
    marker: std::marker::PhantomData<*const u8>, // disable Send/Sync
}

impl<const N: usize> Opaque<N> {
    /// Size of the native representation in bytes.
    pub const SIZE: usize = N;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_is_at_least_pointer_aligned() {
        assert_eq!(std::mem::align_of::<Opaque<8>>(), std::mem::align_of::<*const u8>());
        assert_eq!(std::mem::size_of::<Opaque<24>>(), 24);
        assert_eq!(Opaque::<16>::SIZE, 16);
    }
}
