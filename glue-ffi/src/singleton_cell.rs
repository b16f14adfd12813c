/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

use crate as sys;

/// Caches the object pointer of an engine singleton (`Input`, `NativeMenu`, ...).
///
/// The lookup runs until it succeeds once; afterwards, the pointer is returned without asking the engine again.
/// Engine singletons live as long as the engine itself, so the cell never destroys the object.
pub struct SingletonCell {
    object_ptr: AtomicPtr<std::ffi::c_void>,
}

impl SingletonCell {
    pub const fn new() -> Self {
        Self {
            object_ptr: AtomicPtr::new(ptr::null_mut()),
        }
    }

    /// Returns the cached pointer, or runs `lookup` if there is none yet.
    ///
    /// A null result from `lookup` is not cached, and `None` is returned.
    pub fn get_or_lookup(
        &self,
        lookup: impl FnOnce() -> sys::GDExtensionObjectPtr,
    ) -> Option<sys::GDExtensionObjectPtr> {
        let cached = self.object_ptr.load(Ordering::Acquire);
        if !cached.is_null() {
            return Some(cached);
        }

        let fetched = lookup();
        if fetched.is_null() {
            return None;
        }

        // Two racing lookups yield the same engine object; keep whichever was stored first.
        match self.object_ptr.compare_exchange(
            ptr::null_mut(),
            fetched,
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => Some(fetched),
            Err(existing) => Some(existing),
        }
    }

    pub fn is_cached(&self) -> bool {
        !self.object_ptr.load(Ordering::Acquire).is_null()
    }

    /// Forgets the cached pointer. Called when the extension is unloaded.
    pub fn reset(&self) {
        self.object_ptr.store(ptr::null_mut(), Ordering::Release);
    }
}

impl Default for SingletonCell {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn fake_object(addr: usize) -> sys::GDExtensionObjectPtr {
        addr as sys::GDExtensionObjectPtr
    }

    #[test]
    fn lookup_runs_once_after_success() {
        let cell = SingletonCell::new();
        let lookups = Cell::new(0);

        for _ in 0..3 {
            let ptr = cell.get_or_lookup(|| {
                lookups.set(lookups.get() + 1);
                fake_object(0x1000)
            });
            assert_eq!(ptr, Some(fake_object(0x1000)));
        }

        assert_eq!(lookups.get(), 1);
        assert!(cell.is_cached());
    }

    #[test]
    fn null_is_not_cached() {
        let cell = SingletonCell::new();

        assert_eq!(cell.get_or_lookup(ptr::null_mut), None);
        assert!(!cell.is_cached());

        assert_eq!(cell.get_or_lookup(|| fake_object(0x2000)), Some(fake_object(0x2000)));
    }

    #[test]
    fn reset_forgets_pointer() {
        let cell = SingletonCell::new();
        cell.get_or_lookup(|| fake_object(0x3000));
        cell.reset();

        assert!(!cell.is_cached());
        assert_eq!(cell.get_or_lookup(|| fake_object(0x4000)), Some(fake_object(0x4000)));
    }
}
