/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Main-thread binding storage.
//!
//! Accessing the binding from another thread is a runtime error in debug mode and UB in release mode.

use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::thread::ThreadId;

use super::GodotBinding;

pub(super) struct BindingStorage {
    // Checked from arbitrary threads, so must be thread-safe itself.
    main_thread: Mutex<Option<ThreadId>>,
    initialized: AtomicBool,
    binding: UnsafeCell<Option<GodotBinding>>,
}

impl BindingStorage {
    #[inline(always)]
    fn storage() -> &'static Self {
        static BINDING: BindingStorage = BindingStorage {
            main_thread: Mutex::new(None),
            initialized: AtomicBool::new(false),
            binding: UnsafeCell::new(None),
        };

        &BINDING
    }

    /// Stores the binding and remembers the calling thread as the main thread.
    ///
    /// # Panics
    /// If the binding is already initialized.
    ///
    /// # Safety
    /// No reference obtained from [`get_binding_unchecked()`](Self::get_binding_unchecked) may be alive.
    pub unsafe fn initialize(binding: GodotBinding) {
        let storage = Self::storage();
        assert!(
            !storage.initialized.load(Ordering::Acquire),
            "Godot binding is already initialized"
        );

        *storage.main_thread.lock().expect("main thread lock poisoned") = Some(std::thread::current().id());
        *storage.binding.get() = Some(binding);
        storage.initialized.store(true, Ordering::Release);
    }

    /// Drops the binding, including all loaded method tables.
    ///
    /// # Safety
    /// Must be called from the main thread; no reference obtained from [`get_binding_unchecked()`](Self::get_binding_unchecked)
    /// may be alive.
    pub unsafe fn deinitialize() {
        let storage = Self::storage();
        storage.initialized.store(false, Ordering::Release);

        *storage.binding.get() = None;
        *storage.main_thread.lock().expect("main thread lock poisoned") = None;
    }

    /// # Safety
    /// - Must be called from the main thread.
    /// - The binding must be initialized.
    #[inline(always)]
    pub unsafe fn get_binding_unchecked() -> &'static GodotBinding {
        let storage = Self::storage();

        if cfg!(debug_assertions) {
            let main_thread = *storage.main_thread.lock().expect("main thread lock poisoned");
            let main_thread = main_thread
                .expect("Godot engine not available; make sure you are not calling it from unit/doc tests");

            assert_eq!(
                main_thread,
                std::thread::current().id(),
                "attempted to access binding from different thread than main thread; this is UB"
            );

            (*storage.binding.get()).as_ref().expect("binding initialized together with main thread")
        } else {
            // SAFETY: initialized and on main thread, per precondition.
            (*storage.binding.get()).as_ref().unwrap_unchecked()
        }
    }

    pub fn is_initialized() -> bool {
        Self::storage().initialized.load(Ordering::Acquire)
    }
}

// SAFETY: `binding` is only accessed from the thread that initialized it (checked in debug mode).
unsafe impl Sync for BindingStorage {}
// SAFETY: see `Sync`.
unsafe impl Send for BindingStorage {}
