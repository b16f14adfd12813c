/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard};

/// Lazily initialized global, usable in `static` items.
///
/// The initialization function runs on the first [`lock()`](Self::lock). Unlike `OnceLock`, the value can be mutated
/// through the guard, and [`reset()`](Self::reset) brings the global back into its pending state. The latter is needed
/// for values that hold engine resources (e.g. cached `StringName`s), which must be released before the library unloads.
pub struct Global<T> {
    value: Mutex<Option<T>>,
    init_fn: fn() -> T,
}

impl<T> Global<T> {
    /// Create `Global<T>`, providing a lazy initialization function.
    pub const fn new(init_fn: fn() -> T) -> Self {
        Self {
            value: Mutex::new(None),
            init_fn,
        }
    }

    /// Create `Global<T>` with `T::default()` as initialization function.
    ///
    /// Inherent rather than `Default` impl, since the latter is not `const`.
    pub const fn default() -> Self
    where
        T: Default,
    {
        Self::new(T::default)
    }

    /// Returns a guard that gives shared or mutable access to the value, initializing it if necessary.
    ///
    /// Blocks until the internal mutex is available.
    ///
    /// # Panics
    /// If a previous holder of the lock panicked, or the initialization function panics.
    pub fn lock(&self) -> GlobalGuard<'_, T> {
        let mut guard = self.value.lock().expect("Global<T> lock poisoned");
        if guard.is_none() {
            *guard = Some((self.init_fn)());
        }

        GlobalGuard { guard }
    }

    /// Whether the initialization function has run (and the value has not been reset since).
    pub fn is_initialized(&self) -> bool {
        self.value
            .lock()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Takes the value out, so that the next [`lock()`](Self::lock) initializes it again.
    pub fn reset(&self) -> Option<T> {
        self.value.lock().ok().and_then(|mut guard| guard.take())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Guards

/// Guard that temporarily gives access to a `Global<T>`'s inner value.
pub struct GlobalGuard<'a, T> {
    guard: MutexGuard<'a, Option<T>>,
}

impl<T> Deref for GlobalGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        match &*self.guard {
            Some(value) => value,
            None => unreachable!("GlobalGuard is only handed out after initialization"),
        }
    }
}

impl<T> DerefMut for GlobalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match &mut *self.guard {
            Some(value) => value,
            None => unreachable!("GlobalGuard is only handed out after initialization"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    static NAMES: Global<HashMap<&'static str, usize>> = Global::default();
    static COUNTS: Global<Vec<i32>> = Global::new(|| vec![1, 2, 3]);

    #[test]
    fn lock_initializes_lazily() {
        assert!(!NAMES.is_initialized());

        NAMES.lock().insert("tile_map", 1);
        NAMES.lock().insert("label_3d", 2);

        assert!(NAMES.is_initialized());
        let names = NAMES.lock();
        assert_eq!(names.len(), 2);
        assert_eq!(names.get("label_3d"), Some(&2));
    }

    #[test]
    fn reset_reruns_init() {
        COUNTS.lock().push(4);
        assert_eq!(*COUNTS.lock(), [1, 2, 3, 4]);

        let old = COUNTS.reset();
        assert_eq!(old, Some(vec![1, 2, 3, 4]));
        assert!(!COUNTS.is_initialized());

        assert_eq!(*COUNTS.lock(), [1, 2, 3]);
    }
}
