/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::fmt;

use crate::builtin::StringName;
use crate::sys;

/// Name of a property, method or signal, usable in `const` context and converted to an engine `StringName` at most once.
///
/// The generated tables `PropertyName`, `MethodName` and `SignalName` in each class module consist of such constants:
/// ```no_run
/// # use glue_core::classes::item_list::SignalName;
/// # use glue_core::meta::InternedName;
/// let name: InternedName = SignalName::ITEM_SELECTED;
/// assert_eq!(name.as_str(), "item_selected");
/// ```
///
/// The first call to [`string_sys()`](Self::string_sys) constructs the `StringName`; all later calls (from any constant with
/// the same text) return a pointer to that same value. Cached names are destroyed when the extension is deinitialized.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct InternedName {
    name: &'static str,
}

impl InternedName {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub const fn as_str(&self) -> &'static str {
        self.name
    }

    /// Pointer to the cached engine `StringName`, valid until the extension is deinitialized.
    ///
    /// # Panics
    /// If the engine binding is not initialized.
    pub fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        let mut cache = INTERNED.lock();

        let slot = cache
            .entry(self.name)
            .or_insert_with(|| Slot(Box::new(StringName::from(self.name))));

        slot.0.string_sys()
    }

    /// Creates an owned `StringName`, copying the cached one.
    pub fn to_string_name(&self) -> StringName {
        let cached = self.string_sys();

        // SAFETY: the pointer refers to a live StringName for the duration of this call.
        unsafe { StringName::new_copy_from_string_sys(cached) }
    }
}

impl fmt::Display for InternedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for InternedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&\"{}\"", self.name)
    }
}

impl From<InternedName> for StringName {
    fn from(name: InternedName) -> Self {
        name.to_string_name()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Cache

// Boxed, so that pointers handed out stay valid when the map grows.
struct Slot(Box<StringName>);

// SAFETY: slots are only created and dropped on the main thread (the engine binding is main-thread only),
// the mutex serializes access to the map itself.
unsafe impl Send for Slot {}

static INTERNED: sys::Global<HashMap<&'static str, Slot>> = sys::Global::default();

/// Destroys all cached `StringName`s. Must run before the engine binding is torn down.
pub(crate) fn clear_interned_names() {
    let count = INTERNED.reset().map_or(0, |names| names.len());

    sys::out!("Cleared {count} interned names.");
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELECTED: InternedName = InternedName::new("item_selected");

    #[test]
    fn const_names_format_without_engine() {
        assert_eq!(SELECTED.as_str(), "item_selected");
        assert_eq!(SELECTED.to_string(), "item_selected");
        assert_eq!(format!("{SELECTED:?}"), "&\"item_selected\"");
        assert_eq!(SELECTED, InternedName::new("item_selected"));
    }
}
