/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use crate::builtin::GString;
use crate::sys;
use sys::types::OpaqueNodePath;
use sys::{ffi_methods, GodotFfi};

/// A pre-parsed scene tree path, such as `"../Panel/ItemList"` or `"/root/Main"`.
#[repr(transparent)]
pub struct NodePath {
    opaque: OpaqueNodePath,
}

impl NodePath {
    fn from_opaque(opaque: OpaqueNodePath) -> Self {
        Self { opaque }
    }

    pub fn is_empty(&self) -> bool {
        GString::from(self).is_empty()
    }
}

// SAFETY: `NodePath` is a transparent wrapper around the engine's opaque path storage.
unsafe impl GodotFfi for NodePath {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::NodePath
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; .. }
}

crate::meta::impl_godot_as_self!(NodePath);

impl_builtin_traits! {
    for NodePath {
        Default => node_path_construct_default;
        Clone => node_path_construct_copy;
        Drop => node_path_destroy;
        Eq;
        Hash;
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&GString::from(self), f)
    }
}

/// Uses the GDScript literal syntax: `^"path"`.
impl fmt::Debug for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "^\"{}\"", GString::from(self))
    }
}

impl From<&str> for NodePath {
    fn from(path: &str) -> Self {
        Self::from(&GString::from(path))
    }
}

impl From<&GString> for NodePath {
    fn from(string: &GString) -> Self {
        // SAFETY: `NodePath(String)` takes one argument of that type.
        unsafe {
            Self::new_with_uninit(|self_ptr| {
                let ctor = sys::builtin_lifecycle_api().node_path_from_string;
                let args = [string.sys()];
                ctor(self_ptr, args.as_ptr());
            })
        }
    }
}

impl From<GString> for NodePath {
    fn from(string: GString) -> Self {
        Self::from(&string)
    }
}
