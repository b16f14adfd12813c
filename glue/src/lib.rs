/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Rust bindings for the Godot engine
//!
//! Engine classes, builtin types and utility functions are generated from the engine's `extension_api.json`. Classes are
//! accessed through the [`Gd`][obj::Gd] smart pointer; method calls go through pointers that are resolved when the
//! extension is loaded.
//!
//! An extension library needs exactly one entry point:
//!
//! ```ignore
//! use glue::prelude::*;
//!
//! struct MyExtension;
//!
//! #[gdextension]
//! unsafe impl ExtensionLibrary for MyExtension {}
//! ```
//!
//! ## Cargo features
//!
//! * **`lazy-function-tables`**: resolves class method pointers on first call instead of at startup.
//! * **`codegen-rustfmt`**: formats generated code, for easier debugging.
//! * **`api-custom-json`**: generates bindings from the JSON file in `GODOT4_GDEXTENSION_JSON` instead of the prebuilt Godot 4.3 API.

#[doc(inline)]
pub use glue_core::{builtin, classes, global, log, meta, obj, signal};

#[doc(hidden)]
pub use glue_core::sys;

/// Entry point and initialization levels.
pub mod init {
    pub use glue_core::init::*;

    // Re-exports
    pub use glue_macros::gdextension;
}

#[doc(hidden)]
pub use glue_core::private;

/// Often-imported symbols.
pub mod prelude;

pub use glue_core::{godot_error, godot_print, godot_warn};
