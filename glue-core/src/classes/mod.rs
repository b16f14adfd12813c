/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Maps the engine class API to Rust.
//!
//! This module contains the following symbols:
//! * Classes: `ItemList`, `TileMap`, etc.
//! * Sidecar modules: `item_list`, `tile_map`, etc. Each holds the class' enums, default-parameter builders
//!   (`ExConnect`, ...), interned name tables (`PropertyName`, `MethodName`, `SignalName`) and typed signal collections.

// Re-exports all generated classes and sidecar modules.
pub use crate::gen::classes::*;

pub use crate::gen::central::{class_init_level, ENGINE_CLASS_NAMES};

pub(crate) use crate::gen::central::reset_singletons;
