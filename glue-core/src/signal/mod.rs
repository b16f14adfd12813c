/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Typed signals of engine classes: emission and connection of Rust closures.

mod connect_handle;
mod signal_receiver;
mod typed_signal;

pub use connect_handle::*;
pub use signal_receiver::*;
pub use typed_signal::*;
