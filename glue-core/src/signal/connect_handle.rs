/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::{Callable, StringName};
use crate::classes::Object;
use crate::obj::Gd;

/// Handle representing a typed signal connection to a receiver.
///
/// Returned by [`TypedSignal::connect()`][crate::signal::TypedSignal::connect].
///
/// Connections managed by a handle can be disconnected using [`disconnect()`][Self::disconnect].
pub struct ConnectHandle {
    receiver_object: Gd<Object>,
    signal_name: StringName,
    callable: Callable,
}

impl ConnectHandle {
    pub(super) fn new(receiver_object: Gd<Object>, signal_name: StringName, callable: Callable) -> Self {
        Self {
            receiver_object,
            signal_name,
            callable,
        }
    }

    /// Disconnects the signal from the connected callable. Future emissions no longer invoke it.
    ///
    /// # Panics
    /// If the connection does not exist. Use [`is_connected()`][Self::is_connected] to make sure the connection exists.
    pub fn disconnect(mut self) {
        assert!(
            self.is_connected(),
            "ConnectHandle::disconnect(): signal `{}` is not connected to this callable",
            self.signal_name
        );

        self.receiver_object.disconnect(&self.signal_name, &self.callable);
    }

    /// Whether the handle represents a valid connection.
    ///
    /// Returns false if the connection was removed in another way (e.g. through `Object::disconnect()`), or if the
    /// broadcasting object has been freed.
    pub fn is_connected(&self) -> bool {
        self.receiver_object.is_instance_valid()
            && self.receiver_object.is_connected(&self.signal_name, &self.callable)
    }
}
