/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::num::NonZeroU64;

use crate::meta::error::{ConvertError, FromGodotError};
use crate::meta::{FromGodot, GodotConvert, ToGodot};

/// Represents a non-zero instance ID.
///
/// This is its own type for type safety and to deal with the inconsistent representation in the engine as both `u64` (native)
/// and `i64` (scripting). You can usually treat this as an opaque value; there are conversion methods however.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct InstanceId {
    // In the public API, signed i64 is the canonical representation.
    value: NonZeroU64,
}

impl InstanceId {
    /// Constructs an instance ID from an integer, or `None` if the integer is zero.
    ///
    /// This does *not* check if the instance is valid.
    pub fn try_from_i64(id: i64) -> Option<Self> {
        Self::try_from_u64(id as u64)
    }

    /// ⚠️ Constructs an instance ID from a non-zero integer, or panics.
    ///
    /// This does *not* check if the instance is valid.
    ///
    /// # Panics
    /// If `id` is zero.
    pub fn from_i64(id: i64) -> Self {
        Self::try_from_i64(id).unwrap_or_else(|| panic!("expected non-zero instance ID"))
    }

    pub(crate) fn try_from_u64(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(|value| Self { value })
    }

    pub fn to_i64(self) -> i64 {
        self.to_u64() as i64
    }

    /// Returns if the object being referred to is inheriting `RefCounted`.
    ///
    /// Involves no engine round-trip, as the information is encoded in the ID itself.
    pub fn is_ref_counted(self) -> bool {
        self.to_u64() & (1u64 << 63) != 0
    }

    pub fn to_u64(self) -> u64 {
        self.value.get()
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_i64())
    }
}

impl Debug for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "InstanceId({})", self.to_i64())
    }
}

impl GodotConvert for InstanceId {
    type Via = i64;
}

impl ToGodot for InstanceId {
    fn to_godot(&self) -> Self::Via {
        self.to_i64()
    }
}

impl FromGodot for InstanceId {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Self::try_from_i64(via).ok_or_else(|| FromGodotError::ZeroInstanceId.into_error(via))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(InstanceId::try_from_i64(0).is_none());
        assert!(InstanceId::try_from_godot(0).is_err());
    }

    #[test]
    fn signed_and_unsigned_agree() {
        let id = InstanceId::from_i64(-42);

        assert_eq!(id.to_i64(), -42);
        assert_eq!(id.to_u64(), (-42_i64) as u64);
        assert_eq!(id.to_string(), "-42");
        assert_eq!(format!("{id:?}"), "InstanceId(-42)");
    }

    #[test]
    fn ref_counted_bit() {
        let plain = InstanceId::from_i64(0x1234);
        let ref_counted = InstanceId::try_from_u64((1 << 63) | 0x1234).unwrap();

        assert!(!plain.is_ref_counted());
        assert!(ref_counted.is_ref_counted());
        assert!(ref_counted.to_i64() < 0);
    }

    #[test]
    #[should_panic(expected = "expected non-zero instance ID")]
    fn from_zero_panics() {
        InstanceId::from_i64(0);
    }
}
