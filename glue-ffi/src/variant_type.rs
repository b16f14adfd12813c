/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Type of a value stored inside a `Variant`.
///
/// Only the types that the bindings can marshal are named; everything else maps to [`VariantType::Other`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum VariantType {
    Nil,
    Bool,
    Int,
    Float,
    String,
    Vector2,
    Vector2i,
    Rect2,
    Rect2i,
    Vector3,
    Color,
    StringName,
    NodePath,
    Rid,
    Object,
    Callable,
    Signal,
    Dictionary,
    Array,
    PackedInt32Array,

    /// Any other type, with its raw ordinal.
    Other(sys::GDExtensionVariantType),
}

impl VariantType {
    #[doc(hidden)]
    pub fn from_sys(sys: sys::GDExtensionVariantType) -> Self {
        match sys {
            sys::GDEXTENSION_VARIANT_TYPE_NIL => Self::Nil,
            sys::GDEXTENSION_VARIANT_TYPE_BOOL => Self::Bool,
            sys::GDEXTENSION_VARIANT_TYPE_INT => Self::Int,
            sys::GDEXTENSION_VARIANT_TYPE_FLOAT => Self::Float,
            sys::GDEXTENSION_VARIANT_TYPE_STRING => Self::String,
            sys::GDEXTENSION_VARIANT_TYPE_VECTOR2 => Self::Vector2,
            sys::GDEXTENSION_VARIANT_TYPE_VECTOR2I => Self::Vector2i,
            sys::GDEXTENSION_VARIANT_TYPE_RECT2 => Self::Rect2,
            sys::GDEXTENSION_VARIANT_TYPE_RECT2I => Self::Rect2i,
            sys::GDEXTENSION_VARIANT_TYPE_VECTOR3 => Self::Vector3,
            sys::GDEXTENSION_VARIANT_TYPE_COLOR => Self::Color,
            sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME => Self::StringName,
            sys::GDEXTENSION_VARIANT_TYPE_NODE_PATH => Self::NodePath,
            sys::GDEXTENSION_VARIANT_TYPE_RID => Self::Rid,
            sys::GDEXTENSION_VARIANT_TYPE_OBJECT => Self::Object,
            sys::GDEXTENSION_VARIANT_TYPE_CALLABLE => Self::Callable,
            sys::GDEXTENSION_VARIANT_TYPE_SIGNAL => Self::Signal,
            sys::GDEXTENSION_VARIANT_TYPE_DICTIONARY => Self::Dictionary,
            sys::GDEXTENSION_VARIANT_TYPE_ARRAY => Self::Array,
            sys::GDEXTENSION_VARIANT_TYPE_PACKED_INT32_ARRAY => Self::PackedInt32Array,
            other => Self::Other(other),
        }
    }

    #[doc(hidden)]
    pub fn sys(self) -> sys::GDExtensionVariantType {
        match self {
            Self::Nil => sys::GDEXTENSION_VARIANT_TYPE_NIL,
            Self::Bool => sys::GDEXTENSION_VARIANT_TYPE_BOOL,
            Self::Int => sys::GDEXTENSION_VARIANT_TYPE_INT,
            Self::Float => sys::GDEXTENSION_VARIANT_TYPE_FLOAT,
            Self::String => sys::GDEXTENSION_VARIANT_TYPE_STRING,
            Self::Vector2 => sys::GDEXTENSION_VARIANT_TYPE_VECTOR2,
            Self::Vector2i => sys::GDEXTENSION_VARIANT_TYPE_VECTOR2I,
            Self::Rect2 => sys::GDEXTENSION_VARIANT_TYPE_RECT2,
            Self::Rect2i => sys::GDEXTENSION_VARIANT_TYPE_RECT2I,
            Self::Vector3 => sys::GDEXTENSION_VARIANT_TYPE_VECTOR3,
            Self::Color => sys::GDEXTENSION_VARIANT_TYPE_COLOR,
            Self::StringName => sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME,
            Self::NodePath => sys::GDEXTENSION_VARIANT_TYPE_NODE_PATH,
            Self::Rid => sys::GDEXTENSION_VARIANT_TYPE_RID,
            Self::Object => sys::GDEXTENSION_VARIANT_TYPE_OBJECT,
            Self::Callable => sys::GDEXTENSION_VARIANT_TYPE_CALLABLE,
            Self::Signal => sys::GDEXTENSION_VARIANT_TYPE_SIGNAL,
            Self::Dictionary => sys::GDEXTENSION_VARIANT_TYPE_DICTIONARY,
            Self::Array => sys::GDEXTENSION_VARIANT_TYPE_ARRAY,
            Self::PackedInt32Array => sys::GDEXTENSION_VARIANT_TYPE_PACKED_INT32_ARRAY,
            Self::Other(ord) => ord,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_survive_conversion() {
        for ord in 0..40 {
            assert_eq!(VariantType::from_sys(ord).sys(), ord);
        }

        assert_eq!(VariantType::from_sys(24), VariantType::Object);
        assert_eq!(VariantType::from_sys(31), VariantType::Other(31));
    }
}
